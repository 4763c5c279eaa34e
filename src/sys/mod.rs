//! Translation between interest and the masks understood by the system
//! polling primitives. Nothing here performs a syscall.

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod epoll;
pub mod poll;
