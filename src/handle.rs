use std::fmt;
use std::os::unix::io::{AsRawFd, RawFd};

/// Identifies a system I/O resource tracked by an [`InterestSet`].
///
/// `Handle` is a thin wrapper around a raw file descriptor. It is only ever
/// compared and ordered, never dereferenced, so the set places no meaning on
/// the value beyond [`Handle::INVALID`].
///
/// [`InterestSet`]: crate::InterestSet
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub RawFd);

impl Handle {
    /// The reserved "unset" handle.
    pub const INVALID: Handle = Handle(-1);

    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Handle::INVALID
    }
}

impl Default for Handle {
    fn default() -> Handle {
        Handle::INVALID
    }
}

impl From<RawFd> for Handle {
    #[inline]
    fn from(fd: RawFd) -> Handle {
        Handle(fd)
    }
}

impl From<Handle> for RawFd {
    #[inline]
    fn from(handle: Handle) -> RawFd {
        handle.0
    }
}

impl AsRawFd for Handle {
    fn as_raw_fd(&self) -> RawFd {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}
