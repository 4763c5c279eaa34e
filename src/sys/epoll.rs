use std::os::unix::io::RawFd;

use libc::{EPOLLERR, EPOLLHUP};
use libc::{EPOLLIN, EPOLLOUT, EPOLLPRI, EPOLLRDHUP};

use crate::{Interest, Ready};

/// Translates wanted readiness into an `epoll_event` events mask.
pub fn ready_to_epoll(interest: Ready) -> u32 {
    let mut kind = 0;

    if interest.is_readable() {
        kind |= EPOLLIN;
    }

    if interest.is_writable() {
        kind |= EPOLLOUT;
    }

    kind as u32
}

/// Translates an `epoll_event` events mask reported by `epoll_wait` back into
/// readiness.
pub fn epoll_to_ready(events: u32) -> Ready {
    let epoll = events as i32;
    let mut kind = Ready::empty();

    if (epoll & EPOLLIN) != 0 || (epoll & EPOLLPRI) != 0 {
        kind |= Ready::readable();
    }

    if (epoll & EPOLLOUT) != 0 {
        kind |= Ready::writable();
    }

    // Hang-up surfaces as readable so the next read observes EOF.
    if (epoll & EPOLLRDHUP) != 0 || (epoll & EPOLLHUP) != 0 {
        kind |= Ready::readable();
    }

    if (epoll & EPOLLERR) != 0 {
        kind |= Ready::all();
    }

    kind
}

/// Builds the `epoll_event` to hand to `EPOLL_CTL_ADD` / `EPOLL_CTL_MOD` for
/// `interest`. The raw handle is stored as the event data.
pub fn epoll_event(interest: &Interest) -> libc::epoll_event {
    libc::epoll_event {
        events: ready_to_epoll(interest.readiness()),
        u64: RawFd::from(interest.handle()) as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Handle;

    #[test]
    fn ready_round_trip_masks() {
        assert_eq!(ready_to_epoll(Ready::empty()), 0);
        assert_eq!(ready_to_epoll(Ready::readable()), EPOLLIN as u32);
        assert_eq!(ready_to_epoll(Ready::all()), (EPOLLIN | EPOLLOUT) as u32);
    }

    #[test]
    fn error_and_hangup_are_folded() {
        assert_eq!(epoll_to_ready(EPOLLERR as u32), Ready::all());
        assert_eq!(epoll_to_ready(EPOLLHUP as u32), Ready::readable());
        assert_eq!(epoll_to_ready(EPOLLRDHUP as u32), Ready::readable());
        assert_eq!(epoll_to_ready(EPOLLPRI as u32), Ready::readable());
        assert_eq!(epoll_to_ready(EPOLLOUT as u32), Ready::writable());
        assert_eq!(epoll_to_ready(0), Ready::empty());
    }

    #[test]
    fn event_carries_handle() {
        let mut interest = Interest::new();
        interest.set_handle(Handle(10));
        interest.show_writable();

        let event = epoll_event(&interest);
        let events = event.events;
        let data = event.u64;

        assert_eq!(events, EPOLLOUT as u32);
        assert_eq!(data, 10);
    }
}
