use libc::{c_short, POLLERR, POLLHUP, POLLIN, POLLOUT, POLLPRI};
use log::trace;

use crate::{InterestSet, Ready};

/// Translates wanted readiness into a `pollfd` events mask.
pub fn ready_to_poll(interest: Ready) -> c_short {
    let mut kind = 0;

    if interest.is_readable() {
        kind |= POLLIN;
    }

    if interest.is_writable() {
        kind |= POLLOUT;
    }

    kind
}

/// Translates the `revents` reported by `poll` back into readiness.
///
/// Errors are reported on both sides so that whichever side the caller is
/// watching observes them.
pub fn poll_to_ready(revents: c_short) -> Ready {
    let mut kind = Ready::empty();

    if (revents & (POLLIN | POLLPRI | POLLHUP)) != 0 {
        kind |= Ready::readable();
    }

    if (revents & POLLOUT) != 0 {
        kind |= Ready::writable();
    }

    if (revents & POLLERR) != 0 {
        kind |= Ready::all();
    }

    kind
}

/// Builds the `pollfd` array for one poll cycle.
///
/// Handles attached with no interest are skipped. Entries are in ascending
/// handle order with `revents` cleared.
pub fn pollfds(set: &InterestSet) -> Vec<libc::pollfd> {
    let fds: Vec<libc::pollfd> = set
        .iter()
        .filter(|interest| interest.want_any())
        .map(|interest| libc::pollfd {
            fd: interest.handle().into(),
            events: ready_to_poll(interest.readiness()),
            revents: 0,
        })
        .collect();

    trace!("poll set: {} of {} attached handles", fds.len(), set.len());

    fds
}
