use std::fmt;

use crate::{Handle, Ready};

/// The readiness a reactor should currently watch a single handle for.
///
/// An `Interest` starts out empty: its handle is [`Handle::INVALID`] and it
/// wants neither readability nor writability. The two flags are independent
/// and share one [`Ready`] word, so a copy always observes both consistently.
///
/// # Examples
///
/// ```
/// use queen_interest::{Handle, Interest};
///
/// let mut interest = Interest::new();
/// interest.set_handle(Handle(10));
/// interest.show_readable();
///
/// assert!(interest.want_readable());
/// assert!(interest.want_any());
/// assert!(!interest.want_both());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interest {
    handle: Handle,
    ready: Ready,
}

impl Interest {
    pub fn new() -> Interest {
        Interest::default()
    }

    pub(crate) fn with_handle(handle: Handle) -> Interest {
        Interest {
            handle,
            ready: Ready::empty(),
        }
    }

    /// Sets the handle. The readable and writable flags are left untouched.
    #[inline]
    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    #[inline]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[inline]
    pub fn show_readable(&mut self) {
        self.ready.insert(Ready::readable());
    }

    #[inline]
    pub fn hide_readable(&mut self) {
        self.ready.remove(Ready::readable());
    }

    #[inline]
    pub fn show_writable(&mut self) {
        self.ready.insert(Ready::writable());
    }

    #[inline]
    pub fn hide_writable(&mut self) {
        self.ready.remove(Ready::writable());
    }

    #[inline]
    pub fn want_readable(&self) -> bool {
        self.ready.is_readable()
    }

    #[inline]
    pub fn want_writable(&self) -> bool {
        self.ready.is_writable()
    }

    /// Returns true if either readability or writability is wanted.
    #[inline]
    pub fn want_any(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Returns true if both readability and writability are wanted.
    #[inline]
    pub fn want_both(&self) -> bool {
        self.ready.contains(Ready::all())
    }

    /// Returns true if neither readability nor writability is wanted.
    #[inline]
    pub fn want_none(&self) -> bool {
        self.ready.is_empty()
    }

    /// Returns the wanted readiness as a set.
    #[inline]
    pub fn readiness(&self) -> Ready {
        self.ready
    }

    /// Restores the empty state: invalid handle, no interest.
    pub fn reset(&mut self) {
        *self = Interest::default();
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let want = match (self.want_readable(), self.want_writable()) {
            (false, false) => "none",
            (true, false) => "readable",
            (false, true) => "writable",
            (true, true) => "both",
        };

        write!(fmt, "{{ handle: {}, want: {} }}", self.handle, want)
    }
}
