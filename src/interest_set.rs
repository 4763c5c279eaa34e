use std::fmt;
use std::iter::FusedIterator;

use indexmap::map::{IndexMap, Values};
use log::trace;

use crate::error::{InterestError, Result};
use crate::{Handle, Interest};

/// The interest of every handle a reactor currently manages.
///
/// A handle must be [`attach`]ed before interest can be shown or hidden for
/// it, and stays in the set until it is [`detach`]ed. Show and hide never
/// attach implicitly. Queries on a handle that is not attached are not errors;
/// they report no interest.
///
/// Iteration visits handles in ascending order, regardless of the order in
/// which they were attached.
///
/// `InterestSet` does no locking. A reactor sharing it between threads must
/// serialize access itself, or funnel mutations through an
/// [`InterestQueue`](crate::InterestQueue).
///
/// # Examples
///
/// ```
/// use queen_interest::{Handle, InterestSet};
///
/// let mut set = InterestSet::new();
///
/// set.attach(Handle(100)).unwrap();
/// set.attach(Handle(10)).unwrap();
/// set.show_readable(Handle(100)).unwrap();
///
/// assert!(set.want_readable(Handle(100)));
/// assert!(set.want_none(Handle(10)));
/// assert!(set.show_readable(Handle(1000)).is_err());
///
/// let handles: Vec<_> = set.iter().map(|interest| interest.handle()).collect();
/// assert_eq!(handles, [Handle(10), Handle(100)]);
/// ```
///
/// [`attach`]: #method.attach
/// [`detach`]: #method.detach
#[derive(Clone, Default)]
pub struct InterestSet {
    // Entries are kept sorted by handle; lookups go through the hash index.
    entries: IndexMap<Handle, Interest>,
}

impl InterestSet {
    pub fn new() -> InterestSet {
        InterestSet::default()
    }

    /// Returns an empty set with room for `capacity` handles.
    pub fn with_capacity(capacity: usize) -> InterestSet {
        InterestSet {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Starts tracking `handle` with no interest.
    ///
    /// Fails with [`InterestError::AlreadyAttached`] if `handle` is already
    /// attached; duplicates are rejected rather than merged. Fails with
    /// [`InterestError::InvalidHandle`] for [`Handle::INVALID`].
    pub fn attach(&mut self, handle: Handle) -> Result<()> {
        if !handle.is_valid() {
            return Err(InterestError::InvalidHandle(handle));
        }

        if self.entries.contains_key(&handle) {
            return Err(InterestError::AlreadyAttached(handle));
        }

        self.entries.insert_sorted(handle, Interest::with_handle(handle));

        trace!("attach handle: {}, attached: {}", handle, self.entries.len());

        Ok(())
    }

    /// Stops tracking `handle`, discarding its interest.
    pub fn detach(&mut self, handle: Handle) -> Result<()> {
        self.entries
            .shift_remove(&handle)
            .ok_or(InterestError::NotAttached(handle))?;

        trace!("detach handle: {}, attached: {}", handle, self.entries.len());

        Ok(())
    }

    pub fn show_readable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.show_readable();
        Ok(())
    }

    pub fn hide_readable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.hide_readable();
        Ok(())
    }

    pub fn show_writable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.show_writable();
        Ok(())
    }

    pub fn hide_writable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.hide_writable();
        Ok(())
    }

    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Returns a copy of the interest for `handle`, or `None` if it is not
    /// attached.
    #[inline]
    pub fn find(&self, handle: Handle) -> Option<Interest> {
        self.entries.get(&handle).copied()
    }

    pub fn want_readable(&self, handle: Handle) -> bool {
        self.query(handle, Interest::want_readable)
    }

    pub fn want_writable(&self, handle: Handle) -> bool {
        self.query(handle, Interest::want_writable)
    }

    pub fn want_any(&self, handle: Handle) -> bool {
        self.query(handle, Interest::want_any)
    }

    pub fn want_both(&self, handle: Handle) -> bool {
        self.query(handle, Interest::want_both)
    }

    /// Returns true if `handle` is attached and wants neither readability
    /// nor writability. A handle that is not attached returns false.
    pub fn want_none(&self, handle: Handle) -> bool {
        self.query(handle, Interest::want_none)
    }

    /// Returns the number of attached handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the interest of every attached handle, in
    /// ascending handle order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    fn get_mut(&mut self, handle: Handle) -> Result<&mut Interest> {
        self.entries
            .get_mut(&handle)
            .ok_or(InterestError::NotAttached(handle))
    }

    fn query(&self, handle: Handle, f: fn(&Interest) -> bool) -> bool {
        self.entries.get(&handle).is_some_and(f)
    }
}

impl<'a> IntoIterator for &'a InterestSet {
    type Item = Interest;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for InterestSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for InterestSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "[")?;

        for (i, interest) in self.iter().enumerate() {
            if i > 0 {
                write!(fmt, ",")?;
            }
            write!(fmt, " {}", interest)?;
        }

        write!(fmt, " ]")
    }
}

/// [`InterestSet`] iterator.
///
/// This struct is created by the [`iter`] method on [`InterestSet`].
///
/// [`iter`]: struct.InterestSet.html#method.iter
#[derive(Clone)]
pub struct Iter<'a> {
    inner: Values<'a, Handle, Interest>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Interest;

    #[inline]
    fn next(&mut self) -> Option<Interest> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Interest> {
        self.inner.next_back().copied()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = InterestSet::new();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.to_string(), "[ ]");
    }

    #[test]
    fn attach_twice_is_rejected() {
        let mut set = InterestSet::new();

        set.attach(Handle(5)).unwrap();
        set.show_writable(Handle(5)).unwrap();

        assert_eq!(set.attach(Handle(5)), Err(InterestError::AlreadyAttached(Handle(5))));
        assert_eq!(set.len(), 1);
        assert!(set.want_writable(Handle(5)));
    }

    #[test]
    fn attach_invalid_is_rejected() {
        let mut set = InterestSet::new();

        assert_eq!(
            set.attach(Handle::INVALID),
            Err(InterestError::InvalidHandle(Handle::INVALID))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn detach_absent_is_rejected() {
        let mut set = InterestSet::new();
        set.attach(Handle(1)).unwrap();

        assert_eq!(set.detach(Handle(2)), Err(InterestError::NotAttached(Handle(2))));
        assert!(set.contains(Handle(1)));

        set.detach(Handle(1)).unwrap();
        assert_eq!(set.detach(Handle(1)), Err(InterestError::NotAttached(Handle(1))));
    }

    #[test]
    fn find_returns_a_copy() {
        let mut set = InterestSet::new();
        set.attach(Handle(3)).unwrap();

        let mut copy = set.find(Handle(3)).unwrap();
        copy.show_readable();
        copy.set_handle(Handle(4));

        assert!(set.want_none(Handle(3)));
        assert!(!set.contains(Handle(4)));
    }

    #[test]
    fn reattach_starts_with_no_interest() {
        let mut set = InterestSet::new();

        set.attach(Handle(8)).unwrap();
        set.show_readable(Handle(8)).unwrap();
        set.detach(Handle(8)).unwrap();
        set.attach(Handle(8)).unwrap();

        assert!(set.want_none(Handle(8)));
    }

    #[test]
    fn iter_is_sorted_and_sized() {
        let mut set = InterestSet::with_capacity(8);

        for fd in [7, 3, 9, 1, 5] {
            set.attach(Handle(fd)).unwrap();
        }
        set.detach(Handle(9)).unwrap();
        set.attach(Handle(4)).unwrap();

        let iter = set.iter();
        assert_eq!(iter.len(), 5);

        let forward: Vec<_> = iter.map(|interest| interest.handle().0).collect();
        assert_eq!(forward, [1, 3, 4, 5, 7]);

        let backward: Vec<_> = set.iter().rev().map(|interest| interest.handle().0).collect();
        assert_eq!(backward, [7, 5, 4, 3, 1]);
    }

    #[test]
    fn display_lists_in_order() {
        let mut set = InterestSet::new();
        set.attach(Handle(2)).unwrap();
        set.attach(Handle(1)).unwrap();
        set.show_readable(Handle(1)).unwrap();

        assert_eq!(
            set.to_string(),
            "[ { handle: 1, want: readable }, { handle: 2, want: none } ]"
        );
    }
}
