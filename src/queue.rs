use std::sync::Arc;

use log::debug;

use crate::error::{InterestError, Result};
use crate::{Handle, InterestSet};

pub use concurrent_queue::{ConcurrentQueue, PopError, PushError};

/// A deferred mutation of an [`InterestSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Attach(Handle),
    Detach(Handle),
    ShowReadable(Handle),
    HideReadable(Handle),
    ShowWritable(Handle),
    HideWritable(Handle),
}

impl Command {
    pub fn handle(&self) -> Handle {
        match *self {
            Command::Attach(handle)
            | Command::Detach(handle)
            | Command::ShowReadable(handle)
            | Command::HideReadable(handle)
            | Command::ShowWritable(handle)
            | Command::HideWritable(handle) => handle,
        }
    }

    /// Applies the command to `set`, as if the matching `InterestSet` method
    /// had been called directly.
    pub fn apply(self, set: &mut InterestSet) -> Result<()> {
        match self {
            Command::Attach(handle) => set.attach(handle),
            Command::Detach(handle) => set.detach(handle),
            Command::ShowReadable(handle) => set.show_readable(handle),
            Command::HideReadable(handle) => set.hide_readable(handle),
            Command::ShowWritable(handle) => set.show_writable(handle),
            Command::HideWritable(handle) => set.hide_writable(handle),
        }
    }
}

/// A multi-producer queue of [`Command`]s for an [`InterestSet`] owned by a
/// single thread.
///
/// Any thread may push commands; the thread that owns the set drains them
/// with [`apply`] between poll cycles, so the set itself never needs a lock.
/// Clones share the same queue.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use queen_interest::{Command, Handle, InterestQueue, InterestSet};
///
/// let queue = InterestQueue::unbounded();
/// let mut set = InterestSet::new();
///
/// let producer = queue.clone();
/// thread::spawn(move || {
///     producer.push(Command::Attach(Handle(10))).unwrap();
///     producer.push(Command::ShowReadable(Handle(10))).unwrap();
/// }).join().unwrap();
///
/// assert!(queue.apply(&mut set).is_empty());
/// assert!(set.want_readable(Handle(10)));
/// ```
///
/// [`apply`]: #method.apply
pub struct InterestQueue {
    inner: Arc<ConcurrentQueue<Command>>,
}

impl InterestQueue {
    pub fn bounded(cap: usize) -> InterestQueue {
        InterestQueue {
            inner: Arc::new(ConcurrentQueue::bounded(cap)),
        }
    }

    pub fn unbounded() -> InterestQueue {
        InterestQueue {
            inner: Arc::new(ConcurrentQueue::unbounded()),
        }
    }

    pub fn push(&self, command: Command) -> std::result::Result<(), PushError<Command>> {
        self.inner.push(command)
    }

    pub fn pop(&self) -> std::result::Result<Command, PopError> {
        self.inner.pop()
    }

    /// Drains every queued command in FIFO order and applies it to `set`.
    ///
    /// Commands that fail leave `set` unchanged and are returned together with
    /// their error; they do not stop the drain.
    pub fn apply(&self, set: &mut InterestSet) -> Vec<(Command, InterestError)> {
        let mut rejected = Vec::new();

        while let Ok(command) = self.inner.pop() {
            if let Err(err) = command.apply(set) {
                debug!("interest command rejected: {:?}, err: {}", command, err);
                rejected.push((command, err));
            }
        }

        rejected
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }

    /// Closes the queue. Further pushes fail; commands already queued can
    /// still be applied.
    pub fn close(&self) -> bool {
        self.inner.close()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl Clone for InterestQueue {
    fn clone(&self) -> InterestQueue {
        InterestQueue {
            inner: self.inner.clone(),
        }
    }
}
