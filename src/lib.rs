//! Per-handle interest bookkeeping for epoll/poll reactors.
//!
//! An [`InterestSet`] records, for each socket a reactor has taken ownership
//! of, whether it should currently be watched for readability, writability,
//! both or neither. The reactor consults it each cycle to build the poll set
//! (see [`sys`]) and updates it as the application subscribes, unsubscribes
//! and closes sockets.

pub mod error;
pub mod handle;
pub mod interest;
pub mod interest_set;
pub mod queue;
pub mod ready;
pub mod sys;

pub use error::{InterestError, Result};
pub use handle::Handle;
pub use interest::Interest;
pub use interest_set::{InterestSet, Iter};
pub use queue::{Command, InterestQueue};
pub use ready::Ready;
