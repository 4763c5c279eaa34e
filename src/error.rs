use std::io;

use crate::Handle;

/// Raised when an operation's precondition on handle presence is violated.
///
/// A failed operation never modifies the [`InterestSet`](crate::InterestSet).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestError {
    /// `attach` was called for a handle that is already attached.
    #[error("handle {0} is already attached")]
    AlreadyAttached(Handle),

    /// `detach`, `show_*` or `hide_*` was called for a handle that is not attached.
    #[error("handle {0} is not attached")]
    NotAttached(Handle),

    #[error("handle {0} is not a valid handle")]
    InvalidHandle(Handle),
}

impl InterestError {
    /// Returns the handle that caused the error.
    pub fn handle(&self) -> Handle {
        match *self {
            InterestError::AlreadyAttached(handle)
            | InterestError::NotAttached(handle)
            | InterestError::InvalidHandle(handle) => handle,
        }
    }
}

impl From<InterestError> for io::Error {
    fn from(err: InterestError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

pub type Result<T> = std::result::Result<T, InterestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_handle() {
        assert_eq!(InterestError::AlreadyAttached(Handle(3)).handle(), Handle(3));
        assert_eq!(InterestError::NotAttached(Handle(4)).handle(), Handle(4));
        assert_eq!(InterestError::InvalidHandle(Handle::INVALID).handle(), Handle::INVALID);
    }

    #[test]
    fn converts_to_invalid_input() {
        let err: io::Error = InterestError::NotAttached(Handle(1000)).into();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "handle 1000 is not attached");
    }
}
