//! Stream errors.
//!
//! Every stream operation reports failures through [`StreamError`]. The
//! variants separate contract violations by the caller (`IllegalState`,
//! `InvalidArgument`, `OutOfBounds`) from failures of the host I/O
//! primitives behind a file-backed stream (`Io`).

use core::fmt;

/// Errors returned by [`Stream`](crate::Stream) operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// The operation is forbidden in the stream's current state.
    ///
    /// Raised for detached streams and for streams whose readable, writable
    /// or seekable capability does not permit the operation.
    IllegalState(&'static str),

    /// An argument could not be interpreted, e.g. an unknown whence value
    /// or open mode.
    InvalidArgument(String),

    /// A position fell outside the addressable range of the stream.
    OutOfBounds(&'static str),

    /// A host I/O primitive failed.
    Io(std::io::Error),
}

impl StreamError {
    pub(crate) const DETACHED: Self = Self::IllegalState("stream is detached");
    pub(crate) const NOT_READABLE: Self = Self::IllegalState("stream is not readable");
    pub(crate) const NOT_WRITABLE: Self = Self::IllegalState("stream is not writable");
    pub(crate) const NOT_SEEKABLE: Self = Self::IllegalState("stream is not seekable");

    /// Check if this error reports a forbidden state.
    #[inline]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    /// Check if this error reports an out-of-range position.
    #[inline]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds(_))
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalState(msg) => write!(f, "Illegal state: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
