//! Seek reference point value object.

use crate::domain::StreamError;
use core::fmt;
use core::str::FromStr;

/// Conventional integer code for [`Whence::Set`].
pub const SEEK_SET: i32 = 0;
/// Conventional integer code for [`Whence::Cur`].
pub const SEEK_CUR: i32 = 1;
/// Conventional integer code for [`Whence::End`].
pub const SEEK_END: i32 = 2;

/// The reference point a seek offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Whence {
    /// Offset from the start of the stream.
    #[default]
    Set,
    /// Offset relative to the current cursor.
    Cur,
    /// Offset relative to the last byte of the stream.
    End,
}

impl Whence {
    /// The conventional integer code (`SEEK_SET`, `SEEK_CUR`, `SEEK_END`).
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Whence::Set => SEEK_SET,
            Whence::Cur => SEEK_CUR,
            Whence::End => SEEK_END,
        }
    }
}

impl TryFrom<i32> for Whence {
    type Error = StreamError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            SEEK_SET => Ok(Whence::Set),
            SEEK_CUR => Ok(Whence::Cur),
            SEEK_END => Ok(Whence::End),
            other => Err(StreamError::InvalidArgument(format!("invalid whence: {}", other))),
        }
    }
}

impl FromStr for Whence {
    type Err = StreamError;

    /// Accepts `set`, `cur`, `end` and their `SEEK_` spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.strip_prefix("seek_").unwrap_or(lower.as_str()) {
            "set" | "start" => Ok(Whence::Set),
            "cur" | "current" => Ok(Whence::Cur),
            "end" => Ok(Whence::End),
            _ => Err(StreamError::InvalidArgument(format!("invalid whence: {}", s))),
        }
    }
}

impl fmt::Display for Whence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whence::Set => write!(f, "SEEK_SET"),
            Whence::Cur => write!(f, "SEEK_CUR"),
            Whence::End => write!(f, "SEEK_END"),
        }
    }
}
