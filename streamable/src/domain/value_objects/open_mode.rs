//! File open mode value object.
//!
//! Parses the conventional `fopen`-style mode strings used to open a
//! [`FileStream`](crate::FileStream):
//!
//! | base | opens for | creates | truncates | position |
//! |------|-----------|---------|-----------|----------|
//! | `r`  | reading   | no      | no        | start    |
//! | `w`  | writing   | yes     | yes       | start    |
//! | `a`  | appending | yes     | no        | end      |
//! | `x`  | writing   | must not exist | no | start    |
//! | `c`  | writing   | yes     | no        | start    |
//!
//! A trailing `+` adds the missing direction, and a `b` (before or after the
//! `+`) is accepted and ignored.

use crate::domain::StreamError;
use core::fmt;
use core::str::FromStr;
use std::fs::OpenOptions;

/// Base letter of an open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// `r`
    Read,
    /// `w`
    Truncate,
    /// `a`
    Append,
    /// `x`
    CreateNew,
    /// `c`
    Create,
}

impl AccessKind {
    const fn letter(self) -> char {
        match self {
            AccessKind::Read => 'r',
            AccessKind::Truncate => 'w',
            AccessKind::Append => 'a',
            AccessKind::CreateNew => 'x',
            AccessKind::Create => 'c',
        }
    }
}

/// A parsed open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenMode {
    kind: AccessKind,
    plus: bool,
    binary: bool,
}

impl OpenMode {
    /// Plain `r`.
    pub const READ: Self = Self::new(AccessKind::Read, false);
    /// `r+`.
    pub const READ_WRITE: Self = Self::new(AccessKind::Read, true);

    /// Create a mode from its parts.
    pub const fn new(kind: AccessKind, plus: bool) -> Self {
        Self {
            kind,
            plus,
            binary: false,
        }
    }

    #[inline]
    pub const fn kind(&self) -> AccessKind {
        self.kind
    }

    /// Whether the mode carries the `+` update flag.
    #[inline]
    pub const fn is_update(&self) -> bool {
        self.plus
    }

    /// Readable iff the base is `r` or the mode carries `+`.
    #[inline]
    pub const fn is_readable(&self) -> bool {
        matches!(self.kind, AccessKind::Read) || self.plus
    }

    /// Writable for every mode except plain `r`/`rb`.
    #[inline]
    pub const fn is_writable(&self) -> bool {
        !matches!(self.kind, AccessKind::Read) || self.plus
    }

    /// The [`OpenOptions`] that implement this mode.
    pub fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.is_readable());
        match self.kind {
            AccessKind::Read => {
                options.write(self.plus);
            }
            AccessKind::Truncate => {
                options.write(true).create(true).truncate(true);
            }
            AccessKind::Append => {
                options.append(true).create(true);
            }
            AccessKind::CreateNew => {
                options.write(true).create_new(true);
            }
            AccessKind::Create => {
                options.write(true).create(true);
            }
        }
        options
    }
}

impl FromStr for OpenMode {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StreamError::InvalidArgument(format!("invalid open mode: `{}`", s));

        let mut chars = s.chars();
        let kind = match chars.next() {
            Some('r') => AccessKind::Read,
            Some('w') => AccessKind::Truncate,
            Some('a') => AccessKind::Append,
            Some('x') => AccessKind::CreateNew,
            Some('c') => AccessKind::Create,
            _ => return Err(invalid()),
        };

        let mut plus = false;
        let mut binary = false;
        for c in chars {
            match c {
                '+' if !plus => plus = true,
                'b' if !binary => binary = true,
                _ => return Err(invalid()),
            }
        }

        Ok(Self { kind, plus, binary })
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())?;
        if self.plus {
            write!(f, "+")?;
        }
        if self.binary {
            write!(f, "b")?;
        }
        Ok(())
    }
}
