//! Seekable byte streams with interchangeable backends.
//!
//! This crate defines a single stream contract, the [`Stream`] trait, and two
//! implementations of it:
//!
//! - [`BufferStream`] keeps its bytes in memory and implements every
//!   operation itself (seek arithmetic, EOF detection, partial reads,
//!   overwrite-style writes, detach).
//! - [`FileStream`] forwards every operation to an open host file.
//!
//! Code written against [`Stream`] accepts either one.
//!
//! # Architecture
//!
//! ## Domain Layer (`domain`)
//! - **Ports**: `Stream`
//! - **Entities**: `StreamState`
//! - **Value Objects**: `Whence`, `Capabilities`, `OpenMode`, `Metadata`
//! - **Errors**: `StreamError`
//!
//! ## Adapter Layer (`adapters`)
//! - **`BufferStream`**: in-memory stream
//! - **`FileStream`**: file-backed stream
//!
//! ## Infrastructure Layer
//! - `embedded_io::{Read, Write, Seek}` for both adapters
//!
//! # Quick Start
//!
//! ```
//! use streamable::{BufferStream, Stream, Whence};
//!
//! let mut stream = BufferStream::new("123456");
//! stream.seek(-1, Whence::End)?;
//! assert_eq!(stream.tell()?, 4);
//! assert_eq!(stream.read(10)?, b"56");
//! assert!(stream.eof());
//! # Ok::<(), streamable::StreamError>(())
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade. Nothing is logged for errors
//! that are returned to the caller.

pub mod domain;
pub mod adapters;
mod infrastructure;

pub use domain::{
    AccessKind, Capabilities, Metadata, MetadataValue, OpenMode, SEEK_CUR, SEEK_END, SEEK_SET,
    Stream, StreamError, StreamState, Whence,
};

pub use adapters::{BufferStream, FileStream};

// Re-export embedded_io for convenience
pub use embedded_io;
