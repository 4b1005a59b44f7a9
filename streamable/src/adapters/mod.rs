//! Adapter layer - Concrete implementations of the `Stream` port.
//!
//! # Available Adapters
//!
//! - **`BufferStream`**: Owned byte vector plus cursor, no external resource
//! - **`FileStream`**: Pass-through to an open host file

mod buffer_stream;
mod file_stream;

pub use buffer_stream::BufferStream;
pub use file_stream::FileStream;
