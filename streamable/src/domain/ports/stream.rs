//! Stream port - the contract shared by every stream implementation.
//!
//! Callers that only depend on this trait can swap a
//! [`BufferStream`](crate::BufferStream) for a [`FileStream`](crate::FileStream)
//! (or a test double) without further changes.

use crate::domain::{Metadata, StreamError, Whence};

/// A randomly-seekable byte stream.
///
/// # Architecture
///
/// ```text
/// ┌─────────────────────┐
/// │   Callers / CLI     │
/// └──────────┬──────────┘
///            │ depends on
///            ▼
/// ┌─────────────────────┐
/// │    Stream Port      │  ◄── This trait
/// └──────────┬──────────┘
///            │ implemented by
///            ▼
/// ┌─────────────────────┐
/// │  Adapter Layer      │
/// │ (BufferStream,      │
/// │  FileStream)        │
/// └─────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use streamable::{BufferStream, Stream, Whence};
///
/// fn tail<S: Stream>(stream: &mut S, n: i64) -> Result<Vec<u8>, streamable::StreamError> {
///     stream.seek(-(n - 1), Whence::End)?;
///     stream.read(n as usize)
/// }
///
/// let mut stream = BufferStream::new(b"hello world".to_vec());
/// assert_eq!(tail(&mut stream, 5).unwrap(), b"world");
/// ```
pub trait Stream {
    /// The underlying resource handed back by [`detach`](Stream::detach).
    type Resource;

    /// Read the entire stream from the beginning.
    ///
    /// Never fails: any error is swallowed and an empty vector returned.
    /// Moves the cursor.
    fn materialize(&mut self) -> Vec<u8>;

    /// Close the stream and release any underlying resource.
    ///
    /// Safe to call on a detached stream.
    fn close(&mut self) -> Result<(), StreamError>;

    /// Separate the underlying resource from the stream.
    ///
    /// After this call the stream is unusable. Idempotent.
    fn detach(&mut self) -> Option<Self::Resource>;

    /// Size of the stream in bytes, if known. `None` once detached.
    fn size(&self) -> Option<u64>;

    /// Current cursor position.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the stream is detached.
    fn tell(&self) -> Result<u64, StreamError>;

    /// Whether the cursor is at the end of the stream.
    fn eof(&self) -> bool;

    fn is_seekable(&self) -> bool;

    /// Move the cursor to `offset` relative to `whence`.
    ///
    /// # Errors
    ///
    /// - `IllegalState` if the stream is detached or not seekable
    /// - `OutOfBounds` if the target lies outside the stream
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError>;

    /// Like [`seek`](Stream::seek), taking the conventional integer whence
    /// code.
    ///
    /// # Errors
    ///
    /// - `IllegalState` if the stream is detached or not seekable
    /// - `InvalidArgument` if `whence` is not one of `SEEK_SET`, `SEEK_CUR`,
    ///   `SEEK_END`
    /// - otherwise whatever `seek` returns
    fn seek_raw(&mut self, offset: i64, whence: i32) -> Result<(), StreamError> {
        // State is checked before the whence code is resolved
        self.tell()?;
        if !self.is_seekable() {
            return Err(StreamError::NOT_SEEKABLE);
        }
        let whence = Whence::try_from(whence)?;
        self.seek(offset, whence)
    }

    /// Move the cursor to the start of the stream.
    fn rewind(&mut self) -> Result<(), StreamError>;

    fn is_writable(&self) -> bool;

    /// Write `data` to the stream, returning the number of bytes written.
    fn write(&mut self, data: &[u8]) -> Result<usize, StreamError>;

    fn is_readable(&self) -> bool;

    /// Read up to `length` bytes from the cursor.
    ///
    /// Returns fewer bytes when the stream ends first, and an empty vector
    /// at the end of the stream.
    fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError>;

    /// Read the remainder of the stream.
    fn get_contents(&mut self) -> Result<Vec<u8>, StreamError>;

    /// Metadata about the underlying resource.
    ///
    /// With `Some(key)` the result holds only that entry.
    fn metadata(&self, key: Option<&str>) -> Option<Metadata>;
}
