//! In-memory stream adapter.

use crate::domain::{Capabilities, Metadata, Stream, StreamError, StreamState, Whence};
use core::convert::Infallible;
use log::{debug, trace};

/// A stream backed by an owned byte vector and a cursor.
///
/// `BufferStream` implements the whole [`Stream`] contract without touching
/// any external resource. Its capability flags are reported verbatim and can
/// be changed at any time, which makes it a convenient stand-in for a
/// restricted file stream in tests.
///
/// # Position policy
///
/// The highest position reachable through [`seek`](Stream::seek) is the
/// index of the last byte (`size - 1`); only [`read`](Stream::read) moves the
/// cursor to `size`. [`eof`](Stream::eof) reports `true` as soon as the
/// cursor reaches `size - 1`, so an empty stream is at EOF from the start.
///
/// # Writes
///
/// [`write`](Stream::write) keeps every byte up to and including the one
/// under the cursor, drops the rest and appends the new data. The cursor is
/// left where it was.
///
/// # Examples
///
/// ```
/// use streamable::{BufferStream, Stream, Whence};
///
/// let mut stream = BufferStream::new("1235");
/// stream.seek(2, Whence::Set).unwrap();
/// assert_eq!(stream.write(b"456").unwrap(), 3);
/// assert_eq!(stream.materialize(), b"123456");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferStream {
    contents: Vec<u8>,
    cursor: usize,
    state: StreamState,
    capabilities: Capabilities,
}

impl BufferStream {
    /// Create a stream over `initial` with every capability enabled.
    pub fn new(initial: impl Into<Vec<u8>>) -> Self {
        Self::with_capabilities(initial, Capabilities::default())
    }

    /// Create a stream over `initial` with explicit capability flags.
    pub fn with_capabilities(initial: impl Into<Vec<u8>>, capabilities: Capabilities) -> Self {
        Self {
            contents: initial.into(),
            cursor: 0,
            state: StreamState::Active,
            capabilities,
        }
    }

    pub fn set_readable(&mut self, readable: bool) {
        self.capabilities.set_readable(readable);
    }

    pub fn set_writable(&mut self, writable: bool) {
        self.capabilities.set_writable(writable);
    }

    pub fn set_seekable(&mut self, seekable: bool) {
        self.capabilities.set_seekable(seekable);
    }

    /// Snapshot of the current capability flags.
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Get the lifecycle state.
    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Borrow the contents without moving the cursor.
    ///
    /// Empty once the stream is detached.
    pub fn as_bytes(&self) -> &[u8] {
        if self.state.is_detached() {
            return &[];
        }
        &self.contents
    }

    /// Consume the stream and return its contents.
    ///
    /// Empty if the stream was detached.
    pub fn into_inner(self) -> Vec<u8> {
        match self.state {
            StreamState::Active => self.contents,
            StreamState::Detached => Vec::new(),
        }
    }

    fn ensure_active(&self) -> Result<(), StreamError> {
        match self.state {
            StreamState::Active => Ok(()),
            StreamState::Detached => Err(StreamError::DETACHED),
        }
    }

    /// Splice `data` in like [`write`](Stream::write), then move the cursor
    /// past it so that consecutive calls append in order.
    pub(crate) fn write_advance(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        let written = self.write(data)?;
        self.cursor = self.contents.len();
        Ok(written)
    }

    /// Index of the last byte; `-1` for an empty stream.
    #[inline]
    fn last_index(&self) -> i64 {
        self.contents.len() as i64 - 1
    }
}

impl From<Vec<u8>> for BufferStream {
    fn from(contents: Vec<u8>) -> Self {
        Self::new(contents)
    }
}

impl From<&[u8]> for BufferStream {
    fn from(contents: &[u8]) -> Self {
        Self::new(contents)
    }
}

impl Stream for BufferStream {
    /// There is no resource behind an in-memory stream.
    type Resource = Infallible;

    fn materialize(&mut self) -> Vec<u8> {
        if self.state.is_detached() {
            return Vec::new();
        }
        let size = self.contents.len();
        let result = self.seek(0, Whence::Set).and_then(|()| self.read(size));
        match result {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("materialize fell back to empty contents: {}", e);
                Vec::new()
            }
        }
    }

    fn close(&mut self) -> Result<(), StreamError> {
        Ok(())
    }

    fn detach(&mut self) -> Option<Infallible> {
        if self.state.detach() {
            trace!("buffer stream detached ({} bytes)", self.contents.len());
        }
        None
    }

    fn size(&self) -> Option<u64> {
        match self.state {
            StreamState::Active => Some(self.contents.len() as u64),
            StreamState::Detached => None,
        }
    }

    fn tell(&self) -> Result<u64, StreamError> {
        self.ensure_active()?;
        Ok(self.cursor as u64)
    }

    fn eof(&self) -> bool {
        self.cursor as i64 >= self.last_index()
    }

    fn is_seekable(&self) -> bool {
        self.capabilities.seekable()
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        self.ensure_active()?;
        if !self.capabilities.seekable() {
            return Err(StreamError::NOT_SEEKABLE);
        }

        let last = self.last_index();
        let target = match whence {
            Whence::Set => offset,
            Whence::Cur => (self.cursor as i64).saturating_add(offset),
            Whence::End => last.saturating_add(offset),
        };

        if target > last {
            return Err(StreamError::OutOfBounds("cannot seek past end of stream"));
        }
        if target < 0 {
            return Err(StreamError::OutOfBounds("cannot seek before start of stream"));
        }

        trace!("seek {} from {} -> {}", offset, whence, target);
        self.cursor = target as usize;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        if !self.capabilities.seekable() {
            return Err(StreamError::NOT_SEEKABLE);
        }
        self.seek(0, Whence::Set)
    }

    fn is_writable(&self) -> bool {
        self.capabilities.writable()
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        self.ensure_active()?;
        if !self.capabilities.writable() {
            return Err(StreamError::NOT_WRITABLE);
        }

        // The byte under the cursor survives; everything after it is replaced.
        let keep = self.cursor.saturating_add(1).min(self.contents.len());
        self.contents.truncate(keep);
        self.contents.extend_from_slice(data);

        trace!("wrote {} bytes after offset {}", data.len(), self.cursor);
        Ok(data.len())
    }

    fn is_readable(&self) -> bool {
        self.capabilities.readable()
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError> {
        self.ensure_active()?;
        if !self.capabilities.readable() {
            return Err(StreamError::NOT_READABLE);
        }
        if self.eof() {
            return Ok(Vec::new());
        }

        let length = length.min(self.contents.len().saturating_sub(self.cursor));
        let data = self.contents[self.cursor..self.cursor + length].to_vec();
        self.cursor += length;
        Ok(data)
    }

    fn get_contents(&mut self) -> Result<Vec<u8>, StreamError> {
        self.ensure_active()?;
        // Inverted on purpose: only a non-readable stream passes this gate,
        // and `read` then rejects it.
        if self.capabilities.readable() {
            return Err(StreamError::IllegalState("stream is readable"));
        }
        if self.eof() {
            return Err(StreamError::OutOfBounds("eof"));
        }
        self.read(self.contents.len())
    }

    fn metadata(&self, _key: Option<&str>) -> Option<Metadata> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let stream = BufferStream::new("abc");
        assert_eq!(stream.tell().unwrap(), 0);
        assert_eq!(stream.size(), Some(3));
        assert_eq!(stream.state(), StreamState::Active);
        assert_eq!(stream.capabilities(), Capabilities::default());
        assert!(stream.is_readable());
        assert!(stream.is_writable());
        assert!(stream.is_seekable());
    }

    #[test]
    fn test_default_is_empty() {
        let stream = BufferStream::default();
        assert_eq!(stream.size(), Some(0));
        assert!(stream.as_bytes().is_empty());
        assert!(stream.eof());
    }

    #[test]
    fn test_with_capabilities() {
        let stream = BufferStream::with_capabilities("abc", Capabilities::read_only());
        assert!(stream.is_readable());
        assert!(!stream.is_writable());
        assert!(stream.is_seekable());
    }

    #[test]
    fn test_setters_change_only_their_flag() {
        let mut stream = BufferStream::new("abc");
        stream.set_writable(false);
        assert_eq!(stream.capabilities(), Capabilities::new(true, false, true));

        stream.set_seekable(false);
        stream.set_readable(false);
        assert_eq!(stream.capabilities(), Capabilities::new(false, false, false));
    }

    #[test]
    fn test_last_index() {
        assert_eq!(BufferStream::default().last_index(), -1);
        assert_eq!(BufferStream::new("abc").last_index(), 2);
    }

    #[test]
    fn test_seek_saturates_instead_of_overflowing() {
        let mut stream = BufferStream::new("abc");
        stream.seek(2, Whence::Set).unwrap();
        assert!(stream.seek(i64::MAX, Whence::Cur).unwrap_err().is_out_of_bounds());
        assert!(stream.seek(i64::MIN, Whence::End).unwrap_err().is_out_of_bounds());
        assert_eq!(stream.tell().unwrap(), 2);
    }

    #[test]
    fn test_failed_seek_keeps_cursor() {
        let mut stream = BufferStream::new("abc");
        stream.seek(1, Whence::Set).unwrap();
        assert!(stream.seek(3, Whence::Set).is_err());
        assert!(stream.seek(-2, Whence::Cur).is_err());
        assert_eq!(stream.tell().unwrap(), 1);
    }

    #[test]
    fn test_write_leaves_cursor() {
        let mut stream = BufferStream::new("abc");
        stream.seek(1, Whence::Set).unwrap();
        stream.write(b"XY").unwrap();
        assert_eq!(stream.tell().unwrap(), 1);
        assert_eq!(stream.as_bytes(), b"abXY");
    }

    #[test]
    fn test_write_after_full_read_appends() {
        let mut stream = BufferStream::new("abc");
        assert_eq!(stream.read(10).unwrap(), b"abc");
        assert_eq!(stream.tell().unwrap(), 3);

        stream.write(b"def").unwrap();
        assert_eq!(stream.as_bytes(), b"abcdef");
    }

    #[test]
    fn test_write_empty_truncates_after_cursor() {
        let mut stream = BufferStream::new("abcdef");
        stream.seek(2, Whence::Set).unwrap();
        assert_eq!(stream.write(b"").unwrap(), 0);
        assert_eq!(stream.as_bytes(), b"abc");
    }

    #[test]
    fn test_write_advance_appends_in_order() {
        let mut stream = BufferStream::default();
        for chunk in [&b"ab"[..], b"cd", b"ef"] {
            assert_eq!(stream.write_advance(chunk).unwrap(), 2);
        }
        assert_eq!(stream.as_bytes(), b"abcdef");
        assert_eq!(stream.tell().unwrap(), 6);
    }

    #[test]
    fn test_write_advance_rejects_read_only() {
        let mut stream = BufferStream::with_capabilities("abc", Capabilities::read_only());
        assert!(stream.write_advance(b"x").unwrap_err().is_illegal_state());
        assert_eq!(stream.tell().unwrap(), 0);
    }

    #[test]
    fn test_into_inner() {
        let mut stream = BufferStream::from(b"abc".to_vec());
        stream.write(b"d").unwrap();
        assert_eq!(stream.into_inner(), b"ad");

        let mut detached = BufferStream::from(&b"abc"[..]);
        detached.detach();
        assert!(detached.into_inner().is_empty());
    }

    #[test]
    fn test_as_bytes_detached() {
        let mut stream = BufferStream::new("abc");
        stream.detach();
        assert!(stream.as_bytes().is_empty());
    }

    #[test]
    fn test_metadata_is_always_none() {
        let stream = BufferStream::new("abc");
        assert!(stream.metadata(None).is_none());
        assert!(stream.metadata(Some("uri")).is_none());
    }
}
