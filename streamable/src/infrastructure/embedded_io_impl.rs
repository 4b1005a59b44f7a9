//! Implementations of embedded_io traits for the stream adapters.
//!
//! These implementations bridge the [`Stream`] contract to the embedded_io
//! ecosystem. Each call forwards to the matching contract operation, so the
//! position and EOF policy of the underlying adapter carry over unchanged.
//!
//! The one exception is `Write` for [`BufferStream`]: a contract write leaves
//! the cursor in place, while embedded_io callers such as `write_all` and
//! `write_fmt` issue several writes in a row. The bridge moves the cursor past
//! each chunk so those writes append instead of replacing each other.

use crate::{
    adapters::{BufferStream, FileStream},
    domain::{Stream, StreamError, Whence},
};
use embedded_io::{ErrorKind, ErrorType, Read, Seek, SeekFrom, Write};

impl embedded_io::Error for StreamError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalState(_) => ErrorKind::Unsupported,
            Self::InvalidArgument(_) => ErrorKind::InvalidInput,
            Self::OutOfBounds(_) => ErrorKind::InvalidInput,
            Self::Io(e) => embedded_io::Error::kind(e),
        }
    }
}

// Convert embedded_io's SeekFrom to an offset and whence
fn convert_seek_from(from: SeekFrom) -> Result<(i64, Whence), StreamError> {
    match from {
        SeekFrom::Start(n) => i64::try_from(n)
            .map(|n| (n, Whence::Set))
            .map_err(|_| StreamError::OutOfBounds("seek offset exceeds i64::MAX")),
        SeekFrom::Current(n) => Ok((n, Whence::Cur)),
        SeekFrom::End(n) => Ok((n, Whence::End)),
    }
}

fn read_into<S: Stream>(stream: &mut S, buf: &mut [u8]) -> Result<usize, StreamError> {
    if buf.is_empty() {
        return Ok(0);
    }
    let data = Stream::read(stream, buf.len())?;
    buf[..data.len()].copy_from_slice(&data);
    Ok(data.len())
}

fn seek_to<S: Stream>(stream: &mut S, pos: SeekFrom) -> Result<u64, StreamError> {
    let (offset, whence) = convert_seek_from(pos)?;
    Stream::seek(stream, offset, whence)?;
    stream.tell()
}

// Implement for BufferStream
impl ErrorType for BufferStream {
    type Error = StreamError;
}

impl Read for BufferStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        read_into(self, buf)
    }
}

impl Write for BufferStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_advance(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Seek for BufferStream {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        seek_to(self, pos)
    }
}

// Implement for FileStream
impl ErrorType for FileStream {
    type Error = StreamError;
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        read_into(self, buf)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Stream::write(self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let mut file = self.handle()?;
        std::io::Write::flush(&mut file)?;
        Ok(())
    }
}

impl Seek for FileStream {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        seek_to(self, pos)
    }
}
