//! File-backed stream adapter.
//!
//! A thin pass-through to [`std::fs::File`]. Positioning, sizing and EOF use
//! the host's notion of a file: `seek(0, Whence::End)` lands *after* the last
//! byte, and `eof` turns true once the position reaches the file length.

use crate::domain::{Metadata, OpenMode, Stream, StreamError, StreamState, Whence};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A stream over an open host file.
///
/// Readability and writability follow the [`OpenMode`] the file was opened
/// with. Closing or detaching releases the handle and leaves the stream
/// permanently inert.
///
/// # Examples
///
/// ```no_run
/// use streamable::{FileStream, Stream, Whence};
///
/// let mut stream = FileStream::open("notes.txt", "r+")?;
/// stream.seek(0, Whence::End)?;
/// stream.write(b"\nappended")?;
/// stream.close()?;
/// # Ok::<(), streamable::StreamError>(())
/// ```
#[derive(Debug)]
pub struct FileStream {
    handle: Option<File>,
    path: Option<PathBuf>,
    mode: OpenMode,
    state: StreamState,
}

impl FileStream {
    /// Open `path` with a conventional mode string (`r`, `w+`, `ab`, ...).
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `mode` is not a valid open mode
    /// - `Io` if the host refuses to open the file
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let mode: OpenMode = mode.parse()?;

        let file = mode.open_options().open(path).map_err(|e| {
            StreamError::Io(io::Error::new(
                e.kind(),
                format!(
                    "failed to open file: filename `{}`, mode `{}`: {}",
                    path.display(),
                    mode,
                    e
                ),
            ))
        })?;

        debug!("opened {} with mode {}", path.display(), mode);
        Ok(Self {
            handle: Some(file),
            path: Some(path.to_path_buf()),
            mode,
            state: StreamState::Active,
        })
    }

    /// Wrap a file that is already open.
    ///
    /// `mode` must describe how `file` was opened; it decides what
    /// [`is_readable`](Stream::is_readable) and
    /// [`is_writable`](Stream::is_writable) report.
    pub fn from_file(file: File, mode: OpenMode) -> Self {
        Self {
            handle: Some(file),
            path: None,
            mode,
            state: StreamState::Active,
        }
    }

    /// Path the stream was opened from, if known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    pub(crate) fn handle(&self) -> Result<&File, StreamError> {
        self.handle.as_ref().ok_or(StreamError::DETACHED)
    }

    /// Position and length, or `None` if either query fails.
    fn position_and_len(&self) -> Option<(u64, u64)> {
        let mut file = self.handle.as_ref()?;
        let pos = file.stream_position().ok()?;
        let len = file.metadata().ok()?.len();
        Some((pos, len))
    }
}

impl Stream for FileStream {
    type Resource = File;

    fn materialize(&mut self) -> Vec<u8> {
        let result = self.rewind().and_then(|()| self.get_contents());
        match result {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("materialize fell back to empty contents: {}", e);
                Vec::new()
            }
        }
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.state.detach();
        if let Some(mut file) = self.handle.take() {
            file.flush()?;
            debug!("closed {}", self.path.as_deref().unwrap_or(Path::new("<file>")).display());
        }
        Ok(())
    }

    fn detach(&mut self) -> Option<File> {
        self.state.detach();
        let file = self.handle.take();
        if file.is_some() {
            debug!("detached {}", self.path.as_deref().unwrap_or(Path::new("<file>")).display());
        }
        file
    }

    fn size(&self) -> Option<u64> {
        let file = self.handle.as_ref()?;
        match file.metadata() {
            Ok(meta) => Some(meta.len()),
            Err(e) => {
                warn!("failed to query file size: {}", e);
                None
            }
        }
    }

    fn tell(&self) -> Result<u64, StreamError> {
        let mut file = self.handle()?;
        Ok(file.stream_position()?)
    }

    fn eof(&self) -> bool {
        match self.position_and_len() {
            Some((pos, len)) => pos >= len,
            None => true,
        }
    }

    fn is_seekable(&self) -> bool {
        self.handle
            .as_ref()
            .and_then(|file| file.metadata().ok())
            .is_some_and(|meta| meta.is_file())
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        let mut file = self.handle()?;
        let pos = match whence {
            Whence::Set => SeekFrom::Start(u64::try_from(offset).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, "cannot seek before start of stream")
            })?),
            Whence::Cur => SeekFrom::Current(offset),
            Whence::End => SeekFrom::End(offset),
        };
        file.seek(pos)?;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        let mut file = self.handle()?;
        file.rewind()?;
        Ok(())
    }

    fn is_writable(&self) -> bool {
        self.state.is_active() && self.mode.is_writable()
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        let mut file = self.handle()?;
        if !self.mode.is_writable() {
            return Err(StreamError::NOT_WRITABLE);
        }
        file.write_all(data)?;
        Ok(data.len())
    }

    fn is_readable(&self) -> bool {
        self.state.is_active() && self.mode.is_readable()
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError> {
        let file = self.handle()?;
        if !self.mode.is_readable() {
            return Err(StreamError::NOT_READABLE);
        }
        let mut buf = Vec::new();
        file.take(length as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn get_contents(&mut self) -> Result<Vec<u8>, StreamError> {
        let mut file = self.handle()?;
        if !self.mode.is_readable() {
            return Err(StreamError::NOT_READABLE);
        }
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn metadata(&self, key: Option<&str>) -> Option<Metadata> {
        self.handle.as_ref()?;

        let mut meta = Metadata::new();
        if let Some(path) = &self.path {
            meta.insert("uri", path.display().to_string());
        }
        meta.insert("mode", self.mode.to_string());
        meta.insert("seekable", self.is_seekable());
        meta.insert("readable", self.is_readable());
        meta.insert("writable", self.is_writable());
        if let Some(size) = self.size() {
            meta.insert("size", size);
        }
        meta.select(key)
    }
}
