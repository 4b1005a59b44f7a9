//! Stream capability flags value object.

/// Capability flags gating the operation classes of a stream.
///
/// The flags are independent of each other and of the stream's contents.
/// A [`BufferStream`](crate::BufferStream) reports them verbatim, which makes
/// it convenient for simulating restricted streams in tests.
///
/// # Examples
///
/// ```
/// use streamable::Capabilities;
///
/// let caps = Capabilities::default().with_writable(false);
/// assert!(caps.readable());
/// assert!(!caps.writable());
/// assert_eq!(caps, Capabilities::read_only());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    readable: bool,
    writable: bool,
    seekable: bool,
}

impl Capabilities {
    /// Create a capability set from explicit flags.
    pub const fn new(readable: bool, writable: bool, seekable: bool) -> Self {
        Self {
            readable,
            writable,
            seekable,
        }
    }

    /// Readable and seekable, not writable.
    pub const fn read_only() -> Self {
        Self::new(true, false, true)
    }

    /// Return a copy with the readable flag replaced.
    #[inline]
    pub const fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Return a copy with the writable flag replaced.
    #[inline]
    pub const fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Return a copy with the seekable flag replaced.
    #[inline]
    pub const fn with_seekable(mut self, seekable: bool) -> Self {
        self.seekable = seekable;
        self
    }

    #[inline]
    pub const fn readable(&self) -> bool {
        self.readable
    }

    #[inline]
    pub const fn writable(&self) -> bool {
        self.writable
    }

    #[inline]
    pub const fn seekable(&self) -> bool {
        self.seekable
    }

    pub(crate) fn set_readable(&mut self, readable: bool) {
        self.readable = readable;
    }

    pub(crate) fn set_writable(&mut self, writable: bool) {
        self.writable = writable;
    }

    pub(crate) fn set_seekable(&mut self, seekable: bool) {
        self.seekable = seekable;
    }
}

impl Default for Capabilities {
    /// Every capability enabled.
    fn default() -> Self {
        Self::new(true, true, true)
    }
}
