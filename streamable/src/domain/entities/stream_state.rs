//! Stream state for tracking detachment.

/// The lifecycle state of a stream.
///
/// Streams only ever move from `Active` to `Detached`:
/// - Active: The stream has access to its data or resource
/// - Detached: The data or resource is gone, every gated operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    /// The stream can be read, written and positioned (subject to capabilities).
    #[default]
    Active,
    /// The stream has released its data or resource.
    Detached,
}

impl StreamState {
    /// Check if the stream is detached.
    #[inline]
    pub const fn is_detached(&self) -> bool {
        matches!(self, StreamState::Detached)
    }

    /// Check if the stream is active.
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, StreamState::Active)
    }

    /// Move to `Detached`. Returns `true` if this call made the transition.
    #[inline]
    pub fn detach(&mut self) -> bool {
        let was_active = self.is_active();
        *self = StreamState::Detached;
        was_active
    }
}
