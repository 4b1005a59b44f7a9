//! Domain entities.

mod stream_state;

pub use stream_state::StreamState;
