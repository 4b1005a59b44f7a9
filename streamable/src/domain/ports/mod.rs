//! Ports - Interfaces the rest of the world programs against.

mod stream;

pub use stream::Stream;
