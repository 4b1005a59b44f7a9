//! Value objects - Immutable validated data.

mod capabilities;
mod metadata;
mod open_mode;
mod whence;

pub use capabilities::Capabilities;
pub use metadata::{Metadata, MetadataValue};
pub use open_mode::{AccessKind, OpenMode};
pub use whence::{SEEK_CUR, SEEK_END, SEEK_SET, Whence};
