//! Domain layer - Pure stream types with no I/O of their own.
//!
//! The domain layer contains:
//! - **Entities**: Objects with a lifecycle (e.g., `StreamState`)
//! - **Value Objects**: Immutable validated data (e.g., `Whence`, `OpenMode`)
//! - **Ports**: The `Stream` contract implemented by the adapters
//! - **Domain Errors**: Contract violations and wrapped host failures
//!
//! # Layering
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Entities & Value Objects  │  │
//!     │  │  - StreamState, Whence     │  │
//!     │  │  - Capabilities, OpenMode  │  │
//!     │  └────────────────────────────┘  │
//!     │              │                   │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - Stream                │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - BufferStream                  │
//!     │  - FileStream                    │
//!     └──────────────────────────────────┘
//! ```

pub mod entities;
pub mod value_objects;
pub mod ports;
pub mod error;

pub use entities::StreamState;
pub use value_objects::{
    AccessKind, Capabilities, Metadata, MetadataValue, OpenMode, SEEK_CUR, SEEK_END, SEEK_SET,
    Whence,
};
pub use ports::Stream;
pub use error::StreamError;
