//! Infrastructure layer - Bridges from the stream adapters to other I/O ecosystems.

mod embedded_io_impl;
