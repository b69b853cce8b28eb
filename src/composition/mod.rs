//! Timeline model and its builder.

/// Fluent timeline builder.
pub mod dsl;
/// Segments, transitions and the sequenced timeline.
pub mod model;
