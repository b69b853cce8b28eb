//! Batch evaluation of frame ranges.

/// Chunked, optionally parallel frame evaluation.
pub mod pipeline;
