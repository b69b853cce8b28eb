//! Text tokenization and staggered reveals.

/// Staggered token reveals and approximate text metrics.
pub mod reveal;
/// Splitting text into chars, words or word groups.
pub mod tokenize;
