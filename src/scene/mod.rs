//! Visual tree model produced by scenes.

/// Straight-alpha colors.
pub mod color;
/// The scene contract and its per-frame context.
pub mod content;
/// Nodes, paints and trees.
pub mod visual;
