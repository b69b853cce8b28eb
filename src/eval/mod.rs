/// Frame resolution and per-frame evaluation.
pub mod evaluator;
