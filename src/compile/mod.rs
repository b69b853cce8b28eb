/// Stable hashing of evaluated frames.
pub mod fingerprint;
