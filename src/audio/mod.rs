/// Audio cues and gain curves over the global frame.
pub mod gain;
