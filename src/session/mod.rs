/// Reels: timeline, underlay, audio cues and artifacts.
pub mod reel;
