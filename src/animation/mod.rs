//! Explicit animation timing
//!
//! Instead of handing the renderer a declarative timeline, effects carry
//! keyframe tracks and sample them per frame from elapsed time.

pub mod keyframes;

pub use keyframes::{ease_out, KeyframeTrack};
