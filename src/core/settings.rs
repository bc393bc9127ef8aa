//! Application settings and effect tuning
//!
//! All the numbers that shape the two effects live here so the systems
//! themselves stay free of magic constants.

use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Lumen";
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (512.0, 768.0);

/// Tuning for the expanding flare shown on each toggle.
#[derive(Clone, Debug)]
pub struct FlareSettings {
    /// Seconds from radius zero to full coverage
    pub duration: f32,
    /// Opacity at the start of the expansion; fades linearly to zero
    pub start_alpha: f32,
}

impl Default for FlareSettings {
    fn default() -> Self {
        Self {
            duration: 0.5,
            start_alpha: 0.5,
        }
    }
}

/// Tuning for the wandering snake strokes.
#[derive(Clone, Debug)]
pub struct SnakeSettings {
    /// How many snakes each toggle spawns
    pub count: usize,
    /// Radial step between consecutive path samples, in world units
    pub segment_length: f64,
    /// Arc length of the visible body once the head has grown out
    pub visible_length: f64,
    /// Amplitude of the sideways wave
    pub oscillation_amplitude: f64,
    /// Wave frequency relative to cumulative radial distance
    pub oscillation_frequency: f64,
    /// Maximum heading drift per step, in radians
    pub max_turn: f64,
    /// Seconds for the full grow/creep/fade cycle
    pub duration: f32,
    /// Normalized key times for the grow, creep and fade phases
    pub key_times: [f32; 3],
    /// Stroke width in pixels
    pub stroke_width: f32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            count: 7,
            segment_length: 5.0,
            visible_length: 200.0,
            oscillation_amplitude: 20.0,
            oscillation_frequency: 0.1,
            max_turn: 0.1,
            duration: 1.5,
            key_times: [0.0, 0.8, 1.0],
            stroke_width: 7.0,
        }
    }
}

/// Top-level settings resource.
#[derive(Resource, Clone, Debug, Default)]
pub struct LumenSettings {
    pub flare: FlareSettings,
    pub snake: SnakeSettings,
}
