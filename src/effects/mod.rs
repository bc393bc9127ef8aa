//! Toggle-triggered visual effects
//!
//! This module contains the effect logic:
//! - Light state, trigger input and background swap
//! - Flare: an expanding, fading circle
//! - Snakes: wandering stroked polylines with a moving visible segment
//!
//! Effect systems only produce geometry and sampled animation values; the
//! systems in `crate::rendering` map them onto the drawing surface.

pub mod flare;
pub mod light;
pub mod snake;

// Re-export commonly used items
pub use flare::{FlareFx, FlarePlugin};
pub use light::{LightPlugin, LightState, LightToggled};
pub use snake::{SnakeFx, SnakePlugin};

use crate::core::settings::DEFAULT_WINDOW_SIZE;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Ordering of the effect systems within `Update`: flip the light first,
/// then replace the effect entities, then advance their clocks.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectSet {
    Toggle,
    Spawn,
    Advance,
}

/// Shared RNG behind all effect geometry.
///
/// Seeded from `--seed` (or the config file) for reproducible runs, from
/// entropy otherwise.
#[derive(Resource)]
pub struct EffectRng(pub StdRng);

impl EffectRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Current drawable size of the view, mirrored from the primary window.
///
/// Effect systems read this instead of querying the window so they also run
/// headless in tests.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewBounds {
    /// The larger of width and height; covers the view whatever the aspect
    /// ratio.
    pub fn max_dimension(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Half the larger dimension: how far a snake walks from the center.
    pub fn max_radius(&self) -> f32 {
        self.max_dimension() / 2.0
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_SIZE.0,
            height: DEFAULT_WINDOW_SIZE.1,
        }
    }
}
