//! Flare effect: an expanding, fading circle on each toggle
//!
//! The flare grows from radius zero to the full view dimension with an
//! ease-out curve while its opacity fades linearly, all within half a
//! second. At most one flare is alive; a new trigger replaces the old one.

use crate::animation::keyframes::ease_out;
use crate::core::settings::LumenSettings;
use crate::effects::{EffectSet, LightState, LightToggled, ViewBounds};
use crate::ui::theme::CurrentTheme;
use bevy::prelude::*;

/// One frame of sampled flare values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlareFrame {
    pub radius: f32,
    pub alpha: f32,
}

/// An in-flight flare animation: timing and sampled geometry only, the
/// renderer owns the mesh.
#[derive(Component, Debug, Clone)]
pub struct FlareFx {
    pub color: Color,
    elapsed: f32,
    duration: f32,
    end_radius: f32,
    start_alpha: f32,
}

impl FlareFx {
    pub fn new(color: Color, duration: f32, end_radius: f32, start_alpha: f32) -> Self {
        Self {
            color,
            elapsed: 0.0,
            duration,
            end_radius,
            start_alpha,
        }
    }

    pub fn end_radius(&self) -> f32 {
        self.end_radius
    }

    /// Normalized progress, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Sample the current radius and opacity.
    ///
    /// The radius eases out toward `end_radius` and is non-decreasing in
    /// elapsed time; the opacity fades linearly from `start_alpha` to zero.
    pub fn sample(&self) -> FlareFrame {
        let t = self.progress();
        FlareFrame {
            radius: self.end_radius * ease_out(t),
            alpha: self.start_alpha * (1.0 - t),
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub struct FlarePlugin;

impl Plugin for FlarePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_flare.in_set(EffectSet::Spawn),
                advance_flares.in_set(EffectSet::Advance),
            ),
        );
    }
}

/// Replaces the previous flare with a fresh one on every toggle.
fn spawn_flare(
    mut commands: Commands,
    mut toggles: EventReader<LightToggled>,
    existing: Query<Entity, With<FlareFx>>,
    light: Res<LightState>,
    theme: Res<CurrentTheme>,
    settings: Res<LumenSettings>,
    bounds: Res<ViewBounds>,
) {
    if toggles.is_empty() {
        return;
    }
    toggles.clear();

    for entity in existing.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }

    commands.spawn(FlareFx::new(
        theme.ink(light.on),
        settings.flare.duration,
        bounds.max_dimension(),
        settings.flare.start_alpha,
    ));
}

/// Advances flare clocks and removes finished ones.
fn advance_flares(
    mut commands: Commands,
    time: Res<Time>,
    mut flares: Query<(Entity, &mut FlareFx)>,
) {
    for (entity, mut flare) in &mut flares {
        flare.advance(time.delta_secs());
        if flare.finished() {
            if let Ok(mut entity_commands) = commands.get_entity(entity) {
                entity_commands.despawn();
            }
        }
    }
}
