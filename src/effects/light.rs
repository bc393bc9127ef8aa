//! Light state and trigger wiring
//!
//! The single piece of persistent state in the whole toy: is the light on?
//! A trigger flips it, swaps the background, and cascades to the flare and
//! snake spawners through the [`LightToggled`] event.

use crate::effects::EffectSet;
use crate::ui::theme::CurrentTheme;
use bevy::prelude::*;

/// Fired once per activation; flips the light and retriggers the effects.
#[derive(Event, Debug, Default)]
pub struct LightToggled;

/// Whether the light is on. Mutated only by [`toggle_light`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub on: bool,
}

impl LightState {
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self { on: true }
    }
}

pub struct LightPlugin;

impl Plugin for LightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightState>()
            .init_resource::<ClearColor>()
            .add_event::<LightToggled>()
            .configure_sets(
                Update,
                (EffectSet::Toggle, EffectSet::Spawn, EffectSet::Advance).chain(),
            )
            .add_systems(
                Update,
                (trigger_on_input, toggle_light)
                    .chain()
                    .in_set(EffectSet::Toggle),
            );
    }
}

/// The single trigger: left click or Space.
fn trigger_on_input(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut toggles: EventWriter<LightToggled>,
) {
    if keys.just_pressed(KeyCode::Space) || buttons.just_pressed(MouseButton::Left) {
        toggles.write(LightToggled);
    }
}

/// Flips the state and applies the background color for the new state.
fn toggle_light(
    mut toggles: EventReader<LightToggled>,
    mut light: ResMut<LightState>,
    theme: Res<CurrentTheme>,
    mut clear_color: ResMut<ClearColor>,
) {
    for _ in toggles.read() {
        light.toggle();
        clear_color.0 = theme.background(light.on);
        info!("light {}", if light.on { "on" } else { "off" });
    }
}
