//! Camera management

use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

/// A single 2D camera at the world origin; effects are centered on it.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
