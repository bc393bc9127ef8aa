//! Draw systems for the toggle effects
//!
//! The flare is a unit-circle mesh whose transform scale tracks the sampled
//! radius; snakes are gizmo line strips rebuilt every frame from the
//! currently visible slice of their path.

use crate::core::settings::LumenSettings;
use crate::effects::{EffectSet, FlareFx, SnakeFx, ViewBounds};
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;
use bevy::render::mesh::Mesh2d;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use bevy::window::PrimaryWindow;
use kurbo::Point;

pub struct EffectDrawPlugin;

impl Plugin for EffectDrawPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_gizmos)
            .add_systems(PreUpdate, sync_view_bounds)
            .add_systems(
                Update,
                (attach_flare_mesh, update_flare_visuals, draw_snakes)
                    .chain()
                    .after(EffectSet::Advance),
            );
    }
}

/// Snake strokes are drawn with gizmo line strips; set their width once.
fn configure_gizmos(mut gizmo_store: ResMut<GizmoConfigStore>, settings: Res<LumenSettings>) {
    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = settings.snake.stroke_width;
}

/// Mirrors the primary window size into [`ViewBounds`] so effect logic
/// never queries the window directly.
fn sync_view_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<ViewBounds>,
) {
    if let Ok(window) = windows.single() {
        let current = ViewBounds {
            width: window.width(),
            height: window.height(),
        };
        if *bounds != current {
            *bounds = current;
        }
    }
}

/// Gives every freshly spawned flare its mesh, material and transform.
fn attach_flare_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    new_flares: Query<(Entity, &FlareFx), Added<FlareFx>>,
) {
    for (entity, flare) in new_flares.iter() {
        let frame = flare.sample();
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.insert((
                Mesh2d(meshes.add(Circle::new(1.0))),
                MeshMaterial2d(materials.add(ColorMaterial::from(
                    flare.color.with_alpha(frame.alpha),
                ))),
                // Unit circle scaled to the sampled radius; zero scale makes
                // the mesh degenerate, so keep a floor.
                Transform::from_scale(Vec3::splat(frame.radius.max(f32::EPSILON))),
            ));
        }
    }
}

/// Tracks the sampled radius and opacity frame by frame.
fn update_flare_visuals(
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut flares: Query<(&FlareFx, &MeshMaterial2d<ColorMaterial>, &mut Transform)>,
) {
    for (flare, material_handle, mut transform) in &mut flares {
        let frame = flare.sample();
        transform.scale = Vec3::splat(frame.radius.max(f32::EPSILON));
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = flare.color.with_alpha(frame.alpha);
        }
    }
}

/// Strokes the visible slice of every snake.
fn draw_snakes(mut gizmos: Gizmos, snakes: Query<&SnakeFx>) {
    for snake in snakes.iter() {
        let (segment, alpha) = snake.visible_segment();
        if segment.len() < 2 || alpha <= 0.0 {
            continue;
        }
        let color = snake.color.with_alpha(alpha);
        gizmos.linestrip_2d(segment.points().iter().map(to_vec2), color);
    }
}

fn to_vec2(point: &Point) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}
