//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::settings::{LumenSettings, DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use crate::effects::{EffectRng, FlarePlugin, LightPlugin, LightState, SnakePlugin, ViewBounds};
use crate::rendering::{CameraPlugin, EffectDrawPlugin};
use crate::ui::theme::CurrentTheme;
use anyhow::Result;
use bevy::app::{PluginGroup, PluginGroupBuilder};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Plugin group for effect logic
#[derive(Default)]
pub struct EffectsPluginGroup;

impl PluginGroup for EffectsPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(LightPlugin)
            .add(FlarePlugin)
            .add(SnakePlugin)
    }
}

/// Plugin group for rendering functionality
#[derive(Default)]
pub struct RenderingPluginGroup;

impl PluginGroup for RenderingPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(CameraPlugin)
            .add(EffectDrawPlugin)
    }
}

/// Creates a fully configured Bevy application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    #[cfg(not(target_arch = "wasm32"))]
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {e}"))?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args);
    configure_window_plugins(&mut app);
    app.add_plugins((EffectsPluginGroup, RenderingPluginGroup));
    app.add_systems(Update, exit_on_esc);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, cli_args: CliArgs) {
    let current_theme = CurrentTheme::new(cli_args.get_theme_variant());
    let light = LightState::default();
    let background_color = current_theme.background(light.on);
    let rng = match cli_args.get_seed() {
        Some(seed) => {
            info!("Seeding effect RNG with {}", seed);
            EffectRng::seeded(seed)
        }
        None => EffectRng::from_entropy(),
    };

    app.insert_resource(cli_args)
        .insert_resource(current_theme)
        .insert_resource(light)
        .insert_resource(rng)
        .init_resource::<LumenSettings>()
        .init_resource::<ViewBounds>()
        .insert_resource(ClearColor(background_color));

    // The effects animate every frame; reactive low-power update modes
    // would freeze them between input events.
    app.insert_resource(WinitSettings::game());
}

/// Configure logging with performance optimization for release builds
fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        // Debug builds: detailed app logging, quiet graphics stack
        LogPlugin {
            level: Level::INFO,
            filter: "lumen=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn".to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: warnings and errors only
        LogPlugin {
            level: Level::WARN,
            filter: "lumen=warn,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Configure window and default plugins with platform-specific settings
fn configure_window_plugins(app: &mut App) {
    let window_config = Window {
        title: WINDOW_TITLE.to_string(),
        resolution: DEFAULT_WINDOW_SIZE.into(),
        ..default()
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config),
                    ..default()
                })
                .set(configure_logging()),
        );
    }

    #[cfg(target_arch = "wasm32")]
    {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..window_config
                    }),
                    ..default()
                })
                .set(configure_logging()),
        );
    }
}

/// Quit on Escape.
fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
