//! Command line interface for the Lumen toy
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs.

use crate::core::config_file::ConfigFile;
use crate::ui::theme::ThemeVariant;
use bevy::prelude::*;
use clap::Parser;

/// Lumen CLI arguments
///
/// Examples:
///   lumen                 # Plain white/black light switch
///   lumen --theme ember   # Warm palette
///   lumen --seed 7        # Reproducible snake geometry
///   lumen --new-config    # Write a starter settings file
#[derive(Parser, Debug, Resource, Clone)]
#[clap(
    name = "lumen",
    version,
    about = "A light-switch toy built with Rust and Bevy",
    long_about = "Lumen is a single-window toy: click (or press Space) to flip the light. Each flip plays an expanding flare and seven wandering snake strokes in the opposite color."
)]
pub struct CliArgs {
    /// Theme to use for the palette
    ///
    /// Available themes: mono (default), ember, aurora.
    #[clap(
        long = "theme",
        short = 't',
        help = "Theme to use",
        long_help = "Theme for the background/ink palette. Available themes: mono (default), ember, aurora"
    )]
    pub theme: Option<String>,

    /// Seed for the effect RNG
    ///
    /// The same seed replays the same family of snakes; without it the
    /// generator is seeded from entropy.
    #[clap(
        long = "seed",
        short = 's',
        help = "Seed the effect RNG for reproducible snakes",
        long_help = "Seed for the random generator behind the snake geometry. The same seed replays the same family of snakes on every trigger sequence; without it the generator is seeded from entropy."
    )]
    pub seed: Option<u64>,

    /// Initialize the user configuration directory
    ///
    /// Creates ~/.config/lumen/settings.json so the default theme and seed
    /// persist without command line arguments.
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with a settings file",
        long_help = "Create ~/.config/lumen/settings.json with the default theme and an empty seed. Preferences set there apply on every launch without command line arguments."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Provides a clear error message for unknown theme names before the
    /// window ever opens.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for WASM builds; arguments come from defaults there
        #[cfg(target_arch = "wasm32")]
        {
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(theme_name) = &self.theme {
                if ThemeVariant::parse(theme_name).is_none() {
                    let available_themes = ThemeVariant::all_names().join(", ");
                    return Err(format!(
                        "Unknown theme: '{theme_name}'\nAvailable themes: {available_themes}"
                    ));
                }
            }
            Ok(())
        }
    }

    /// Create default CLI args for web builds
    ///
    /// Command line arguments are not available in the browser environment.
    #[cfg(target_arch = "wasm32")]
    pub fn default_for_web() -> Self {
        Self {
            theme: None,
            seed: None,
            new_config: false,
        }
    }

    /// Get the theme variant from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--theme)
    /// 2. Config file setting (~/.config/lumen/settings.json)
    /// 3. Built-in default (mono)
    pub fn get_theme_variant(&self) -> ThemeVariant {
        if let Some(theme_name) = &self.theme {
            if let Some(variant) = ThemeVariant::parse(theme_name) {
                debug!("Using theme from CLI: {}", theme_name);
                return variant;
            }
        }

        if let Some(config) = ConfigFile::load() {
            if let Some(theme_name) = config.default_theme {
                if let Some(variant) = ThemeVariant::parse(&theme_name) {
                    debug!("Using theme from config file: {}", theme_name);
                    return variant;
                }
            }
        }

        debug!("Using default theme: mono");
        ThemeVariant::default()
    }

    /// Get the RNG seed from CLI args or the config file, if any
    pub fn get_seed(&self) -> Option<u64> {
        if self.seed.is_some() {
            return self.seed;
        }
        ConfigFile::load().and_then(|config| config.seed)
    }
}
