//! Color themes
//!
//! A theme supplies two background/ink pairs, one for each light state;
//! toggling twice always returns to the original pair. `mono` is the plain
//! white/black original, the others recolor the effect without changing it.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Mono,
    Ember,
    Aurora,
}

impl ThemeVariant {
    /// Parse a theme name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mono" => Some(Self::Mono),
            "ember" => Some(Self::Ember),
            "aurora" => Some(Self::Aurora),
            _ => None,
        }
    }

    /// All valid theme names, for CLI error messages.
    pub fn all_names() -> Vec<&'static str> {
        vec!["mono", "ember", "aurora"]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Ember => "ember",
            Self::Aurora => "aurora",
        }
    }

    /// The color pairs for this variant.
    pub fn palette(&self) -> Palette {
        match self {
            Self::Mono => Palette {
                lit_background: Color::srgb(1.0, 1.0, 1.0),
                unlit_background: Color::srgb(0.0, 0.0, 0.0),
                lit_ink: Color::srgb(0.0, 0.0, 0.0),
                unlit_ink: Color::srgb(1.0, 1.0, 1.0),
            },
            Self::Ember => Palette {
                lit_background: Color::srgb(1.0, 0.96, 0.9),
                unlit_background: Color::srgb(0.08, 0.04, 0.02),
                lit_ink: Color::srgb(0.55, 0.12, 0.02),
                unlit_ink: Color::srgb(1.0, 0.6, 0.2),
            },
            Self::Aurora => Palette {
                lit_background: Color::srgb(0.92, 0.98, 1.0),
                unlit_background: Color::srgb(0.01, 0.03, 0.08),
                lit_ink: Color::srgb(0.0, 0.35, 0.45),
                unlit_ink: Color::srgb(0.4, 1.0, 0.8),
            },
        }
    }
}

/// Background and ink colors for both light states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub lit_background: Color,
    pub unlit_background: Color,
    pub lit_ink: Color,
    pub unlit_ink: Color,
}

/// The active theme, selected at startup from CLI args or the config file.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CurrentTheme {
    variant: ThemeVariant,
}

impl CurrentTheme {
    pub fn new(variant: ThemeVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Background color for the given light state.
    pub fn background(&self, lit: bool) -> Color {
        let palette = self.variant.palette();
        if lit {
            palette.lit_background
        } else {
            palette.unlit_background
        }
    }

    /// Stroke/fill color for the given light state; always contrasts with
    /// the background.
    pub fn ink(&self, lit: bool) -> Color {
        let palette = self.variant.palette();
        if lit {
            palette.lit_ink
        } else {
            palette.unlit_ink
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ThemeVariant::all_names() {
            let variant = ThemeVariant::parse(name).unwrap();
            assert_eq!(variant.name(), name);
        }
        assert_eq!(ThemeVariant::parse("MONO"), Some(ThemeVariant::Mono));
        assert_eq!(ThemeVariant::parse("neon"), None);
    }

    #[test]
    fn ink_differs_from_background_in_both_states() {
        for name in ThemeVariant::all_names() {
            let theme = CurrentTheme::new(ThemeVariant::parse(name).unwrap());
            for lit in [true, false] {
                assert_ne!(theme.background(lit), theme.ink(lit));
            }
        }
    }

    #[test]
    fn mono_matches_the_original_pairs() {
        let theme = CurrentTheme::default();
        assert_eq!(theme.background(true), Color::srgb(1.0, 1.0, 1.0));
        assert_eq!(theme.ink(true), Color::srgb(0.0, 0.0, 0.0));
        assert_eq!(theme.background(false), Color::srgb(0.0, 0.0, 0.0));
        assert_eq!(theme.ink(false), Color::srgb(1.0, 1.0, 1.0));
    }
}
