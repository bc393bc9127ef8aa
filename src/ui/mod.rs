//! User-facing appearance

pub mod theme;

pub use theme::{CurrentTheme, ThemeVariant};
