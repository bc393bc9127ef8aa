//! Lumen
pub mod animation;
pub mod core;
pub mod effects;
pub mod geometry;
pub mod rendering;
#[cfg(test)]
mod tests;
pub mod ui;
