//! Rendering and visualization
//!
//! Maps sampled effect values onto Bevy's 2D drawing layer:
//! - Camera management
//! - Flare mesh and snake line-strip drawing
//!
//! Effect logic never touches meshes or gizmos directly, so everything in
//! `crate::effects` stays headless-testable.

pub mod cameras;
pub mod draw;

pub use cameras::CameraPlugin;
pub use draw::EffectDrawPlugin;
