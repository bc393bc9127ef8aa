//! Geometry primitives for procedural paths

pub mod polyline;

pub use polyline::Polyline;
