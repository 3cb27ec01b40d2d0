//! Engine-agnostic core of the interactable water surface.
//!
//! Everything in here is plain data and pure functions: the grid mesh
//! builder, the top-edge boundary extraction, the corner-handle resize math
//! and the on-disk configuration. The editor crate plugs these into Bevy
//! through the [`water::MeshSink`] and [`water::BoundarySink`] traits.

pub mod config;
pub mod constants;
pub mod water;

pub use constants::*;
