//! Procedural water surface.
//!
//! ## Layout
//! The surface is a strip of quads, two rows of `x_vertices` vertices each,
//! centered on the origin in the XY plane:
//!
//! ```text
//!  N ── N+1 ── N+2 ── ... ── 2N-1     top row (top edge)
//!  │  ╲  │  ╲  │           │
//!  0 ──  1 ──  2 ── ... ──  N-1       bottom row
//! ```
//!
//! The top row doubles as the boundary handed to the 2D trigger collider.

pub mod boundary;
pub mod dimensions;
pub mod error;
pub mod mesh;
pub mod resize;
pub mod sink;
pub mod surface;

pub use boundary::*;
pub use dimensions::*;
pub use error::*;
pub use mesh::*;
pub use resize::*;
pub use sink::*;
pub use surface::*;
