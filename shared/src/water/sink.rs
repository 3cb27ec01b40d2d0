//! Seams between the water core and whatever consumes its output.
//!
//! A renderer receives the mesh buffers through [`MeshSink`]; a physics
//! backend receives the trigger segment through [`BoundarySink`]. The
//! in-memory sinks below back tests and headless callers.

use super::{BoundarySegment, WaterMeshData};

/// Consumer of freshly built mesh buffers.
pub trait MeshSink {
    fn apply_mesh(&mut self, mesh: &WaterMeshData);
}

/// Consumer of the two-point top-edge trigger segment.
pub trait BoundarySink {
    fn apply_boundary(&mut self, segment: BoundarySegment);
}

impl<T: MeshSink + ?Sized> MeshSink for &mut T {
    fn apply_mesh(&mut self, mesh: &WaterMeshData) {
        (**self).apply_mesh(mesh);
    }
}

impl<T: BoundarySink + ?Sized> BoundarySink for &mut T {
    fn apply_boundary(&mut self, segment: BoundarySegment) {
        (**self).apply_boundary(segment);
    }
}

/// Keeps a copy of the last mesh it was given.
#[derive(Debug, Default, Clone)]
pub struct WaterMeshBuffers {
    pub latest: Option<WaterMeshData>,
    /// Number of meshes received so far
    pub applied: usize,
}

impl MeshSink for WaterMeshBuffers {
    fn apply_mesh(&mut self, mesh: &WaterMeshData) {
        self.latest = Some(mesh.clone());
        self.applied += 1;
    }
}

/// Keeps the last boundary segment it was given.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordedBoundary {
    pub segment: Option<BoundarySegment>,
    pub applied: usize,
}

impl BoundarySink for RecordedBoundary {
    fn apply_boundary(&mut self, segment: BoundarySegment) {
        self.segment = Some(segment);
        self.applied += 1;
    }
}
