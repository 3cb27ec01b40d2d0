use bevy::math::Vec2;
use bevy_ecs::component::Component;
use bevy_log::{debug, info};

use super::{
    build_water_mesh, top_edge_segment, BoundarySegment, BoundarySink, Corner, GridDimensions,
    MeshSink, WaterError, WaterMeshData, WaterRect,
};
use crate::config::WaterConfig;
use crate::{DEFAULT_GIZMO_COLOR, DEFAULT_WATER_COLOR};

/// A water surface: its dimensions, its colors and the mesh last built
/// from them.
///
/// Changing the dimensions does not touch the mesh; call
/// [`InteractableWater::rebuild`] to regenerate it.
#[derive(Component, Debug, Clone)]
pub struct InteractableWater {
    dimensions: GridDimensions,
    /// sRGBA color of the water material
    pub water_color: [f32; 4],
    /// RGBA color of the editor wireframe and handles
    pub gizmo_color: [f32; 4],
    mesh: WaterMeshData,
}

impl InteractableWater {
    /// Creates a surface and performs the initial build.
    pub fn new(dimensions: GridDimensions) -> Result<Self, WaterError> {
        let mesh = build_water_mesh(&dimensions)?;
        Ok(Self {
            dimensions,
            water_color: DEFAULT_WATER_COLOR,
            gizmo_color: DEFAULT_GIZMO_COLOR,
            mesh,
        })
    }

    pub fn from_config(config: &WaterConfig) -> Result<Self, WaterError> {
        let mut water = Self::new(config.dimensions())?;
        water.water_color = config.water_color;
        water.gizmo_color = config.gizmo_color;
        Ok(water)
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Mesh produced by the last successful build.
    #[inline]
    pub fn mesh(&self) -> &WaterMeshData {
        &self.mesh
    }

    pub fn set_dimensions(&mut self, dimensions: GridDimensions) -> Result<(), WaterError> {
        dimensions.validate()?;
        self.dimensions = dimensions;
        Ok(())
    }

    pub fn set_x_vertices(&mut self, x_vertices: u32) -> Result<(), WaterError> {
        self.set_dimensions(GridDimensions {
            x_vertices,
            ..self.dimensions
        })
    }

    /// Rebuilds the mesh from the current dimensions and hands it to `sink`.
    ///
    /// On failure the previous mesh is kept and the sink is not called.
    pub fn rebuild(&mut self, mut sink: impl MeshSink) -> Result<&WaterMeshData, WaterError> {
        self.mesh = build_water_mesh(&self.dimensions)?;
        debug!(
            "Rebuilt water mesh: {} vertices, {} indices ({} x {}, {} columns)",
            self.mesh.positions.len(),
            self.mesh.indices.len(),
            self.dimensions.width,
            self.dimensions.height,
            self.dimensions.x_vertices
        );
        sink.apply_mesh(&self.mesh);
        Ok(&self.mesh)
    }

    /// Places the trigger segment on the top edge of the last built mesh.
    pub fn reset_edge_collider(
        &self,
        mut sink: impl BoundarySink,
    ) -> Result<BoundarySegment, WaterError> {
        let segment = top_edge_segment(&self.mesh)?;
        info!(
            "Placing water edge collider from {} to {}",
            segment.start, segment.end
        );
        sink.apply_boundary(segment);
        Ok(segment)
    }

    /// The surface rectangle when its origin sits at `center`.
    pub fn rect(&self, center: Vec2) -> WaterRect {
        WaterRect::new(center, self.dimensions.width, self.dimensions.height)
    }

    /// Applies a corner drag and returns the new center of the surface.
    ///
    /// Only the dimensions change; the caller is expected to move its origin
    /// to the returned center and request a rebuild.
    pub fn resize_from_corner(
        &mut self,
        center: Vec2,
        corner: Corner,
        target: Vec2,
    ) -> Result<Vec2, WaterError> {
        let resized = self.rect(center).drag_corner(corner, target);
        self.set_dimensions(self.dimensions.with_extent(resized.width, resized.height))?;
        Ok(resized.center)
    }
}

impl Default for InteractableWater {
    fn default() -> Self {
        let dimensions = GridDimensions::default();
        Self {
            dimensions,
            water_color: DEFAULT_WATER_COLOR,
            gizmo_color: DEFAULT_GIZMO_COLOR,
            mesh: build_water_mesh(&dimensions).unwrap_or_default(),
        }
    }
}
