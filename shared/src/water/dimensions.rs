use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::WaterError;
use crate::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X_VERTICES, MAX_GRID_X_VERTICES, MAX_X_VERTICES,
    MIN_EXTENT, MIN_X_VERTICES, Y_VERTICES,
};

/// Size and resolution of a water surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Extent along X in world units
    pub width: f32,
    /// Extent along Y in world units
    pub height: f32,
    /// Vertex count along X (per row)
    pub x_vertices: u32,
}

impl GridDimensions {
    /// Creates validated dimensions.
    pub fn new(width: f32, height: f32, x_vertices: u32) -> Result<Self, WaterError> {
        let dimensions = Self {
            width,
            height,
            x_vertices,
        };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Creates dimensions that are always valid by clamping every field.
    ///
    /// The resolution is clamped to the editor range and the extents to
    /// [`MIN_EXTENT`]. Non-finite extents collapse to the minimum.
    pub fn clamped(width: f32, height: f32, x_vertices: u32) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
            x_vertices: x_vertices.clamp(MIN_X_VERTICES, MAX_X_VERTICES),
        }
    }

    /// Checks that the resolution lies in `2..=MAX_GRID_X_VERTICES` and both
    /// extents are positive and finite.
    pub fn validate(&self) -> Result<(), WaterError> {
        if !(MIN_X_VERTICES..=MAX_GRID_X_VERTICES).contains(&self.x_vertices) {
            return Err(WaterError::InvalidResolution(self.x_vertices));
        }
        check_extent("width", self.width)?;
        check_extent("height", self.height)
    }

    /// Returns a copy with a new width and height, keeping the resolution.
    pub fn with_extent(self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.x_vertices as usize * Y_VERTICES as usize
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        (self.x_vertices.saturating_sub(1) as usize) * (Y_VERTICES as usize - 1) * 6
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x_vertices: DEFAULT_X_VERTICES,
        }
    }
}

fn check_extent(name: &'static str, value: f32) -> Result<(), WaterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WaterError::InvalidDimension { name, value })
    }
}

fn clamp_extent(value: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_EXTENT)
    } else {
        MIN_EXTENT
    }
}
