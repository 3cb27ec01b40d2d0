use thiserror::Error;

/// Errors raised while building or querying a water surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaterError {
    #[error("invalid {name}: {value} (expected a finite value greater than zero)")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error(
        "invalid x resolution: {0} (a surface needs between 2 and {max} vertices per row)",
        max = crate::MAX_GRID_X_VERTICES
    )]
    InvalidResolution(u32),

    #[error("water mesh has no top edge to place a boundary on")]
    EmptyTopEdge,

    #[error("top edge references vertex {0}, which is not in the vertex buffer")]
    MissingVertex(u32),
}
