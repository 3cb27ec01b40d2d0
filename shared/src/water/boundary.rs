use bevy::math::Vec2;

use super::{WaterError, WaterMeshData};

/// Two-point trigger segment along the top of the water surface.
///
/// Only the two ends of the top edge are kept. The top row is a straight
/// line, so the segment covers the whole edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    pub start: Vec2,
    pub end: Vec2,
    /// Offset of the segment from the surface origin, always zero when
    /// produced by [`top_edge_segment`]
    pub offset: Vec2,
}

impl BoundarySegment {
    pub fn points(&self) -> [Vec2; 2] {
        [self.start + self.offset, self.end + self.offset]
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Extracts the trigger segment from the first and last top-edge vertices.
pub fn top_edge_segment(mesh: &WaterMeshData) -> Result<BoundarySegment, WaterError> {
    let (Some(&first), Some(&last)) = (mesh.top_edge.first(), mesh.top_edge.last()) else {
        return Err(WaterError::EmptyTopEdge);
    };

    Ok(BoundarySegment {
        start: vertex_xy(mesh, first)?,
        end: vertex_xy(mesh, last)?,
        offset: Vec2::ZERO,
    })
}

fn vertex_xy(mesh: &WaterMeshData, index: u32) -> Result<Vec2, WaterError> {
    mesh.positions
        .get(index as usize)
        .map(|p| Vec2::new(p[0], p[1]))
        .ok_or(WaterError::MissingVertex(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::{build_water_mesh, GridDimensions};

    #[test]
    fn segment_spans_top_edge() {
        let mesh = build_water_mesh(&GridDimensions::new(10.0, 4.0, 70).unwrap()).unwrap();
        let segment = top_edge_segment(&mesh).unwrap();

        assert_eq!(segment.start, Vec2::new(-5.0, 2.0));
        assert_eq!(segment.end, Vec2::new(5.0, 2.0));
        assert_eq!(segment.offset, Vec2::ZERO);
        assert_eq!(segment.points(), [Vec2::new(-5.0, 2.0), Vec2::new(5.0, 2.0)]);
        assert_eq!(segment.length(), 10.0);
    }

    #[test]
    fn empty_mesh_has_no_segment() {
        assert_eq!(
            top_edge_segment(&WaterMeshData::default()),
            Err(WaterError::EmptyTopEdge)
        );
    }

    #[test]
    fn dangling_top_edge_index_is_reported() {
        let mesh = WaterMeshData {
            positions: vec![[0.0, 0.0, 0.0]],
            top_edge: vec![0, 4],
            ..Default::default()
        };
        assert_eq!(top_edge_segment(&mesh), Err(WaterError::MissingVertex(4)));
    }
}
