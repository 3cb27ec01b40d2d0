//! Grid mesh generation for the water surface.
//!
//! Buffers are rebuilt from scratch on every call. The output already
//! carries recomputed normals and bounds, so a sink can hand it straight to
//! a renderer without any extra processing.

use bevy::math::Vec3;

use super::{GridDimensions, WaterError};
use crate::Y_VERTICES;

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeshBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl MeshBounds {
    /// Computes the bounds of a vertex buffer. Empty buffers yield zero bounds.
    pub fn from_positions(positions: &[[f32; 3]]) -> Self {
        let mut iter = positions.iter().map(|p| Vec3::from_array(*p));
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(Self { min: first, max: first }, |bounds, p| Self {
            min: bounds.min.min(p),
            max: bounds.max.max(p),
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Generated water mesh data, ready to hand to a [`super::MeshSink`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WaterMeshData {
    /// Vertex positions, bottom row first, centered on the origin
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals averaged from adjacent faces
    pub normals: Vec<[f32; 3]>,
    /// UV coordinates, positions remapped into the unit square
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices, two triangles per quad
    pub indices: Vec<u32>,
    /// Indices of the top row, in increasing X
    pub top_edge: Vec<u32>,
    pub bounds: MeshBounds,
}

impl WaterMeshData {
    fn with_capacity(dimensions: &GridDimensions) -> Self {
        Self {
            positions: Vec::with_capacity(dimensions.vertex_count()),
            normals: Vec::with_capacity(dimensions.vertex_count()),
            uvs: Vec::with_capacity(dimensions.vertex_count()),
            indices: Vec::with_capacity(dimensions.index_count()),
            top_edge: Vec::with_capacity(dimensions.x_vertices as usize),
            bounds: MeshBounds::default(),
        }
    }

    /// Returns true if this mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Builds the grid mesh for the given dimensions.
///
/// Fails with [`WaterError`] when the resolution is below two or above
/// [`crate::MAX_GRID_X_VERTICES`], or either extent is not a positive finite
/// number. Nothing is allocated for rejected input.
pub fn build_water_mesh(dimensions: &GridDimensions) -> Result<WaterMeshData, WaterError> {
    dimensions.validate()?;

    let GridDimensions {
        width,
        height,
        x_vertices,
    } = *dimensions;
    let mut data = WaterMeshData::with_capacity(dimensions);

    for y in 0..Y_VERTICES {
        for x in 0..x_vertices {
            let x_pos = (x as f32 / (x_vertices - 1) as f32) * width - width / 2.0;
            let y_pos = (y as f32 / (Y_VERTICES - 1) as f32) * height - height / 2.0;
            data.positions.push([x_pos, y_pos, 0.0]);

            if y == Y_VERTICES - 1 {
                data.top_edge.push(y * x_vertices + x);
            }
        }
    }

    for y in 0..Y_VERTICES - 1 {
        for x in 0..x_vertices - 1 {
            let bottom_left = y * x_vertices + x;
            let bottom_right = bottom_left + 1;
            let top_left = bottom_left + x_vertices;
            let top_right = top_left + 1;

            data.indices
                .extend_from_slice(&[bottom_left, top_left, bottom_right]);
            data.indices
                .extend_from_slice(&[bottom_right, top_left, top_right]);
        }
    }

    data.uvs = data
        .positions
        .iter()
        .map(|p| [(p[0] + width / 2.0) / width, (p[1] + height / 2.0) / height])
        .collect();

    data.normals = recalculate_normals(&data.positions, &data.indices);
    data.bounds = MeshBounds::from_positions(&data.positions);

    Ok(data)
}

/// Computes smooth per-vertex normals by summing the face normals of every
/// triangle touching a vertex.
///
/// Indices outside the vertex buffer are skipped.
pub fn recalculate_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
        let (Some(pa), Some(pb), Some(pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        let (pa, pb, pc) = (Vec3::from_array(*pa), Vec3::from_array(*pb), Vec3::from_array(*pc));
        let face_normal = (pb - pa).cross(pc - pa);

        accumulated[a] += face_normal;
        accumulated[b] += face_normal;
        accumulated[c] += face_normal;
    }

    accumulated
        .into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(width: f32, height: f32, x_vertices: u32) -> WaterMeshData {
        build_water_mesh(&GridDimensions::new(width, height, x_vertices).unwrap()).unwrap()
    }

    #[test]
    fn default_surface_counts() {
        let mesh = build(10.0, 4.0, 70);

        assert_eq!(mesh.positions.len(), 140);
        assert_eq!(mesh.indices.len(), 414);
        assert_eq!(mesh.triangle_count(), 138);
        assert_eq!(mesh.top_edge, (70..140).collect::<Vec<u32>>());
        assert_eq!(mesh.uvs.len(), 140);
        assert_eq!(mesh.normals.len(), 140);
    }

    #[test]
    fn minimal_quad_layout() {
        let mesh = build(1.0, 1.0, 2);

        assert_eq!(
            mesh.positions,
            vec![
                [-0.5, -0.5, 0.0],
                [0.5, -0.5, 0.0],
                [-0.5, 0.5, 0.0],
                [0.5, 0.5, 0.0],
            ]
        );
        assert_eq!(mesh.indices, vec![0, 2, 1, 1, 2, 3]);
        assert_eq!(mesh.top_edge, vec![2, 3]);
        assert_eq!(
            mesh.uvs,
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
        );
    }

    #[test]
    fn counts_hold_across_resolutions() {
        for n in [2u32, 3, 7, 64, 500] {
            let mesh = build(3.5, 0.25, n);
            let n = n as usize;

            assert_eq!(mesh.positions.len(), 2 * n);
            assert_eq!(mesh.indices.len(), 6 * (n - 1));
            assert_eq!(mesh.top_edge.len(), n);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
            assert!(mesh.top_edge.windows(2).all(|w| w[0] < w[1]));
            for (i, &index) in mesh.top_edge.iter().enumerate() {
                assert_eq!(index as usize, n + i);
            }
        }
    }

    #[test]
    fn uvs_span_unit_square() {
        let mesh = build(7.3, 2.1, 33);

        for uv in &mesh.uvs {
            assert!((0.0..=1.0).contains(&uv[0]), "u out of range: {uv:?}");
            assert!((0.0..=1.0).contains(&uv[1]), "v out of range: {uv:?}");
        }
        assert_eq!(mesh.uvs[0], [0.0, 0.0]);
        assert_eq!(*mesh.uvs.last().unwrap(), [1.0, 1.0]);
    }

    #[test]
    fn bounds_span_the_rectangle() {
        let mesh = build(10.0, 4.0, 70);

        assert_eq!(mesh.bounds.min, Vec3::new(-5.0, -2.0, 0.0));
        assert_eq!(mesh.bounds.max, Vec3::new(5.0, 2.0, 0.0));
        assert_eq!(mesh.bounds.center(), Vec3::ZERO);
        assert_eq!(mesh.bounds.size(), Vec3::new(10.0, 4.0, 0.0));
    }

    #[test]
    fn normals_face_negative_z() {
        // Winding is clockwise when viewed from +Z.
        let mesh = build(2.0, 1.0, 5);
        for n in &mesh.normals {
            assert!(n[0].abs() < 1e-6 && n[1].abs() < 1e-6, "{n:?}");
            assert!((n[2] + 1.0).abs() < 1e-6, "{n:?}");
        }
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let dims = GridDimensions::new(6.7, 1.3, 91).unwrap();
        let a = build_water_mesh(&dims).unwrap();
        let b = build_water_mesh(&dims).unwrap();

        assert_eq!(a, b);
        let bits = |m: &WaterMeshData| {
            m.positions
                .iter()
                .flatten()
                .map(|f| f.to_bits())
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let too_coarse = GridDimensions {
            width: 1.0,
            height: 1.0,
            x_vertices: 1,
        };
        assert_eq!(
            build_water_mesh(&too_coarse),
            Err(WaterError::InvalidResolution(1))
        );

        let flat = GridDimensions {
            width: 1.0,
            height: 0.0,
            x_vertices: 4,
        };
        assert!(build_water_mesh(&flat).is_err());
    }

    #[test]
    fn oversized_resolution_is_rejected_before_allocating() {
        let huge = GridDimensions {
            width: 1.0,
            height: 1.0,
            x_vertices: u32::MAX,
        };
        assert_eq!(
            build_water_mesh(&huge),
            Err(WaterError::InvalidResolution(u32::MAX))
        );
    }

    #[test]
    fn bounds_of_empty_buffer_are_zero() {
        assert_eq!(MeshBounds::from_positions(&[]), MeshBounds::default());
    }

    #[test]
    fn normals_skip_out_of_range_indices() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = recalculate_normals(&positions, &[0, 1, 2, 0, 1, 9]);
        assert_eq!(normals, vec![[0.0, 0.0, 1.0]; 3]);
    }
}
