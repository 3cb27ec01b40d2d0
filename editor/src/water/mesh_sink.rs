use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::mesh::{Indices, PrimitiveTopology},
};
use water_shared::water::{MeshSink, WaterMeshData};

/// Converts water buffers into a Bevy triangle-list mesh.
pub fn water_mesh_to_bevy(data: &WaterMeshData) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, data.uvs.clone());
    mesh.insert_indices(Indices::U32(data.indices.clone()));
    mesh
}

/// Writes rebuilt water buffers over an existing mesh asset.
pub struct AssetMeshSink<'a> {
    meshes: &'a mut Assets<Mesh>,
    handle: &'a Handle<Mesh>,
}

impl<'a> AssetMeshSink<'a> {
    pub fn new(meshes: &'a mut Assets<Mesh>, handle: &'a Handle<Mesh>) -> Self {
        Self { meshes, handle }
    }
}

impl MeshSink for AssetMeshSink<'_> {
    fn apply_mesh(&mut self, data: &WaterMeshData) {
        match self.meshes.get_mut(self.handle) {
            Some(mesh) => *mesh = water_mesh_to_bevy(data),
            None => warn!("Water mesh asset {:?} is missing", self.handle.id()),
        }
    }
}
