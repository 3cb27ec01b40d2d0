//! Bevy integration of the water surface.
//!
//! The core in `water_shared` builds the buffers; this module feeds them to
//! a mesh asset and a rapier sensor, and wires up the editor tooling.

pub mod collider;
pub mod gizmo;
pub mod inspector;
pub mod mesh_sink;

use bevy::{prelude::*, render::primitives::Aabb};
use bevy_rapier3d::prelude::Sensor;
use water_shared::{config::WaterConfig, water::InteractableWater};

use collider::{log_water_triggers, place_edge_collider_system};
use gizmo::{drag_corner_handles, draw_water_gizmos, HandleDrag};
use inspector::water_inspector_ui;
use mesh_sink::{water_mesh_to_bevy, AssetMeshSink};

/// Requests a full rebuild of a water surface mesh.
#[derive(Event, Debug, Clone, Copy)]
pub struct GenerateMeshEvent {
    pub entity: Entity,
}

/// Requests that the trigger segment be placed on a surface's top edge.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlaceEdgeColliderEvent {
    pub entity: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum WaterSet {
    /// Inspector and handle input, which emit rebuild requests
    Edit,
    /// Mesh and collider updates
    Apply,
    Draw,
}

pub struct WaterPlugin;

impl Plugin for WaterPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GenerateMeshEvent>()
            .add_event::<PlaceEdgeColliderEvent>()
            .init_resource::<WaterConfig>()
            .init_resource::<HandleDrag>()
            .configure_sets(
                Update,
                (WaterSet::Edit, WaterSet::Apply, WaterSet::Draw).chain(),
            )
            .add_systems(Startup, spawn_water)
            .add_systems(
                Update,
                (
                    (water_inspector_ui, drag_corner_handles)
                        .chain()
                        .in_set(WaterSet::Edit),
                    (generate_mesh_system, place_edge_collider_system, log_water_triggers)
                        .in_set(WaterSet::Apply),
                    draw_water_gizmos.in_set(WaterSet::Draw),
                ),
            );
    }
}

pub fn srgba(color: [f32; 4]) -> Color {
    Color::srgba(color[0], color[1], color[2], color[3])
}

fn water_material(color: [f32; 4]) -> StandardMaterial {
    StandardMaterial {
        base_color: srgba(color),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.2,
        // Faces wind clockwise as seen from the camera
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

fn spawn_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<WaterConfig>,
    mut place_collider: EventWriter<PlaceEdgeColliderEvent>,
) {
    let water = match InteractableWater::from_config(&config) {
        Ok(water) => water,
        Err(err) => {
            error!("Could not create water surface: {err}");
            return;
        }
    };

    let bounds = water.mesh().bounds;
    let mesh = meshes.add(water_mesh_to_bevy(water.mesh()));
    let material = materials.add(water_material(water.water_color));

    let entity = commands
        .spawn((
            Name::new("Interactable Water"),
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::default(),
            Aabb::from_min_max(bounds.min, bounds.max),
            Sensor,
            water,
        ))
        .id();

    info!("Spawned water surface {entity}");
    place_collider.write(PlaceEdgeColliderEvent { entity });
}

/// Rebuilds every surface that received a [`GenerateMeshEvent`] this frame.
///
/// Several requests for the same surface collapse into one rebuild.
fn generate_mesh_system(
    mut commands: Commands,
    mut events: EventReader<GenerateMeshEvent>,
    mut waters: Query<(
        &mut InteractableWater,
        &Mesh3d,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut pending: Vec<Entity> = events.read().map(|event| event.entity).collect();
    pending.sort();
    pending.dedup();

    for entity in pending {
        let Ok((mut water, mesh, material)) = waters.get_mut(entity) else {
            warn!("Ignoring mesh rebuild for {entity}: not a water surface");
            continue;
        };

        let bounds = match water.rebuild(AssetMeshSink::new(&mut meshes, &mesh.0)) {
            Ok(rebuilt) => rebuilt.bounds,
            Err(err) => {
                error!("Failed to generate water mesh for {entity}: {err}");
                continue;
            }
        };

        // Bevy does not recompute the culling box when a mesh asset changes
        commands
            .entity(entity)
            .insert(Aabb::from_min_max(bounds.min, bounds.max));

        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = srgba(water.water_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3A;
    use water_shared::{water::GridDimensions, DEFAULT_WATER_COLOR};

    fn rebuild_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .add_event::<GenerateMeshEvent>()
            .add_systems(Update, generate_mesh_system);
        app
    }

    fn spawn_surface(app: &mut App, water: InteractableWater) -> Entity {
        let world = app.world_mut();
        let mesh = world
            .resource_mut::<Assets<Mesh>>()
            .add(water_mesh_to_bevy(water.mesh()));
        let material = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(water_material(DEFAULT_WATER_COLOR));
        world
            .spawn((Mesh3d(mesh), MeshMaterial3d(material), water))
            .id()
    }

    #[test]
    fn repeated_requests_rebuild_mesh_bounds_and_material() {
        let mut app = rebuild_app();
        let mut water = InteractableWater::default();
        water
            .set_dimensions(GridDimensions::new(2.0, 6.0, 3).unwrap())
            .unwrap();
        water.water_color = [1.0, 0.0, 0.0, 1.0];
        let entity = spawn_surface(&mut app, water);

        app.world_mut().send_event(GenerateMeshEvent { entity });
        app.world_mut().send_event(GenerateMeshEvent { entity });
        app.update();

        let world = app.world();
        let water = world.get::<InteractableWater>(entity).unwrap();
        assert_eq!(water.mesh().positions.len(), 6);

        let mesh_handle = &world.get::<Mesh3d>(entity).unwrap().0;
        let mesh = world.resource::<Assets<Mesh>>().get(mesh_handle).unwrap();
        assert_eq!(mesh.count_vertices(), 6);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(12));

        let aabb = world.get::<Aabb>(entity).unwrap();
        assert_eq!(aabb.center, Vec3A::ZERO);
        assert_eq!(aabb.half_extents, Vec3A::new(1.0, 3.0, 0.0));

        let material_handle = &world
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .unwrap()
            .0;
        let material = world
            .resource::<Assets<StandardMaterial>>()
            .get(material_handle)
            .unwrap();
        assert_eq!(material.base_color, srgba([1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn request_for_other_entity_is_ignored() {
        let mut app = rebuild_app();
        let stray = app.world_mut().spawn(Name::new("Not water")).id();

        app.world_mut().send_event(GenerateMeshEvent { entity: stray });
        app.update();

        assert!(app.world().get::<Aabb>(stray).is_none());
    }
}
