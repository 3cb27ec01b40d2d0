use bevy::{math::primitives::InfinitePlane3d, prelude::*, render::camera::ScalingMode};

use crate::constants::{CAMERA_DISTANCE, VIEW_HEIGHT};

#[derive(Component)]
pub struct EditorCamera;

/// Spawns an orthographic camera looking down -Z at the water plane, plus a
/// light so the surface is shaded.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Editor Camera"),
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        EditorCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Projects the cursor onto the plane `z = plane_z` and returns the XY hit.
pub fn cursor_on_plane(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    plane_z: f32,
) -> Option<Vec2> {
    let cursor = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    let distance = ray.intersect_plane(
        Vec3::new(0.0, 0.0, plane_z),
        InfinitePlane3d::new(Vec3::Z),
    )?;
    Some(ray.get_point(distance).truncate())
}
