//! Wireframe and corner handles for resizing the water in the viewport.

use bevy::{prelude::*, window::PrimaryWindow};
use bevy_inspector_egui::bevy_egui::EguiContexts;
use water_shared::{
    water::{snap_to_grid, Corner, InteractableWater},
    GIZMO_DEPTH, HANDLE_SNAP,
};

use super::{srgba, GenerateMeshEvent};
use crate::camera::{cursor_on_plane, EditorCamera};
use crate::constants::{HANDLE_ACTIVE_COLOR, HANDLE_PICK_RADIUS, HANDLE_SIZE};

/// The corner handle currently held by the mouse, if any.
#[derive(Resource, Default, Debug)]
pub struct HandleDrag {
    pub active: Option<(Entity, Corner)>,
}

pub fn draw_water_gizmos(
    mut gizmos: Gizmos,
    waters: Query<(Entity, &InteractableWater, &Transform)>,
    drag: Res<HandleDrag>,
) {
    for (entity, water, transform) in waters.iter() {
        let color = srgba(water.gizmo_color);
        let dimensions = water.dimensions();

        gizmos.cuboid(
            Transform::from_translation(transform.translation).with_scale(Vec3::new(
                dimensions.width,
                dimensions.height,
                GIZMO_DEPTH,
            )),
            color,
        );

        let rect = water.rect(transform.translation.truncate());
        for corner in Corner::ALL {
            let handle_color = if drag.active == Some((entity, corner)) {
                HANDLE_ACTIVE_COLOR
            } else {
                color
            };
            gizmos.cuboid(
                Transform::from_translation(rect.corner(corner).extend(transform.translation.z))
                    .with_scale(Vec3::splat(HANDLE_SIZE)),
                handle_color,
            );
        }
    }
}

/// Grabs, drags and releases corner handles with the left mouse button.
///
/// Every handle move resizes the surface around the opposite corner and
/// requests a mesh rebuild.
pub fn drag_corner_handles(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    mut contexts: EguiContexts,
    mut waters: Query<(Entity, &mut InteractableWater, &mut Transform)>,
    mut drag: ResMut<HandleDrag>,
    mut generate: EventWriter<GenerateMeshEvent>,
) {
    if mouse.just_released(MouseButton::Left) {
        drag.active = None;
        return;
    }

    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single()) else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        // Clicks on the inspector window are not meant for the viewport
        if contexts.ctx_mut().is_pointer_over_area() {
            return;
        }

        drag.active = waters.iter().find_map(|(entity, water, transform)| {
            let cursor = cursor_on_plane(window, camera, camera_transform, transform.translation.z)?;
            water
                .rect(transform.translation.truncate())
                .pick_corner(cursor, HANDLE_PICK_RADIUS)
                .map(|corner| (entity, corner))
        });

        if let Some((entity, corner)) = drag.active {
            debug!("Grabbed {corner:?} handle of water {entity}");
        }
        return;
    }

    let Some((entity, corner)) = drag.active else {
        return;
    };
    if !mouse.pressed(MouseButton::Left) {
        drag.active = None;
        return;
    }

    let Ok((_, mut water, mut transform)) = waters.get_mut(entity) else {
        drag.active = None;
        return;
    };
    let Some(cursor) = cursor_on_plane(window, camera, camera_transform, transform.translation.z)
    else {
        return;
    };

    let target = snap_to_grid(cursor, HANDLE_SNAP);
    let center = transform.translation.truncate();
    let current = water.rect(center);
    if current.drag_corner(corner, target) == current {
        return;
    }

    match water.resize_from_corner(center, corner, target) {
        Ok(new_center) => {
            transform.translation.x = new_center.x;
            transform.translation.y = new_center.y;
            generate.write(GenerateMeshEvent { entity });
        }
        Err(err) => warn!("Rejected water resize: {err}"),
    }
}
