use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiContexts;
use egui::RichText;
use water_shared::{
    water::InteractableWater, HANDLE_SNAP, MAX_X_VERTICES, MIN_EXTENT, MIN_X_VERTICES,
};

use super::{GenerateMeshEvent, PlaceEdgeColliderEvent};

/// What the user asked for through the inspector this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct InspectorActions {
    generate_mesh: bool,
    place_edge_collider: bool,
}

pub fn water_inspector_ui(
    mut contexts: EguiContexts,
    mut waters: Query<(Entity, &mut InteractableWater)>,
    mut generate: EventWriter<GenerateMeshEvent>,
    mut place_collider: EventWriter<PlaceEdgeColliderEvent>,
) {
    egui::Window::new("Water")
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            for (entity, mut water) in waters.iter_mut() {
                let actions = ui.push_id(entity, |ui| water_section(ui, &mut water)).inner;

                if actions.generate_mesh {
                    generate.write(GenerateMeshEvent { entity });
                }
                if actions.place_edge_collider {
                    place_collider.write(PlaceEdgeColliderEvent { entity });
                }
            }
        });
}

fn water_section(ui: &mut egui::Ui, water: &mut InteractableWater) -> InspectorActions {
    let mut actions = InspectorActions::default();
    let mut dimensions = water.dimensions();

    ui.label(RichText::new("Mesh Generation").strong());
    let mut changed = ui
        .add(
            egui::Slider::new(&mut dimensions.x_vertices, MIN_X_VERTICES..=MAX_X_VERTICES)
                .text("X vertices"),
        )
        .changed();
    changed |= ui
        .add(
            egui::DragValue::new(&mut dimensions.width)
                .speed(HANDLE_SNAP)
                .range(MIN_EXTENT..=f32::MAX)
                .prefix("Width: "),
        )
        .changed();
    changed |= ui
        .add(
            egui::DragValue::new(&mut dimensions.height)
                .speed(HANDLE_SNAP)
                .range(MIN_EXTENT..=f32::MAX)
                .prefix("Height: "),
        )
        .changed();
    ui.horizontal(|ui| {
        ui.label("Water material");
        changed |= ui
            .color_edit_button_rgba_unmultiplied(&mut water.water_color)
            .changed();
    });

    ui.separator();
    ui.label(RichText::new("Gizmo").strong());
    ui.horizontal(|ui| {
        ui.label("Gizmo color");
        ui.color_edit_button_rgba_unmultiplied(&mut water.gizmo_color);
    });

    if changed {
        match water.set_dimensions(dimensions) {
            Ok(()) => actions.generate_mesh = true,
            Err(err) => warn!("Rejected water dimensions: {err}"),
        }
    }

    ui.add_space(10.0);
    if ui.button("Generate Mesh").clicked() {
        actions.generate_mesh = true;
    }
    if ui.button("Place Edge Collider").clicked() {
        actions.place_edge_collider = true;
    }

    actions
}
