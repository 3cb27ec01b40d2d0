use bevy::color::Color;

pub const WINDOW_TITLE: &str = "Interactable Water";

/// World units visible vertically through the orthographic editor camera.
pub const VIEW_HEIGHT: f32 = 12.0;
pub const CAMERA_DISTANCE: f32 = 10.0;

/// Edge length of the cube drawn at each corner handle.
pub const HANDLE_SIZE: f32 = 0.25;
/// How far from a corner a click still grabs its handle.
pub const HANDLE_PICK_RADIUS: f32 = 0.35;
pub const HANDLE_ACTIVE_COLOR: Color = Color::srgb(1.0, 0.8, 0.1);
