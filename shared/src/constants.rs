/// Number of vertices along the X axis of a freshly created surface.
pub const DEFAULT_X_VERTICES: u32 = 70;
pub const DEFAULT_WIDTH: f32 = 10.0;
pub const DEFAULT_HEIGHT: f32 = 4.0;

/// Bounds of the X resolution exposed to editing tools.
pub const MIN_X_VERTICES: u32 = 2;
pub const MAX_X_VERTICES: u32 = 500;
/// Hard ceiling on the X resolution accepted by the mesh builder. Keeps
/// every vertex and index count well inside `u32` and the buffers allocatable.
pub const MAX_GRID_X_VERTICES: u32 = 1 << 20;

/// The surface only ever has a bottom and a top row.
pub const Y_VERTICES: u32 = 2;

/// Smallest width or height the resize handles can produce.
pub const MIN_EXTENT: f32 = 0.1;
/// Grid the corner handles snap to while dragging.
pub const HANDLE_SNAP: f32 = 0.1;
/// Depth of the wireframe box drawn around the surface.
pub const GIZMO_DEPTH: f32 = 0.1;

pub const DEFAULT_GIZMO_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const DEFAULT_WATER_COLOR: [f32; 4] = [0.2, 0.45, 0.85, 0.7];

pub const CONFIG_FILE_NAME: &str = "water.ron";
pub const CONFIG_LOAD_ERROR: &str = "Failed to load water configuration";
pub const CONFIG_WRITE_ERROR: &str = "Failed to write water configuration";
