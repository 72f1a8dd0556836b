/// Frame and camera tuning constants for the host side.
///
/// Keeps the key bindings and clamp limits in one place.
// Largest frame delta fed to the controller (seconds); longer stalls are clipped
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Camera
// Z distance of the orthographic eye above the fractal plane.
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Key bindings (names as reported by the host's keyboard events)
pub const KEY_ZOOM_IN: &str = "ArrowUp";
pub const KEY_ZOOM_OUT: &str = "ArrowDown";
pub const KEY_EXTENT_OUT: &str = "ArrowLeft";
pub const KEY_EXTENT_IN: &str = "ArrowRight";
pub const KEY_ITER_UP: &str = ",";
pub const KEY_ITER_DOWN: &str = ".";
pub const KEY_PAN_UP: &str = "w";
pub const KEY_PAN_DOWN: &str = "s";
pub const KEY_PAN_LEFT: &str = "a";
pub const KEY_PAN_RIGHT: &str = "d";
pub const KEY_QUIT: &str = "Escape";
