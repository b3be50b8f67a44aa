/// Upper bound on the display scale factor.
pub const MAX_SCALE: f64 = 100.0;

/// Spacing of the alignment grid, in canvas pixels.
pub const GRID_INTERVAL: i32 = 50;

/// Scale multiplier applied per wheel tick towards the user.
pub const ZOOM_IN_FACTOR: f64 = 1.25;

/// Scale multiplier applied per wheel tick away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// File extensions accepted by the open dialog and drag-and-drop.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["bmp", "png", "jpg", "tif"];

pub const APP_TITLE: &str = "Image Viewer";

/// Canvas background, Tk's `gray32`.
pub const CANVAS_BG_COLOR: [u8; 3] = [82, 82, 82];

pub const GRID_COLOR: [u8; 3] = [255, 0, 0];

/// Initial window width as a fraction of the screen width.
pub const WINDOW_WIDTH_FRACTION: f32 = 0.5;

/// Initial window height as a fraction of the screen height.
pub const WINDOW_HEIGHT_FRACTION: f32 = 0.7;

/// Vertical distance of the initial window from the top of the screen.
pub const WINDOW_Y_OFFSET: i32 = 50;
