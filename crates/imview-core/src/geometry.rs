//! Canvas-space placement arithmetic: fit, zoom around a pivot, pan, and resize.
//!
//! Offsets are whole canvas pixels; the scale is a float. All functions are
//! pure so the GUI can stay a thin layer over them.

use tracing::debug;

/// A point in canvas pixels, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle in canvas pixels. `contains` is half-open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Placement of the displayed image on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl ViewState {
    /// Size of an image of `image_w x image_h` pixels at this scale.
    pub fn scaled_size(&self, image_w: u32, image_h: u32) -> (i32, i32) {
        scaled_dims(image_w, image_h, self.scale)
    }

    /// Bounding rectangle of the displayed image.
    pub fn placed_rect(&self, image_w: u32, image_h: u32) -> Rect {
        let (width, height) = self.scaled_size(image_w, image_h);
        Rect {
            x: self.offset_x,
            y: self.offset_y,
            width,
            height,
        }
    }

    /// Canvas point to image pixel coordinates (fractional).
    pub fn canvas_to_image(&self, p: Point) -> (f64, f64) {
        (
            (p.x - self.offset_x) as f64 / self.scale,
            (p.y - self.offset_y) as f64 / self.scale,
        )
    }
}

fn scaled_dims(image_w: u32, image_h: u32, scale: f64) -> (i32, i32) {
    (
        (image_w as f64 * scale).floor() as i32,
        (image_h as f64 * scale).floor() as i32,
    )
}

/// Scale and center an image so it fills the canvas on at least one axis.
///
/// Returns `None` when the image or canvas is degenerate.
pub fn fit_view(
    canvas: CanvasSize,
    image_w: u32,
    image_h: u32,
    max_scale: f64,
) -> Option<ViewState> {
    if image_w == 0 || image_h == 0 || canvas.is_empty() {
        return None;
    }

    let scale_w = canvas.width as f64 / image_w as f64;
    let scale_h = canvas.height as f64 / image_h as f64;
    let scale = scale_w.min(scale_h).min(max_scale);

    let (w, h) = scaled_dims(image_w, image_h, scale);
    if w <= 0 || h <= 0 {
        return None;
    }

    let view = ViewState {
        scale,
        offset_x: ((canvas.width as f64 - image_w as f64 * scale) / 2.0).floor() as i32,
        offset_y: ((canvas.height as f64 - image_h as f64 * scale) / 2.0).floor() as i32,
    };
    debug!(scale, x = view.offset_x, y = view.offset_y, "fit");
    Some(view)
}

/// Multiply the scale by `factor`, keeping the image point under `pivot` fixed.
///
/// The scale is capped at `max_scale`; when the cap bites, the offset uses the
/// factor that was actually applied. Returns `None` if the zoomed image would
/// collapse to zero pixels.
pub fn zoom_view(
    view: &ViewState,
    image_w: u32,
    image_h: u32,
    factor: f64,
    pivot: Point,
    max_scale: f64,
) -> Option<ViewState> {
    if !(factor > 0.0) || !(view.scale > 0.0) {
        return None;
    }

    let scale = (view.scale * factor).min(max_scale);
    let (w, h) = scaled_dims(image_w, image_h, scale);
    if w <= 0 || h <= 0 {
        return None;
    }

    let applied = scale / view.scale;
    let offset_x = pivot.x - ((pivot.x - view.offset_x) as f64 * applied).round() as i32;
    let offset_y = pivot.y - ((pivot.y - view.offset_y) as f64 * applied).round() as i32;

    debug!(scale, pivot_x = pivot.x, pivot_y = pivot.y, "zoom");
    Some(ViewState {
        scale,
        offset_x,
        offset_y,
    })
}

pub fn pan_view(view: &ViewState, dx: i32, dy: i32) -> ViewState {
    ViewState {
        offset_x: view.offset_x + dx,
        offset_y: view.offset_y + dy,
        ..*view
    }
}

/// Shift the view by half the change in canvas size, keeping the zoom level.
pub fn recenter_on_resize(view: &ViewState, old: CanvasSize, new: CanvasSize) -> ViewState {
    let dx = (new.width - old.width).div_euclid(2);
    let dy = (new.height - old.height).div_euclid(2);
    pan_view(view, dx, dy)
}
