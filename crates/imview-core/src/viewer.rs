//! The viewer model: one image, its placement on the canvas, the grid, and
//! the two gesture state machines that turn pointer input into pan and zoom.
//!
//! Event entry points return `true` when the placement or grid changed and
//! the canvas needs repainting.

use std::path::Path;

use tracing::debug;

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::geometry::{self, CanvasSize, Point, Rect, ViewState};
use crate::gesture::{ArmTrigger, DragState, HitTarget, PointerButton, WheelDirection, ZoomArm};
use crate::grid::{Grid, GridLine};
use crate::io::image_io::{load_image, Image};

/// Where the image sits on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    pub rect: Rect,
    pub scale: f64,
}

/// Everything needed to paint one frame.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    pub canvas: CanvasSize,
    pub image: Option<ImagePlacement>,
    pub grid: &'a [GridLine],
}

pub struct Viewer {
    config: ViewerConfig,
    extensions: Vec<String>,
    image: Option<Image>,
    canvas: Option<CanvasSize>,
    view: ViewState,
    grid: Grid,
    drag: DragState,
    zoom_arm: ZoomArm,
    /// The last image could not be fitted yet (no canvas, or a degenerate one).
    fit_pending: bool,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            extensions: config.normalized_extensions(),
            grid: Grid::new(config.grid_interval),
            config,
            image: None,
            canvas: None,
            view: ViewState::default(),
            drag: DragState::Idle,
            zoom_arm: ZoomArm::Unarmed,
            fit_pending: false,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn canvas(&self) -> Option<CanvasSize> {
        self.canvas
    }

    pub fn grid_visible(&self) -> bool {
        self.grid.visible()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn zoom_arm(&self) -> ZoomArm {
        self.zoom_arm
    }

    /// Decode `path` and show it fitted. On error nothing changes.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let image = load_image(path, &self.extensions)?;
        self.set_image(image);
        Ok(())
    }

    /// Replace the current image and fit it to the canvas.
    pub fn set_image(&mut self, image: Image) {
        self.image = Some(image);
        self.view = ViewState::default();
        self.drag = DragState::Idle;
        self.fit_pending = !self.fit();
    }

    pub fn fit(&mut self) -> bool {
        let (Some(image), Some(canvas)) = (&self.image, self.canvas) else {
            return false;
        };
        match geometry::fit_view(canvas, image.width(), image.height(), self.config.max_scale) {
            Some(view) => {
                self.view = view;
                self.fit_pending = false;
                true
            }
            None => false,
        }
    }

    pub fn zoom_at(&mut self, factor: f64, pivot: Point) -> bool {
        let Some(image) = &self.image else {
            return false;
        };
        match geometry::zoom_view(
            &self.view,
            image.width(),
            image.height(),
            factor,
            pivot,
            self.config.max_scale,
        ) {
            Some(view) => {
                self.view = view;
                true
            }
            None => false,
        }
    }

    /// Move the image by `(dx, dy)`. Only honoured during a drag that began on the image.
    pub fn pan_by(&mut self, dx: i32, dy: i32) -> bool {
        if self.image.is_none() || !self.drag.is_dragging() {
            return false;
        }
        if dx == 0 && dy == 0 {
            return false;
        }
        self.view = geometry::pan_view(&self.view, dx, dy);
        true
    }

    pub fn set_grid_visible(&mut self, visible: bool) -> bool {
        self.grid.set_visible(visible, self.canvas.unwrap_or_default());
        true
    }

    /// Flip grid visibility and return the new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.grid.toggle(self.canvas.unwrap_or_default())
    }

    /// The image wins over the grid whenever the point is inside its rectangle.
    pub fn hit_test(&self, p: Point) -> HitTarget {
        if let Some(placement) = self.placement() {
            if placement.rect.contains(p) {
                return HitTarget::Image;
            }
        }
        if let Some(canvas) = self.canvas {
            if self.grid.is_on_line(p, canvas) {
                return HitTarget::Grid;
            }
        }
        HitTarget::None
    }

    pub fn on_canvas_resize(&mut self, size: CanvasSize) -> bool {
        let previous = self.canvas.replace(size);
        if previous == Some(size) {
            return false;
        }

        match previous {
            Some(old) if self.image.is_some() && !self.fit_pending => {
                self.view = geometry::recenter_on_resize(&self.view, old, size);
            }
            _ => {
                if self.fit_pending {
                    self.fit();
                }
            }
        }
        self.grid.redraw(size);
        true
    }

    pub fn pointer_down(&mut self, button: PointerButton, p: Point) -> bool {
        let on_image = self.hit_test(p) == HitTarget::Image;
        match button {
            PointerButton::Primary => {
                self.drag = if on_image {
                    DragState::Dragging { last: p }
                } else {
                    DragState::Idle
                };
            }
            PointerButton::Secondary => {
                if on_image && !self.zoom_arm.is_armed() {
                    self.zoom_arm = ZoomArm::Armed(ArmTrigger::RightButton);
                }
            }
            PointerButton::Middle => {}
        }
        false
    }

    pub fn pointer_up(&mut self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.drag = DragState::Idle,
            PointerButton::Secondary => {
                self.zoom_arm.release(ArmTrigger::RightButton);
            }
            PointerButton::Middle => {}
        }
        false
    }

    pub fn pointer_move(&mut self, p: Point) -> bool {
        let DragState::Dragging { last } = self.drag else {
            return false;
        };
        let moved = self.pan_by(p.x - last.x, p.y - last.y);
        self.drag = DragState::Dragging { last: p };
        moved
    }

    /// The zoom modifier went down with the pointer at `p`.
    pub fn modifier_down(&mut self, p: Point) -> bool {
        if !self.zoom_arm.is_armed() && self.hit_test(p) == HitTarget::Image {
            self.zoom_arm = ZoomArm::Armed(ArmTrigger::Modifier);
        }
        false
    }

    pub fn modifier_up(&mut self) -> bool {
        self.zoom_arm.release(ArmTrigger::Modifier);
        false
    }

    pub fn wheel(&mut self, direction: WheelDirection, p: Point) -> bool {
        if !self.zoom_arm.is_armed() {
            debug!("wheel ignored, zoom not armed");
            return false;
        }
        self.zoom_at(direction.zoom_factor(&self.config), p)
    }

    pub fn double_click(&mut self, p: Point) -> bool {
        if self.hit_test(p) != HitTarget::Image {
            return false;
        }
        self.fit()
    }

    /// Current image rectangle, if an image is shown.
    pub fn placement(&self) -> Option<ImagePlacement> {
        let image = self.image.as_ref()?;
        if self.canvas.is_none() {
            return None;
        }
        let rect = self.view.placed_rect(image.width(), image.height());
        if rect.width <= 0 || rect.height <= 0 {
            return None;
        }
        Some(ImagePlacement {
            rect,
            scale: self.view.scale,
        })
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            canvas: self.canvas.unwrap_or_default(),
            image: self.placement(),
            grid: self.grid.lines(),
        }
    }
}
