use crate::geometry::{CanvasSize, Point};

/// A straight grid line in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

impl GridLine {
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

/// Fixed-interval alignment grid. Lives in canvas space and does not follow
/// the image when it is panned or zoomed.
#[derive(Clone, Debug)]
pub struct Grid {
    visible: bool,
    interval: i32,
    lines: Vec<GridLine>,
}

impl Grid {
    pub fn new(interval: i32) -> Self {
        Self {
            visible: false,
            interval,
            lines: Vec::new(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Lines currently drawn; empty while hidden.
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn set_visible(&mut self, visible: bool, canvas: CanvasSize) {
        self.visible = visible;
        self.redraw(canvas);
    }

    pub fn toggle(&mut self, canvas: CanvasSize) -> bool {
        self.set_visible(!self.visible, canvas);
        self.visible
    }

    /// Drop the previous lines and lay out new ones for `canvas`.
    pub fn redraw(&mut self, canvas: CanvasSize) {
        self.lines.clear();
        if !self.visible || self.interval <= 0 || canvas.is_empty() {
            return;
        }

        let step = self.interval as usize;
        for x in (0..canvas.width).step_by(step) {
            self.lines.push(GridLine {
                from: Point::new(x, 0),
                to: Point::new(x, canvas.height),
            });
        }
        for y in (0..canvas.height).step_by(step) {
            self.lines.push(GridLine {
                from: Point::new(0, y),
                to: Point::new(canvas.width, y),
            });
        }
    }

    /// Whether `p` lies on a drawn grid line.
    pub fn is_on_line(&self, p: Point, canvas: CanvasSize) -> bool {
        if !self.visible || self.interval <= 0 {
            return false;
        }
        let inside = p.x >= 0 && p.y >= 0 && p.x < canvas.width && p.y < canvas.height;
        inside && (p.x % self.interval == 0 || p.y % self.interval == 0)
    }
}
