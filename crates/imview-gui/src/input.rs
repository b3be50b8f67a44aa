use imview_core::config::ModifierKey;
use imview_core::geometry::Point;
use imview_core::gesture::{PointerButton, WheelDirection};
use imview_core::viewer::Viewer;

use crate::shortcuts::modifier_held;

/// Scroll distance in points that counts as one wheel tick.
const POINTS_PER_TICK: f32 = 50.0;

/// Turns raw egui events over the canvas into viewer gesture calls.
#[derive(Default)]
pub struct CanvasInput {
    modifier_down: bool,
    wheel: WheelTicks,
}

/// Turns scroll deltas into zoom ticks. Line and page scrolling is one tick
/// per event; pixel-precise scrolling (trackpads) adds up to whole ticks.
#[derive(Default)]
struct WheelTicks {
    pending: f32,
}

impl WheelTicks {
    fn feed(&mut self, unit: egui::MouseWheelUnit, dy: f32) -> Option<WheelDirection> {
        match unit {
            egui::MouseWheelUnit::Point => {
                if self.pending * dy < 0.0 {
                    self.pending = 0.0;
                }
                self.pending += dy;
                if self.pending.abs() < POINTS_PER_TICK {
                    return None;
                }
                let direction = WheelDirection::from_delta(self.pending);
                self.pending = 0.0;
                direction
            }
            egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => {
                self.pending = 0.0;
                WheelDirection::from_delta(dy)
            }
        }
    }

    fn reset(&mut self) {
        self.pending = 0.0;
    }
}

impl CanvasInput {
    /// Feed this frame's events to the viewer. Returns true if the view changed.
    pub fn process(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewer: &mut Viewer,
        zoom_modifier: ModifierKey,
    ) -> bool {
        let rect = response.rect;
        let to_canvas = |pos: egui::Pos2| {
            let local = pos - rect.min;
            Point::new(local.x.floor() as i32, local.y.floor() as i32)
        };
        let (events, modifiers, hover) =
            ui.input(|i| (i.events.clone(), i.modifiers, i.pointer.hover_pos()));

        let mut changed = false;

        let held = modifier_held(zoom_modifier, modifiers);
        if held != self.modifier_down {
            self.modifier_down = held;
            if held {
                if let Some(pos) = hover.filter(|p| rect.contains(*p)) {
                    viewer.modifier_down(to_canvas(pos));
                }
            } else {
                viewer.modifier_up();
            }
        }

        for event in &events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let Some(button) = map_button(*button) else {
                        continue;
                    };
                    if !*pressed {
                        changed |= viewer.pointer_up(button);
                    } else if rect.contains(*pos) && response.contains_pointer() {
                        changed |= viewer.pointer_down(button, to_canvas(*pos));
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    changed |= viewer.pointer_move(to_canvas(*pos));
                }
                egui::Event::MouseWheel { unit, delta, .. } => {
                    let hovered = hover.filter(|p| rect.contains(*p));
                    let Some(pos) = hovered.filter(|_| viewer.zoom_arm().is_armed()) else {
                        self.wheel.reset();
                        continue;
                    };
                    if let Some(direction) = self.wheel.feed(*unit, delta.y) {
                        changed |= viewer.wheel(direction, to_canvas(pos));
                    }
                }
                egui::Event::WindowFocused(false) => {
                    // Releases may never arrive once focus is gone.
                    viewer.pointer_up(PointerButton::Primary);
                    viewer.pointer_up(PointerButton::Secondary);
                    viewer.modifier_up();
                    self.modifier_down = false;
                    self.wheel.reset();
                }
                _ => {}
            }
        }

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                changed |= viewer.double_click(to_canvas(pos));
            }
        }

        changed
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scroll_is_one_tick_per_event() {
        let mut ticks = WheelTicks::default();
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Line, 1.0), Some(WheelDirection::Up));
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Line, -3.0), Some(WheelDirection::Down));
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Page, 0.0), None);
    }

    #[test]
    fn test_point_scroll_accumulates() {
        let mut ticks = WheelTicks::default();
        let fired: Vec<_> = (0..20)
            .filter_map(|_| ticks.feed(egui::MouseWheelUnit::Point, 5.0))
            .collect();
        // 100 points of scrolling make two ticks, not twenty.
        assert_eq!(fired, vec![WheelDirection::Up, WheelDirection::Up]);
    }

    #[test]
    fn test_point_scroll_reversal_starts_over() {
        let mut ticks = WheelTicks::default();
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Point, 40.0), None);
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Point, -20.0), None);
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Point, -30.0), Some(WheelDirection::Down));
    }

    #[test]
    fn test_reset_drops_partial_scroll() {
        let mut ticks = WheelTicks::default();
        ticks.feed(egui::MouseWheelUnit::Point, 45.0);
        ticks.reset();
        assert_eq!(ticks.feed(egui::MouseWheelUnit::Point, 10.0), None);
    }
}
