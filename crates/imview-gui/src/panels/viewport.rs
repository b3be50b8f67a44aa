use imview_core::geometry::{CanvasSize, Point};
use imview_core::viewer::Viewer;

use crate::app::ImviewApp;
use crate::convert::color;

pub fn show(ctx: &egui::Context, app: &mut ImviewApp) {
    let background = color(app.viewer.config().background);
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(background))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            app.viewer.on_canvas_resize(CanvasSize::new(
                rect.width().floor() as i32,
                rect.height().floor() as i32,
            ));

            let zoom_modifier = app.shortcuts.zoom_modifier;
            app.input
                .process(ui, &response, &mut app.viewer, zoom_modifier);

            if app.viewer.drag_state().is_dragging() {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }

            match app.texture.as_ref() {
                Some(texture) if app.viewer.image().is_some() => {
                    paint_scene(ui, rect, &app.viewer, texture.id());
                }
                _ => {
                    paint_grid(ui, rect, &app.viewer);
                    show_placeholder(ui, rect);
                }
            }
        });
}

fn to_screen(rect: egui::Rect, p: Point) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn paint_scene(ui: &egui::Ui, rect: egui::Rect, viewer: &Viewer, texture_id: egui::TextureId) {
    if let Some(placement) = viewer.scene().image {
        let r = placement.rect;
        let img_rect = egui::Rect::from_min_size(
            to_screen(rect, Point::new(r.x, r.y)),
            egui::vec2(r.width as f32, r.height as f32),
        );
        ui.painter_at(rect).image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
    paint_grid(ui, rect, viewer);
}

fn paint_grid(ui: &egui::Ui, rect: egui::Rect, viewer: &Viewer) {
    let scene = viewer.scene();
    if scene.grid.is_empty() {
        return;
    }
    let painter = ui.painter_at(rect);
    let stroke = egui::Stroke::new(1.0, color(viewer.config().grid_color));
    // Half-pixel shift keeps 1 px lines on pixel centres.
    let half = egui::vec2(0.5, 0.5);
    for line in scene.grid {
        painter.line_segment(
            [to_screen(rect, line.from) + half, to_screen(rect, line.to) + half],
            stroke,
        );
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open or drop an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(140),
    );
}
