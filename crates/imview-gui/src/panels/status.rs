use crate::app::ImviewApp;

pub fn show(ctx: &egui::Context, app: &mut ImviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(image) = app.viewer.image() {
                if let Some(name) = image.path().and_then(|p| p.file_name()) {
                    ui.label(name.to_string_lossy());
                    ui.separator();
                }
                ui.label(format!("{}x{}", image.width(), image.height()));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", app.viewer.view().scale * 100.0));
                ui.separator();
            }
            ui.label(if app.viewer.grid_visible() {
                "Grid: on"
            } else {
                "Grid: off"
            });
            if app.viewer.zoom_arm().is_armed() {
                ui.separator();
                ui.label("Scroll to zoom");
            }
        });
    });
}
