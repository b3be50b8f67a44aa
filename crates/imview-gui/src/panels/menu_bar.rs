use crate::app::ImviewApp;

pub fn show(ctx: &egui::Context, app: &mut ImviewApp) {
    let open = app.shortcuts.open;
    let quit = app.shortcuts.quit;
    let fit = app.shortcuts.fit;
    let toggle_grid = app.shortcuts.toggle_grid;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let item = egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open));
                if ui.add(item).clicked() {
                    ui.close();
                    app.open_dialog(ctx);
                }

                ui.separator();

                let item = egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit));
                if ui.add(item).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let item = egui::Button::new("Fit").shortcut_text(ctx.format_shortcut(&fit));
                if ui.add(item).clicked() {
                    ui.close();
                    app.viewer.fit();
                }

                let grid = egui::Button::new("Grid")
                    .selected(app.viewer.grid_visible())
                    .shortcut_text(ctx.format_shortcut(&toggle_grid));
                if ui.add(grid).clicked() {
                    ui.close();
                    app.viewer.toggle_grid();
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            app.open_dialog(ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&fit)) {
            app.viewer.fit();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&toggle_grid)) {
            app.viewer.toggle_grid();
        }
    });
}
