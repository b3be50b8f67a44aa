use std::path::{Path, PathBuf};

use imview_core::config::ViewerConfig;
use imview_core::io::{first_supported, parse_drop_list, pick_dropped};
use imview_core::viewer::Viewer;
use imview_core::window::initial_placement;
use tracing::{debug, info, warn};

use crate::convert::{image_to_color_image, texture_options};
use crate::input::CanvasInput;
use crate::panels;
use crate::shortcuts::Shortcuts;

pub struct ImviewApp {
    pub viewer: Viewer,
    pub shortcuts: Shortcuts,
    pub input: CanvasInput,
    /// GPU copy of the current image; replaced on every successful load.
    pub texture: Option<egui::TextureHandle>,
    /// Message of the last failed load, shown until dismissed.
    pub error: Option<String>,
    window_placed: bool,
}

impl ImviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig, initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            shortcuts: Shortcuts::from_config(&config.shortcuts),
            viewer: Viewer::new(config),
            input: CanvasInput::default(),
            texture: None,
            error: None,
            window_placed: false,
        };

        if let Some(path) = initial_file {
            app.open_path(ctx, &path);
        }
        app
    }

    /// Load `path` into the viewer. Failures are shown and keep the current image.
    pub fn open_path(&mut self, ctx: &egui::Context, path: &Path) {
        match self.viewer.load(path) {
            Ok(()) => self.refresh_texture(ctx),
            Err(e) => {
                warn!("{e}");
                self.error = Some(e.to_string());
            }
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(image) = self.viewer.image() else {
            return;
        };
        let max_side = ctx.input(|i| i.max_texture_side);
        let texture = ctx.load_texture(
            "image",
            image_to_color_image(image, max_side),
            texture_options(self.viewer.config().filter),
        );
        self.texture = Some(texture);
    }

    pub fn open_dialog(&mut self, ctx: &egui::Context) {
        let extensions = self.viewer.extensions().to_vec();
        let mut dialog = rfd::FileDialog::new().add_filter("Image file", extensions.as_slice());
        for ext in &extensions {
            dialog = dialog.add_filter(ext.to_uppercase(), &[ext]);
        }
        if let Ok(dir) = std::env::current_dir() {
            dialog = dialog.set_directory(dir);
        }

        // Cancel is a silent no-op.
        if let Some(path) = dialog.pick_file() {
            self.open_path(ctx, &path);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if paths.is_empty() {
            return;
        }

        let count = paths.len();
        match pick_dropped(paths, self.viewer.extensions()) {
            Some(path) => self.open_path(ctx, &path),
            None => debug!(count, "no supported image in drop"),
        }
    }

    /// Pasted text is read as a path list, e.g. paths copied from a file manager.
    fn handle_paste(&mut self, ctx: &egui::Context) {
        let pasted = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Paste(text) => Some(text.clone()),
                _ => None,
            })
        });
        let Some(text) = pasted else {
            return;
        };

        let paths = parse_drop_list(&text);
        match first_supported(&paths, self.viewer.extensions()) {
            Some(path) => self.open_path(ctx, &path),
            None => debug!(count = paths.len(), "no supported image in pasted text"),
        }
    }

    /// Size and position the window once the monitor size is known.
    fn place_window(&mut self, ctx: &egui::Context) {
        if self.window_placed {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        self.window_placed = true;

        let placement = initial_placement(
            &self.viewer.config().window,
            monitor.x as i32,
            monitor.y as i32,
        );
        info!(geometry = %placement.geometry_string(), "placing window");
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            placement.width as f32,
            placement.height as f32,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            placement.x as f32,
            placement.y as f32,
        )));
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        egui::Window::new("Cannot open image")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
            });
    }
}

impl eframe::App for ImviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.place_window(ctx);
        self.handle_dropped_files(ctx);
        self.handle_paste(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.show_error(ctx);
    }
}
