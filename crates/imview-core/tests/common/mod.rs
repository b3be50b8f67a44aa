#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use imview_core::config::ViewerConfig;
use imview_core::geometry::CanvasSize;
use imview_core::io::Image;
use imview_core::viewer::Viewer;

/// Build an in-memory image with a horizontal gradient so pixels are distinguishable.
pub fn gradient_image(width: u32, height: u32) -> Image {
    Image::from_rgba(gradient_rgba(width, height))
}

pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = if width > 1 { (x * 255 / (width - 1)) as u8 } else { 0 };
        Rgba([v, v, v, 255])
    })
}

/// Write a PNG of the given size into `dir` and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_rgba(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("write test PNG");
    path
}

/// Write arbitrary bytes to `dir/name`.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write test file");
    path
}

/// A viewer with a known canvas and an image already fitted to it.
pub fn viewer_with_image(canvas_w: i32, canvas_h: i32, image_w: u32, image_h: u32) -> Viewer {
    let mut viewer = Viewer::new(ViewerConfig::default());
    viewer.on_canvas_resize(CanvasSize::new(canvas_w, canvas_h));
    viewer.set_image(gradient_image(image_w, image_h));
    viewer
}
