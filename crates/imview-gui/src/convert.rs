use imview_core::config::ScaleFilter;
use imview_core::io::Image;
use tracing::debug;

/// Size of the GPU copy for a `width x height` image when the GPU cannot hold
/// a texture that large. `None` when the image already fits within `max_side`.
pub fn texture_size(width: u32, height: u32, max_side: usize) -> Option<(u32, u32)> {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    if max_side == 0 || (width <= max_side && height <= max_side) {
        return None;
    }
    let longest = u64::from(width.max(height));
    let fit = |side: u32| {
        let scaled = u64::from(side) * u64::from(max_side) / longest;
        (scaled as u32).clamp(1, max_side)
    };
    Some((fit(width), fit(height)))
}

/// Convert a decoded image to an egui ColorImage no larger than `max_side`
/// on either axis. The painter stretches it back to the image's placed size.
pub fn image_to_color_image(image: &Image, max_side: usize) -> egui::ColorImage {
    match texture_size(image.width(), image.height(), max_side) {
        Some((w, h)) => {
            debug!(
                width = image.width(),
                height = image.height(),
                texture_width = w,
                texture_height = h,
                "downscaling texture"
            );
            let small = image::imageops::thumbnail(image.pixels(), w, h);
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], small.as_raw())
        }
        None => {
            let size = [image.width() as usize, image.height() as usize];
            egui::ColorImage::from_rgba_unmultiplied(size, image.pixels().as_raw())
        }
    }
}

pub fn texture_options(filter: ScaleFilter) -> egui::TextureOptions {
    match filter {
        ScaleFilter::Nearest => egui::TextureOptions::NEAREST,
        ScaleFilter::Linear => egui::TextureOptions::LINEAR,
    }
}

pub fn color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}
