use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::error::{Result, ViewerError};

/// A decoded bitmap. Never mutated after loading.
#[derive(Clone, Debug)]
pub struct Image {
    pixels: RgbaImage,
    path: Option<PathBuf>,
}

impl Image {
    /// Wrap an in-memory RGBA buffer that did not come from a file.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels, path: None }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Whether the extension of `path` is in `allowed` (case-insensitive, leading dots ignored).
pub fn is_supported<S: AsRef<str>>(path: &Path, allowed: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    allowed
        .iter()
        .any(|a| a.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Decode the image at `path` if its extension is allowed.
pub fn load_image<S: AsRef<str>>(path: &Path, allowed: &[S]) -> Result<Image> {
    if !is_supported(path, allowed) {
        return Err(ViewerError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path).map_err(|source| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let pixels = decoded.to_rgba8();
    info!(path = %path.display(), width = pixels.width(), height = pixels.height(), "image loaded");

    Ok(Image {
        pixels,
        path: Some(path.to_path_buf()),
    })
}
