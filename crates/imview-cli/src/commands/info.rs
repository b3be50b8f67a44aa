use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use imview_core::config::ViewerConfig;
use imview_core::geometry::{fit_view, CanvasSize};
use imview_core::io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Canvas size to fit into, e.g. 800x600
    #[arg(long, value_parser = parse_canvas)]
    pub canvas: Option<CanvasSize>,
}

pub fn run(args: &InfoArgs, config: &ViewerConfig) -> Result<()> {
    let image = load_image(&args.file, &config.normalized_extensions())?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());

    if let Some(canvas) = args.canvas {
        let Some(view) = fit_view(canvas, image.width(), image.height(), config.max_scale) else {
            bail!(
                "Image cannot be fitted into a {}x{} canvas",
                canvas.width,
                canvas.height
            );
        };
        let (w, h) = view.scaled_size(image.width(), image.height());
        println!("Canvas:      {}x{}", canvas.width, canvas.height);
        println!("Fit scale:   {:.4} ({:.1}%)", view.scale, view.scale * 100.0);
        println!("Fit size:    {w}x{h}");
        println!("Fit offset:  ({}, {})", view.offset_x, view.offset_y);
    }

    Ok(())
}

fn parse_canvas(s: &str) -> std::result::Result<CanvasSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width: i32 = w.trim().parse().map_err(|_| format!("bad width {w:?}"))?;
    let height: i32 = h.trim().parse().map_err(|_| format!("bad height {h:?}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("canvas must be positive, got {width}x{height}"));
    }
    Ok(CanvasSize::new(width, height))
}
