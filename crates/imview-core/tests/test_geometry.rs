use approx::assert_relative_eq;

use imview_core::consts::MAX_SCALE;
use imview_core::geometry::{
    fit_view, pan_view, recenter_on_resize, zoom_view, CanvasSize, Point, Rect, ViewState,
};

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

#[test]
fn test_fit_landscape_into_square() {
    let view = fit_view(CanvasSize::new(400, 400), 800, 600, MAX_SCALE).unwrap();
    assert_relative_eq!(view.scale, 0.5);
    assert_eq!((view.offset_x, view.offset_y), (0, 50));
}

#[test]
fn test_fit_portrait_into_square() {
    let view = fit_view(CanvasSize::new(400, 400), 600, 800, MAX_SCALE).unwrap();
    assert_relative_eq!(view.scale, 0.5);
    assert_eq!((view.offset_x, view.offset_y), (50, 0));
}

#[test]
fn test_fit_fills_one_axis_exactly() {
    let canvas = CanvasSize::new(1024, 700);
    let view = fit_view(canvas, 333, 517, MAX_SCALE).unwrap();
    let (w, h) = view.scaled_size(333, 517);
    assert!(w <= canvas.width && h <= canvas.height);
    // Float scale may land a hair under the exact ratio.
    assert!(
        w >= canvas.width - 1 || h >= canvas.height - 1,
        "got {w}x{h}"
    );
}

#[test]
fn test_fit_offsets_use_floor_division() {
    // 100x100 into 401x300: scale 3.0, free width 101 -> 50.
    let view = fit_view(CanvasSize::new(401, 300), 100, 100, MAX_SCALE).unwrap();
    assert_relative_eq!(view.scale, 3.0);
    assert_eq!((view.offset_x, view.offset_y), (50, 0));
}

#[test]
fn test_fit_clamps_to_max_scale_and_centers() {
    let view = fit_view(CanvasSize::new(400, 400), 1, 1, MAX_SCALE).unwrap();
    assert_relative_eq!(view.scale, MAX_SCALE);
    assert_eq!((view.offset_x, view.offset_y), (150, 150));
}

#[test]
fn test_fit_degenerate_inputs() {
    assert!(fit_view(CanvasSize::new(0, 400), 100, 100, MAX_SCALE).is_none());
    assert!(fit_view(CanvasSize::new(400, 400), 0, 100, MAX_SCALE).is_none());
    // 10000 px tall into 1 px: width collapses to zero.
    assert!(fit_view(CanvasSize::new(400, 1), 10, 10_000, MAX_SCALE).is_none());
}

#[test]
fn test_fit_is_idempotent() {
    let canvas = CanvasSize::new(640, 480);
    let a = fit_view(canvas, 1920, 1080, MAX_SCALE).unwrap();
    let b = fit_view(canvas, 1920, 1080, MAX_SCALE).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

fn image_point(view: &ViewState, p: Point) -> (f64, f64) {
    view.canvas_to_image(p)
}

#[test]
fn test_zoom_keeps_pivot_fixed() {
    let start = ViewState {
        scale: 0.5,
        offset_x: 0,
        offset_y: 50,
    };
    let pivots = [
        Point::new(123, 201),
        Point::new(0, 0),
        Point::new(399, 399),
        Point::new(-40, 600),
    ];

    for factor in [1.25, 0.8, 2.0, 0.5, 3.7] {
        for &pivot in &pivots {
            let zoomed = zoom_view(&start, 800, 600, factor, pivot, MAX_SCALE).unwrap();
            let before = image_point(&start, pivot);
            let after = image_point(&zoomed, pivot);
            // Offsets are whole pixels, so allow half a canvas pixel of drift.
            let tol = 0.5 / zoomed.scale + 1e-9;
            assert!(
                (before.0 - after.0).abs() <= tol && (before.1 - after.1).abs() <= tol,
                "factor {factor} pivot {pivot:?}: {before:?} -> {after:?}"
            );
        }
    }
}

#[test]
fn test_zoom_in_exact_offsets() {
    let start = ViewState {
        scale: 0.5,
        offset_x: 0,
        offset_y: 50,
    };
    let zoomed = zoom_view(&start, 800, 600, 1.25, Point::new(123, 201), MAX_SCALE).unwrap();
    assert_relative_eq!(zoomed.scale, 0.625);
    assert_eq!((zoomed.offset_x, zoomed.offset_y), (-31, 12));
}

#[test]
fn test_zoom_never_exceeds_max_scale() {
    let mut view = ViewState::default();
    for _ in 0..100 {
        view = zoom_view(&view, 64, 64, 1.25, Point::new(10, 10), MAX_SCALE).unwrap();
        assert!(view.scale <= MAX_SCALE);
    }
    assert_relative_eq!(view.scale, MAX_SCALE);
}

#[test]
fn test_zoom_clamped_step_still_keeps_pivot() {
    let start = ViewState {
        scale: 90.0,
        offset_x: -1000,
        offset_y: -2000,
    };
    let pivot = Point::new(300, 200);
    let zoomed = zoom_view(&start, 64, 64, 1.25, pivot, MAX_SCALE).unwrap();
    assert_relative_eq!(zoomed.scale, MAX_SCALE);

    let before = image_point(&start, pivot);
    let after = image_point(&zoomed, pivot);
    let tol = 0.5 / zoomed.scale + 1e-9;
    assert!((before.0 - after.0).abs() <= tol);
    assert!((before.1 - after.1).abs() <= tol);
}

#[test]
fn test_zoom_rejects_collapsed_image() {
    let start = ViewState {
        scale: 0.1,
        offset_x: 0,
        offset_y: 0,
    };
    // 10 px * 0.08 = 0.8 px -> nothing left to show.
    assert!(zoom_view(&start, 10, 10, 0.8, Point::new(0, 0), MAX_SCALE).is_none());
}

#[test]
fn test_zoom_rejects_non_positive_factor() {
    let start = ViewState::default();
    assert!(zoom_view(&start, 10, 10, 0.0, Point::new(0, 0), MAX_SCALE).is_none());
    assert!(zoom_view(&start, 10, 10, -1.25, Point::new(0, 0), MAX_SCALE).is_none());
}

// ---------------------------------------------------------------------------
// Pan / resize / rect
// ---------------------------------------------------------------------------

#[test]
fn test_pan_translates_offset_only() {
    let start = ViewState {
        scale: 2.0,
        offset_x: 5,
        offset_y: -5,
    };
    let panned = pan_view(&start, 10, -20);
    assert_relative_eq!(panned.scale, 2.0);
    assert_eq!((panned.offset_x, panned.offset_y), (15, -25));
}

#[test]
fn test_recenter_uses_half_delta_with_floor() {
    let start = ViewState {
        scale: 1.5,
        offset_x: 10,
        offset_y: 10,
    };
    let moved = recenter_on_resize(&start, CanvasSize::new(400, 400), CanvasSize::new(500, 301));
    assert_relative_eq!(moved.scale, 1.5);
    // +100 -> +50, -99 -> -50
    assert_eq!((moved.offset_x, moved.offset_y), (60, -40));
}

#[test]
fn test_placed_rect_and_contains() {
    let view = ViewState {
        scale: 0.5,
        offset_x: 0,
        offset_y: 50,
    };
    let rect = view.placed_rect(800, 600);
    assert_eq!(
        rect,
        Rect {
            x: 0,
            y: 50,
            width: 400,
            height: 300
        }
    );
    assert!(rect.contains(Point::new(0, 50)));
    assert!(rect.contains(Point::new(399, 349)));
    assert!(!rect.contains(Point::new(400, 100)));
    assert!(!rect.contains(Point::new(100, 350)));
    assert!(!rect.contains(Point::new(100, 49)));
}
