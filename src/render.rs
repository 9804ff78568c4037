//! Rendering: paints the current shape to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the current shape and produces pixels — it does not mutate controller
//! state. The single value flowing back is the corner-dot array painted
//! over a rectangle, so the caller can refresh its hit-test state.
//!
//! All fallible Canvas2D calls propagate errors via `Result<_, JsValue>`;
//! the top-level caller ([`crate::engine::Engine`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DOT_FILL, DOT_RADIUS_PX};
use crate::geometry;
use crate::hit::CornerDot;
use crate::shape::{BoundingBox, Shape, ShapeKind, Style};

/// Clear the whole surface, then paint `shape`, if any.
///
/// `surface_w` / `surface_h` are the canvas dimensions in pixels; the clear
/// always covers the full surface, never a partial invalidation. For a
/// rectangle the four corner dots are painted and returned.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    shape: Option<&Shape>,
    surface_w: f64,
    surface_h: f64,
) -> Result<Option<[CornerDot; 4]>, JsValue> {
    ctx.clear_rect(0.0, 0.0, surface_w, surface_h);

    let Some(shape) = shape else {
        return Ok(None);
    };

    apply_style(ctx, &shape.style);

    match shape.kind {
        ShapeKind::Rectangle => draw_rounded_rect(ctx, shape).map(Some),
        ShapeKind::Circle => {
            draw_circle(ctx, shape.bounds)?;
            Ok(None)
        }
        ShapeKind::Ellipse => {
            draw_ellipse(ctx, shape.bounds)?;
            Ok(None)
        }
    }
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_rounded_rect(
    ctx: &CanvasRenderingContext2d,
    shape: &Shape,
) -> Result<[CornerDot; 4], JsValue> {
    let BoundingBox { x, y, width: w, height: h } = shape.bounds;
    let r = geometry::clamp_radius(shape.corner_radius);

    // Quadratic corner curves; with r = 0 they collapse into the corners
    // and the path is a plain rectangle. The same signed x+r / y+r
    // arithmetic keeps the path closed for negative widths and heights,
    // since r itself is never negated.
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + r);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x + r, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - r);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();

    ctx.fill();
    ctx.stroke();

    let dots = geometry::corner_dot_centers(shape.bounds, r).map(CornerDot::at);
    draw_corner_dots(ctx, &dots)?;
    Ok(dots)
}

fn draw_circle(ctx: &CanvasRenderingContext2d, bounds: BoundingBox) -> Result<(), JsValue> {
    let radius = geometry::circle_radius(bounds);
    let center = geometry::circle_center(bounds);

    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.close_path();

    ctx.fill();
    ctx.stroke();
    Ok(())
}

fn draw_ellipse(ctx: &CanvasRenderingContext2d, bounds: BoundingBox) -> Result<(), JsValue> {
    let (rx, ry) = geometry::ellipse_radii(bounds);
    let center = geometry::ellipse_center(bounds);

    ctx.begin_path();
    ctx.ellipse(center.x, center.y, rx, ry, 0.0, 0.0, 2.0 * PI)?;
    ctx.close_path();

    ctx.fill();
    ctx.stroke();
    Ok(())
}

// =============================================================
// Corner dots
// =============================================================

/// Paint the four dots in the accent color, stroked with whatever border
/// style is already on the context. Purely an interactive affordance — the
/// dots are not part of the shape itself.
fn draw_corner_dots(ctx: &CanvasRenderingContext2d, dots: &[CornerDot; 4]) -> Result<(), JsValue> {
    ctx.set_fill_style_str(DOT_FILL);
    for dot in dots {
        ctx.begin_path();
        ctx.arc(dot.center.x, dot.center.y, DOT_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.stroke();
    }
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Apply fill, stroke, and line width from the shape's style.
fn apply_style(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.set_fill_style_str(&style.fill);
    ctx.set_stroke_style_str(&style.stroke);
    ctx.set_line_width(style.stroke_width);
}
