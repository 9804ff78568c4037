//! Pure placement math for the three shape kinds and the corner-dot overlay.
//!
//! Everything here is a total function of its arguments — no browser types,
//! no shared state — so the geometry is testable natively. The renderer
//! turns these results into context calls; the controller uses the same
//! functions to keep its hit-test state consistent with the pixels.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DOT_PADDING_PX, MAX_CORNER_RADIUS};
use crate::shape::BoundingBox;

/// A point in surface-local coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamp a requested corner radius to the honored range.
///
/// The setter layer clamps on entry and the render path clamps again; the
/// renderer never trusts its caller.
#[must_use]
pub fn clamp_radius(radius: f64) -> f64 {
    radius.clamp(0.0, MAX_CORNER_RADIUS)
}

/// Radius of the circle for a drag box: half the smaller absolute extent.
#[must_use]
pub fn circle_radius(bounds: BoundingBox) -> f64 {
    bounds.width.abs().min(bounds.height.abs()) / 2.0
}

/// Center of the circle: the drag's start corner plus the radius on both
/// axes. The circle always grows down-right from the start corner, even
/// when the drag went up or left — unlike the ellipse, which centers in
/// the box. Asymmetry kept as shipped, pending a product call.
#[must_use]
pub fn circle_center(bounds: BoundingBox) -> Point {
    let radius = circle_radius(bounds);
    Point::new(bounds.x + radius, bounds.y + radius)
}

/// Semi-axes of the ellipse inscribed in the bounding box.
#[must_use]
pub fn ellipse_radii(bounds: BoundingBox) -> (f64, f64) {
    (bounds.width.abs() / 2.0, bounds.height.abs() / 2.0)
}

/// Center of the ellipse: the true bounding-box midpoint.
#[must_use]
pub fn ellipse_center(bounds: BoundingBox) -> Point {
    Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0)
}

/// Corner-dot centers for a rounded rectangle, in TL, TR, BR, BL order.
///
/// Each dot sits `radius + DOT_PADDING_PX` inside its geometric corner
/// along both axes, so the dots track the rounded inset and stay visually
/// inside the curve as the radius grows.
#[must_use]
pub fn corner_dot_centers(bounds: BoundingBox, corner_radius: f64) -> [Point; 4] {
    let inset = clamp_radius(corner_radius) + DOT_PADDING_PX;
    let BoundingBox { x, y, width, height } = bounds;
    [
        Point::new(x + inset, y + inset),
        Point::new(x + width - inset, y + inset),
        Point::new(x + width - inset, y + height - inset),
        Point::new(x + inset, y + height - inset),
    ]
}
