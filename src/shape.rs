//! Shape model: what is (or is about to be) on the surface.
//!
//! This module defines the data types describing the single current shape —
//! its kind, the bounding box traced by the drag that created it, and the
//! style values the host's widgets supplied. The controller builds these on
//! every pointer-move; the renderer consumes them read-only.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// The kind of shape being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle, optionally with rounded corners.
    #[default]
    Rectangle,
    /// Circle grown from the drag's start corner.
    Circle,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
}

/// Error returned when a host-supplied kind string matches no [`ShapeKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind: {0:?}")]
pub struct ShapeKindError(pub String);

impl ShapeKind {
    /// Parse a kind from the host picker's value string.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeKindError`] for anything other than `"rectangle"`,
    /// `"circle"`, or `"ellipse"`.
    pub fn parse(name: &str) -> Result<Self, ShapeKindError> {
        match name {
            "rectangle" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            other => Err(ShapeKindError(other.to_owned())),
        }
    }
}

/// The axis-aligned box traced by a drag.
///
/// `(x, y)` is the drag's start point, not a normalized top-left corner:
/// `width` and `height` are signed and go negative when the drag moves up
/// or left of its start. Rendering handles signed extents directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// The box spanned from a drag's start point to the current pointer.
    #[must_use]
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self {
            x: start.x,
            y: start.y,
            width: current.x - start.x,
            height: current.y - start.y,
        }
    }

    /// The drag's start point.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Visual style applied to the current shape.
///
/// Values arrive verbatim from the host's widgets; colors are opaque CSS
/// color strings and are never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Interior fill color.
    pub fill: String,
    /// Border color.
    pub stroke: String,
    /// Border width in pixels.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: "#D94B4B".to_owned(),
            stroke: "#1F1A17".to_owned(),
            stroke_width: 1.0,
        }
    }
}

/// The single shape currently on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Which of the three shapes this is.
    pub kind: ShapeKind,
    /// Box traced by the drag that created it.
    pub bounds: BoundingBox,
    /// Style snapshotted from the widgets when it was last drawn.
    pub style: Style,
    /// Corner radius in pixels; meaningful only for [`ShapeKind::Rectangle`].
    pub corner_radius: f64,
}
