//! Input model: current widget values and the drag-state machine.
//!
//! `UiState` mirrors the host's widgets — the controller snapshots it into
//! the shape on every draw rather than reading ambient state. `DragState`
//! is the gesture being tracked between pointer-down and pointer-up; its
//! two active variants are mutually exclusive because corner-dot hits are
//! tested before a new shape can start.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::shape::{ShapeKind, Style};

/// Widget values pushed in by the host, snapshotted into each drawn shape.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Shape kind currently selected in the host's picker.
    pub kind: ShapeKind,
    /// Fill, border color, and border width from the host's widgets.
    pub style: Style,
    /// Corner radius from the host's slider, clamped on entry.
    pub corner_radius: f64,
}

/// The gesture currently being tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Stretching out a new shape from the corner where the drag began.
    DrawingShape {
        /// Start point of the drag; the bounding box anchor.
        start: Point,
    },
    /// Adjusting the current rectangle's corner radius by dragging a dot.
    DraggingCorner {
        /// Which dot grabbed the pointer (TL=0, TR=1, BR=2, BL=3).
        index: usize,
        /// The shape's anchor corner. The radius derives from the pointer's
        /// distance to this point, not to the dot itself.
        start: Point,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}
