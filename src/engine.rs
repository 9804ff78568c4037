//! Engine: the interaction controller and its canvas-owning wrapper.
//!
//! [`EngineCore`] holds all controller state — the current widget values,
//! the drag-state machine, the current shape, and the corner-dot hit-test
//! array — and contains every transition rule. It has no browser
//! dependencies, so the whole interaction loop is testable natively.
//! [`Engine`] wraps it for the WASM host: it owns the canvas element and
//! its 2d context, repaints when a handler asks for it, and hands the
//! remaining actions to the host as JSON.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::{self, Point};
use crate::hit::{self, CornerDot};
use crate::input::{DragState, UiState};
use crate::render;
use crate::shape::{BoundingBox, Shape, ShapeKind};

/// Notifications returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// State changed in a way that needs a repaint.
    RenderNeeded,
    /// The corner radius changed programmatically; the host must update its
    /// slider and label to match.
    RadiusChanged { value: u32 },
}

/// Core controller state — all logic that doesn't depend on the canvas.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    /// Current widget values as pushed by the host.
    pub ui: UiState,
    /// The gesture being tracked between pointer-down and pointer-up.
    pub drag: DragState,
    shape: Option<Shape>,
    dots: Option<[CornerDot; 4]>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Widget inputs ---

    /// Select which shape the next drag draws.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.ui.kind = kind;
    }

    /// Fill color for subsequent draws.
    pub fn set_fill(&mut self, fill: String) {
        self.ui.style.fill = fill;
    }

    /// Border color for subsequent draws.
    pub fn set_stroke(&mut self, stroke: String) {
        self.ui.style.stroke = stroke;
    }

    /// Border width in pixels; negative input is treated as zero.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.ui.style.stroke_width = width.max(0.0);
    }

    /// Corner radius from the slider. First clamp layer; the render path
    /// re-clamps and never trusts its caller.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.ui.corner_radius = geometry::clamp_radius(radius);
    }

    // --- Queries ---

    /// The shape currently on the surface, if any.
    #[must_use]
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Corner dots from the last paint; present only while the painted
    /// shape is a rectangle.
    #[must_use]
    pub fn corner_dots(&self) -> Option<&[CornerDot; 4]> {
        self.dots.as_ref()
    }

    /// Refresh hit-test state from the dots the renderer just painted —
    /// the only data that flows back from rendering. `None` wipes them, so
    /// an earlier rectangle's dots stop being hit-testable as soon as a
    /// circle or ellipse is drawn over it.
    pub fn set_corner_dots(&mut self, dots: Option<[CornerDot; 4]>) {
        self.dots = dots;
    }

    // --- Pointer events ---

    /// Pointer pressed. Corner dots are tested before anything else, which
    /// keeps the two drag variants mutually exclusive.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let dot_hit = self.dots.as_ref().and_then(|dots| hit::hit_test_dots(pt, dots));
        if let (Some(index), Some(shape)) = (dot_hit, self.shape.as_ref()) {
            self.drag = DragState::DraggingCorner { index, start: shape.bounds.anchor() };
            log::debug!("corner drag started on dot {index}");
            return Vec::new();
        }

        // A fresh drag: the previous shape's geometry is abandoned and the
        // radius goes back to zero, slider included.
        self.shape = None;
        self.dots = None;
        self.ui.corner_radius = 0.0;
        self.drag = DragState::DrawingShape { start: pt };
        vec![Action::RadiusChanged { value: 0 }]
    }

    /// Pointer moved. Re-renders on every move event while a gesture is
    /// active; a move while idle is a silent no-op.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.drag {
            DragState::Idle => Vec::new(),
            DragState::DrawingShape { start } => {
                self.shape = Some(Shape {
                    kind: self.ui.kind,
                    bounds: BoundingBox::from_drag(start, pt),
                    style: self.ui.style.clone(),
                    corner_radius: self.ui.corner_radius,
                });
                vec![Action::RenderNeeded]
            }
            DragState::DraggingCorner { start, .. } => {
                let Some(shape) = self.shape.as_mut() else {
                    return Vec::new();
                };
                // Radius from the pointer's offset to the shape's anchor
                // corner; the bounding box itself never changes here.
                let dx = (pt.x - start.x).abs();
                let dy = (pt.y - start.y).abs();
                let radius = geometry::clamp_radius(dx.min(dy));
                shape.corner_radius = radius;
                self.ui.corner_radius = radius;
                vec![
                    Action::RadiusChanged { value: radius.round() as u32 },
                    Action::RenderNeeded,
                ]
            }
        }
    }

    /// Pointer released: the gesture ends and the shape, if any, persists.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.drag = DragState::Idle;
        Vec::new()
    }

    /// Double-click clears the surface outright: pixels, shape, dots, drag
    /// state, and radius all reset, so a stale gesture can't repaint what
    /// the user just erased.
    pub fn on_double_click(&mut self) -> Vec<Action> {
        self.shape = None;
        self.dots = None;
        self.drag = DragState::Idle;
        self.ui.corner_radius = 0.0;
        log::debug!("surface cleared");
        vec![Action::RadiusChanged { value: 0 }, Action::RenderNeeded]
    }
}

/// The full surface engine. Wraps [`EngineCore`] and owns the canvas.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns an error when the element has no usable 2d context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Widget inputs ---

    /// Select the shape kind from the host picker's value string.
    ///
    /// # Errors
    ///
    /// Rejects strings that name no known shape kind.
    pub fn set_shape_kind(&mut self, kind: &str) -> Result<(), JsValue> {
        let kind = ShapeKind::parse(kind).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.core.set_shape_kind(kind);
        Ok(())
    }

    /// Fill color for subsequent draws.
    pub fn set_fill(&mut self, fill: &str) {
        self.core.set_fill(fill.to_owned());
    }

    /// Border color for subsequent draws.
    pub fn set_stroke(&mut self, stroke: &str) {
        self.core.set_stroke(stroke.to_owned());
    }

    /// Border width in pixels.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.core.set_stroke_width(width);
    }

    /// Corner radius from the slider.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.core.set_corner_radius(radius);
    }

    // --- Input events ---

    /// Pointer pressed at surface-local `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error when a repaint fails or the actions can't be
    /// serialized.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_down(Point::new(x, y));
        self.dispatch(actions)
    }

    /// Pointer moved to surface-local `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error when a repaint fails or the actions can't be
    /// serialized.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_move(Point::new(x, y));
        self.dispatch(actions)
    }

    /// Pointer released.
    ///
    /// # Errors
    ///
    /// Returns an error when the actions can't be serialized.
    pub fn on_pointer_up(&mut self) -> Result<String, JsValue> {
        let actions = self.core.on_pointer_up();
        self.dispatch(actions)
    }

    /// Double-click: clear the surface.
    ///
    /// # Errors
    ///
    /// Returns an error when the repaint fails or the actions can't be
    /// serialized.
    pub fn on_double_click(&mut self) -> Result<String, JsValue> {
        let actions = self.core.on_double_click();
        self.dispatch(actions)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error when a Canvas2D call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.repaint()
    }
}

impl Engine {
    /// Repaint if any action needs it, then serialize the host-facing
    /// notifications. `RenderNeeded` is consumed by the repaint and never
    /// reaches the host.
    fn dispatch(&mut self, actions: Vec<Action>) -> Result<String, JsValue> {
        if actions.contains(&Action::RenderNeeded) {
            self.repaint()?;
        }
        let host_facing: Vec<&Action> = actions
            .iter()
            .filter(|action| **action != Action::RenderNeeded)
            .collect();
        serde_json::to_string(&host_facing).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Draw the current state, then refresh the controller's corner-dot
    /// array from what was actually painted.
    fn repaint(&mut self) -> Result<(), JsValue> {
        let dots = render::draw(
            &self.ctx,
            self.core.shape(),
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )?;
        self.core.set_corner_dots(dots);
        Ok(())
    }
}
