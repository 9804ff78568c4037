//! Shared numeric constants for the shape surface.

// ── Corner rounding ─────────────────────────────────────────────

/// Largest corner radius the renderer honors, in pixels.
pub const MAX_CORNER_RADIUS: f64 = 100.0;

// ── Corner dots ─────────────────────────────────────────────────

/// Drawn (and hit-test) radius of a corner dot, in pixels.
pub const DOT_RADIUS_PX: f64 = 5.0;

/// Inset from a rounded corner to its dot center, in pixels.
pub const DOT_PADDING_PX: f64 = 10.0;

/// Accent fill for corner dots, distinct from any user-chosen color.
pub const DOT_FILL: &str = "#1E90FF";
