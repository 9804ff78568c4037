//! Canvas engine for an interactive shape-drawing surface.
//!
//! The user drags on a canvas to stretch out a rectangle, circle, or
//! ellipse; a rectangle's corners can then be rounded by dragging the dots
//! overlaid just inside them. This crate is compiled to WebAssembly and
//! owns the full lifecycle of the surface: translating raw pointer events
//! into drag-state transitions, hit-testing the corner-dot overlay, and
//! painting the current shape. The host layer is responsible only for
//! wiring DOM events to the engine and reflecting the returned
//! [`engine::Action`]s back into its widgets.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`shape`] | The current shape: kind, bounding box, style |
//! | [`geometry`] | Pure placement math for all three shape kinds |
//! | [`hit`] | Corner dots and pointer hit-testing |
//! | [`input`] | Drag-state machine and current widget values |
//! | [`render`] | Painting to the 2D context |
//! | [`consts`] | Shared numeric constants (radius limit, dot geometry) |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod shape;

use wasm_bindgen::prelude::wasm_bindgen;

/// Install browser logging and panic reporting when the module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(
            "shapepad: logger already installed",
        ));
    }
}
