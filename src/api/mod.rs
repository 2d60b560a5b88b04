//! Public API surface.

pub mod wasm;
