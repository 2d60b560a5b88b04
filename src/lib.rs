//! TaskBubble Engine - Bubble physics for a task board in WASM
//!
//! The host page renders each task as a circular DOM bubble and drives the
//! simulation from its requestAnimationFrame loop; everything that moves
//! lives here.
//!
//! Architecture:
//! - core/       - Math and RNG primitives
//! - domain/     - Task bodies and the entity store
//! - systems/    - Physics stepper and drag controller
//! - simulation/ - Orchestration only
//! - api/        - Public WASM API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Compatibility re-exports (keeps external paths short)
pub use domain::store;
pub use domain::task;
pub use systems::drag;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 TaskBubble WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::World;
pub use domain::task::{Priority, TaskBody};

// Export priority class constants for JS
#[wasm_bindgen]
pub fn pr_high() -> u8 { domain::task::PR_HIGH }
#[wasm_bindgen]
pub fn pr_medium() -> u8 { domain::task::PR_MEDIUM }
#[wasm_bindgen]
pub fn pr_low() -> u8 { domain::task::PR_LOW }
