//! Clatter Engine - sliding-body physics with impact audio cues, in WASM
//!
//! The JS host owns discovery, input capture, rendering and playback; the
//! engine owns every simulation decision. One `Simulation` per page, one
//! `step` per animation frame.
//!
//! Architecture:
//! - bodies/     - Body state and the registration-ordered registry
//! - systems/    - Per-tick systems: forces, collision, integration
//! - audio/      - Impact-to-volume mapping and the fixed voice pool
//! - domain/     - Runtime tuning bundle
//! - simulation/ - Orchestration and the wasm facade

pub mod audio;
pub mod bodies;
pub mod domain;
pub mod simulation;
pub mod systems;

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

    web_sys::console::log_1(&"🦀 Clatter WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use audio::{AudioSink, Playback, VoicePool};
pub use bodies::{Body, BodyRegistry, Vec2};
pub use domain::Tuning;
pub use simulation::{Simulation, SimulationCore};
