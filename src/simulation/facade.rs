use wasm_bindgen::prelude::*;

use super::SimulationCore;

/// The JS-facing simulation handle.
///
/// The host owns discovery, input capture, rendering and audio playback:
/// it registers bodies at setup, writes pointer/tilt between frames, calls
/// `step` once per animation frame, then reads displacements back and
/// drains the playback queue.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    /// Register one body. Returns its id, or -1 when the candidate is
    /// skipped (non-positive radius).
    pub fn add_body(&mut self, origin_x: f32, origin_y: f32, radius: f32) -> i32 {
        match self.core.register_body(origin_x, origin_y, radius) {
            Some(id) => id as i32,
            None => -1,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.core.body_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Refresh a body's resting center (layout can shift on resize).
    pub fn set_origin(&mut self, index: u32, x: f32, y: f32) -> bool {
        self.core.set_origin(index as usize, x, y)
    }

    /// Pointer/finger position, in layout coordinates after any scaling.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    /// Input released; no pointer force until the next `set_pointer`.
    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    /// Pre-scaled horizontal tilt force.
    pub fn set_tilt_force(&mut self, force: f32) {
        self.core.set_tilt_force(force);
    }

    /// Raw `devicemotion` horizontal acceleration; sensitivity and sign are
    /// applied here so the host can forward the event value untouched.
    pub fn set_acceleration_x(&mut self, acc_x: f32) {
        self.core.set_acceleration_x(acc_x);
    }

    /// Gate for the tilt contribution (false until the platform grants
    /// motion permission).
    pub fn set_motion_enabled(&mut self, enabled: bool) {
        self.core.set_motion_enabled(enabled);
    }

    /// Advance one frame. `now_ms` is the host's monotonic clock, e.g.
    /// `performance.now()`.
    pub fn step(&mut self, now_ms: f64) {
        self.core.step(now_ms);
    }

    /// Replace the tuning bundle from JSON.
    pub fn load_tuning(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tuning_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Displacement of one body (zero for unknown indices).
    pub fn body_x(&self, index: u32) -> f32 {
        self.core.body_x(index as usize)
    }

    /// Pointer to the displacement buffer (one f32 per body, id order) for
    /// zero-copy reads from wasm memory.
    pub fn offsets_ptr(&self) -> *const f32 {
        self.core.offsets().as_ptr()
    }

    pub fn offsets_len(&self) -> usize {
        self.core.offsets().len()
    }

    /// Copy of the displacement buffer as a typed array.
    pub fn offsets_array(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.offsets())
    }

    // === PLAYBACK QUEUE ===

    /// Number of playback commands queued during the last step.
    pub fn playback_count(&self) -> usize {
        self.core.playbacks().len()
    }

    /// Voice index of the i-th queued command.
    pub fn playback_voice(&self, index: usize) -> u32 {
        self.core.playbacks().get(index).map(|p| p.voice).unwrap_or(0)
    }

    /// Volume of the i-th queued command.
    pub fn playback_volume(&self, index: usize) -> f32 {
        self.core
            .playbacks()
            .get(index)
            .map(|p| p.volume)
            .unwrap_or(0.0)
    }

    /// Host callback: the given voice finished (or failed) playing.
    pub fn voice_ended(&mut self, voice: u32) {
        self.core.voice_ended(voice as usize);
    }

    pub fn idle_voices(&self) -> usize {
        self.core.idle_voices()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
