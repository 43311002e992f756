//! Simulation context and tick orchestration.
//!
//! `SimulationCore` owns every piece of mutable simulation state: the body
//! registry, the live input values, the tuning bundle, and the voice pool.
//! The host drives it through one entry point per frame (`step`), which runs
//! the systems in a fixed order: forces, two collision passes, integration.
//! Nothing in here touches the platform, so native tests can drive it
//! directly; the wasm surface lives in `facade`.

use crate::audio::{Playback, VoicePool};
use crate::bodies::{BodyRegistry, Vec2};
use crate::domain::Tuning;
use crate::systems::{collision, forces, integrate};

mod facade;

pub use facade::Simulation;

/// The whole simulation state, one instance per page.
pub struct SimulationCore {
    tuning: Tuning,
    bodies: BodyRegistry,
    pointer: Option<Vec2>,
    tilt_force: f32,
    motion_enabled: bool,
    audio: VoicePool,
    offsets: Vec<f32>,
    frame: u64,
}

impl SimulationCore {
    pub fn new() -> Self {
        let tuning = Tuning::default();
        let audio = VoicePool::new(&tuning);
        Self {
            tuning,
            bodies: BodyRegistry::new(),
            pointer: None,
            tilt_force: 0.0,
            motion_enabled: false,
            audio,
            offsets: Vec::new(),
            frame: 0,
        }
    }

    /// Replace the tuning bundle from JSON. On parse failure the current
    /// tuning is kept untouched.
    pub fn load_tuning_json(&mut self, json: &str) -> Result<(), String> {
        let tuning = Tuning::from_json(json)?;
        self.audio.configure(&tuning);
        self.tuning = tuning;
        Ok(())
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    // === SETUP ===

    /// Register a body. Returns its id, or `None` for a degenerate radius.
    pub fn register_body(&mut self, origin_x: f32, origin_y: f32, radius: f32) -> Option<u32> {
        let id = self.bodies.register(Vec2::new(origin_x, origin_y), radius)?;
        self.offsets.push(0.0);
        Some(id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // === INPUT (written between ticks by the host) ===

    /// Refresh a body's resting center; layouts can shift on resize, so the
    /// host re-supplies origins rather than the core caching them.
    pub fn set_origin(&mut self, index: usize, x: f32, y: f32) -> bool {
        self.bodies.set_origin(index, x, y)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// No active input (touch released, pointer gone).
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn set_tilt_force(&mut self, force: f32) {
        self.tilt_force = force;
    }

    /// Raw horizontal acceleration from the motion sensor; the sign flip
    /// makes bodies slide downhill.
    pub fn set_acceleration_x(&mut self, acc_x: f32) {
        self.tilt_force = acc_x * -self.tuning.gravity_sensitivity;
    }

    pub fn set_motion_enabled(&mut self, enabled: bool) {
        self.motion_enabled = enabled;
    }

    // === TICK ===

    /// Advance the simulation by one frame.
    ///
    /// `now_ms` comes from the host's monotonic clock and is used only for
    /// the audio cooldown comparison; the integration math is per-frame, not
    /// per-elapsed-time.
    pub fn step(&mut self, now_ms: f64) {
        self.audio.begin_frame();

        forces::apply_forces(
            self.bodies.bodies_mut(),
            self.pointer,
            self.tilt_force,
            self.motion_enabled,
            &self.tuning,
        );

        collision::resolve_collisions(
            self.bodies.bodies_mut(),
            now_ms,
            &self.tuning,
            &mut self.audio,
        );

        integrate::integrate(self.bodies.bodies_mut(), &mut self.offsets, &self.tuning);

        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === OUTPUT (read by the host after each tick) ===

    /// Displacement of one body, zero for unknown indices.
    pub fn body_x(&self, index: usize) -> f32 {
        self.bodies.get(index).map(|b| b.x).unwrap_or(0.0)
    }

    /// Per-body displacements, one slot per registered body.
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    /// Playback commands queued during the last step.
    pub fn playbacks(&self) -> &[Playback] {
        self.audio.queued()
    }

    /// Host callback once a voice finished playing.
    pub fn voice_ended(&mut self, voice: usize) {
        self.audio.voice_ended(voice);
    }

    pub fn idle_voices(&self) -> usize {
        self.audio.idle_count()
    }

    #[cfg(test)]
    pub(crate) fn bodies_mut(&mut self) -> &mut [crate::bodies::Body] {
        self.bodies.bodies_mut()
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
