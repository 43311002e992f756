pub mod pool;

pub use pool::{Playback, VoicePool, VOICE_COUNT};

/// Capability boundary for impact feedback.
///
/// Implementations must never block the tick: playback is fire-and-forget
/// and its outcome is irrelevant to simulation progress. Dropping an impact
/// (pool exhausted, inaudible volume) is policy, not an error.
pub trait AudioSink {
    fn play_impact(&mut self, velocity: f32);
}

/// Sink that swallows every impact. Useful for headless stepping.
pub struct NullSink;

impl AudioSink for NullSink {
    fn play_impact(&mut self, _velocity: f32) {}
}
