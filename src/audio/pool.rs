use crate::domain::Tuning;

use super::AudioSink;

/// Fixed number of pre-allocated playback voices.
pub const VOICE_COUNT: usize = 8;

/// One queued playback command for the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    /// Index of the claimed voice.
    pub voice: u32,
    /// Playback volume, already mapped and clamped.
    pub volume: f32,
}

/// Production audio sink: maps impact velocity to a volume and claims one
/// idle voice from a fixed pool.
///
/// The engine never plays audio itself. Claimed voices are queued as
/// `Playback` commands for the host to drain after each step; the host
/// reports completion back through `voice_ended`. With no idle voice the
/// impact is silently dropped, bounded-resource best-effort feedback.
pub struct VoicePool {
    busy: [bool; VOICE_COUNT],
    queue: Vec<Playback>,
    min_impact: f32,
    max_volume: f32,
    volume_floor: f32,
}

impl VoicePool {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            busy: [false; VOICE_COUNT],
            queue: Vec::with_capacity(VOICE_COUNT),
            min_impact: tuning.min_impact,
            max_volume: tuning.max_volume,
            volume_floor: tuning.volume_floor,
        }
    }

    /// Pick up new volume mapping knobs after a tuning reload.
    pub fn configure(&mut self, tuning: &Tuning) {
        self.min_impact = tuning.min_impact;
        self.max_volume = tuning.max_volume;
        self.volume_floor = tuning.volume_floor;
    }

    /// Drop commands queued during the previous step.
    pub fn begin_frame(&mut self) {
        self.queue.clear();
    }

    /// Host callback: the given voice finished playing and is idle again.
    /// Unknown indices are ignored.
    pub fn voice_ended(&mut self, voice: usize) {
        if let Some(slot) = self.busy.get_mut(voice) {
            *slot = false;
        }
    }

    /// Commands queued since `begin_frame`.
    pub fn queued(&self) -> &[Playback] {
        &self.queue
    }

    pub fn idle_count(&self) -> usize {
        self.busy.iter().filter(|b| !**b).count()
    }
}

impl AudioSink for VoicePool {
    fn play_impact(&mut self, velocity: f32) {
        let volume = ((velocity - self.min_impact) / 10.0).clamp(0.0, self.max_volume);
        // Inaudible impacts are suppressed rather than played at near-zero volume.
        if volume < self.volume_floor {
            return;
        }

        let Some(voice) = self.busy.iter().position(|b| !*b) else {
            return;
        };
        self.busy[voice] = true;
        self.queue.push(Playback {
            voice: voice as u32,
            volume,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> VoicePool {
        VoicePool::new(&Tuning::default())
    }

    #[test]
    fn impact_at_threshold_is_a_no_op() {
        let mut p = pool();
        p.play_impact(0.5);
        assert!(p.queued().is_empty());
        assert_eq!(p.idle_count(), VOICE_COUNT);
    }

    #[test]
    fn loud_impact_clamps_to_max_volume() {
        let mut p = pool();
        p.play_impact(10.5);
        assert_eq!(p.queued(), &[Playback { voice: 0, volume: 0.6 }]);
    }

    #[test]
    fn volume_is_linear_between_floor_and_ceiling() {
        let mut p = pool();
        p.play_impact(2.5);
        assert_eq!(p.queued()[0].volume, 0.2);
    }

    #[test]
    fn exhausted_pool_drops_impacts() {
        let mut p = pool();
        for _ in 0..VOICE_COUNT {
            p.play_impact(5.0);
        }
        assert_eq!(p.queued().len(), VOICE_COUNT);
        assert_eq!(p.idle_count(), 0);

        p.play_impact(5.0);
        assert_eq!(p.queued().len(), VOICE_COUNT);
    }

    #[test]
    fn ended_voices_are_reclaimed_lowest_first() {
        let mut p = pool();
        for _ in 0..VOICE_COUNT {
            p.play_impact(5.0);
        }
        p.voice_ended(3);
        p.voice_ended(6);
        p.begin_frame();

        p.play_impact(5.0);
        assert_eq!(p.queued()[0].voice, 3);
    }

    #[test]
    fn unknown_voice_index_is_ignored() {
        let mut p = pool();
        p.voice_ended(VOICE_COUNT + 10);
        assert_eq!(p.idle_count(), VOICE_COUNT);
    }
}
