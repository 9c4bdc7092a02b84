//! Feedback domain: one-shot cues for audio and effects collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::movement::CueKind;

/// A cue raised by a controller tick.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackCue {
    pub entity: Entity,
    pub kind: CueKind,
    /// Playback pitch multiplier, jittered around 1.
    pub pitch: f32,
}

impl Message for FeedbackCue {}

/// Seeded generator for cue jitter so sessions replay identically.
#[derive(Resource)]
pub struct CueRng(pub ChaCha8Rng);

impl CueRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Pitch in `[1 - variation, 1 + variation]`.
    pub fn pitch(&mut self, variation: f32) -> f32 {
        let variation = variation.abs();
        if variation == 0.0 {
            return 1.0;
        }
        1.0 + self.0.random_range(-variation..=variation)
    }
}
