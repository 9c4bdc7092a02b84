//! Feedback domain: squash, stretch, walk bob and surface tilt of the visual root.
//!
//! Everything here is derived from the controller's tick report and never
//! feeds back into movement.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::easing::relax_factor;

/// Visual feedback tuning. Amounts are scale deltas, durations in seconds.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTuning {
    pub walk_squash_amount: f32,
    /// Walk bob angular speed in radians per second.
    pub walk_squash_speed: f32,
    pub jump_squash_amount: f32,
    pub jump_squash_duration: f32,
    pub dash_stretch_amount: f32,
    pub dash_stretch_duration: f32,
    /// Per-second rate for relaxing back to rest and for tilt.
    pub relax_rate: f32,
    /// A relaxing squash snaps to rest once this close.
    pub snap_threshold: f32,
    /// Cue pitch is `1 +- pitch_variation`.
    pub pitch_variation: f32,
    pub cue_seed: Option<u64>,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            walk_squash_amount: 0.05,
            walk_squash_speed: 6.0,
            jump_squash_amount: 0.3,
            jump_squash_duration: 0.15,
            dash_stretch_amount: 0.2,
            dash_stretch_duration: 0.2,
            relax_rate: 10.0,
            snap_threshold: 0.01,
            pitch_variation: 0.1,
            cue_seed: None,
        }
    }
}

/// Phase of a timed deformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulsePhase {
    #[default]
    Rest,
    /// First half: rest pose toward the deformed pose.
    Compress,
    /// Second half: deformed pose toward the overshoot pose.
    Overshoot,
    /// Past the duration, easing back to rest.
    Relax,
}

/// A restartable timed deformation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pulse {
    pub phase: PulsePhase,
    pub elapsed: f32,
}

impl Pulse {
    pub fn restart(&mut self) {
        self.phase = PulsePhase::Compress;
        self.elapsed = 0.0;
    }

    pub fn stop(&mut self) {
        self.phase = PulsePhase::Rest;
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.phase != PulsePhase::Rest
    }

    /// Advance by `dt` and return normalized progress through `duration`.
    fn advance(&mut self, dt: f32, duration: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        let t = if duration > 0.0 {
            self.elapsed / duration
        } else {
            1.0
        };
        self.phase = if t < 0.5 {
            PulsePhase::Compress
        } else if t < 1.0 {
            PulsePhase::Overshoot
        } else {
            PulsePhase::Relax
        };
        t
    }
}

/// What the visual driver reacts to this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualSignals {
    pub moving: bool,
    pub grounded: bool,
    pub jumped: bool,
    pub landed: bool,
    pub dash_started: bool,
    /// Ground normal in the owner's local space, when grounded.
    pub ground_normal: Option<Vec3>,
}

/// Local transform of the visual root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPose {
    pub scale: Vec3,
    pub offset: Vec3,
    pub tilt: Quat,
}

/// Deformation state of one visual root.
#[derive(Component, Debug, Clone)]
pub struct SquashStretch {
    pub rest_scale: Vec3,
    pub scale: Vec3,
    pub offset: Vec3,
    pub tilt: Quat,
    /// Walk bob clock.
    pub clock: f32,
    pub squash: Pulse,
    pub dash_stretch: Pulse,
}

impl SquashStretch {
    pub fn new(rest_scale: Vec3) -> Self {
        Self {
            rest_scale,
            scale: rest_scale,
            offset: Vec3::ZERO,
            tilt: Quat::IDENTITY,
            clock: 0.0,
            squash: Pulse::default(),
            dash_stretch: Pulse::default(),
        }
    }

    pub fn pose(&self) -> VisualPose {
        VisualPose {
            scale: self.scale,
            offset: self.offset,
            tilt: self.tilt,
        }
    }

    /// Drop every running effect and return to the rest pose.
    pub fn reset(&mut self) {
        self.scale = self.rest_scale;
        self.offset = Vec3::ZERO;
        self.tilt = Quat::IDENTITY;
        self.squash.stop();
        self.dash_stretch.stop();
    }

    pub fn update(&mut self, tuning: &FeedbackTuning, signals: &VisualSignals, dt: f32) -> VisualPose {
        let rest = self.rest_scale;
        let relax = relax_factor(tuning.relax_rate, dt);
        self.clock += dt.max(0.0);

        // New triggers restart from the rest pose instead of compounding.
        if signals.jumped || signals.landed {
            self.squash.restart();
            self.scale = rest;
            self.offset = Vec3::ZERO;
        }
        if signals.dash_started {
            self.dash_stretch.restart();
            self.scale = rest;
        }

        let effects_running = self.squash.is_active() || self.dash_stretch.is_active();
        if !effects_running {
            if signals.moving && signals.grounded {
                let cycle = (self.clock * tuning.walk_squash_speed).sin();
                self.scale = rest + Vec3::Y * cycle * tuning.walk_squash_amount;
                self.offset = Vec3::Y * (rest.y - self.scale.y) * 0.5;
            } else {
                self.scale = self.scale.lerp(rest, relax);
                self.offset = self.offset.lerp(Vec3::ZERO, relax);
            }
        }

        if self.squash.is_active() {
            let squashed = rest - Vec3::Y * tuning.jump_squash_amount;
            let stretched = rest + Vec3::Y * tuning.jump_squash_amount;
            let t = self.squash.advance(dt, tuning.jump_squash_duration);
            match self.squash.phase {
                PulsePhase::Compress => self.scale = rest.lerp(squashed, t * 2.0),
                PulsePhase::Overshoot => self.scale = squashed.lerp(stretched, (t - 0.5) * 2.0),
                PulsePhase::Relax | PulsePhase::Rest => {
                    self.scale = self.scale.lerp(rest, relax);
                    self.offset = self.offset.lerp(Vec3::ZERO, relax);
                    if (self.scale.y - rest.y).abs() < tuning.snap_threshold {
                        self.scale = rest;
                        self.offset = Vec3::ZERO;
                        self.squash.stop();
                    }
                }
            }
        }

        if self.dash_stretch.is_active() {
            let stretched = rest + Vec3::Z * tuning.dash_stretch_amount;
            let t = self
                .dash_stretch
                .advance(dt, tuning.dash_stretch_duration);
            match self.dash_stretch.phase {
                PulsePhase::Compress => self.scale = rest.lerp(stretched, t * 2.0),
                PulsePhase::Overshoot => self.scale = stretched.lerp(rest, (t - 0.5) * 2.0),
                PulsePhase::Relax | PulsePhase::Rest => {
                    self.scale = rest;
                    self.dash_stretch.stop();
                }
            }
        }

        let tilt_target = signals
            .ground_normal
            .filter(|_| signals.grounded)
            .and_then(|normal| normal.try_normalize())
            .map(|normal| Quat::from_rotation_arc(Vec3::Y, normal))
            .unwrap_or(Quat::IDENTITY);
        self.tilt = self.tilt.slerp(tilt_target, relax);

        self.pose()
    }
}
