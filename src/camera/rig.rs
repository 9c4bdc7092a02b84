//! Camera domain: orbit angles and the collision-aware distance solver.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::easing::smooth_damp;
use crate::movement::PhysicsQueries;

/// Look input is scaled by `sensitivity * LOOK_SCALE` degrees per unit.
pub const LOOK_SCALE: f32 = 0.01;

/// Follow camera tuning. Angles in degrees, distances in metres.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Preferred (and maximum) follow distance.
    pub distance: f32,
    pub min_distance: f32,
    /// Gap kept between the camera and an obstruction.
    pub collision_buffer: f32,
    /// Radius of the obstruction sweep.
    pub probe_radius: f32,
    pub smooth_time: f32,
    pub sensitivity: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Height of the orbit anchor above the target origin.
    pub anchor_height: f32,
    pub lock_cursor: bool,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            distance: 5.0,
            min_distance: 0.5,
            collision_buffer: 0.2,
            probe_radius: 0.2,
            smooth_time: 0.05,
            sensitivity: 20.0,
            min_pitch: -30.0,
            max_pitch: 70.0,
            anchor_height: 0.6,
            lock_cursor: true,
        }
    }
}

impl CameraTuning {
    /// `(min, max)` follow distance, ordered even if the tuning is not.
    pub fn distance_bounds(&self) -> (f32, f32) {
        let lo = self.min_distance.min(self.distance).max(0.0);
        let hi = self.min_distance.max(self.distance).max(0.0);
        (lo, hi)
    }

    pub fn pitch_bounds(&self) -> (f32, f32) {
        (
            self.min_pitch.min(self.max_pitch),
            self.min_pitch.max(self.max_pitch),
        )
    }
}

/// Where the camera ends up this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// Orbit state of one follow camera.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    /// Entity the camera orbits.
    pub target: Entity,
    /// Degrees; positive turns right.
    pub yaw: f32,
    /// Degrees; positive looks down.
    pub pitch: f32,
    /// Smoothed follow distance.
    pub distance: f32,
    pub distance_velocity: f32,
    /// Disabled rigs are left where they are.
    pub active: bool,
}

impl CameraRig {
    pub fn new(target: Entity, tuning: &CameraTuning) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 15.0,
            distance: tuning.distance_bounds().1,
            distance_velocity: 0.0,
            active: true,
        }
    }

    /// Accumulate a look delta (x right, y down).
    pub fn apply_look(&mut self, look: Vec2, tuning: &CameraTuning) {
        let scale = tuning.sensitivity * LOOK_SCALE;
        let (lo, hi) = tuning.pitch_bounds();
        self.yaw = (self.yaw + look.x * scale).rem_euclid(360.0);
        self.pitch = (self.pitch + look.y * scale).clamp(lo, hi);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            -self.pitch.to_radians(),
            0.0,
        )
    }

    /// Enable or disable the rig. Re-enabling snaps back to the full
    /// distance.
    pub fn set_active(&mut self, active: bool, tuning: &CameraTuning) {
        if active && !self.active {
            self.distance = tuning.distance_bounds().1;
            self.distance_velocity = 0.0;
        }
        self.active = active;
    }

    /// Distance the camera should settle at given this tick's obstruction.
    pub fn target_distance<Q: PhysicsQueries>(
        &self,
        anchor: Vec3,
        tuning: &CameraTuning,
        physics: &Q,
    ) -> f32 {
        let (lo, hi) = tuning.distance_bounds();
        let Ok(back) = Dir3::new(-(self.rotation() * Vec3::NEG_Z)) else {
            return hi;
        };
        match physics.sweep_sphere(anchor, tuning.probe_radius, back, hi) {
            Some(hit) => (hit.distance - tuning.collision_buffer).clamp(lo, hi),
            None => hi,
        }
    }

    /// Advance the smoothed distance one tick and return the camera pose.
    pub fn solve<Q: PhysicsQueries>(
        &mut self,
        anchor: Vec3,
        tuning: &CameraTuning,
        physics: &Q,
        dt: f32,
    ) -> CameraPose {
        let (lo, hi) = tuning.distance_bounds();
        let target = self.target_distance(anchor, tuning, physics);
        self.distance = smooth_damp(
            self.distance,
            target,
            &mut self.distance_velocity,
            tuning.smooth_time,
            dt,
        )
        .clamp(lo, hi);

        let rotation = self.rotation();
        let forward = rotation * Vec3::NEG_Z;
        CameraPose {
            translation: anchor - forward * self.distance,
            rotation,
        }
    }
}
