//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Movement tuning. Distances in metres, times in seconds, gravity in m/s^2.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub dash_speed: f32,
    pub jump_height: f32,
    /// Signed; must be negative.
    pub gravity: f32,
    /// Vertical velocity a grounded, non-rising controller is pinned to.
    pub resting_vertical_velocity: f32,
    pub slow_fall_gravity_scale: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Input magnitude at or below this counts as no input.
    pub input_deadzone: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub ground_probe_radius: f32,
    /// Distance below the body origin of the ground probe centre.
    pub ground_probe_depth: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Zero vertical velocity and suspend gravity and jumps while dashing.
    pub dash_locks_vertical: bool,
    pub rotation_smooth_time: f32,
    pub step_interval: f32,
    /// Height above the body origin the surface-normal ray starts from.
    pub surface_probe_lift: f32,
    pub surface_probe_length: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_multiplier: 1.5,
            dash_speed: 12.0,
            jump_height: 2.0,
            gravity: -9.81,
            resting_vertical_velocity: -2.0,
            slow_fall_gravity_scale: 0.3,
            acceleration: 10.0,
            deceleration: 15.0,
            input_deadzone: 0.1,
            coyote_time: 0.15,
            jump_buffer_time: 0.15,
            ground_probe_radius: 0.3,
            ground_probe_depth: 0.9,
            dash_duration: 0.3,
            dash_cooldown: 1.0,
            dash_locks_vertical: false,
            rotation_smooth_time: 0.1,
            step_interval: 0.5,
            surface_probe_lift: 0.5,
            surface_probe_length: 2.0,
        }
    }
}

impl MovementTuning {
    /// Launch speed that peaks at `jump_height` under unscaled gravity.
    pub fn jump_impulse(&self) -> f32 {
        super::vertical::jump_impulse(self.jump_height, self.gravity)
    }

    pub fn sprint_speed(&self) -> f32 {
        self.walk_speed * self.sprint_multiplier
    }
}

/// Abstract input sampled once per frame.
///
/// Buttons carry both a level (`*_held`) and a rising edge (`*_just_pressed`);
/// the edge must be true on exactly one tick per physical press.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
    pub sprint_held: bool,
}

/// Planar camera axes used to map the move stick into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl ViewBasis {
    /// Axes of an unrotated view: forward is -Z, right is +X.
    pub fn world() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
        }
    }

    /// Forward and right projected onto the ground plane and normalized.
    pub fn planar(&self) -> (Vec3, Vec3) {
        let flatten = |v: Vec3| Vec3::new(v.x, 0.0, v.z).normalize_or_zero();
        (flatten(self.forward), flatten(self.right))
    }

    /// World-space, un-normalized move direction for a stick value.
    pub fn move_direction(&self, axis: Vec2) -> Vec3 {
        let (forward, right) = self.planar();
        forward * axis.y + right * axis.x
    }
}

/// View basis published by the active follow camera, `None` until one exists.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActiveView(pub Option<ViewBasis>);
