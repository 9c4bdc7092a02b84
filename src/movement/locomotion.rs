//! Movement domain: camera-relative planar movement and heading.

use bevy::prelude::*;

use crate::easing::{move_towards, smooth_damp_angle, yaw_from_planar};
use crate::movement::{MovementState, MovementTuning};

/// Planar speed the controller eases toward this tick.
pub(crate) fn target_speed(tuning: &MovementTuning, sprinting: bool) -> f32 {
    if sprinting {
        tuning.sprint_speed()
    } else {
        tuning.walk_speed
    }
}

/// Accelerate toward `direction * speed`, or decelerate to rest when the
/// direction is inside the deadzone.
pub(crate) fn ease_planar_velocity(
    current: Vec3,
    direction: Vec3,
    speed: f32,
    tuning: &MovementTuning,
    dt: f32,
) -> Vec3 {
    if direction.length() > tuning.input_deadzone {
        let target = direction.normalize_or_zero() * speed;
        move_towards(current, target, tuning.acceleration * dt)
    } else {
        move_towards(current, Vec3::ZERO, tuning.deceleration * dt)
    }
}

/// Turn the heading toward the planar velocity. Too little velocity keeps the
/// current heading.
pub(crate) fn damp_heading(state: &mut MovementState, tuning: &MovementTuning, dt: f32) {
    let Some(target) = yaw_from_planar(state.horizontal_velocity, tuning.input_deadzone) else {
        return;
    };
    state.yaw = smooth_damp_angle(
        state.yaw,
        target,
        &mut state.yaw_velocity,
        tuning.rotation_smooth_time,
        dt,
    );
}
