//! Shared easing helpers for the controller and camera.
//!
//! All helpers are frame-delta driven and allocation free. `smooth_damp` is a
//! critically damped spring (no overshoot past the target) that carries its
//! velocity between calls, so callers own the velocity scalar.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Smallest smoothing time accepted; keeps `2 / smooth_time` finite.
const MIN_SMOOTH_TIME: f32 = 1.0e-4;

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist <= f32::EPSILON {
        return target;
    }
    current + delta / dist * max_delta.max(0.0)
}

/// Critically damped approach of `current` toward `target`.
///
/// Uses the usual cubic approximation of `exp(-omega * dt)` with
/// `omega = 2 / smooth_time`. If the step would cross the target, the result
/// is pinned to the target and the velocity is zeroed out of the crossing.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Pinned to the target when the spring would carry us past it.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Shortest signed angle (radians) from `from` to `to`, in `[-PI, PI]`.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    delta
}

/// `smooth_damp` over angles in radians, always taking the short way around.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Yaw (radians about +Y) that points a Bevy-forward (-Z) model along `planar`.
///
/// Returns `None` when the planar vector is too short to define a heading.
pub fn yaw_from_planar(planar: Vec3, min_len: f32) -> Option<f32> {
    let flat = Vec2::new(planar.x, planar.z);
    if flat.length() < min_len.max(f32::EPSILON) {
        return None;
    }
    Some((-flat.x).atan2(-flat.y))
}

/// Bevy-forward (-Z) direction for a yaw produced by [`yaw_from_planar`].
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Vec3::NEG_Z
}

/// Exponential-feel lerp factor for "rate per second" relaxations, clamped to 1.
#[inline]
pub fn relax_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}
