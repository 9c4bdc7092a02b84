//! Movement domain: gravity, ground contact, coyote time and jumps.

use bevy::prelude::*;

use crate::movement::{AbilityFlags, MovementState, MovementTuning, TimerBank};

/// Which jump a tick performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Primary,
    Double,
}

/// Launch speed that peaks at `height` under `gravity` (negative).
pub fn jump_impulse(height: f32, gravity: f32) -> f32 {
    (height * -2.0 * gravity).max(0.0).sqrt()
}

/// Pin a grounded, falling controller to the resting velocity and give back
/// the double jump.
pub(crate) fn settle_on_ground(state: &mut MovementState, tuning: &MovementTuning) {
    if state.grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = tuning.resting_vertical_velocity;
        state.has_double_jumped = false;
    }
}

/// Slow-fall is a hold-to-glide after the double jump has been spent.
pub(crate) fn update_slow_fall(state: &mut MovementState, abilities: &AbilityFlags, held: bool) {
    state.is_slow_falling =
        !state.grounded && abilities.can_slow_fall && state.has_double_jumped && held;
}

pub(crate) fn integrate_gravity(state: &mut MovementState, tuning: &MovementTuning, dt: f32) {
    let scale = if state.is_slow_falling {
        tuning.slow_fall_gravity_scale
    } else {
        1.0
    };
    state.vertical_velocity += tuning.gravity * scale * dt;
}

/// Refill coyote time while standing, run it down otherwise.
///
/// Grounded is not enough: a controller still rising from a jump is not
/// refilled even if the probe still touches the ground. Refilling on every
/// grounded tick would let a second press within the first few rising ticks
/// fire another primary jump instead of a double jump.
pub(crate) fn refresh_coyote(
    state: &MovementState,
    timers: &mut TimerBank,
    tuning: &MovementTuning,
    dt: f32,
) {
    if state.grounded && state.vertical_velocity <= 0.0 {
        timers.coyote.start(tuning.coyote_time);
    } else {
        timers.coyote.tick(dt);
    }
}

/// Spend a buffered press on a primary or double jump if one is allowed.
pub(crate) fn resolve_jump(
    state: &mut MovementState,
    timers: &mut TimerBank,
    tuning: &MovementTuning,
    abilities: &AbilityFlags,
) -> Option<JumpKind> {
    if !timers.jump_buffer.is_running() {
        return None;
    }

    if abilities.can_jump && timers.coyote.is_running() {
        state.vertical_velocity = tuning.jump_impulse();
        timers.jump_buffer.clear();
        timers.coyote.clear();
        debug!(
            "[MOVEMENT] Jump: grounded={}, impulse={:.2}",
            state.grounded, state.vertical_velocity
        );
        return Some(JumpKind::Primary);
    }

    if abilities.can_double_jump && !state.has_double_jumped && !state.grounded {
        state.vertical_velocity = tuning.jump_impulse();
        state.has_double_jumped = true;
        timers.jump_buffer.clear();
        debug!("[MOVEMENT] Double jump: impulse={:.2}", state.vertical_velocity);
        return Some(JumpKind::Double);
    }

    None
}
