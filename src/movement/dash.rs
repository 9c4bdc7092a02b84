//! Movement domain: dash trigger and override.

use bevy::prelude::*;

use crate::easing::forward_from_yaw;
use crate::movement::{AbilityFlags, MovementState, MovementTuning, TimerBank};

/// Velocity captured when the current dash started.
///
/// Duration and cooldown live in the [`TimerBank`]; the cooldown starts with
/// the dash, so the two always overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    pub velocity: Vec3,
}

pub(crate) fn can_dash(timers: &TimerBank, abilities: &AbilityFlags) -> bool {
    abilities.can_dash && !timers.dash.is_running() && !timers.dash_cooldown.is_running()
}

/// Start a dash along the input direction, or along the heading when there is
/// no input. Returns false if the dash is gated.
pub(crate) fn try_start_dash(
    dash: &mut DashState,
    timers: &mut TimerBank,
    state: &MovementState,
    tuning: &MovementTuning,
    abilities: &AbilityFlags,
    input_direction: Vec3,
) -> bool {
    if !can_dash(timers, abilities) {
        return false;
    }

    let direction = if input_direction.length() > tuning.input_deadzone {
        input_direction.normalize_or_zero()
    } else {
        forward_from_yaw(state.yaw)
    };

    dash.velocity = direction * tuning.dash_speed;
    timers.dash.start(tuning.dash_duration);
    timers.dash_cooldown.start(tuning.dash_cooldown);
    debug!(
        "[MOVEMENT] Dash: direction={:?}, duration={:.2}, cooldown={:.2}",
        direction, tuning.dash_duration, tuning.dash_cooldown
    );
    true
}
