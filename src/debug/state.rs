//! Debug domain: state and hotkey mapping for debug tooling.

use bevy::prelude::*;

use crate::movement::{Ability, AbilityFlags, MovementState};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the controller info overlay is shown
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, clearing it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Ability toggled by Ctrl+digit, in [`Ability::ALL`] order.
pub fn ability_for_key(key: KeyCode) -> Option<Ability> {
    let index = match key {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        _ => return None,
    };
    Ability::ALL.get(index).copied()
}

/// Overlay text for one controller.
pub fn format_controller_info(
    position: Vec3,
    state: &MovementState,
    abilities: &AbilityFlags,
    dash_cooldown: f32,
    area: Option<&str>,
) -> String {
    let enabled: Vec<&str> = Ability::ALL
        .iter()
        .filter(|ability| abilities.has(**ability))
        .map(|ability| ability.label())
        .collect();
    format!(
        "Pos: ({:.1}, {:.1}, {:.1})\nSpeed: {:.2}  Vy: {:.2}\nGrounded: {}  Sprint: {}  Glide: {}\nDash cooldown: {:.2}\nAbilities: {}\nArea: {}",
        position.x,
        position.y,
        position.z,
        state.horizontal_velocity.length(),
        state.vertical_velocity,
        state.grounded,
        state.is_sprinting,
        state.is_slow_falling,
        dash_cooldown,
        enabled.join(", "),
        area.unwrap_or("-"),
    )
}
