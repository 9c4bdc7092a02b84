//! Movement domain: commands external collaborators send to a controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{Ability, AbilityFlags, CharacterMotor, ControllerActive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAction {
    /// Grant or revoke one ability.
    SetAbility(Ability, bool),
    /// Zero motion state and clear slow-fall and tilt visuals.
    ResetVelocity,
    /// Freeze or resume the controller.
    SetActive(bool),
    /// Freeze or resume the follow camera tracking this controller.
    SetCameraActive(bool),
}

/// Applied between ticks, before the next controller update.
#[derive(Debug, Clone, Copy)]
pub struct ControllerCommand {
    pub target: Entity,
    pub action: ControllerAction,
}

impl Message for ControllerCommand {}

impl ControllerCommand {
    pub fn new(target: Entity, action: ControllerAction) -> Self {
        Self { target, action }
    }
}

/// What the physics body must do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEffect {
    Keep,
    ZeroVelocity,
}

/// Apply one action to a controller's own state. Camera actions are left to
/// the camera domain.
pub fn apply_action(
    action: ControllerAction,
    motor: &mut CharacterMotor,
    abilities: &mut AbilityFlags,
    active: &mut ControllerActive,
) -> BodyEffect {
    match action {
        ControllerAction::SetAbility(ability, enabled) => {
            abilities.set(ability, enabled);
            BodyEffect::Keep
        }
        ControllerAction::ResetVelocity => {
            motor.reset_velocity();
            BodyEffect::ZeroVelocity
        }
        ControllerAction::SetActive(enabled) => {
            active.0 = enabled;
            if enabled {
                BodyEffect::Keep
            } else {
                BodyEffect::ZeroVelocity
            }
        }
        ControllerAction::SetCameraActive(_) => BodyEffect::Keep,
    }
}
