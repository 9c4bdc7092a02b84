//! Movement domain: applies controller commands between ticks.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    AbilityFlags, BodyEffect, CharacterMotor, ControllerAction, ControllerActive,
    ControllerCommand, apply_action,
};

pub(crate) fn apply_controller_commands(
    mut commands: MessageReader<ControllerCommand>,
    mut query: Query<(
        &mut CharacterMotor,
        &mut AbilityFlags,
        &mut ControllerActive,
        &mut LinearVelocity,
    )>,
) {
    for command in commands.read() {
        let Ok((mut motor, mut abilities, mut active, mut velocity)) =
            query.get_mut(command.target)
        else {
            // Camera-only commands may target anything.
            if !matches!(command.action, ControllerAction::SetCameraActive(_)) {
                warn!(
                    "[MOVEMENT] Command {:?} targets {:?}, which has no controller",
                    command.action, command.target
                );
            }
            continue;
        };

        let effect = apply_action(command.action, &mut motor, &mut abilities, &mut active);
        if effect == BodyEffect::ZeroVelocity {
            velocity.0 = Vec3::ZERO;
        }

        match command.action {
            ControllerAction::SetAbility(ability, enabled) => debug!(
                "[MOVEMENT] Ability {} set to {} on {:?}",
                ability.label(),
                enabled,
                command.target
            ),
            ControllerAction::SetActive(enabled) => info!(
                "[MOVEMENT] Controller {:?} {}",
                command.target,
                if enabled { "enabled" } else { "disabled" }
            ),
            ControllerAction::ResetVelocity | ControllerAction::SetCameraActive(_) => {}
        }
    }
}
