//! Movement domain: controller plugin wiring and public exports.

mod abilities;
mod commands;
mod components;
mod controller;
mod dash;
mod locomotion;
mod physics;
mod resources;
mod systems;
mod timers;
mod vertical;

#[cfg(test)]
mod tests;

pub use abilities::{Ability, AbilityFlags, StartingAbilities};
pub use commands::{BodyEffect, ControllerAction, ControllerCommand, apply_action};
pub use components::{
    AnimatorParams, CharacterMotor, ControllerActive, GameLayer, Ground, GroundProbe,
    MovementState, Player, Wall,
};
pub use controller::{CueKind, MotorFrame, TickReport};
pub use dash::DashState;
pub use physics::{AvianQueries, CharacterBody, PhysicsQueries, SweepHit, VelocityBody};
pub use resources::{ActiveView, MovementInput, MovementTuning, ViewBasis};
pub use timers::{Countdown, TimerBank};
pub use vertical::{JumpKind, jump_impulse};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{apply_controller_commands, drive_motors, read_input};

/// Frame phases every controller-facing system is ordered against.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Sample devices into input resources.
    Input,
    /// Apply commands from pickups, death handling and debug tools.
    Commands,
    /// Run the controller tick.
    Motor,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ActiveView>()
            .init_resource::<StartingAbilities>()
            .add_message::<ControllerCommand>()
            .configure_sets(
                Update,
                (MovementSet::Input, MovementSet::Commands, MovementSet::Motor).chain(),
            )
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(
                Update,
                apply_controller_commands.in_set(MovementSet::Commands),
            )
            .add_systems(
                Update,
                drive_motors
                    .in_set(MovementSet::Motor)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
