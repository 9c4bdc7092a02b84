//! Feedback domain: visual deformation, animator parameters and cues.

mod cues;
mod squash;
mod systems;


pub use cues::{CueRng, FeedbackCue};
pub use squash::{FeedbackTuning, PulsePhase, SquashStretch, VisualSignals};
pub use systems::players_without_visual_root;

use bevy::prelude::*;

use crate::core::{GameState, begin_level_session};
use crate::feedback::systems::{
    drive_visual_roots, publish_tick_feedback, reset_visuals_on_command, seed_cue_rng,
};
use crate::movement::MovementSet;

/// Child entity holding the mesh of a controller; deformed, never simulated.
#[derive(Component, Debug)]
pub struct VisualRoot {
    pub owner: Entity,
}

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedbackTuning>()
            .insert_resource(CueRng::from_seed(0))
            .add_message::<FeedbackCue>()
            .add_systems(
                OnEnter(GameState::Playing),
                seed_cue_rng.after(begin_level_session),
            )
            .add_systems(
                Update,
                reset_visuals_on_command.in_set(MovementSet::Commands),
            )
            .add_systems(
                Update,
                (publish_tick_feedback, drive_visual_roots)
                    .after(MovementSet::Motor)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
