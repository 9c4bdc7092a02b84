//! Level domain: demo course, player spawn and area triggers.

mod components;
mod layout;
mod spawn;
mod systems;


pub use components::{AreaSensor, LevelEntity};
pub use layout::{AREAS, BlockKind, COURSE, PLAYER_SPAWN};
pub use systems::record_area_entry;

use bevy::prelude::*;

use crate::core::{GameState, begin_level_session};
use crate::level::spawn::{despawn_level, spawn_course, spawn_player};
use crate::level::systems::track_area_entries;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_course, spawn_player).after(begin_level_session),
        )
        .add_systems(OnExit(GameState::Playing), despawn_level)
        .add_systems(
            Update,
            track_area_entries.run_if(in_state(GameState::Playing)),
        );
    }
}
