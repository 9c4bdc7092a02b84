//! Core domain: app states and level session wiring.

mod events;
mod resources;
mod state;
mod systems;


pub use events::AreaEnteredEvent;
pub use resources::LevelSession;
pub use state::GameState;

pub(crate) use systems::begin_level_session;

use bevy::prelude::*;

use crate::core::systems::end_level_session;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<AreaEnteredEvent>()
            .add_systems(OnEnter(GameState::Playing), begin_level_session)
            .add_systems(OnExit(GameState::Playing), end_level_session);
    }
}
