//! Core domain: app state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Loading tuning content.
    #[default]
    Boot,
    /// Level spawned and controllers ticking.
    Playing,
}
