//! Level domain: scene markers.

use bevy::prelude::*;

/// Everything spawned for the level; despawned when play ends.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Trigger volume that records a named area in the level session.
#[derive(Component, Debug, Clone)]
pub struct AreaSensor {
    pub name: String,
}
