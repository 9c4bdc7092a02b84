//! Content domain: data definitions for the controller tuning file.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::feedback::FeedbackTuning;
use crate::movement::{AbilityFlags, MovementTuning};

/// Schema version this build reads.
pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

/// Everything `controller.ron` can set. Omitted sections and fields keep
/// their compiled defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub camera: CameraTuning,
    pub feedback: FeedbackTuning,
    /// Abilities a freshly spawned controller starts with.
    pub abilities: AbilityFlags,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: CONTROLLER_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            camera: CameraTuning::default(),
            feedback: FeedbackTuning::default(),
            abilities: AbilityFlags::default(),
        }
    }
}

impl ControllerConfig {
    /// Returns a summary of the loaded tuning for logging.
    pub fn summary(&self) -> String {
        format!(
            "Controller tuning loaded (schema v{}):\n\
             - Walk speed: {}\n\
             - Jump height: {}\n\
             - Gravity: {}\n\
             - Dash: {}s, cooldown {}s\n\
             - Camera distance: {}..{}\n\
             - Starting abilities: {:?}",
            self.schema_version,
            self.movement.walk_speed,
            self.movement.jump_height,
            self.movement.gravity,
            self.movement.dash_duration,
            self.movement.dash_cooldown,
            self.camera.min_distance,
            self.camera.distance,
            self.abilities,
        )
    }
}
