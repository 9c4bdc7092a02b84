//! Content domain: data-driven controller tuning.

mod data;
mod loader;
mod validation;


pub use data::{CONTROLLER_SCHEMA_VERSION, ControllerConfig};
pub use loader::{ContentLoadError, load_controller_config, parse_single};
pub use validation::{TuningError, validate_config};

use bevy::prelude::*;

use crate::content::loader::load_controller_content;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_controller_content);
    }
}
