//! Debug domain: hotkeys and an info overlay for tuning the controller.
//!
//! Features:
//! - Toggle abilities (Ctrl+1..6)
//! - Reset velocity (Ctrl+R)
//! - Freeze the controller or the camera (Ctrl+P, Ctrl+C)
//! - Controller info overlay (F1)

mod state;
mod systems;
mod ui;


pub use state::{DebugState, ability_for_key, format_controller_info};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, log_area_entries, log_feedback_cues, toggle_debug_info,
    update_debug_info_overlay, update_status_message,
};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_info, handle_debug_hotkeys)
                    .chain()
                    .in_set(MovementSet::Input),
            )
            .add_systems(
                Update,
                (
                    update_status_message,
                    update_debug_info_overlay,
                    log_feedback_cues,
                    log_area_entries,
                )
                    .after(MovementSet::Motor),
            );
    }
}
