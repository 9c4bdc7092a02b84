//! Camera domain: third-person follow rig wiring and public exports.

mod rig;
mod systems;


pub use rig::{CameraPose, CameraRig, CameraTuning, LOOK_SCALE};

use bevy::prelude::*;

use crate::camera::systems::{
    apply_camera_commands, capture_cursor, read_look_input, toggle_cursor_capture,
    update_follow_camera,
};
use crate::core::GameState;
use crate::movement::MovementSet;

/// Marker for the camera entity driven by a [`CameraRig`].
#[derive(Component, Debug)]
pub struct FollowCamera;

/// Look delta sampled this frame (x right, y down).
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LookInput(pub Vec2);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<LookInput>()
            .add_systems(OnEnter(GameState::Playing), capture_cursor)
            .add_systems(
                Update,
                (toggle_cursor_capture, read_look_input)
                    .chain()
                    .in_set(MovementSet::Input),
            )
            .add_systems(Update, apply_camera_commands.in_set(MovementSet::Commands))
            .add_systems(
                Update,
                update_follow_camera
                    .after(MovementSet::Motor)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
