//! Camera domain: look input, rig update and cursor capture.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::camera::{CameraRig, CameraTuning, FollowCamera, LookInput};
use crate::movement::{ActiveView, AvianQueries, ControllerAction, ControllerCommand, ViewBasis};

pub(crate) fn read_look_input(
    motion: Res<AccumulatedMouseMotion>,
    cursor: Query<&CursorOptions, With<PrimaryWindow>>,
    mut look: ResMut<LookInput>,
) {
    // Only steer while the cursor is captured.
    let captured = cursor
        .single()
        .map(|options| options.grab_mode != CursorGrabMode::None)
        .unwrap_or(true);
    look.0 = if captured { motion.delta } else { Vec2::ZERO };
}

pub(crate) fn update_follow_camera(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    look: Res<LookInput>,
    spatial_query: SpatialQuery,
    targets: Query<&Transform, Without<FollowCamera>>,
    mut rigs: Query<(&mut CameraRig, &mut Transform), With<FollowCamera>>,
    mut view: ResMut<ActiveView>,
) {
    let dt = time.delta_secs();

    for (mut rig, mut transform) in &mut rigs {
        if !rig.active {
            continue;
        }

        let Ok(target) = targets.get(rig.target) else {
            warn_once!("[CAMERA] Follow target {:?} has no transform", rig.target);
            continue;
        };

        rig.apply_look(look.0, &tuning);
        let anchor = target.translation + Vec3::Y * tuning.anchor_height;
        let physics = AvianQueries::solid(&spatial_query, [rig.target]);
        let pose = rig.solve(anchor, &tuning, &physics, dt);

        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
        view.0 = Some(ViewBasis::from_rotation(pose.rotation));
    }
}

pub(crate) fn apply_camera_commands(
    mut commands: MessageReader<ControllerCommand>,
    tuning: Res<CameraTuning>,
    mut rigs: Query<&mut CameraRig>,
) {
    for command in commands.read() {
        let ControllerAction::SetCameraActive(active) = command.action else {
            continue;
        };
        for mut rig in &mut rigs {
            if rig.target == command.target {
                rig.set_active(active, &tuning);
                info!(
                    "[CAMERA] Rig following {:?} {}",
                    command.target,
                    if active { "enabled" } else { "disabled" }
                );
            }
        }
    }
}

pub(crate) fn capture_cursor(
    tuning: Res<CameraTuning>,
    mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !tuning.lock_cursor {
        return;
    }
    if let Ok(mut options) = cursor.single_mut() {
        options.grab_mode = CursorGrabMode::Locked;
        options.visible = false;
    }
}

/// Escape releases the cursor, a left click captures it again.
pub(crate) fn toggle_cursor_capture(
    tuning: Res<CameraTuning>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !tuning.lock_cursor {
        return;
    }
    let Ok(mut options) = cursor.single_mut() else {
        return;
    };
    if keyboard.just_pressed(KeyCode::Escape) {
        options.grab_mode = CursorGrabMode::None;
        options.visible = true;
    } else if mouse.just_pressed(MouseButton::Left) {
        options.grab_mode = CursorGrabMode::Locked;
        options.visible = false;
    }
}
