//! Debug domain: hotkeys, overlay and message logging.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::core::{AreaEnteredEvent, LevelSession};
use crate::debug::state::{DebugState, ability_for_key, format_controller_info};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::feedback::FeedbackCue;
use crate::movement::{
    AbilityFlags, CharacterMotor, ControllerAction, ControllerActive, ControllerCommand, Player,
};

const MESSAGE_SECONDS: f32 = 2.0;

/// Toggle the info overlay with F1 or backtick
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "[DEBUG] Info overlay {}",
            if debug_state.show_info { "shown" } else { "hidden" }
        );
    }
}

/// Handle keyboard shortcuts; every change goes out as a controller command
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<(Entity, &AbilityFlags, &ControllerActive), With<Player>>,
    rigs: Query<&CameraRig>,
    mut commands: MessageWriter<ControllerCommand>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let Some((player, abilities, active)) = player_query.iter().next() else {
        return;
    };

    // Ctrl+1..6: Toggle abilities
    for key in keyboard.get_just_pressed() {
        let Some(ability) = ability_for_key(*key) else {
            continue;
        };
        let enabled = !abilities.has(ability);
        commands.write(ControllerCommand::new(
            player,
            ControllerAction::SetAbility(ability, enabled),
        ));
        let msg = format!(
            "{} {}",
            ability.label(),
            if enabled { "enabled" } else { "disabled" }
        );
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, MESSAGE_SECONDS);
    }

    // Ctrl+R: Reset velocity, as a respawn would
    if keyboard.just_pressed(KeyCode::KeyR) {
        commands.write(ControllerCommand::new(player, ControllerAction::ResetVelocity));
        info!("[DEBUG] Velocity reset");
        debug_state.set_message("Velocity reset", MESSAGE_SECONDS);
    }

    // Ctrl+P: Freeze or resume the controller
    if keyboard.just_pressed(KeyCode::KeyP) {
        let enabled = !active.0;
        commands.write(ControllerCommand::new(
            player,
            ControllerAction::SetActive(enabled),
        ));
        debug_state.set_message(
            if enabled { "Controller resumed" } else { "Controller frozen" },
            MESSAGE_SECONDS,
        );
    }

    // Ctrl+C: Freeze or resume the follow camera
    if keyboard.just_pressed(KeyCode::KeyC) {
        let enabled = !rigs
            .iter()
            .find(|rig| rig.target == player)
            .is_some_and(|rig| rig.active);
        commands.write(ControllerCommand::new(
            player,
            ControllerAction::SetCameraActive(enabled),
        ));
        debug_state.set_message(
            if enabled { "Camera resumed" } else { "Camera frozen" },
            MESSAGE_SECONDS,
        );
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    session: Option<Res<LevelSession>>,
    player_query: Query<(&Transform, &CharacterMotor, &AbilityFlags), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, motor, abilities)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let area = session
            .as_deref()
            .and_then(|session| session.current_area.as_deref());
        let mut info = format_controller_info(
            transform.translation,
            &motor.state,
            abilities,
            motor.timers.dash_cooldown.remaining(),
            area,
        );
        if let Some((message, _)) = &debug_state.status_message {
            info.push('\n');
            info.push_str(message);
        }
        **text = info;
    }
}

pub(crate) fn log_feedback_cues(mut cues: MessageReader<FeedbackCue>) {
    for cue in cues.read() {
        debug!(
            "[DEBUG] Cue {:?} on {:?} (pitch {:.3})",
            cue.kind, cue.entity, cue.pitch
        );
    }
}

pub(crate) fn log_area_entries(mut entries: MessageReader<AreaEnteredEvent>) {
    for entry in entries.read() {
        debug!(
            "[DEBUG] Area {} entered (first visit: {})",
            entry.area, entry.first_visit
        );
    }
}
