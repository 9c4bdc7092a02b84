//! Feedback domain: pushes tick results to visuals, animator and cue listeners.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::LevelSession;
use crate::feedback::{
    CueRng, FeedbackCue, FeedbackTuning, SquashStretch, VisualRoot, VisualSignals,
};
use crate::movement::{
    AnimatorParams, CharacterMotor, ControllerAction, ControllerActive, ControllerCommand, Player,
};

pub(crate) fn seed_cue_rng(
    mut commands: Commands,
    tuning: Res<FeedbackTuning>,
    session: Option<Res<LevelSession>>,
) {
    let seed = tuning
        .cue_seed
        .or_else(|| session.map(|session| session.seed))
        .unwrap_or_default();
    commands.insert_resource(CueRng::from_seed(seed));
}

pub(crate) fn publish_tick_feedback(
    tuning: Res<FeedbackTuning>,
    mut rng: ResMut<CueRng>,
    mut controllers: Query<
        (
            Entity,
            &CharacterMotor,
            &ControllerActive,
            Option<&mut AnimatorParams>,
        ),
        With<Player>,
    >,
    mut cues: MessageWriter<FeedbackCue>,
) {
    for (entity, motor, active, animator) in &mut controllers {
        // Frozen controllers did not tick; their last report is stale.
        if !active.0 {
            continue;
        }
        let report = &motor.last_report;

        match animator {
            Some(mut params) => *params = report.animator,
            None => warn_once!("[MOVEMENT] Controller {:?} has no animator parameters", entity),
        }

        for kind in report.cues() {
            cues.write(FeedbackCue {
                entity,
                kind,
                pitch: rng.pitch(tuning.pitch_variation),
            });
        }
    }
}

/// Players no visual root points at.
pub fn players_without_visual_root(
    players: impl IntoIterator<Item = Entity>,
    owners: &[Entity],
) -> Vec<Entity> {
    players
        .into_iter()
        .filter(|player| !owners.contains(player))
        .collect()
}

pub(crate) fn drive_visual_roots(
    time: Res<Time>,
    tuning: Res<FeedbackTuning>,
    players: Query<Entity, With<Player>>,
    owners: Query<(&CharacterMotor, &ControllerActive, &Transform), Without<VisualRoot>>,
    mut roots: Query<(&VisualRoot, &mut SquashStretch, &mut Transform)>,
) {
    let dt = time.delta_secs();

    let owned: Vec<Entity> = roots.iter().map(|(root, _, _)| root.owner).collect();
    for player in players_without_visual_root(&players, &owned) {
        warn_once!(
            "[MOVEMENT] Controller {:?} has no visual root, squash and tilt skipped",
            player
        );
    }

    for (root, mut squash, mut transform) in &mut roots {
        let Ok((motor, active, owner_transform)) = owners.get(root.owner) else {
            warn_once!(
                "[MOVEMENT] Visual root owner {:?} has no controller, visuals skipped",
                root.owner
            );
            continue;
        };
        if !active.0 {
            continue;
        }

        let report = &motor.last_report;
        let signals = VisualSignals {
            moving: report.moving,
            grounded: report.grounded,
            jumped: report.jump.is_some(),
            landed: report.landed,
            dash_started: report.dash_started,
            ground_normal: report
                .ground_normal
                .map(|normal| owner_transform.rotation.inverse() * normal),
        };
        let pose = squash.update(&tuning, &signals, dt);

        transform.scale = pose.scale;
        transform.translation = pose.offset;
        transform.rotation = pose.tilt;
    }
}

pub(crate) fn reset_visuals_on_command(
    mut commands: MessageReader<ControllerCommand>,
    mut roots: Query<(&VisualRoot, &mut SquashStretch, &mut Transform)>,
) {
    for command in commands.read() {
        if command.action != ControllerAction::ResetVelocity {
            continue;
        }
        for (root, mut squash, mut transform) in &mut roots {
            if root.owner != command.target {
                continue;
            }
            squash.reset();
            let pose = squash.pose();
            transform.scale = pose.scale;
            transform.translation = pose.offset;
            transform.rotation = pose.tilt;
        }
    }
}
