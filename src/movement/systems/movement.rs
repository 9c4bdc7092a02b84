//! Movement domain: drives every active controller one tick per frame.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AbilityFlags, ActiveView, AvianQueries, CharacterMotor, ControllerActive, GroundProbe,
    MotorFrame, MovementInput, MovementTuning, Player, VelocityBody,
};

pub(crate) fn drive_motors(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    view: Res<ActiveView>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut CharacterMotor,
            &mut LinearVelocity,
            &AbilityFlags,
            &ControllerActive,
            Option<&GroundProbe>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut motor, mut velocity, abilities, active, probe) in &mut query {
        let frame = MotorFrame {
            tuning: &tuning,
            abilities,
            input: &input,
            view: view.0,
            ground_probe: probe.copied(),
            dt,
        };
        let physics = AvianQueries::solid(&spatial_query, [entity]);
        let mut body = VelocityBody::new(transform.translation, &mut velocity, dt);
        if motor
            .tick_if_active(active.0, &frame, &physics, &mut body)
            .is_none()
        {
            continue;
        }

        transform.rotation = Quat::from_rotation_y(motor.state.yaw);
    }
}
