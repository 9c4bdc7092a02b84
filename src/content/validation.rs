//! Validation for controller tuning values.

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerConfig};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct TuningError {
    pub section: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {}", self.section, self.field, self.reason)
    }
}

/// Helper macro for checking a condition on one field
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $ok:expr, $reason:expr) => {
        if !$ok {
            $errors.push(TuningError {
                section: $section,
                field: $field,
                reason: $reason.to_string(),
            });
        }
    };
}

/// Helper macro for rejecting NaN and infinite values
macro_rules! check_finite {
    ($errors:expr, $section:expr, $owner:expr, [$($field:ident),* $(,)?]) => {
        $(
            check!(
                $errors,
                $section,
                stringify!($field),
                $owner.$field.is_finite(),
                "must be a finite number"
            );
        )*
    };
}

/// Validate every section of the tuning.
/// Returns a list of validation errors, empty if the tuning is usable.
///
/// Zero or negative durations are allowed; they expire on the next tick.
pub fn validate_config(config: &ControllerConfig) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check!(
        errors,
        "config",
        "schema_version",
        config.schema_version == CONTROLLER_SCHEMA_VERSION,
        format!(
            "is {}, this build reads {}",
            config.schema_version, CONTROLLER_SCHEMA_VERSION
        )
    );

    // Validate movement
    let movement = &config.movement;
    check_finite!(
        errors,
        "movement",
        movement,
        [
            walk_speed,
            sprint_multiplier,
            dash_speed,
            jump_height,
            gravity,
            resting_vertical_velocity,
            slow_fall_gravity_scale,
            acceleration,
            deceleration,
            input_deadzone,
            coyote_time,
            jump_buffer_time,
            ground_probe_radius,
            ground_probe_depth,
            dash_duration,
            dash_cooldown,
            rotation_smooth_time,
            step_interval,
            surface_probe_lift,
            surface_probe_length,
        ]
    );
    check!(errors, "movement", "gravity", movement.gravity < 0.0, "must be negative");
    check!(
        errors,
        "movement",
        "resting_vertical_velocity",
        movement.resting_vertical_velocity < 0.0,
        "must be negative to keep the ground probe in contact"
    );
    check!(
        errors,
        "movement",
        "slow_fall_gravity_scale",
        movement.slow_fall_gravity_scale > 0.0 && movement.slow_fall_gravity_scale < 1.0,
        "must be in (0, 1)"
    );
    check!(errors, "movement", "walk_speed", movement.walk_speed >= 0.0, "must not be negative");
    check!(
        errors,
        "movement",
        "sprint_multiplier",
        movement.sprint_multiplier >= 0.0,
        "must not be negative"
    );
    check!(errors, "movement", "dash_speed", movement.dash_speed >= 0.0, "must not be negative");
    check!(errors, "movement", "jump_height", movement.jump_height >= 0.0, "must not be negative");
    check!(errors, "movement", "acceleration", movement.acceleration > 0.0, "must be positive");
    check!(errors, "movement", "deceleration", movement.deceleration > 0.0, "must be positive");
    check!(
        errors,
        "movement",
        "input_deadzone",
        (0.0..1.0).contains(&movement.input_deadzone),
        "must be in [0, 1)"
    );
    check!(
        errors,
        "movement",
        "ground_probe_radius",
        movement.ground_probe_radius > 0.0,
        "must be positive"
    );
    check!(
        errors,
        "movement",
        "surface_probe_length",
        movement.surface_probe_length > 0.0,
        "must be positive"
    );

    // Validate camera
    let camera = &config.camera;
    check_finite!(
        errors,
        "camera",
        camera,
        [
            distance,
            min_distance,
            collision_buffer,
            probe_radius,
            smooth_time,
            sensitivity,
            min_pitch,
            max_pitch,
            anchor_height,
        ]
    );
    check!(errors, "camera", "distance", camera.distance > 0.0, "must be positive");
    check!(
        errors,
        "camera",
        "min_distance",
        camera.min_distance >= 0.0 && camera.min_distance <= camera.distance,
        format!("must be in [0, distance ({})]", camera.distance)
    );
    check!(
        errors,
        "camera",
        "collision_buffer",
        camera.collision_buffer >= 0.0,
        "must not be negative"
    );
    check!(errors, "camera", "probe_radius", camera.probe_radius >= 0.0, "must not be negative");
    check!(errors, "camera", "smooth_time", camera.smooth_time >= 0.0, "must not be negative");
    check!(
        errors,
        "camera",
        "min_pitch",
        camera.min_pitch <= camera.max_pitch,
        format!("must not exceed max_pitch ({})", camera.max_pitch)
    );
    check!(
        errors,
        "camera",
        "max_pitch",
        camera.min_pitch > -90.0 && camera.max_pitch < 90.0,
        "pitch range must stay inside (-90, 90) degrees"
    );

    // Validate feedback
    let feedback = &config.feedback;
    check_finite!(
        errors,
        "feedback",
        feedback,
        [
            walk_squash_amount,
            walk_squash_speed,
            jump_squash_amount,
            jump_squash_duration,
            dash_stretch_amount,
            dash_stretch_duration,
            relax_rate,
            snap_threshold,
            pitch_variation,
        ]
    );
    check!(errors, "feedback", "relax_rate", feedback.relax_rate > 0.0, "must be positive");
    check!(
        errors,
        "feedback",
        "snap_threshold",
        feedback.snap_threshold > 0.0,
        "must be positive"
    );
    check!(
        errors,
        "feedback",
        "pitch_variation",
        (0.0..1.0).contains(&feedback.pitch_variation),
        "must be in [0, 1)"
    );

    errors
}
