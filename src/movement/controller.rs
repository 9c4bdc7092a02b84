//! Movement domain: the per-tick controller state machine.
//!
//! One call to [`CharacterMotor::tick`] is one simulation step. The stages run
//! in a fixed order and nothing suspends mid-tick:
//!
//! 1. advance timers, arm the jump buffer on a press
//! 2. probe the ground and settle onto it
//! 3. slow-fall and gravity, then coyote time
//! 4. jump resolution
//! 5. dash trigger and override
//! 6. locomotion easing and heading
//! 7. footstep interval
//! 8. move the body, then probe the surface normal and build the report

use bevy::prelude::*;

use crate::movement::dash::try_start_dash;
use crate::movement::locomotion::{damp_heading, ease_planar_velocity, target_speed};
use crate::movement::vertical::{
    integrate_gravity, refresh_coyote, resolve_jump, settle_on_ground, update_slow_fall,
};
use crate::movement::{
    AbilityFlags, AnimatorParams, CharacterBody, CharacterMotor, GroundProbe, JumpKind,
    MovementInput, MovementTuning, PhysicsQueries, ViewBasis,
};

/// Read-only inputs to one tick.
#[derive(Debug, Clone, Copy)]
pub struct MotorFrame<'a> {
    pub tuning: &'a MovementTuning,
    pub abilities: &'a AbilityFlags,
    pub input: &'a MovementInput,
    /// Camera axes for the move stick. `None` skips locomotion.
    pub view: Option<ViewBasis>,
    /// `None` skips ground detection and keeps the previous grounded flag.
    pub ground_probe: Option<GroundProbe>,
    pub dt: f32,
}

/// One-shot feedback events a tick can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    Jump,
    DoubleJump,
    Land,
    Footstep,
    Dash,
}

/// What happened during one tick, for feedback and animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Velocity handed to the body this tick.
    pub velocity: Vec3,
    /// Displacement the body actually applied.
    pub displacement: Vec3,
    pub grounded: bool,
    pub landed: bool,
    pub jump: Option<JumpKind>,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub footstep: bool,
    /// Move input outside the deadzone.
    pub moving: bool,
    /// Surface normal under a grounded controller, if the ray found one.
    pub ground_normal: Option<Vec3>,
    pub animator: AnimatorParams,
}

impl TickReport {
    pub fn cues(&self) -> impl Iterator<Item = CueKind> + use<> {
        let jump = self.jump.map(|kind| match kind {
            JumpKind::Primary => CueKind::Jump,
            JumpKind::Double => CueKind::DoubleJump,
        });
        [
            jump,
            self.landed.then_some(CueKind::Land),
            self.dash_started.then_some(CueKind::Dash),
            self.footstep.then_some(CueKind::Footstep),
        ]
        .into_iter()
        .flatten()
    }
}

impl CharacterMotor {
    pub fn is_dashing(&self) -> bool {
        self.timers.dash.is_running()
    }

    pub fn dash_on_cooldown(&self) -> bool {
        self.timers.dash_cooldown.is_running()
    }

    /// Zero all motion and cancel a running dash. The dash cooldown keeps
    /// running.
    pub fn reset_velocity(&mut self) {
        self.state.horizontal_velocity = Vec3::ZERO;
        self.state.vertical_velocity = 0.0;
        self.state.yaw_velocity = 0.0;
        self.state.is_slow_falling = false;
        self.timers.dash.clear();
        self.timers.step.clear();
        self.dash.velocity = Vec3::ZERO;
        self.last_report = TickReport::default();
        debug!("[MOVEMENT] Velocity reset");
    }

    /// Tick an active controller. A frozen one holds the body still and
    /// leaves every timer and motion state as it was, so re-enabling resumes
    /// mid-dash, mid-cooldown or mid-buffer.
    pub fn tick_if_active<Q, B>(
        &mut self,
        active: bool,
        frame: &MotorFrame<'_>,
        physics: &Q,
        body: &mut B,
    ) -> Option<TickReport>
    where
        Q: PhysicsQueries,
        B: CharacterBody,
    {
        if !active {
            body.move_body(Vec3::ZERO);
            return None;
        }
        Some(self.tick(frame, physics, body))
    }

    pub fn tick<Q, B>(&mut self, frame: &MotorFrame<'_>, physics: &Q, body: &mut B) -> TickReport
    where
        Q: PhysicsQueries,
        B: CharacterBody,
    {
        let tuning = frame.tuning;
        let abilities = frame.abilities;
        let input = frame.input;
        let dt = frame.dt.max(0.0);
        let mut report = TickReport::default();

        let was_dashing = self.timers.dash.is_running();
        self.timers.advance(dt);
        if was_dashing && !self.timers.dash.is_running() {
            report.dash_ended = true;
            debug!("[MOVEMENT] Dash ended");
        }

        if input.jump_just_pressed {
            self.timers.jump_buffer.start(tuning.jump_buffer_time);
        }

        // Ground
        self.state.was_grounded = self.state.grounded;
        match frame.ground_probe {
            Some(probe) => {
                let center = body.position() + probe.offset;
                self.state.grounded = physics.overlap_sphere(center, probe.radius);
            }
            None => warn_once!("[MOVEMENT] No ground probe on controller, grounding skipped"),
        }
        report.landed = self.state.grounded && !self.state.was_grounded;
        if report.landed {
            debug!(
                "[MOVEMENT] Landed: vertical_velocity={:.2}",
                self.state.vertical_velocity
            );
        }
        settle_on_ground(&mut self.state, tuning);

        let vertical_locked = tuning.dash_locks_vertical && self.timers.dash.is_running();

        update_slow_fall(&mut self.state, abilities, input.jump_held);
        if !vertical_locked {
            integrate_gravity(&mut self.state, tuning, dt);
        }
        refresh_coyote(&self.state, &mut self.timers, tuning, dt);

        if !vertical_locked {
            report.jump = resolve_jump(&mut self.state, &mut self.timers, tuning, abilities);
        }

        // Dash
        let input_direction = match frame.view {
            Some(view) => view.move_direction(input.axis),
            None => {
                warn_once!("[MOVEMENT] No camera view available, locomotion skipped");
                Vec3::ZERO
            }
        };
        if input.dash_just_pressed {
            report.dash_started = try_start_dash(
                &mut self.dash,
                &mut self.timers,
                &self.state,
                tuning,
                abilities,
                input_direction,
            );
        }
        let dashing = self.timers.dash.is_running();
        if dashing {
            self.state.horizontal_velocity = self.dash.velocity;
            if tuning.dash_locks_vertical {
                self.state.vertical_velocity = 0.0;
            }
        }

        // Locomotion
        self.state.is_sprinting = abilities.can_sprint && input.sprint_held && !dashing;
        if abilities.can_walk {
            if !dashing && frame.view.is_some() {
                let speed = target_speed(tuning, self.state.is_sprinting);
                self.state.horizontal_velocity = ease_planar_velocity(
                    self.state.horizontal_velocity,
                    input_direction,
                    speed,
                    tuning,
                    dt,
                );
            }
            damp_heading(&mut self.state, tuning, dt);
        }

        // Footsteps
        let moving = input.axis.length() > tuning.input_deadzone;
        if abilities.can_walk && self.state.grounded && moving && !dashing {
            self.timers.step.tick(dt);
            if !self.timers.step.is_running() {
                report.footstep = true;
                self.timers.step.start(tuning.step_interval);
            }
        } else {
            self.timers.step.clear();
        }

        // Move
        let planar = if abilities.can_walk {
            self.state.horizontal_velocity
        } else {
            Vec3::ZERO
        };
        let velocity = Vec3::new(planar.x, self.state.vertical_velocity, planar.z);
        report.displacement = body.move_body(velocity * dt);
        report.velocity = velocity;

        if self.state.grounded {
            let origin = body.position() + Vec3::Y * tuning.surface_probe_lift;
            report.ground_normal = physics
                .sweep_sphere(origin, 0.0, Dir3::NEG_Y, tuning.surface_probe_length)
                .map(|hit| hit.normal);
        }

        report.grounded = self.state.grounded;
        report.moving = moving;
        report.animator = AnimatorParams {
            speed: input.axis.length().min(1.0),
            is_jumping: !self.state.grounded,
            is_dashing: dashing,
            is_sprinting: self.state.is_sprinting,
            is_slow_falling: self.state.is_slow_falling,
        };

        self.ticks += 1;
        self.last_report = report;
        report
    }
}
