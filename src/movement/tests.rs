//! Movement domain: tests for timers, abilities and the controller tick.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::{
    Ability, AbilityFlags, BodyEffect, CharacterBody, CharacterMotor, ControllerAction,
    ControllerActive, Countdown, CueKind, GroundProbe, JumpKind, MotorFrame, MovementInput,
    MovementTuning, PhysicsQueries, SweepHit, TickReport, ViewBasis, apply_action, jump_impulse,
};

const DT: f32 = 1.0 / 60.0;

/// Body height above the ground plane when standing.
const REST_Y: f32 = 0.9;

// -----------------------------------------------------------------------------
// Test world
// -----------------------------------------------------------------------------

/// Infinite horizontal ground plane at `ground_y`.
struct FlatWorld {
    ground_y: f32,
}

impl PhysicsQueries for FlatWorld {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool {
        center.y - radius <= self.ground_y
    }

    fn sweep_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
    ) -> Option<SweepHit> {
        let down = -direction.y;
        if down <= 0.0 {
            return None;
        }
        let distance = (origin.y - radius - self.ground_y) / down;
        (0.0..=max_distance)
            .contains(&distance)
            .then_some(SweepHit {
                distance,
                normal: Vec3::Y,
            })
    }
}

/// Point body that cannot sink below `floor`.
struct TestBody {
    position: Vec3,
    floor: f32,
}

impl CharacterBody for TestBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_body(&mut self, displacement: Vec3) -> Vec3 {
        let before = self.position;
        self.position += displacement;
        self.position.y = self.position.y.max(self.floor);
        self.position - before
    }
}

struct Harness {
    motor: CharacterMotor,
    tuning: MovementTuning,
    abilities: AbilityFlags,
    world: FlatWorld,
    body: TestBody,
    probe: Option<GroundProbe>,
    view: Option<ViewBasis>,
}

impl Harness {
    fn new() -> Self {
        let tuning = MovementTuning::default();
        let probe = GroundProbe::below(tuning.ground_probe_depth, tuning.ground_probe_radius);
        Self {
            motor: CharacterMotor::default(),
            tuning,
            abilities: AbilityFlags::default(),
            world: FlatWorld { ground_y: 0.0 },
            body: TestBody {
                position: Vec3::new(0.0, REST_Y, 0.0),
                floor: REST_Y,
            },
            probe: Some(probe),
            view: Some(ViewBasis::world()),
        }
    }

    /// Standing still on the ground with settled timers.
    fn grounded() -> Self {
        let mut harness = Self::new();
        harness.run(idle(), 10);
        harness
    }

    fn step(&mut self, input: MovementInput) -> TickReport {
        self.step_dt(input, DT)
    }

    fn step_dt(&mut self, input: MovementInput, dt: f32) -> TickReport {
        let frame = MotorFrame {
            tuning: &self.tuning,
            abilities: &self.abilities,
            input: &input,
            view: self.view,
            ground_probe: self.probe,
            dt,
        };
        self.motor.tick(&frame, &self.world, &mut self.body)
    }

    fn step_active(&mut self, active: bool, input: MovementInput) -> Option<TickReport> {
        let frame = MotorFrame {
            tuning: &self.tuning,
            abilities: &self.abilities,
            input: &input,
            view: self.view,
            ground_probe: self.probe,
            dt: DT,
        };
        self.motor
            .tick_if_active(active, &frame, &self.world, &mut self.body)
    }

    fn run(&mut self, input: MovementInput, ticks: usize) -> TickReport {
        let mut report = TickReport::default();
        for _ in 0..ticks {
            report = self.step(input);
        }
        report
    }

    fn remove_ground(&mut self) {
        self.world.ground_y = -1000.0;
        self.body.floor = -1000.0;
    }

    fn restore_ground(&mut self) {
        self.world.ground_y = 0.0;
        self.body.floor = REST_Y;
        self.body.position.y = REST_Y;
    }

    fn planar_speed(&self) -> f32 {
        self.motor.state.horizontal_velocity.length()
    }
}

fn idle() -> MovementInput {
    MovementInput::default()
}

fn forward() -> MovementInput {
    MovementInput {
        axis: Vec2::Y,
        ..default()
    }
}

fn jump_press() -> MovementInput {
    MovementInput {
        jump_just_pressed: true,
        jump_held: true,
        ..default()
    }
}

fn jump_hold() -> MovementInput {
    MovementInput {
        jump_held: true,
        ..default()
    }
}

fn dash_press() -> MovementInput {
    MovementInput {
        dash_just_pressed: true,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Countdown tests
// -----------------------------------------------------------------------------

#[test]
fn test_countdown_expires_after_duration() {
    let mut timer = Countdown::default();
    timer.start(0.1);
    for _ in 0..5 {
        timer.tick(DT);
        assert!(timer.is_running());
    }
    timer.tick(DT);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_countdown_zero_duration_expires_next_tick() {
    let mut timer = Countdown::default();
    timer.start(0.0);
    assert!(timer.is_running());
    timer.tick(DT);
    assert!(!timer.is_running());
}

#[test]
fn test_countdown_negative_duration_is_instant() {
    let mut timer = Countdown::default();
    timer.start(-3.0);
    assert_eq!(timer.remaining(), 0.0);
    timer.tick(0.0);
    assert!(!timer.is_running());
}

#[test]
fn test_idle_countdown_ignores_ticks() {
    let mut timer = Countdown::default();
    timer.tick(1.0);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining(), 0.0);
}

// -----------------------------------------------------------------------------
// Ability gate tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_abilities_match_starting_set() {
    let flags = AbilityFlags::default();
    assert!(flags.has(Ability::Walk));
    assert!(flags.has(Ability::Jump));
    assert!(flags.has(Ability::Sprint));
    assert!(!flags.has(Ability::DoubleJump));
    assert!(!flags.has(Ability::Dash));
    assert!(!flags.has(Ability::SlowFall));
}

#[test]
fn test_ability_set_touches_only_its_flag() {
    for ability in Ability::ALL {
        let mut flags = AbilityFlags::walk_only();
        flags.set(ability, true);
        for other in Ability::ALL {
            let expected = other == ability || other == Ability::Walk;
            assert_eq!(flags.has(other), expected, "{ability:?} leaked into {other:?}");
        }
    }
}

// -----------------------------------------------------------------------------
// Locomotion tests
// -----------------------------------------------------------------------------

#[test]
fn test_walk_converges_to_walk_speed() {
    let mut harness = Harness::grounded();
    let mut last_z = harness.body.position.z;

    let first = harness.step(forward());
    let first_speed = -first.velocity.z;
    assert!((first_speed - harness.tuning.acceleration * DT).abs() < 1e-5);

    for _ in 1..60 {
        harness.step(forward());
        let z = harness.body.position.z;
        assert!(z < last_z, "position must advance every tick");
        last_z = z;
        assert!(harness.planar_speed() <= harness.tuning.walk_speed + 1e-5);
    }

    assert!((harness.planar_speed() - 5.0).abs() < 1e-4);
    let velocity = harness.motor.state.horizontal_velocity;
    assert!(velocity.x.abs() < 1e-5);
    assert!(velocity.z < 0.0);
}

#[test]
fn test_walk_reaches_speed_within_acceleration_ramp() {
    let mut harness = Harness::grounded();
    // 5 m/s at 10 m/s^2 is half a second.
    harness.run(forward(), 31);
    assert!((harness.planar_speed() - 5.0).abs() < 1e-4);
}

#[test]
fn test_deceleration_stops_without_overshoot() {
    let mut harness = Harness::grounded();
    harness.run(forward(), 60);

    let mut last = harness.planar_speed();
    for _ in 0..25 {
        harness.step(idle());
        let speed = harness.planar_speed();
        assert!(speed <= last);
        assert!(last - speed <= harness.tuning.deceleration * DT + 1e-5);
        last = speed;
    }
    assert_eq!(harness.motor.state.horizontal_velocity, Vec3::ZERO);
}

#[test]
fn test_sprint_multiplies_target_speed() {
    let sprint = MovementInput {
        axis: Vec2::Y,
        sprint_held: true,
        ..default()
    };

    let mut harness = Harness::grounded();
    harness.run(sprint, 120);
    assert!((harness.planar_speed() - 7.5).abs() < 1e-4);
    assert!(harness.motor.state.is_sprinting);

    let mut harness = Harness::grounded();
    harness.abilities.can_sprint = false;
    harness.run(sprint, 120);
    assert!((harness.planar_speed() - 5.0).abs() < 1e-4);
    assert!(!harness.motor.state.is_sprinting);
}

#[test]
fn test_walk_disabled_blocks_movement_and_rotation() {
    let mut harness = Harness::grounded();
    harness.abilities.can_walk = false;
    let start = harness.body.position;
    let strafe = MovementInput {
        axis: Vec2::X,
        ..default()
    };

    harness.run(strafe, 60);

    assert_eq!(harness.body.position.x, start.x);
    assert_eq!(harness.body.position.z, start.z);
    assert_eq!(harness.motor.state.yaw, 0.0);
}

#[test]
fn test_heading_turns_toward_velocity_and_holds_when_idle() {
    let mut harness = Harness::grounded();
    let strafe = MovementInput {
        axis: Vec2::X,
        ..default()
    };

    harness.run(strafe, 60);
    assert!((harness.motor.state.yaw + FRAC_PI_2).abs() < 0.05);

    harness.run(idle(), 60);
    let held = harness.motor.state.yaw;
    assert!((held + FRAC_PI_2).abs() < 0.05);
    harness.step(idle());
    assert_eq!(harness.motor.state.yaw, held);
}

#[test]
fn test_missing_view_skips_locomotion() {
    let mut harness = Harness::grounded();
    harness.view = None;
    harness.run(forward(), 30);
    assert_eq!(harness.motor.state.horizontal_velocity, Vec3::ZERO);
}

#[test]
fn test_view_basis_is_flattened() {
    let pitched = Quat::from_euler(EulerRot::YXZ, 0.0, -0.6, 0.0);
    let view = ViewBasis::from_rotation(pitched);
    let direction = view.move_direction(Vec2::Y);
    assert!(direction.y.abs() < 1e-6);
    assert!((direction.length() - 1.0).abs() < 1e-5);
}

// -----------------------------------------------------------------------------
// Vertical motion tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_velocity_rests_below_zero() {
    let mut harness = Harness::grounded();
    let report = harness.step(idle());
    let tuning = &harness.tuning;
    let expected = tuning.resting_vertical_velocity + tuning.gravity * DT;
    assert!(report.grounded);
    assert!((report.velocity.y - expected).abs() < 1e-5);
}

#[test]
fn test_ground_contact_clears_double_jump() {
    let mut harness = Harness::grounded();
    harness.motor.state.has_double_jumped = true;
    harness.step(idle());
    assert!(!harness.motor.state.has_double_jumped);
}

#[test]
fn test_jump_impulse_closed_form() {
    let mut harness = Harness::grounded();
    let report = harness.step(jump_press());
    let expected = (2.0_f32 * -2.0 * -9.81).sqrt();
    assert_eq!(report.jump, Some(JumpKind::Primary));
    assert!((report.velocity.y - expected).abs() < 1e-5);
    assert!((harness.tuning.jump_impulse() - expected).abs() < 1e-6);
}

#[test]
fn test_jump_impulse_handles_upward_gravity() {
    assert_eq!(jump_impulse(2.0, 9.81), 0.0);
    assert_eq!(jump_impulse(0.0, -9.81), 0.0);
}

#[test]
fn test_peak_height_independent_of_frame_rate() {
    let mut peaks = Vec::new();
    for dt in [1.0 / 30.0, 1.0 / 60.0, 1.0 / 240.0] {
        let mut harness = Harness::grounded();
        harness.step_dt(jump_press(), dt);
        let mut peak = harness.body.position.y;
        let ticks = (1.5 / dt) as usize;
        for _ in 0..ticks {
            harness.step_dt(idle(), dt);
            peak = peak.max(harness.body.position.y);
        }
        peaks.push(peak - REST_Y);
    }

    for peak in &peaks {
        assert!((peak - 2.0).abs() < 0.15, "peak {peak} too far from jump height");
    }
    let spread = peaks.iter().cloned().fold(f32::MIN, f32::max)
        - peaks.iter().cloned().fold(f32::MAX, f32::min);
    assert!(spread < 0.15);
}

#[test]
fn test_jump_gated_by_ability() {
    let mut harness = Harness::grounded();
    harness.abilities.can_jump = false;
    let report = harness.step(jump_press());
    assert_eq!(report.jump, None);
    assert!(report.velocity.y < 0.0);
}

#[test]
fn test_landing_reported_once() {
    let mut harness = Harness::new();
    harness.body.position.y = 3.0;

    let mut landings = 0;
    for _ in 0..120 {
        let report = harness.step(idle());
        if report.landed {
            landings += 1;
            assert!(report.cues().any(|cue| cue == CueKind::Land));
        }
    }
    assert_eq!(landings, 1);
}

// -----------------------------------------------------------------------------
// Coyote time and jump buffer tests
// -----------------------------------------------------------------------------

#[test]
fn test_coyote_jump_after_leaving_ground() {
    let mut harness = Harness::grounded();
    harness.remove_ground();
    harness.run(idle(), 4);
    let report = harness.step(jump_press());
    assert!(!report.grounded);
    assert_eq!(report.jump, Some(JumpKind::Primary));
}

#[test]
fn test_no_jump_after_coyote_window() {
    // Tick 10 airborne is 0.167 s, past the 0.15 s window.
    for press_tick in 10..30 {
        let mut harness = Harness::grounded();
        harness.remove_ground();
        harness.run(idle(), press_tick - 1);
        let mut jumps = harness.step(jump_press()).jump.into_iter().count();
        for _ in 0..20 {
            jumps += harness.step(idle()).jump.into_iter().count();
        }
        assert_eq!(jumps, 0, "jumped after pressing on airborne tick {press_tick}");
    }
}

#[test]
fn test_primary_jump_consumes_coyote() {
    let mut harness = Harness::grounded();
    harness.step(jump_press());
    assert!(!harness.motor.timers.coyote.is_running());
    let report = harness.step(jump_press());
    assert_eq!(report.jump, None);
}

#[test]
fn test_rising_off_ground_does_not_refill_coyote() {
    let mut harness = Harness::grounded();
    assert_eq!(harness.step(jump_press()).jump, Some(JumpKind::Primary));

    // The probe still overlaps the floor for the first rising ticks.
    let mut grounded_while_rising = 0;
    for _ in 0..6 {
        let report = harness.step(jump_press());
        assert_eq!(report.jump, None);
        if harness.motor.state.grounded {
            grounded_while_rising += 1;
            assert!(!harness.motor.timers.coyote.is_running());
        }
    }
    assert!(grounded_while_rising > 0);
}

#[test]
fn test_buffered_jump_fires_on_landing() {
    let mut harness = Harness::grounded();
    harness.remove_ground();
    harness.run(idle(), 30);
    assert_eq!(harness.step(jump_press()).jump, None);

    harness.run(idle(), 5);
    harness.restore_ground();
    let landing = harness.step(idle());

    assert!(landing.landed);
    assert_eq!(landing.jump, Some(JumpKind::Primary));
}

#[test]
fn test_buffered_jump_expires() {
    let mut harness = Harness::grounded();
    harness.remove_ground();
    harness.run(idle(), 30);
    harness.step(jump_press());

    harness.run(idle(), 12);
    harness.restore_ground();
    let landing = harness.step(idle());

    assert!(landing.landed);
    assert_eq!(landing.jump, None);
}

#[test]
fn test_zero_jump_buffer_only_honors_same_tick() {
    let mut harness = Harness::grounded();
    harness.tuning.jump_buffer_time = 0.0;
    assert_eq!(harness.step(jump_press()).jump, Some(JumpKind::Primary));

    let mut harness = Harness::grounded();
    harness.tuning.jump_buffer_time = 0.0;
    harness.remove_ground();
    harness.run(idle(), 30);
    harness.step(jump_press());
    harness.restore_ground();
    assert_eq!(harness.step(idle()).jump, None);
}

// -----------------------------------------------------------------------------
// Double jump and slow-fall tests
// -----------------------------------------------------------------------------

#[test]
fn test_double_jump_executes_once_per_air_time() {
    let mut harness = Harness::grounded();
    harness.abilities.can_double_jump = true;

    let mut jumps = Vec::new();
    jumps.extend(harness.step(jump_press()).jump);
    for _ in 0..9 {
        jumps.extend(harness.step(idle()).jump);
    }
    jumps.extend(harness.step(jump_press()).jump);
    for _ in 0..9 {
        jumps.extend(harness.step(idle()).jump);
    }
    jumps.extend(harness.step(jump_press()).jump);

    let mut landed = false;
    for _ in 0..600 {
        let report = harness.step(idle());
        if report.landed {
            landed = true;
            break;
        }
        jumps.extend(report.jump);
    }

    assert!(landed);
    assert_eq!(jumps, vec![JumpKind::Primary, JumpKind::Double]);
    assert!(!harness.motor.state.has_double_jumped);
}

#[test]
fn test_double_jump_requires_ability() {
    let mut harness = Harness::grounded();
    harness.step(jump_press());
    harness.run(idle(), 9);
    assert_eq!(harness.step(jump_press()).jump, None);
}

#[test]
fn test_double_jump_reports_cue() {
    let mut harness = Harness::grounded();
    harness.abilities.can_double_jump = true;
    harness.step(jump_press());
    harness.run(idle(), 9);
    let report = harness.step(jump_press());
    let cues: Vec<_> = report.cues().collect();
    assert_eq!(cues, vec![CueKind::DoubleJump]);
}

#[test]
fn test_slow_fall_scales_gravity_after_double_jump() {
    let mut harness = Harness::grounded();
    harness.abilities.can_double_jump = true;
    harness.abilities.can_slow_fall = true;
    harness.tuning.slow_fall_gravity_scale = 0.3;

    harness.step(jump_press());
    harness.run(idle(), 9);
    harness.step(jump_press());

    let before = harness.motor.state.vertical_velocity;
    let report = harness.step(jump_hold());
    assert!(harness.motor.state.is_slow_falling);
    assert!(report.animator.is_slow_falling);
    let expected = before + harness.tuning.gravity * 0.3 * DT;
    assert!((report.velocity.y - expected).abs() < 1e-5);

    // Not sticky: releasing restores full gravity on the next tick.
    let before = harness.motor.state.vertical_velocity;
    let report = harness.step(idle());
    assert!(!harness.motor.state.is_slow_falling);
    let expected = before + harness.tuning.gravity * DT;
    assert!((report.velocity.y - expected).abs() < 1e-5);
}

#[test]
fn test_slow_fall_needs_spent_double_jump() {
    let mut harness = Harness::grounded();
    harness.abilities.can_double_jump = true;
    harness.abilities.can_slow_fall = true;

    harness.step(jump_press());
    harness.run(jump_hold(), 10);
    assert!(!harness.motor.state.is_slow_falling);
}

#[test]
fn test_jump_impulse_ignores_slow_fall_scale() {
    // Jump arcs use the unscaled gravity constant whatever the glide scale.
    let mut impulses = Vec::new();
    for scale in [1.0, 0.3, 0.05] {
        let mut harness = Harness::grounded();
        harness.abilities.can_double_jump = true;
        harness.abilities.can_slow_fall = true;
        harness.tuning.slow_fall_gravity_scale = scale;

        harness.step(jump_press());
        harness.run(idle(), 9);
        harness.step(jump_press());
        let mut guard = 0;
        while harness.motor.state.vertical_velocity >= 0.0 && guard < 5000 {
            harness.step(jump_hold());
            guard += 1;
        }
        assert!(harness.motor.state.is_slow_falling);

        // Buffered press while gliding down, then land on the next tick.
        harness.remove_ground();
        harness.step(jump_press());
        harness.restore_ground();
        let landing = harness.step(jump_hold());
        assert_eq!(landing.jump, Some(JumpKind::Primary));
        impulses.push(landing.velocity.y);
    }

    let expected = (2.0_f32 * -2.0 * -9.81).sqrt();
    for impulse in impulses {
        assert!((impulse - expected).abs() < 1e-5);
    }
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_duration_and_cooldown_timeline() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;

    let mut dashing = Vec::new();
    for tick in 0..=60 {
        let input = if matches!(tick, 0 | 30 | 60) {
            dash_press()
        } else {
            idle()
        };
        let report = harness.step(input);
        match tick {
            0 | 60 => assert!(report.dash_started, "dash should start at tick {tick}"),
            30 => assert!(!report.dash_started, "dash retriggered during cooldown"),
            _ => {}
        }
        dashing.push(harness.motor.is_dashing());
    }

    // 0.3 s at 60 Hz is 18 ticks.
    assert!(dashing[..18].iter().all(|d| *d));
    assert!(dashing[18..60].iter().all(|d| !*d));
    assert!(dashing[60]);
}

#[test]
fn test_cooldown_always_starts_with_dash() {
    for period in 1..40 {
        let mut harness = Harness::grounded();
        harness.abilities.can_dash = true;
        let mut last_start: Option<usize> = None;

        for tick in 0..240 {
            let input = if tick % period == 0 {
                dash_press()
            } else {
                idle()
            };
            let report = harness.step(input);
            if report.dash_started {
                assert!(harness.motor.is_dashing() || harness.motor.dash_on_cooldown());
                assert!(harness.motor.dash_on_cooldown());
                if let Some(last) = last_start {
                    assert!(tick - last >= 60, "retriggered {} ticks apart", tick - last);
                }
                last_start = Some(tick);
            }
        }
        assert!(last_start.is_some());
    }
}

#[test]
fn test_dash_overrides_locomotion() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    let dash_forward = MovementInput {
        axis: Vec2::Y,
        dash_just_pressed: true,
        ..default()
    };

    let report = harness.step(dash_forward);
    assert!(report.dash_started);
    assert!((report.velocity.z + harness.tuning.dash_speed).abs() < 1e-5);

    for _ in 0..10 {
        let report = harness.step(forward());
        assert!((report.velocity.z + harness.tuning.dash_speed).abs() < 1e-5);
        assert!(!harness.motor.state.is_sprinting);
    }
}

#[test]
fn test_dash_without_input_follows_heading() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.motor.state.yaw = -FRAC_PI_2;

    let report = harness.step(dash_press());
    assert!(report.dash_started);
    assert!((report.velocity.x - harness.tuning.dash_speed).abs() < 1e-4);
    assert!(report.velocity.z.abs() < 1e-4);
}

#[test]
fn test_dash_gated_by_ability() {
    let mut harness = Harness::grounded();
    let report = harness.step(dash_press());
    assert!(!report.dash_started);
    assert!(!harness.motor.is_dashing());
}

#[test]
fn test_revoking_dash_keeps_running_dash() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.step(dash_press());
    harness.abilities.can_dash = false;
    harness.step(idle());
    assert!(harness.motor.is_dashing());
}

#[test]
fn test_zero_dash_duration_ends_next_tick() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.tuning.dash_duration = 0.0;

    let started = harness.step(dash_press());
    assert!(started.dash_started);
    assert!(harness.motor.is_dashing());

    let next = harness.step(idle());
    assert!(next.dash_ended);
    assert!(!harness.motor.is_dashing());
    assert!(harness.motor.dash_on_cooldown());
}

#[test]
fn test_vertical_locking_dash_holds_altitude() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.tuning.dash_locks_vertical = true;
    harness.remove_ground();
    harness.run(idle(), 20);

    let report = harness.step(dash_press());
    assert_eq!(report.velocity.y, 0.0);
    let altitude = harness.body.position.y;
    harness.run(idle(), 10);
    assert_eq!(harness.body.position.y, altitude);

    // Gravity resumes once the dash ends.
    harness.run(idle(), 10);
    assert!(harness.body.position.y < altitude);
}

// -----------------------------------------------------------------------------
// Footstep, report and reset tests
// -----------------------------------------------------------------------------

#[test]
fn test_footsteps_follow_step_interval() {
    let mut harness = Harness::grounded();
    let mut steps = Vec::new();
    for tick in 0..=60 {
        if harness.step(forward()).footstep {
            steps.push(tick);
        }
    }
    assert_eq!(steps, vec![0, 30, 60]);
}

#[test]
fn test_no_footsteps_while_airborne() {
    let mut harness = Harness::grounded();
    harness.remove_ground();
    let footsteps = (0..60).filter(|_| harness.step(forward()).footstep).count();
    assert_eq!(footsteps, 0);
}

#[test]
fn test_animator_params_follow_state() {
    let mut harness = Harness::grounded();
    let diagonal = MovementInput {
        axis: Vec2::ONE,
        ..default()
    };
    let report = harness.step(diagonal);
    assert_eq!(report.animator.speed, 1.0);
    assert!(!report.animator.is_jumping);

    harness.remove_ground();
    let report = harness.step(idle());
    assert!(report.animator.is_jumping);
    assert_eq!(report.animator.speed, 0.0);
}

#[test]
fn test_ground_normal_only_when_grounded() {
    let mut harness = Harness::grounded();
    assert_eq!(harness.step(idle()).ground_normal, Some(Vec3::Y));
    harness.remove_ground();
    assert_eq!(harness.step(idle()).ground_normal, None);
}

#[test]
fn test_missing_probe_keeps_previous_grounding() {
    let mut harness = Harness::grounded();
    harness.probe = None;
    harness.remove_ground();
    let report = harness.step(idle());
    assert!(report.grounded);
    assert!(!report.landed);
}

#[test]
fn test_reset_velocity_cancels_motion_and_dash() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.run(forward(), 20);
    harness.step(dash_press());
    assert!(harness.motor.is_dashing());

    harness.motor.reset_velocity();

    assert_eq!(harness.motor.state.horizontal_velocity, Vec3::ZERO);
    assert_eq!(harness.motor.state.vertical_velocity, 0.0);
    assert!(!harness.motor.is_dashing());
    assert!(harness.motor.dash_on_cooldown());
    assert!(!harness.motor.state.is_slow_falling);
}

#[test]
fn test_zero_dt_tick_does_not_integrate() {
    let mut harness = Harness::grounded();
    let before = harness.body.position;
    let report = harness.step_dt(forward(), 0.0);
    assert_eq!(report.displacement, Vec3::ZERO);
    assert_eq!(harness.body.position, before);
}

// -----------------------------------------------------------------------------
// Freeze and command tests
// -----------------------------------------------------------------------------

#[test]
fn test_frozen_controller_holds_every_timer() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    assert!(harness.step(dash_press()).dash_started);

    // Leave the ground and outlast coyote time so the press only arms the buffer.
    harness.remove_ground();
    harness.run(idle(), 10);
    assert_eq!(harness.step(jump_press()).jump, None);
    assert!(harness.motor.is_dashing());
    assert!(harness.motor.timers.jump_buffer.is_running());

    let timers = harness.motor.timers;
    let state = harness.motor.state;
    let ticks = harness.motor.ticks;
    let position = harness.body.position;

    for _ in 0..120 {
        assert!(harness.step_active(false, jump_press()).is_none());
    }

    assert_eq!(harness.motor.timers.dash.remaining(), timers.dash.remaining());
    assert_eq!(
        harness.motor.timers.dash_cooldown.remaining(),
        timers.dash_cooldown.remaining()
    );
    assert_eq!(
        harness.motor.timers.jump_buffer.remaining(),
        timers.jump_buffer.remaining()
    );
    assert_eq!(harness.motor.state, state);
    assert_eq!(harness.motor.ticks, ticks);
    assert_eq!(harness.body.position, position);

    // Resuming continues the countdowns from where they stopped.
    assert!(harness.step_active(true, idle()).is_some());
    assert!(harness.motor.is_dashing());
    assert!(harness.motor.timers.dash.remaining() < timers.dash.remaining());
    assert!(harness.motor.timers.dash_cooldown.remaining() < timers.dash_cooldown.remaining());
    assert!(harness.motor.timers.jump_buffer.remaining() < timers.jump_buffer.remaining());
}

#[test]
fn test_frozen_controller_keeps_coyote_window() {
    let mut harness = Harness::grounded();
    harness.remove_ground();
    harness.step(idle());
    assert!(!harness.motor.state.grounded);
    let coyote = harness.motor.timers.coyote.remaining();
    assert!(coyote > 0.0);

    // Frozen for longer than the whole coyote window.
    for _ in 0..60 {
        harness.step_active(false, idle());
    }
    assert_eq!(harness.motor.timers.coyote.remaining(), coyote);

    let report = harness.step_active(true, jump_press()).unwrap();
    assert_eq!(report.jump, Some(JumpKind::Primary));
}

#[test]
fn test_set_active_toggles_and_zeroes_body_on_freeze() {
    let mut motor = CharacterMotor::default();
    let mut abilities = AbilityFlags::default();
    let mut active = ControllerActive::default();

    let effect = apply_action(
        ControllerAction::SetActive(false),
        &mut motor,
        &mut abilities,
        &mut active,
    );
    assert_eq!(effect, BodyEffect::ZeroVelocity);
    assert!(!active.0);

    let effect = apply_action(
        ControllerAction::SetActive(true),
        &mut motor,
        &mut abilities,
        &mut active,
    );
    assert_eq!(effect, BodyEffect::Keep);
    assert!(active.0);
}

#[test]
fn test_reset_command_zeroes_motor_and_body() {
    let mut harness = Harness::grounded();
    harness.abilities.can_dash = true;
    harness.run(forward(), 20);
    harness.step(dash_press());
    let mut active = ControllerActive::default();

    let effect = apply_action(
        ControllerAction::ResetVelocity,
        &mut harness.motor,
        &mut harness.abilities,
        &mut active,
    );

    assert_eq!(effect, BodyEffect::ZeroVelocity);
    assert_eq!(harness.motor.state.horizontal_velocity, Vec3::ZERO);
    assert!(!harness.motor.is_dashing());
    assert!(harness.motor.dash_on_cooldown());
    assert!(active.0);
}

#[test]
fn test_ability_commands_only_touch_flags() {
    let mut harness = Harness::grounded();
    harness.run(forward(), 20);
    let state = harness.motor.state;
    let mut active = ControllerActive::default();

    let effect = apply_action(
        ControllerAction::SetAbility(Ability::Dash, true),
        &mut harness.motor,
        &mut harness.abilities,
        &mut active,
    );
    assert_eq!(effect, BodyEffect::Keep);
    assert!(harness.abilities.has(Ability::Dash));

    let effect = apply_action(
        ControllerAction::SetCameraActive(false),
        &mut harness.motor,
        &mut harness.abilities,
        &mut active,
    );
    assert_eq!(effect, BodyEffect::Keep);
    assert_eq!(harness.motor.state, state);
    assert!(active.0);
}
