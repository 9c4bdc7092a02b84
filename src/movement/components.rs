//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{DashState, TickReport, TimerBank};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (area triggers) - should not block movement
    Sensor,
}

impl GameLayer {
    /// Layers the controller and the camera treat as solid.
    pub fn solid() -> [GameLayer; 3] {
        [GameLayer::Default, GameLayer::Ground, GameLayer::Wall]
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Continuous motion state of one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    /// Eased planar velocity (y is always zero).
    pub horizontal_velocity: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub was_grounded: bool,
    pub has_double_jumped: bool,
    pub is_sprinting: bool,
    pub is_slow_falling: bool,
    /// Heading about +Y in radians; yaw 0 faces -Z.
    pub yaw: f32,
    pub yaw_velocity: f32,
}

/// Everything the controller tick mutates, kept together so one tick is one
/// atomic update of a single component.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterMotor {
    pub state: MovementState,
    pub timers: TimerBank,
    pub dash: DashState,
    /// Result of the most recent tick.
    pub last_report: TickReport,
    /// Number of ticks run so far.
    pub ticks: u64,
}

/// When false the controller is frozen: no tick runs and the body is held.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerActive(pub bool);

impl Default for ControllerActive {
    fn default() -> Self {
        Self(true)
    }
}

/// Sphere-overlap probe used to decide whether the controller is grounded.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    /// Probe centre relative to the body origin.
    pub offset: Vec3,
    pub radius: f32,
}

impl GroundProbe {
    pub fn below(depth: f32, radius: f32) -> Self {
        Self {
            offset: Vec3::NEG_Y * depth,
            radius,
        }
    }
}

/// Parameters pushed to the animation collaborator after every tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorParams {
    /// Input magnitude, 0..1.
    pub speed: f32,
    /// True whenever the controller is not grounded.
    pub is_jumping: bool,
    pub is_dashing: bool,
    pub is_sprinting: bool,
    pub is_slow_falling: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
