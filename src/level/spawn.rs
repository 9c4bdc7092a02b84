//! Level domain: spawns the demo course, the player and its camera.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraRig, CameraTuning, FollowCamera};
use crate::feedback::{SquashStretch, VisualRoot};
use crate::level::components::{AreaSensor, LevelEntity};
use crate::level::layout::{
    AREAS, BlockKind, COURSE, PLAYER_RADIUS, PLAYER_SEGMENT, PLAYER_SPAWN,
};
use crate::movement::{
    AnimatorParams, CharacterMotor, ControllerActive, GameLayer, Ground, GroundProbe,
    MovementTuning, Player, StartingAbilities, Wall,
};

pub(crate) fn spawn_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(Color::srgb(0.35, 0.4, 0.35));
    let platform_material = materials.add(Color::srgb(0.55, 0.5, 0.4));
    let wall_material = materials.add(Color::srgb(0.25, 0.25, 0.35));

    for block in &COURSE {
        let mesh = meshes.add(Cuboid::from_size(block.size));
        let collider = Collider::cuboid(block.size.x, block.size.y, block.size.z);
        let transform = Transform::from_translation(block.center);

        match block.kind {
            BlockKind::Ground | BlockKind::Platform => {
                let material = if block.kind == BlockKind::Ground {
                    ground_material.clone()
                } else {
                    platform_material.clone()
                };
                commands.spawn((
                    LevelEntity,
                    Ground,
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    transform,
                    RigidBody::Static,
                    collider,
                    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
                ));
            }
            BlockKind::Wall => {
                commands.spawn((
                    LevelEntity,
                    Wall,
                    Mesh3d(mesh),
                    MeshMaterial3d(wall_material.clone()),
                    transform,
                    RigidBody::Static,
                    collider,
                    CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
                ));
            }
        }
    }

    for area in &AREAS {
        commands.spawn((
            LevelEntity,
            AreaSensor {
                name: area.name.to_string(),
            },
            Transform::from_translation(area.center),
            RigidBody::Static,
            Collider::cuboid(area.size.x, area.size.y, area.size.z),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    commands.spawn((
        LevelEntity,
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "[LEVEL] Spawned course: {} blocks, {} areas",
        COURSE.len(),
        AREAS.len()
    );
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
    camera_tuning: Res<CameraTuning>,
    starting: Res<StartingAbilities>,
) {
    let player = commands
        .spawn((
            // Identity & Movement
            (
                LevelEntity,
                Player,
                CharacterMotor::default(),
                starting.0,
                ControllerActive::default(),
                GroundProbe::below(tuning.ground_probe_depth, tuning.ground_probe_radius),
                AnimatorParams::default(),
            ),
            // Physics
            (
                Transform::from_translation(PLAYER_SPAWN),
                Visibility::default(),
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_SEGMENT),
                LockedAxes::ROTATION_LOCKED,
                GravityScale(0.0),
                Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
                LinearVelocity::ZERO,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Default,
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Sensor,
                    ],
                ),
            ),
        ))
        .id();

    // Deformed by the feedback driver; never simulated.
    let body_mesh = meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_SEGMENT));
    let body_material = materials.add(Color::srgb(0.95, 0.85, 0.6));
    commands.entity(player).with_children(|parent| {
        parent.spawn((
            VisualRoot { owner: player },
            SquashStretch::new(Vec3::ONE),
            Mesh3d(body_mesh),
            MeshMaterial3d(body_material),
            Transform::default(),
        ));
    });

    let rig = CameraRig::new(player, &camera_tuning);
    let pose = rig.rotation();
    commands.spawn((
        LevelEntity,
        Camera3d::default(),
        FollowCamera,
        rig,
        Transform::from_translation(PLAYER_SPAWN + pose * Vec3::Z * camera_tuning.distance)
            .with_rotation(pose),
    ));

    info!(
        "[LEVEL] Spawned player {:?} at {:?} with abilities {:?}",
        player, PLAYER_SPAWN, starting.0
    );
}

pub(crate) fn despawn_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("[LEVEL] Despawned {} level entities", count);
}
