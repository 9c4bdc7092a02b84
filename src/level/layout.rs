//! Level domain: the demo course as plain data.

use bevy::prelude::*;

/// What a block of static geometry is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Ground,
    Platform,
    Wall,
}

/// An axis-aligned static box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub center: Vec3,
    pub size: Vec3,
}

impl Block {
    const fn new(kind: BlockKind, center: Vec3, size: Vec3) -> Self {
        Self { kind, center, size }
    }

    /// Height of the walkable top face.
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }
}

/// A named trigger volume recorded in the level session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaZone {
    pub name: &'static str,
    pub center: Vec3,
    pub size: Vec3,
}

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 6.0);

/// Capsule dimensions of the player body. Half height is radius plus half
/// the segment length, so the origin rests 0.9 above the floor.
pub const PLAYER_RADIUS: f32 = 0.4;
pub const PLAYER_SEGMENT: f32 = 1.0;

pub const COURSE: [Block; 9] = [
    Block::new(BlockKind::Ground, Vec3::new(0.0, -0.5, 0.0), Vec3::new(40.0, 1.0, 40.0)),
    // Staircase of platforms, each reachable with a single jump.
    Block::new(BlockKind::Platform, Vec3::new(4.0, 0.5, 0.0), Vec3::new(3.0, 1.0, 3.0)),
    Block::new(BlockKind::Platform, Vec3::new(8.0, 1.25, -2.0), Vec3::new(3.0, 0.5, 3.0)),
    Block::new(BlockKind::Platform, Vec3::new(8.0, 2.75, -7.0), Vec3::new(3.0, 0.5, 3.0)),
    // Gap only a dash or a double jump clears.
    Block::new(BlockKind::Platform, Vec3::new(-1.0, 2.75, -9.0), Vec3::new(3.0, 0.5, 3.0)),
    Block::new(BlockKind::Wall, Vec3::new(0.0, 2.0, -20.0), Vec3::new(40.0, 4.0, 1.0)),
    Block::new(BlockKind::Wall, Vec3::new(0.0, 2.0, 20.0), Vec3::new(40.0, 4.0, 1.0)),
    Block::new(BlockKind::Wall, Vec3::new(-20.0, 2.0, 0.0), Vec3::new(1.0, 4.0, 40.0)),
    Block::new(BlockKind::Wall, Vec3::new(20.0, 2.0, 0.0), Vec3::new(1.0, 4.0, 40.0)),
];

pub const AREAS: [AreaZone; 3] = [
    AreaZone {
        name: "meadow",
        center: Vec3::new(0.0, 1.0, 6.0),
        size: Vec3::new(8.0, 2.0, 6.0),
    },
    AreaZone {
        name: "stairs",
        center: Vec3::new(8.0, 3.0, -2.0),
        size: Vec3::new(3.0, 2.0, 3.0),
    },
    AreaZone {
        name: "lookout",
        center: Vec3::new(-1.0, 4.0, -9.0),
        size: Vec3::new(3.0, 2.0, 3.0),
    },
];
