//! Movement domain: ability gate flags.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One gated movement capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Walk,
    Jump,
    DoubleJump,
    Dash,
    Sprint,
    SlowFall,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Walk,
        Ability::Jump,
        Ability::DoubleJump,
        Ability::Dash,
        Ability::Sprint,
        Ability::SlowFall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Ability::Walk => "walk",
            Ability::Jump => "jump",
            Ability::DoubleJump => "double_jump",
            Ability::Dash => "dash",
            Ability::Sprint => "sprint",
            Ability::SlowFall => "slow_fall",
        }
    }
}

/// Per-controller capability switches, read fresh every tick.
///
/// Flags may be flipped at any time (pickups, death handling, debug hotkeys);
/// revoking one only stops new triggers, it never cancels an effect already
/// running.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityFlags {
    pub can_walk: bool,
    pub can_jump: bool,
    pub can_double_jump: bool,
    pub can_dash: bool,
    pub can_sprint: bool,
    pub can_slow_fall: bool,
}

impl Default for AbilityFlags {
    fn default() -> Self {
        Self {
            can_walk: true,
            can_jump: true,
            can_double_jump: false,
            can_dash: false,
            can_sprint: true,
            can_slow_fall: false,
        }
    }
}

impl AbilityFlags {
    /// Everything off except walking, the state a respawning controller waits in.
    pub fn walk_only() -> Self {
        Self {
            can_walk: true,
            can_jump: false,
            can_double_jump: false,
            can_dash: false,
            can_sprint: false,
            can_slow_fall: false,
        }
    }

    pub fn has(&self, ability: Ability) -> bool {
        match ability {
            Ability::Walk => self.can_walk,
            Ability::Jump => self.can_jump,
            Ability::DoubleJump => self.can_double_jump,
            Ability::Dash => self.can_dash,
            Ability::Sprint => self.can_sprint,
            Ability::SlowFall => self.can_slow_fall,
        }
    }

    pub fn set(&mut self, ability: Ability, enabled: bool) {
        let flag = match ability {
            Ability::Walk => &mut self.can_walk,
            Ability::Jump => &mut self.can_jump,
            Ability::DoubleJump => &mut self.can_double_jump,
            Ability::Dash => &mut self.can_dash,
            Ability::Sprint => &mut self.can_sprint,
            Ability::SlowFall => &mut self.can_slow_fall,
        };
        *flag = enabled;
    }
}

/// Abilities a freshly spawned controller starts with. Loaded from content.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct StartingAbilities(pub AbilityFlags);
