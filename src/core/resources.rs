//! Core domain: per-level session state.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// State that lives exactly as long as one level is loaded.
///
/// Inserted on entering [`GameState::Playing`](crate::core::GameState) and
/// removed on exit, so nothing carries over between level loads.
#[derive(Resource, Debug)]
pub struct LevelSession {
    /// Seed for everything random during this session.
    pub seed: u64,
    /// Areas entered at least once.
    pub visited_areas: HashSet<String>,
    /// Area the player is currently in, if any.
    pub current_area: Option<String>,
}

impl Default for LevelSession {
    fn default() -> Self {
        Self::with_seed(rand::rng().random())
    }
}

impl LevelSession {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            visited_areas: HashSet::new(),
            current_area: None,
        }
    }

    /// Record entering `area`. Returns true on the first visit.
    pub fn enter_area(&mut self, area: &str) -> bool {
        self.current_area = Some(area.to_string());
        self.visited_areas.insert(area.to_string())
    }

    pub fn has_visited(&self, area: &str) -> bool {
        self.visited_areas.contains(area)
    }
}
