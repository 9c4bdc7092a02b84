//! Core domain: session events.

use bevy::ecs::message::Message;

/// Fired every time the player enters a named area.
#[derive(Debug, Clone)]
pub struct AreaEnteredEvent {
    pub area: String,
    /// True only the first time this area is entered in the session.
    pub first_visit: bool,
}

impl Message for AreaEnteredEvent {}
