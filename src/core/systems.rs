//! Core domain: session lifecycle systems.

use bevy::prelude::*;

use crate::core::resources::LevelSession;

pub(crate) fn begin_level_session(mut commands: Commands) {
    let session = LevelSession::default();
    info!("[LEVEL] Session started with seed: {}", session.seed);
    commands.insert_resource(session);
}

pub(crate) fn end_level_session(mut commands: Commands, session: Option<Res<LevelSession>>) {
    if let Some(session) = session {
        info!(
            "[LEVEL] Session ended, {} area(s) visited",
            session.visited_areas.len()
        );
    }
    commands.remove_resource::<LevelSession>();
}
