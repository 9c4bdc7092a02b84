//! Level domain: area trigger tracking.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{AreaEnteredEvent, LevelSession};
use crate::level::components::AreaSensor;
use crate::movement::Player;

/// Record `area` in the session and build the event to publish.
pub fn record_area_entry(session: &mut LevelSession, area: &str) -> AreaEnteredEvent {
    let first_visit = session.enter_area(area);
    AreaEnteredEvent {
        area: area.to_string(),
        first_visit,
    }
}

pub(crate) fn track_area_entries(
    mut collision_start_events: MessageReader<CollisionStart>,
    sensors: Query<&AreaSensor>,
    players: Query<(), With<Player>>,
    mut session: Option<ResMut<LevelSession>>,
    mut entered: MessageWriter<AreaEnteredEvent>,
) {
    for event in collision_start_events.read() {
        let (sensor, other) = if let Ok(sensor) = sensors.get(event.collider1) {
            (sensor, event.collider2)
        } else if let Ok(sensor) = sensors.get(event.collider2) {
            (sensor, event.collider1)
        } else {
            continue;
        };

        if players.get(other).is_err() {
            continue;
        }

        let Some(session) = session.as_deref_mut() else {
            warn_once!("[LEVEL] Area {} entered with no level session", sensor.name);
            continue;
        };

        let event = record_area_entry(session, &sensor.name);
        if event.first_visit {
            info!("[LEVEL] Discovered area: {}", event.area);
        } else {
            debug!("[LEVEL] Re-entered area: {}", event.area);
        }
        entered.write(event);
    }
}
