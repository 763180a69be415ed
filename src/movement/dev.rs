//! Movement domain: debug overlay for ground sensors.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GroundSensor;

pub(crate) fn draw_ground_sensors(mut gizmos: Gizmos, query: Query<(&Position, &GroundSensor)>) {
    for (position, sensor) in &query {
        let color = if sensor.grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.rect_2d(position.0 + sensor.offset, sensor.size, color);
    }
}
