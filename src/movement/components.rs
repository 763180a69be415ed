//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Geometry that kills on contact
    Hazard,
    /// Sensors (checkpoints, triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Box-shaped overlap query below the character, evaluated once per tick.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    /// Anchor relative to the body center.
    pub offset: Vec2,
    pub size: Vec2,
    pub shape: Collider,
    /// Result of the most recent query.
    pub grounded: bool,
}

impl GroundSensor {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset,
            size,
            shape: Collider::rectangle(size.x, size.y),
            grounded: false,
        }
    }
}
