//! Checkpoints domain: checkpoint, hazard and respawn-target components.

use bevy::prelude::*;

/// Sensor volume that becomes the player's respawn point on entry.
#[derive(Component, Debug)]
pub struct Checkpoint;

/// Solid geometry that kills the player on contact.
#[derive(Component, Debug)]
pub struct Hazard;

/// Where a character goes when killed. Last write wins.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct LastCheckpoint(Option<Vec2>);

impl LastCheckpoint {
    pub fn at(position: Vec2) -> Self {
        Self(Some(position))
    }

    /// Record a checkpoint position. Returns false when it was already the active one.
    pub fn record(&mut self, position: Vec2) -> bool {
        if self.0 == Some(position) {
            return false;
        }
        self.0 = Some(position);
        true
    }

    pub fn position(&self) -> Option<Vec2> {
        self.0
    }
}
