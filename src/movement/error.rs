//! Movement domain: setup errors.

use bevy::prelude::*;

/// A character was spawned without what the controller needs to simulate it.
#[derive(Debug)]
pub enum MovementSetupError {
    MissingRigidBody(Entity),
    MissingVelocity(Entity),
}

impl std::fmt::Display for MovementSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRigidBody(entity) => {
                write!(f, "Player {} has no RigidBody attached", entity)
            }
            Self::MissingVelocity(entity) => {
                write!(f, "Player {} has no LinearVelocity attached", entity)
            }
        }
    }
}

impl std::error::Error for MovementSetupError {}
