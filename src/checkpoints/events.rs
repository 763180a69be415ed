//! Checkpoints domain: kill requests.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillCause {
    /// Fell below the kill plane.
    OutOfBounds,
    /// Touched a hazard collider.
    Hazard,
}

/// Request to send a character back to its last checkpoint.
#[derive(Debug, Clone, Copy)]
pub struct KillPlayerEvent {
    pub entity: Entity,
    pub cause: KillCause,
}

impl Message for KillPlayerEvent {}
