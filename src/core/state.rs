//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is being loaded; nothing is simulated yet.
    #[default]
    Boot,
    Run,
    Paused,
}
