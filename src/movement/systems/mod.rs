//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, validate_player_body};
pub(crate) use input::read_input;
pub(crate) use movement::{check_kill_plane, resolve_motion};
