//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Defaults double as the compiled-in fallback when a
//! file is missing or malformed.

use serde::{Deserialize, Serialize};

// ============================================================================
// Controller (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfigDef {
    pub schema_version: u32,
    /// Simulation ticks per second.
    pub fixed_hz: f64,
    /// Baseline world gravity handed to the physics engine (negative is down).
    pub gravity: f32,
    pub movement: MovementDef,
    pub body: BodyDef,
    pub camera: CameraDef,
}

impl Default for ControllerConfigDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            fixed_hz: 50.0,
            gravity: -980.0,
            movement: MovementDef::default(),
            body: BodyDef::default(),
            camera: CameraDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub top_speed: f32,
    /// Horizontal speed change per second while ramping toward the target.
    pub acceleration: f32,
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub jump_cut_multiplier: f32,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    /// Floor on vertical velocity; negative.
    pub max_fall_speed: f32,
    /// Characters whose y drops below this are killed.
    pub kill_plane_y: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            top_speed: 320.0,
            acceleration: 2400.0,
            jump_force: 560.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            jump_cut_multiplier: 0.5,
            fall_multiplier: 2.0,
            low_jump_multiplier: 1.25,
            max_fall_speed: -900.0,
            kill_plane_y: -600.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyDef {
    pub size: (f32, f32),
    /// Ground sensor anchor, relative to the body center.
    pub sensor_offset: (f32, f32),
    /// Ground sensor thickness. Its width always matches the body.
    pub sensor_height: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            size: (24.0, 48.0),
            sensor_offset: (0.0, -24.0),
            sensor_height: 4.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDef {
    pub offset: (f32, f32),
    pub smooth_time: f32,
    pub look_ahead: f32,
    pub bounds: Option<CameraBoundsDef>,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            offset: (0.0, 60.0),
            smooth_time: 0.2,
            look_ahead: 80.0,
            bounds: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CameraBoundsDef {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

// ============================================================================
// Course (course.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseDef {
    pub schema_version: u32,
    pub spawn: (f32, f32),
    pub blocks: Vec<BlockDef>,
    pub checkpoints: Vec<BlockDef>,
    pub hazards: Vec<BlockDef>,
}

/// Axis-aligned box placed by its center.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct BlockDef {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl BlockDef {
    pub const fn new(position: (f32, f32), size: (f32, f32)) -> Self {
        Self { position, size }
    }
}

impl Default for CourseDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            spawn: (-300.0, 0.0),
            blocks: vec![
                BlockDef::new((-250.0, -100.0), (400.0, 40.0)),
                BlockDef::new((250.0, -100.0), (300.0, 40.0)),
            ],
            checkpoints: vec![BlockDef::new((250.0, -40.0), (32.0, 80.0))],
            hazards: Vec::new(),
        }
    }
}
