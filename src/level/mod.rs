//! Level domain: data-driven demo course (ground, checkpoints, hazards).

mod spawn;

use bevy::prelude::*;

use crate::content::{BlockDef, CourseDef};
use crate::core::GameState;
use crate::level::spawn::spawn_course;

/// Course layout in world units, converted from `course.ron`.
#[derive(Resource, Debug, Clone)]
pub struct CourseLayout {
    pub spawn: Vec2,
    pub blocks: Vec<Rect>,
    pub checkpoints: Vec<Rect>,
    pub hazards: Vec<Rect>,
}

impl Default for CourseLayout {
    fn default() -> Self {
        Self::from_def(CourseDef::default())
    }
}

impl CourseLayout {
    pub fn from_def(def: CourseDef) -> Self {
        let to_rects =
            |blocks: &[BlockDef]| -> Vec<Rect> { blocks.iter().map(block_rect).collect() };

        Self {
            spawn: Vec2::new(def.spawn.0, def.spawn.1),
            blocks: to_rects(&def.blocks),
            checkpoints: to_rects(&def.checkpoints),
            hazards: to_rects(&def.hazards),
        }
    }
}

fn block_rect(block: &BlockDef) -> Rect {
    Rect::from_center_size(
        Vec2::new(block.position.0, block.position.1),
        Vec2::new(block.size.0, block.size.1),
    )
}

/// Course spawning. The player bootstrap runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CourseLayout>()
            .add_systems(OnEnter(GameState::Run), spawn_course.in_set(LevelSet));
    }
}
