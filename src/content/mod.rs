//! Content domain: RON-driven controller tuning and course layout.

mod data;
mod loader;
mod validation;


pub use data::{
    BlockDef, BodyDef, CameraBoundsDef, CameraDef, ControllerConfigDef, CourseDef, MovementDef,
};
pub use loader::{ContentLoadError, load_controller_config, load_course};
pub use validation::{ValidationError, sanitize_controller, sanitize_course};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::level::CourseLayout;
use crate::movement::MovementTuning;

/// Directory holding the RON data files, relative to the working directory.
const DATA_DIR: &str = "assets/data";

/// Systems that insert content-derived resources. Anything reading tuning at startup runs after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content.in_set(ContentSet));
    }
}

/// Load controller and course data, falling back to compiled defaults on failure.
fn load_content(mut commands: Commands, mut fixed_time: ResMut<Time<Fixed>>) {
    let base_path = Path::new(DATA_DIR);

    let controller = load_controller_config(base_path).unwrap_or_else(|e| {
        error!("{}; using default controller tuning", e);
        ControllerConfigDef::default()
    });
    let (controller, controller_errors) = sanitize_controller(controller);
    for e in &controller_errors {
        warn!("{}; using default", e);
    }

    let course = load_course(base_path).unwrap_or_else(|e| {
        error!("{}; using default course", e);
        CourseDef::default()
    });
    let (course, course_errors) = sanitize_course(course);
    for e in &course_errors {
        warn!("{}; block skipped", e);
    }

    fixed_time.set_timestep_hz(controller.fixed_hz);
    commands.insert_resource(Gravity(Vec2::new(0.0, controller.gravity)));
    commands.insert_resource(MovementTuning::from_defs(
        &controller.movement,
        &controller.body,
    ));
    commands.insert_resource(CameraTuning::from_def(&controller.camera));

    info!(
        "Content loaded: tick={}Hz, gravity={}, blocks={}, checkpoints={}, hazards={}",
        controller.fixed_hz,
        controller.gravity,
        course.blocks.len(),
        course.checkpoints.len(),
        course.hazards.len()
    );

    commands.insert_resource(CourseLayout::from_def(course));
}
