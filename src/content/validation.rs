//! Validation and sanitizing of loaded tuning values.

use super::data::{BlockDef, ControllerConfigDef, CourseDef};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub file: &'static str,
    pub field: String,
    pub value: f64,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}' = {} is invalid (expected {})",
            self.file, self.field, self.value, self.expected
        )
    }
}

/// Replace a field with its fallback when the predicate rejects it.
macro_rules! check_field {
    ($errors:expr, $value:expr, $fallback:expr, $field:expr, $expected:expr, $pred:expr $(,)?) => {
        let ok: bool = ($pred)($value);
        if !ok {
            $errors.push(ValidationError {
                file: "controller.ron",
                field: $field.to_string(),
                value: $value as f64,
                expected: $expected,
            });
            $value = $fallback;
        }
    };
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Check every tuning field, replacing rejected values with the compiled default.
/// Returns the sanitized config and the list of fields that were replaced.
pub fn sanitize_controller(
    mut config: ControllerConfigDef,
) -> (ControllerConfigDef, Vec<ValidationError>) {
    let fallback = ControllerConfigDef::default();
    let mut errors = Vec::new();

    check_field!(
        errors,
        config.fixed_hz,
        fallback.fixed_hz,
        "fixed_hz",
        "a positive tick rate",
        |v: f64| v.is_finite() && v > 0.0
    );
    check_field!(
        errors,
        config.gravity,
        fallback.gravity,
        "gravity",
        "a finite number",
        |v: f32| v.is_finite()
    );

    let m = &mut config.movement;
    let fm = &fallback.movement;
    check_field!(
        errors,
        m.top_speed,
        fm.top_speed,
        "movement.top_speed",
        "a non-negative number",
        non_negative,
    );
    check_field!(
        errors,
        m.acceleration,
        fm.acceleration,
        "movement.acceleration",
        "a non-negative number",
        non_negative,
    );
    check_field!(
        errors,
        m.jump_force,
        fm.jump_force,
        "movement.jump_force",
        "a non-negative number",
        non_negative,
    );
    check_field!(
        errors,
        m.coyote_time,
        fm.coyote_time,
        "movement.coyote_time",
        "a non-negative duration",
        non_negative,
    );
    check_field!(
        errors,
        m.jump_buffer_time,
        fm.jump_buffer_time,
        "movement.jump_buffer_time",
        "a non-negative duration",
        non_negative
    );
    check_field!(
        errors,
        m.jump_cut_multiplier,
        fm.jump_cut_multiplier,
        "movement.jump_cut_multiplier",
        "a factor in (0, 1]",
        |v: f32| v > 0.0 && v <= 1.0
    );
    check_field!(
        errors,
        m.fall_multiplier,
        fm.fall_multiplier,
        "movement.fall_multiplier",
        "a non-negative factor",
        non_negative
    );
    check_field!(
        errors,
        m.low_jump_multiplier,
        fm.low_jump_multiplier,
        "movement.low_jump_multiplier",
        "a non-negative factor",
        non_negative
    );
    check_field!(
        errors,
        m.max_fall_speed,
        fm.max_fall_speed,
        "movement.max_fall_speed",
        "a negative speed",
        |v: f32| v.is_finite() && v < 0.0
    );
    check_field!(
        errors,
        m.kill_plane_y,
        fm.kill_plane_y,
        "movement.kill_plane_y",
        "a finite height",
        |v: f32| v.is_finite()
    );

    let b = &mut config.body;
    let fb = &fallback.body;
    check_field!(errors, b.size.0, fb.size.0, "body.size.x", "a positive extent", positive);
    check_field!(errors, b.size.1, fb.size.1, "body.size.y", "a positive extent", positive);
    check_field!(
        errors,
        b.sensor_height,
        fb.sensor_height,
        "body.sensor_height",
        "a positive extent",
        positive,
    );

    let c = &mut config.camera;
    let fc = &fallback.camera;
    check_field!(
        errors,
        c.smooth_time,
        fc.smooth_time,
        "camera.smooth_time",
        "a non-negative duration",
        non_negative,
    );

    if let Some(bounds) = c.bounds {
        if bounds.min_x > bounds.max_x || bounds.min_y > bounds.max_y {
            errors.push(ValidationError {
                file: "controller.ron",
                field: "camera.bounds".to_string(),
                value: f64::NAN,
                expected: "min <= max on both axes",
            });
            c.bounds = None;
        }
    }

    (config, errors)
}

fn block_is_valid(block: &BlockDef) -> bool {
    positive(block.size.0) && positive(block.size.1)
}

/// Drop course blocks with degenerate extents.
pub fn sanitize_course(mut course: CourseDef) -> (CourseDef, Vec<ValidationError>) {
    let mut errors = Vec::new();

    for (list_name, list) in [
        ("blocks", &mut course.blocks),
        ("checkpoints", &mut course.checkpoints),
        ("hazards", &mut course.hazards),
    ] {
        let mut index = 0;
        list.retain(|block| {
            let keep = block_is_valid(block);
            if !keep {
                errors.push(ValidationError {
                    file: "course.ron",
                    field: format!("{}[{}].size", list_name, index),
                    value: block.size.0.min(block.size.1) as f64,
                    expected: "positive extents",
                });
            }
            index += 1;
            keep
        });
    }

    (course, errors)
}
