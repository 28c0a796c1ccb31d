//! Validation for motion tuning values.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field '{}' {}", self.source, self.field, self.message)
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $source:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                source: $source.to_string(),
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is zero or positive
macro_rules! check_non_negative {
    ($errors:expr, $source:expr, $field:expr, $value:expr) => {
        if !($value >= 0.0) {
            $errors.push(ValidationError {
                source: $source.to_string(),
                field: $field,
                message: format!("must not be negative, got {}", $value),
            });
        }
    };
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if the config is usable.
///
/// An empty jump list is not rejected here: the scheduler reports it and
/// disables itself, leaving movement working.
pub fn validate_motion_config(config: &MotionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != SCHEMA_VERSION {
        errors.push(ValidationError {
            source: "MotionConfig".to_string(),
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                SCHEMA_VERSION, config.schema_version
            ),
        });
    }
    check_positive!(errors, "MotionConfig", "fixed_timestep_hz", config.fixed_timestep_hz);
    check_non_negative!(errors, "MotionConfig", "gravity", config.gravity);

    // Body and sensors
    check_positive!(errors, "Body", "width", config.body.width);
    check_positive!(errors, "Body", "height", config.body.height);
    check_non_negative!(errors, "Body", "gravity_scale", config.body.gravity_scale);
    check_positive!(errors, "Sensors", "ground_distance", config.sensors.ground_distance);
    check_positive!(errors, "Sensors", "wall_distance", config.sensors.wall_distance);

    // Jumps
    for (index, jump) in config.jumps.iter().enumerate() {
        let source = format!("jumps[{}] ({})", index, jump.kind_name());
        match jump {
            JumpDef::Regular {
                force,
                coyote_time,
                variable_height,
            } => {
                check_positive!(errors, source, "force", *force);
                if let Some(coyote_time) = coyote_time {
                    check_non_negative!(errors, source, "coyote_time", *coyote_time);
                }
                if let Some(def) = variable_height {
                    validate_variable_height(&mut errors, &source, def);
                }
            }
            JumpDef::Multi {
                force,
                variable_height,
                ..
            } => {
                check_positive!(errors, source, "force", *force);
                if let Some(def) = variable_height {
                    validate_variable_height(&mut errors, &source, def);
                }
            }
            JumpDef::Wall {
                horizontal_force,
                vertical_force,
                override_duration,
            } => {
                check_non_negative!(errors, source, "horizontal_force", *horizontal_force);
                check_positive!(errors, source, "vertical_force", *vertical_force);
                if let Some(duration) = override_duration {
                    check_non_negative!(errors, source, "override_duration", *duration);
                }
            }
        }
    }

    // Movement
    match &config.movement {
        MovementDef::Cardinal { speed, dash_speed }
        | MovementDef::SideToSide { speed, dash_speed } => {
            check_positive!(errors, "Movement", "speed", *speed);
            if let Some(dash_speed) = dash_speed {
                check_positive!(errors, "Movement", "dash_speed", *dash_speed);
            }
        }
        MovementDef::Momentum {
            acceleration,
            speed_cap,
            dash_speed_cap,
        } => {
            check_positive!(errors, "Movement", "acceleration", *acceleration);
            check_positive!(errors, "Movement", "speed_cap", *speed_cap);
            if let Some(cap) = dash_speed_cap {
                check_positive!(errors, "Movement", "dash_speed_cap", *cap);
            }
        }
    }

    errors
}

fn validate_variable_height(
    errors: &mut Vec<ValidationError>,
    source: &str,
    def: &VariableHeightDef,
) {
    check_non_negative!(errors, source, "variable_height.held_force", def.held_force);
    check_positive!(errors, source, "variable_height.max_hold_time", def.max_hold_time);
    if let Some(scale) = def.jump_gravity_scale {
        check_non_negative!(errors, source, "variable_height.jump_gravity_scale", scale);
    }
}
