use std::time::Duration;

use serde_json::Value;

use super::args::{Params, color_or};
use crate::domain::{AMBER, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, CellGeometry, GRID_LINE, Rgba, SLATE, rule_by_name};
use crate::error::{LessonError, Result};

/// Settings for the Game of Life window, built from `key=value` arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub background: Rgba,
    pub alive: Rgba,
    pub grid_lines: Rgba,
    pub frame_delay: Duration,
    pub rule: String,
    pub start_paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_owned(),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            background: SLATE,
            alive: AMBER,
            grid_lines: GRID_LINE,
            frame_delay: Duration::from_millis(100),
            rule: "conway".to_owned(),
            start_paused: true,
        }
    }
}

fn positive_int(params: &Params, key: &str, default: i32) -> Result<i32> {
    match params.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_i64()
            .filter(|&v| v > 0 && v <= i32::MAX as i64)
            .map(|v| v as i32)
            .ok_or_else(|| {
                LessonError::InvalidArgument(format!("{} must be a positive integer, got {}", key, value))
            }),
    }
}

fn string_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl EngineConfig {
    /// Build from parsed arguments, falling back to defaults for missing keys
    pub fn from_params(params: &Params) -> Result<Self> {
        let defaults = Self::default();

        let width = positive_int(params, "width", defaults.width)?;
        let height = positive_int(params, "height", defaults.height)?;
        let cell_size = positive_int(params, "cell", defaults.cell_size)?;
        if cell_size > width || cell_size > height {
            return Err(LessonError::InvalidArgument(format!(
                "cell size {} does not fit a {}x{} canvas",
                cell_size, width, height
            )));
        }

        let delay_ms = positive_int(params, "delay", defaults.frame_delay.as_millis() as i32)?;

        let rule = params.get("rule").map(string_value).unwrap_or(defaults.rule);
        if rule_by_name(&rule).is_none() {
            return Err(LessonError::InvalidArgument(format!("unknown rule `{}`", rule)));
        }

        let start_paused = match params.get("paused") {
            None => defaults.start_paused,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(LessonError::InvalidArgument(format!(
                    "paused must be true or false, got {}",
                    other
                )));
            }
        };

        Ok(Self {
            title: params.get("title").map(string_value).unwrap_or(defaults.title),
            width,
            height,
            cell_size,
            background: color_or(params, "background", defaults.background),
            alive: color_or(params, "alive", defaults.alive),
            grid_lines: color_or(params, "grid", defaults.grid_lines),
            frame_delay: Duration::from_millis(delay_ms as u64),
            rule,
            start_paused,
        })
    }

    pub fn geometry(&self) -> CellGeometry {
        CellGeometry::new(self.width, self.height, self.cell_size)
    }
}
