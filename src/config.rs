use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::store::UndoPolicy;

/// Dash pattern used for dotted outlines, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

impl Default for DashPattern {
    fn default() -> Self {
        Self { on: 2.0, off: 2.0 }
    }
}

/// Startup settings for the drawing canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct CanvasConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub dash: DashPattern,
    pub line_width: f32,
    pub undo_policy: UndoPolicy,
    /// Keep the circle anchor after release so the preview circle keeps
    /// following the pointer until the next gesture or tool change
    pub retain_circle_anchor: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "DrawingApp".to_owned(),
            window_size: [400.0, 400.0],
            dash: DashPattern::default(),
            line_width: 1.0,
            undo_policy: UndoPolicy::default(),
            retain_circle_anchor: false,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }

        let [width, height] = self.window_size;
        if !(positive(width) && positive(height)) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }

        let DashPattern { on, off } = self.dash;
        if !(positive(on) && positive(off)) {
            return Err(ConfigError::InvalidDashPattern { on, off });
        }

        if !positive(self.line_width) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }

        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
