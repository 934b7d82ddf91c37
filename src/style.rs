use egui::Color32;
use serde::{Deserialize, Serialize};

/// How outlines and strokes are traced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Drawing style applied to every shape at paint time.
///
/// Shapes never capture a style of their own: changing the style restyles
/// the whole canvas on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    color: Color32,
    line: LineStyle,
    filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Style::DEFAULT_COLOR,
            line: LineStyle::Solid,
            filled: false,
        }
    }
}

impl Style {
    pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn line(&self) -> LineStyle {
        self.line
    }

    pub fn is_dashed(&self) -> bool {
        self.line == LineStyle::Dashed
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn with_color(self, color: Color32) -> Self {
        Self { color, ..self }
    }

    pub fn with_dashed(self, dashed: bool) -> Self {
        let line = if dashed { LineStyle::Dashed } else { LineStyle::Solid };
        Self { line, ..self }
    }

    pub fn with_filled(self, filled: bool) -> Self {
        Self { filled, ..self }
    }
}
