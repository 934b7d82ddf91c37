use serde::{Deserialize, Serialize};

/// The shape tools offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Rectangle,
    Circle,
    FreeBrush,
}

impl Tool {
    /// All tools in toolbar order
    pub const ALL: [Tool; 3] = [Tool::Rectangle, Tool::Circle, Tool::FreeBrush];

    /// Label shown in the tool selector
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::FreeBrush => "Free Brush",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
