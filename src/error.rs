use thiserror::Error;

/// Problems with a [`CanvasConfig`](crate::config::CanvasConfig)
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Window title must not be empty")]
    EmptyTitle,

    #[error("Window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },

    #[error("Dash pattern lengths must be positive, got {on} on / {off} off")]
    InvalidDashPattern { on: f32, off: f32 },

    #[error("Line width must be positive, got {0}")]
    InvalidLineWidth(f32),
}

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;
