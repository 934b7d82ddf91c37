#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod store;
pub mod stroke;
pub mod style;
pub mod tools;

pub use app::DrawingApp;
pub use canvas::DrawingCanvas;
pub use config::CanvasConfig;
pub use controller::{Gesture, InteractionController};
pub use error::ConfigError;
pub use event::CanvasEvent;
pub use geometry::{Circle, Point, Rectangle};
pub use renderer::Renderer;
pub use store::{Shape, ShapeStore, UndoPolicy};
pub use stroke::Stroke;
pub use style::{LineStyle, Style};
pub use tools::Tool;
