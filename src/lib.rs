#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod stroke;
pub mod tool;

pub use app::PenApp;
pub use canvas::{Canvas, InProgressEdit};
pub use error::{PersistenceError, PersistenceResult};
pub use input::{InputEvent, InputHandler, InputLocation, KeyAction};
pub use persistence::DrawingStore;
pub use renderer::{PaintItem, Renderer};
pub use shape::{Shape, ShapeKind};
pub use state::{EditorState, Signal, ToolbarAction};
pub use stroke::Stroke;
pub use tool::{ColorPreset, PenConfig, ToolMode, WidthPreset};
