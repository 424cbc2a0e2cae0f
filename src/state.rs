use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, InProgressEdit};
use crate::input::{key_action, InputEvent, KeyAction};
use crate::persistence::DrawingStore;
use crate::shape::ShapeKind;
use crate::tool::{PenConfig, ToolMode, ERASER_COLOR};

/// Requests for whoever owns the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Quit,
}

/// Requests coming from the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// RGB sliders (0..=1 each) and width slider (0..=1) moved
    SlidersChanged { rgb: [f32; 3], width: f32 },
    /// Eraser button toggled on
    EraserOn,
    /// Eraser button toggled off
    EraserOff,
    SelectShape(ShapeKind),
    Save(String),
    Load(String),
}

/// Brush-size ring shown under the pointer while hovering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorPreview {
    pub position: Pos2,
    pub visible: bool,
}

/// Settings remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub pen: PenConfig,
    pub dim: bool,
}

/// Everything the overlay is editing, plus the tool settings that feed it.
#[derive(Debug, Default)]
pub struct EditorState {
    canvas: Canvas,
    pen: PenConfig,
    tool: ToolMode,
    dim: bool,
    cursor: CursorPreview,
    erasing: bool,
}

impl EditorState {
    pub fn new(settings: Settings) -> Self {
        Self {
            pen: settings.pen,
            dim: settings.dim,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            pen: self.pen.clone(),
            dim: self.dim,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn pen(&self) -> &PenConfig {
        &self.pen
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn is_dimmed(&self) -> bool {
        self.dim
    }

    pub fn cursor(&self) -> CursorPreview {
        self.cursor
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
    }

    /// Applies one input event. Returns a signal the caller must act on, if any.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Signal> {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                self.on_pointer_down(location.position);
            }
            InputEvent::PointerDown { .. } => {}
            InputEvent::PointerDrag { location } => {
                // follow whatever the press started, even if the tool changed since
                match self.canvas.in_progress() {
                    InProgressEdit::Stroke(_) => self.canvas.add_point(location.position),
                    InProgressEdit::Shape(_) => self.canvas.update_shape(location.position),
                    InProgressEdit::Idle => {}
                }
                self.cursor.position = location.position;
            }
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::PointerMove { location } => {
                self.cursor.position = location.position;
                self.cursor.visible = location.is_in_canvas;
            }
            InputEvent::KeyPressed { key } => {
                return key_action(*key).and_then(|action| self.apply_key(action));
            }
        }
        None
    }

    fn on_pointer_down(&mut self, pos: Pos2) {
        self.erasing = self.tool.is_eraser();
        match self.tool {
            ToolMode::Shape(kind) => {
                self.canvas.start_shape(kind, self.pen.color, self.pen.width, pos)
            }
            ToolMode::Eraser => self.canvas.start_stroke(ERASER_COLOR, self.pen.width, pos),
            ToolMode::Pen => self.canvas.start_stroke(self.pen.color, self.pen.width, pos),
        }
        self.cursor = CursorPreview {
            position: pos,
            visible: false,
        };
    }

    fn on_pointer_up(&mut self) {
        if self.canvas.current_shape().is_some() {
            self.canvas.finish_shape();
        } else if self.canvas.finish_stroke() && self.erasing {
            self.canvas.erase_with_last_stroke();
        }
        self.erasing = false;
        self.cursor.visible = true;
    }

    /// Applies a keyboard shortcut.
    pub fn apply_key(&mut self, action: KeyAction) -> Option<Signal> {
        log::debug!("Key action: {:?}", action);
        match action {
            KeyAction::SetColor(preset) => {
                self.pen.set_color(preset);
                if self.tool.is_eraser() {
                    self.tool = ToolMode::Pen;
                }
            }
            KeyAction::SetWidth(preset) => self.pen.set_width(preset),
            KeyAction::ToggleDim => self.dim = !self.dim,
            KeyAction::Clear => {
                log::info!("Clearing canvas");
                self.canvas.clear();
            }
            KeyAction::Quit => return Some(Signal::Quit),
        }
        None
    }

    /// Applies a toolbar request. Save and load report a status line for the user.
    pub fn apply_toolbar(&mut self, action: ToolbarAction, store: &DrawingStore) -> Option<String> {
        match action {
            ToolbarAction::SlidersChanged { rgb, width } => {
                self.pen.set_from_sliders(rgb, width);
                self.set_tool(ToolMode::Pen);
                None
            }
            ToolbarAction::EraserOn => {
                self.set_tool(ToolMode::Eraser);
                None
            }
            ToolbarAction::EraserOff => {
                if self.tool.is_eraser() {
                    self.set_tool(ToolMode::Pen);
                }
                None
            }
            ToolbarAction::SelectShape(kind) => {
                self.set_tool(ToolMode::Shape(kind));
                None
            }
            ToolbarAction::Save(name) => Some(match store.save(&self.canvas, &name) {
                Ok(path) => format!("Saved to {}", path.display()),
                Err(err) => {
                    log::error!("Error saving drawing: {}", err);
                    format!("Error saving file: {err}")
                }
            }),
            ToolbarAction::Load(name) => Some(match store.load(&mut self.canvas, &name) {
                Ok(path) => format!("Loaded from {}", path.display()),
                Err(err) => {
                    log::error!("Error loading drawing: {}", err);
                    format!("Error loading file: {err}")
                }
            }),
        }
    }
}
