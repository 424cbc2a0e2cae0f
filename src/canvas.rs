use egui::{Color32, Pos2};

use crate::shape::{Shape, ShapeKind};
use crate::stroke::Stroke;

/// What the user is drawing right now. At most one stroke or shape is ever in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InProgressEdit {
    #[default]
    Idle,
    Stroke(Stroke),
    Shape(Shape),
}

impl InProgressEdit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Stroke(_) => "DrawingStroke",
            Self::Shape(_) => "DrawingShape",
        }
    }
}

/// Everything drawn on the overlay: committed strokes and shapes plus the live edit.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    strokes: Vec<Stroke>,
    shapes: Vec<Shape>,
    in_progress: InProgressEdit,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a canvas from already committed content, with nothing in progress.
    pub fn from_parts(strokes: Vec<Stroke>, shapes: Vec<Shape>) -> Self {
        Self {
            strokes,
            shapes,
            in_progress: InProgressEdit::Idle,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn in_progress(&self) -> &InProgressEdit {
        &self.in_progress
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.in_progress {
            InProgressEdit::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn current_shape(&self) -> Option<&Shape> {
        match &self.in_progress {
            InProgressEdit::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        !matches!(self.in_progress, InProgressEdit::Idle)
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.shapes.is_empty() && !self.is_drawing()
    }

    /// Begins a freehand stroke, replacing anything already in progress.
    pub fn start_stroke(&mut self, color: Color32, width: f32, point: Pos2) {
        log::debug!("Starting stroke at {:?} (width {})", point, width);
        self.in_progress = InProgressEdit::Stroke(Stroke::new(color, width, point));
    }

    /// Extends the in-progress stroke. Ignored unless a stroke is being drawn.
    pub fn add_point(&mut self, point: Pos2) {
        if let InProgressEdit::Stroke(stroke) = &mut self.in_progress {
            stroke.add_point(point);
        }
    }

    /// Commits the in-progress stroke. Returns `true` if there was one.
    pub fn finish_stroke(&mut self) -> bool {
        match std::mem::take(&mut self.in_progress) {
            InProgressEdit::Stroke(stroke) => {
                log::debug!("Finished stroke with {} points", stroke.points().len());
                self.strokes.push(stroke);
                true
            }
            other => {
                self.in_progress = other;
                false
            }
        }
    }

    /// Begins a shape with both anchors at `point`, replacing anything in progress.
    pub fn start_shape(&mut self, kind: ShapeKind, color: Color32, width: f32, point: Pos2) {
        log::debug!("Starting {} at {:?}", kind.name(), point);
        self.in_progress = InProgressEdit::Shape(Shape::new(kind, color, width, point));
    }

    /// Moves the end anchor of the in-progress shape. Ignored unless a shape is being drawn.
    pub fn update_shape(&mut self, point: Pos2) {
        if let InProgressEdit::Shape(shape) = &mut self.in_progress {
            shape.set_end(point);
        }
    }

    /// Commits the in-progress shape. Returns `true` if there was one.
    pub fn finish_shape(&mut self) -> bool {
        match std::mem::take(&mut self.in_progress) {
            InProgressEdit::Shape(shape) => {
                log::debug!("Finished {} {:?} -> {:?}", shape.kind().name(), shape.start(), shape.end());
                self.shapes.push(shape);
                true
            }
            other => {
                self.in_progress = other;
                false
            }
        }
    }

    /// Drops every committed shape touched by `eraser`. Strokes are never erased.
    pub fn remove_shapes_intersecting_stroke(&mut self, eraser: &Stroke) {
        Self::erase_shapes(&mut self.shapes, eraser);
    }

    /// Runs the eraser with the most recently committed stroke.
    pub fn erase_with_last_stroke(&mut self) {
        if let Some(eraser) = self.strokes.last() {
            Self::erase_shapes(&mut self.shapes, eraser);
        }
    }

    fn erase_shapes(shapes: &mut Vec<Shape>, eraser: &Stroke) {
        if eraser.points().is_empty() {
            return;
        }
        let before = shapes.len();
        shapes.retain(|shape| !shape.intersects_stroke(eraser));
        if shapes.len() != before {
            log::debug!("Eraser removed {} shape(s)", before - shapes.len());
        }
    }

    /// Empties the canvas, including anything in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.shapes.clear();
        self.in_progress = InProgressEdit::Idle;
    }

    /// Replaces all content at once, discarding anything in progress.
    pub fn replace(&mut self, other: Canvas) {
        self.strokes = other.strokes;
        self.shapes = other.shapes;
        self.in_progress = InProgressEdit::Idle;
    }
}
