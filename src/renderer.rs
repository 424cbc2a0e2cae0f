use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke};

use crate::shape::Shape;
use crate::state::EditorState;
use crate::stroke::Stroke;

const DIM_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 120);
const CURSOR_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 150);
const CURSOR_RING_WIDTH: f32 = 2.0;

/// One thing to paint, in the order it goes on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintItem<'a> {
    Dim,
    Stroke(&'a Stroke),
    Shape(&'a Shape),
    Cursor { position: Pos2, radius: f32 },
}

/// Paints the overlay content each frame.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// What to paint for `state`, bottom layer first.
    ///
    /// Committed strokes, then the live stroke, then committed shapes, then the live
    /// shape. The brush-size ring comes last and only while hovering.
    pub fn paint_order<'a>(&self, state: &'a EditorState) -> Vec<PaintItem<'a>> {
        let canvas = state.canvas();
        let mut items = Vec::with_capacity(canvas.strokes().len() + canvas.shapes().len() + 4);

        if state.is_dimmed() {
            items.push(PaintItem::Dim);
        }
        items.extend(canvas.strokes().iter().map(PaintItem::Stroke));
        items.extend(canvas.current_stroke().map(PaintItem::Stroke));
        items.extend(canvas.shapes().iter().map(PaintItem::Shape));
        items.extend(canvas.current_shape().map(PaintItem::Shape));

        let cursor = state.cursor();
        let radius = state.pen().width / 2.0;
        if cursor.visible && !canvas.is_drawing() && radius > 0.0 {
            items.push(PaintItem::Cursor {
                position: cursor.position,
                radius,
            });
        }
        items
    }

    /// Renders the current frame
    pub fn render(&self, painter: &Painter, rect: Rect, state: &EditorState) {
        for item in self.paint_order(state) {
            match item {
                PaintItem::Dim => {
                    painter.rect_filled(rect, 0.0, DIM_COLOR);
                }
                PaintItem::Stroke(stroke) => self.render_stroke(painter, stroke),
                PaintItem::Shape(shape) => self.render_shape(painter, shape),
                PaintItem::Cursor { position, radius } => {
                    painter.circle_stroke(
                        position,
                        radius,
                        EguiStroke::new(CURSOR_RING_WIDTH, CURSOR_COLOR),
                    );
                }
            }
        }
    }

    /// Every stored point becomes a filled dot; interpolation keeps them overlapping.
    fn render_stroke(&self, painter: &Painter, stroke: &Stroke) {
        let radius = (stroke.width() / 2.0).max(1.0);
        for &point in stroke.points() {
            painter.circle_filled(point, radius, stroke.color());
        }
    }

    fn render_shape(&self, painter: &Painter, shape: &Shape) {
        let radius = shape.dot_radius();
        for dot in shape.dots() {
            painter.circle_filled(dot, radius, shape.color());
        }
    }
}
