use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::stroke::Stroke;

/// The eraser reaches this many times its own width around each of its points.
pub const ERASER_REACH: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
    Arrow,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Line,
        ShapeKind::Arrow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Line => "Line",
            Self::Arrow => "Arrow",
        }
    }
}

/// A two-anchor primitive. Every kind derives all of its geometry from `start` and `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    color: Color32,
    start: Pos2,
    end: Pos2,
    width: f32,
}

impl Shape {
    /// Creates a zero-sized shape with both anchors at `start`.
    pub fn new(kind: ShapeKind, color: Color32, width: f32, start: Pos2) -> Self {
        Self::with_anchors(kind, color, width, start, start)
    }

    pub fn with_anchors(kind: ShapeKind, color: Color32, width: f32, start: Pos2, end: Pos2) -> Self {
        Self {
            kind,
            color,
            start,
            end,
            width,
        }
    }

    pub fn set_end(&mut self, end: Pos2) {
        self.end = end;
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Distance between the anchors; the radius when this is a circle.
    pub fn anchor_distance(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Axis-aligned box spanned by the two anchors.
    pub fn anchor_rect(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// Thickness the outline is painted with.
    pub fn thickness(&self) -> f32 {
        geometry::shape_thickness(self.width)
    }

    /// Straight segments making up the outline. Empty for circles.
    pub fn segments(&self) -> Vec<[Pos2; 2]> {
        match self.kind {
            ShapeKind::Circle => Vec::new(),
            ShapeKind::Rectangle => {
                let r = self.anchor_rect();
                vec![
                    [r.left_top(), r.right_top()],
                    [r.right_top(), r.right_bottom()],
                    [r.right_bottom(), r.left_bottom()],
                    [r.left_bottom(), r.left_top()],
                ]
            }
            ShapeKind::Line => vec![[self.start, self.end]],
            ShapeKind::Arrow => {
                let mut segments = vec![[self.start, self.end]];
                if let Some(wings) = geometry::arrow_wings(self.start, self.end, self.thickness()) {
                    segments.extend(wings.map(|wing| [self.end, wing]));
                }
                segments
            }
        }
    }

    /// Centers of the filled dots that paint this shape.
    pub fn dots(&self) -> Vec<Pos2> {
        match self.kind {
            ShapeKind::Circle => geometry::circle_dots(self.start, self.anchor_distance()),
            _ => {
                let thickness = self.thickness();
                self.segments()
                    .into_iter()
                    .flat_map(|[a, b]| geometry::line_dots(a, b, thickness))
                    .collect()
            }
        }
    }

    /// Radius of each painted dot.
    pub fn dot_radius(&self) -> f32 {
        geometry::dot_radius(self.thickness())
    }

    /// Region in which a point within `reach` of the shape counts as touching it.
    ///
    /// This is a coarse box test: lines and arrows use their anchor box and circles
    /// use the square around their whole disk, each grown by `reach` on every side.
    pub fn hit_rect(&self, reach: f32) -> Rect {
        let base = match self.kind {
            ShapeKind::Circle => {
                Rect::from_center_size(self.start, Vec2::splat(self.anchor_distance() * 2.0))
            }
            _ => self.anchor_rect(),
        };
        base.expand(reach)
    }

    /// Whether an eraser stroke touches this shape anywhere.
    pub fn intersects_stroke(&self, eraser: &Stroke) -> bool {
        let hit = self.hit_rect(eraser.width() * ERASER_REACH);
        eraser.points().iter().any(|p| hit.contains(*p))
    }
}
