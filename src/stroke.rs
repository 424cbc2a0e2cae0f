use egui::{Color32, Pos2};

use crate::geometry;

/// A freehand path: an ordered run of points drawn with one color and width.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Starts a stroke at a single point.
    pub fn new(color: Color32, width: f32, start: Pos2) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Rebuilds a stroke from stored points. Returns `None` for an empty point list.
    pub fn from_points(color: Color32, width: f32, points: Vec<Pos2>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            color,
            width,
        })
    }

    /// Extends the stroke towards `point`, filling gaps wider than half the width.
    pub fn add_point(&mut self, point: Pos2) {
        let spacing = self.spacing();
        geometry::append_interpolated(&mut self.points, point, spacing);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.points.last().copied()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    fn spacing(&self) -> f32 {
        geometry::interpolation_spacing(self.width)
    }
}
