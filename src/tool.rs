use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// Eraser strokes are painted in this color.
pub const ERASER_COLOR: Color32 = Color32::WHITE;

pub const MIN_SLIDER_WIDTH: f32 = 2.0;
pub const MAX_SLIDER_WIDTH: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPreset {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Pink,
    /// Wide, translucent black for dimming part of the screen.
    Blur,
}

impl ColorPreset {
    pub fn color(self) -> Color32 {
        match self {
            Self::Red => Color32::from_rgb(255, 0, 0),
            Self::Green => Color32::from_rgb(0, 255, 0),
            Self::Blue => Color32::from_rgb(0, 0, 255),
            Self::Yellow => Color32::from_rgb(255, 255, 0),
            Self::Orange => Color32::from_rgb(255, 165, 0),
            Self::Pink => Color32::from_rgb(255, 105, 180),
            Self::Blur => Color32::from_rgba_unmultiplied(0, 0, 0, 0x40),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthPreset {
    Thin,
    Medium,
    Thick,
}

impl WidthPreset {
    pub fn width(self) -> f32 {
        match self {
            Self::Thin => 3.0,
            Self::Medium => 6.0,
            Self::Thick => 12.0,
        }
    }
}

/// Pen color and width used for the next stroke or shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenConfig {
    pub color: Color32,
    pub width: f32,
    pub width_preset: WidthPreset,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            color: ColorPreset::Red.color(),
            width: WidthPreset::Medium.width(),
            width_preset: WidthPreset::Medium,
        }
    }
}

impl PenConfig {
    pub fn set_color(&mut self, preset: ColorPreset) {
        self.color = preset.color();
        if preset == ColorPreset::Blur {
            self.set_width(WidthPreset::Thick);
            self.width = 20.0;
        }
    }

    pub fn set_width(&mut self, preset: WidthPreset) {
        self.width_preset = preset;
        self.width = preset.width();
    }

    /// Applies the toolbar's RGB sliders (each 0..=1) and width slider (0..=1).
    pub fn set_from_sliders(&mut self, rgb: [f32; 3], width: f32) {
        let [r, g, b] = rgb.map(|v| (v.clamp(0.0, 1.0) * 255.0) as u8);
        self.color = Color32::from_rgb(r, g, b);
        self.width = slider_to_width(width);
    }
}

/// Maps a 0..=1 slider value onto the pen width range.
pub fn slider_to_width(value: f32) -> f32 {
    MIN_SLIDER_WIDTH + value.clamp(0.0, 1.0) * (MAX_SLIDER_WIDTH - MIN_SLIDER_WIDTH)
}

/// Inverse of [`slider_to_width`], for seeding the slider from a saved width.
pub fn width_to_slider(width: f32) -> f32 {
    ((width - MIN_SLIDER_WIDTH) / (MAX_SLIDER_WIDTH - MIN_SLIDER_WIDTH)).clamp(0.0, 1.0)
}

/// What a pointer press does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    #[default]
    Pen,
    Eraser,
    Shape(ShapeKind),
}

impl ToolMode {
    pub fn is_eraser(self) -> bool {
        matches!(self, Self::Eraser)
    }

    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::Shape(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pen() {
        let pen = PenConfig::default();
        assert_eq!(pen.color, Color32::from_rgb(255, 0, 0));
        assert_eq!(pen.width, 6.0);
        assert_eq!(pen.width_preset, WidthPreset::Medium);
    }

    #[test]
    fn test_blur_forces_wide_pen() {
        let mut pen = PenConfig::default();
        pen.set_color(ColorPreset::Blur);
        assert_eq!(pen.width, 20.0);
        assert_eq!(pen.width_preset, WidthPreset::Thick);
        assert_eq!(pen.color.a(), 0x40);
    }

    #[test]
    fn test_color_keeps_width() {
        let mut pen = PenConfig::default();
        pen.set_width(WidthPreset::Thin);
        pen.set_color(ColorPreset::Pink);
        assert_eq!(pen.width, 3.0);
        assert_eq!(pen.color, Color32::from_rgb(255, 105, 180));
    }

    #[test]
    fn test_sliders() {
        let mut pen = PenConfig::default();
        pen.set_from_sliders([0.0, 1.0, 0.5], 0.5);
        assert_eq!(pen.color, Color32::from_rgb(0, 255, 127));
        assert_eq!(pen.width, 11.0);
        assert!((slider_to_width(width_to_slider(14.0)) - 14.0).abs() < 1e-4);
    }
}
