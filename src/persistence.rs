use std::fs;
use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};
use serde::{Deserialize, Deserializer, Serialize};

use crate::canvas::Canvas;
use crate::error::{PersistenceError, PersistenceResult};
use crate::shape::{Shape, ShapeKind};
use crate::stroke::Stroke;

/// Directory under the user's home where drawings are kept.
pub const SAVE_DIR_NAME: &str = ".screenpen";

/// Extension appended to every drawing name.
pub const EXTENSION: &str = "json";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedPoint {
    x: f32,
    y: f32,
}

impl From<Pos2> for SavedPoint {
    fn from(p: Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<SavedPoint> for Pos2 {
    fn from(p: SavedPoint) -> Self {
        Pos2::new(p.x, p.y)
    }
}

/// Unmultiplied RGBA, as a person editing the file would expect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Color32> for SavedColor {
    fn from(c: Color32) -> Self {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

impl From<SavedColor> for Color32 {
    fn from(c: SavedColor) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedStroke {
    color: SavedColor,
    width: f32,
    #[serde(default, deserialize_with = "nullable_list")]
    points: Vec<SavedPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedShape {
    #[serde(rename = "Type", deserialize_with = "shape_kind")]
    kind: ShapeKind,
    color: SavedColor,
    start_pos: SavedPoint,
    end_pos: SavedPoint,
    width_px: f32,
}

/// On-disk form of a drawing: only committed content, never the live edit.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SavedDrawing {
    #[serde(default, deserialize_with = "nullable_list")]
    strokes: Vec<SavedStroke>,
    #[serde(default, deserialize_with = "nullable_list")]
    shapes: Vec<SavedShape>,
}

/// Older drawings write an empty list as `null`.
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shape types are written by name, but older drawings use numeric codes 1 to 4.
fn shape_kind<'de, D>(deserializer: D) -> Result<ShapeKind, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KindRepr {
        Name(ShapeKind),
        Code(u64),
    }

    match KindRepr::deserialize(deserializer)? {
        KindRepr::Name(kind) => Ok(kind),
        KindRepr::Code(1) => Ok(ShapeKind::Circle),
        KindRepr::Code(2) => Ok(ShapeKind::Rectangle),
        KindRepr::Code(3) => Ok(ShapeKind::Line),
        KindRepr::Code(4) => Ok(ShapeKind::Arrow),
        KindRepr::Code(code) => Err(serde::de::Error::custom(format!(
            "unknown shape type code {code}, expected 1 to 4"
        ))),
    }
}

impl SavedDrawing {
    fn capture(canvas: &Canvas) -> Self {
        let strokes = canvas
            .strokes()
            .iter()
            .map(|stroke| SavedStroke {
                color: stroke.color().into(),
                width: stroke.width(),
                points: stroke.points().iter().copied().map(SavedPoint::from).collect(),
            })
            .collect();

        let shapes = canvas
            .shapes()
            .iter()
            .map(|shape| SavedShape {
                kind: shape.kind(),
                color: shape.color().into(),
                start_pos: shape.start().into(),
                end_pos: shape.end().into(),
                width_px: shape.width(),
            })
            .collect();

        Self { strokes, shapes }
    }

    fn into_canvas(self) -> Canvas {
        let strokes = self
            .strokes
            .into_iter()
            .filter_map(|saved| {
                let points = saved.points.into_iter().map(Pos2::from).collect();
                let stroke = Stroke::from_points(saved.color.into(), saved.width, points);
                if stroke.is_none() {
                    log::warn!("Skipping saved stroke without points");
                }
                stroke
            })
            .collect();

        let shapes = self
            .shapes
            .into_iter()
            .map(|saved| {
                Shape::with_anchors(
                    saved.kind,
                    saved.color.into(),
                    saved.width_px,
                    saved.start_pos.into(),
                    saved.end_pos.into(),
                )
            })
            .collect();

        Canvas::from_parts(strokes, shapes)
    }
}

/// Named drawings stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct DrawingStore {
    dir: PathBuf,
}

impl DrawingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store at `~/.screenpen`.
    pub fn in_home_dir() -> PersistenceResult<Self> {
        let dirs = directories::BaseDirs::new().ok_or(PersistenceError::NoHomeDirectory)?;
        Ok(Self::new(dirs.home_dir().join(SAVE_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file holding the drawing called `name`.
    pub fn path_for(&self, name: &str) -> PersistenceResult<PathBuf> {
        let name = validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{EXTENSION}")))
    }

    /// Writes the committed content of `canvas` under `name`, replacing any earlier save.
    pub fn save(&self, canvas: &Canvas, name: &str) -> PersistenceResult<PathBuf> {
        let path = self.path_for(name)?;
        self.ensure_dir()?;

        let json = serde_json::to_string_pretty(&SavedDrawing::capture(canvas))?;
        fs::write(&path, json).map_err(|source| PersistenceError::FileUnwritable {
            path: path.clone(),
            source,
        })?;

        log::info!(
            "Saved {} strokes and {} shapes to {}",
            canvas.strokes().len(),
            canvas.shapes().len(),
            path.display()
        );
        Ok(path)
    }

    /// Replaces everything on `canvas` with the drawing called `name`.
    ///
    /// The canvas is left untouched if the file cannot be read or parsed.
    pub fn load(&self, canvas: &mut Canvas, name: &str) -> PersistenceResult<PathBuf> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(&path).map_err(|source| PersistenceError::FileUnreadable {
            path: path.clone(),
            source,
        })?;
        let drawing: SavedDrawing =
            serde_json::from_str(&json).map_err(|source| PersistenceError::MalformedContent {
                path: path.clone(),
                source,
            })?;

        canvas.replace(drawing.into_canvas());
        log::info!(
            "Loaded {} strokes and {} shapes from {}",
            canvas.strokes().len(),
            canvas.shapes().len(),
            path.display()
        );
        Ok(path)
    }

    /// Names of all saved drawings, sorted.
    pub fn list(&self) -> PersistenceResult<Vec<String>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.dir).map_err(|source| PersistenceError::FileUnreadable {
            path: self.dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != EXTENSION {
                    return None;
                }
                path.file_stem()?.to_str().map(str::to_owned)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn ensure_dir(&self) -> PersistenceResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| PersistenceError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        })
    }
}

/// Drawing names are plain basenames; anything that could escape the directory is refused.
fn validate_name(name: &str) -> PersistenceResult<&str> {
    let trimmed = name.trim();
    let escapes = trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == "..";
    if trimmed.is_empty() || escapes {
        return Err(PersistenceError::InvalidName(name.to_owned()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_name("my-drawing").unwrap(), "my-drawing");
        assert_eq!(validate_name("  notes ").unwrap(), "notes");
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "   ", "..", ".", "a/b", "..\\up", "../etc"] {
            assert!(
                matches!(validate_name(name), Err(PersistenceError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_format_keys() {
        let mut canvas = Canvas::new();
        canvas.start_stroke(Color32::RED, 6.0, Pos2::new(1.0, 2.0));
        canvas.finish_stroke();
        canvas.start_shape(ShapeKind::Arrow, Color32::BLUE, 4.0, Pos2::new(0.0, 0.0));
        canvas.update_shape(Pos2::new(10.0, 0.0));
        canvas.finish_shape();

        let json = serde_json::to_value(SavedDrawing::capture(&canvas)).unwrap();
        let stroke = &json["Strokes"][0];
        assert_eq!(stroke["Width"], 6.0);
        assert_eq!(stroke["Color"]["R"], 255);
        assert_eq!(stroke["Points"][0]["X"], 1.0);
        assert_eq!(stroke["Points"][0]["Y"], 2.0);

        let shape = &json["Shapes"][0];
        assert_eq!(shape["Type"], "Arrow");
        assert_eq!(shape["EndPos"]["X"], 10.0);
        assert_eq!(shape["WidthPx"], 4.0);
    }

    #[test]
    fn test_null_sections_load_as_empty() {
        let drawing: SavedDrawing =
            serde_json::from_str(r#"{"Strokes": null, "Shapes": null}"#).unwrap();
        assert!(drawing.into_canvas().is_empty());
    }

    #[test]
    fn test_shape_type_codes() {
        let json = r#"{"Type": 4, "Color": {"R": 0, "G": 0, "B": 0, "A": 255},
            "StartPos": {"X": 0, "Y": 0}, "EndPos": {"X": 1, "Y": 1}, "WidthPx": 2}"#;
        let shape: SavedShape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.kind, ShapeKind::Arrow);

        let unknown = json.replace("\"Type\": 4", "\"Type\": 9");
        assert!(serde_json::from_str::<SavedShape>(&unknown).is_err());
    }

    #[test]
    fn test_missing_sections_load_as_empty() {
        let drawing: SavedDrawing = serde_json::from_str("{}").unwrap();
        let canvas = drawing.into_canvas();
        assert!(canvas.is_empty());
    }
}
