use std::path::PathBuf;

use egui::{pos2, Color32};
use screen_pen::{Canvas, DrawingStore, PersistenceError, ShapeKind};

/// A store in a fresh directory under the system temp dir.
fn temp_store() -> (DrawingStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!("screen_pen_test_{}", uuid::Uuid::new_v4()));
    (DrawingStore::new(&dir), dir)
}

fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.start_stroke(Color32::from_rgb(255, 0, 0), 6.0, pos2(0.0, 0.0));
    canvas.add_point(pos2(30.0, 12.5));
    canvas.finish_stroke();
    canvas.start_stroke(Color32::from_rgb(255, 165, 0), 3.0, pos2(-4.0, 9.0));
    canvas.finish_stroke();

    canvas.start_shape(ShapeKind::Circle, Color32::from_rgb(0, 255, 0), 6.0, pos2(100.0, 100.0));
    canvas.update_shape(pos2(120.0, 130.0));
    canvas.finish_shape();
    canvas.start_shape(ShapeKind::Arrow, Color32::BLACK, 12.0, pos2(5.0, 5.0));
    canvas.update_shape(pos2(300.0, 7.0));
    canvas.finish_shape();
    canvas
}

#[test]
fn test_save_then_load_reproduces_drawing() {
    let (store, dir) = temp_store();
    let mut original = sample_canvas();
    // in-progress content is never saved
    original.start_shape(ShapeKind::Line, Color32::RED, 4.0, pos2(1.0, 1.0));

    let path = store.save(&original, "meeting").unwrap();
    assert_eq!(path, dir.join("meeting.json"));
    assert!(path.exists());

    let mut loaded = Canvas::new();
    store.load(&mut loaded, "meeting").unwrap();

    assert_eq!(loaded.strokes(), original.strokes());
    assert_eq!(loaded.shapes(), original.shapes());
    assert!(!loaded.is_drawing());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_load_replaces_everything() {
    let (store, dir) = temp_store();
    store.save(&sample_canvas(), "a").unwrap();

    let mut canvas = Canvas::new();
    for i in 0..5 {
        canvas.start_stroke(Color32::BLUE, 6.0, pos2(i as f32, 0.0));
        canvas.finish_stroke();
    }
    canvas.start_stroke(Color32::BLUE, 6.0, pos2(0.0, 0.0));

    store.load(&mut canvas, "a").unwrap();
    assert_eq!(canvas.strokes().len(), 2);
    assert_eq!(canvas.shapes().len(), 2);
    assert!(!canvas.is_drawing());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_creates_directory() {
    let (store, dir) = temp_store();
    let nested = DrawingStore::new(dir.join("nested").join("deeper"));
    nested.save(&Canvas::new(), "empty").unwrap();
    assert!(dir.join("nested").join("deeper").join("empty.json").exists());

    drop(store);
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_overwrites_previous_version() {
    let (store, dir) = temp_store();
    store.save(&sample_canvas(), "notes").unwrap();
    store.save(&Canvas::new(), "notes").unwrap();

    let mut canvas = sample_canvas();
    store.load(&mut canvas, "notes").unwrap();
    assert!(canvas.is_empty());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_missing_file_leaves_canvas_untouched() {
    let (store, dir) = temp_store();
    let mut canvas = sample_canvas();

    let err = store.load(&mut canvas, "does-not-exist").unwrap_err();
    assert!(matches!(err, PersistenceError::FileUnreadable { .. }));
    assert_eq!(canvas.strokes(), sample_canvas().strokes());
    assert_eq!(canvas.shapes(), sample_canvas().shapes());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_malformed_file_leaves_canvas_untouched() {
    let (store, dir) = temp_store();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("broken.json"), "{\"Strokes\": [{\"Color\": 7}]").unwrap();

    let mut canvas = sample_canvas();
    let err = store.load(&mut canvas, "broken").unwrap_err();
    assert!(matches!(err, PersistenceError::MalformedContent { .. }));
    assert_eq!(canvas.shapes().len(), 2);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_unusable_directory_is_reported() {
    let (store, dir) = temp_store();
    std::fs::create_dir_all(&dir).unwrap();
    // a regular file where the save directory should be
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let blocked = DrawingStore::new(blocker.join("drawings"));
    let err = blocked.save(&sample_canvas(), "x").unwrap_err();
    assert!(matches!(err, PersistenceError::DirectoryUnavailable { .. }));

    drop(store);
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_invalid_names_are_rejected() {
    let (store, dir) = temp_store();
    let err = store.save(&sample_canvas(), "../escape").unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidName(_)));
    assert!(!dir.exists());
}

#[test]
fn test_list_saved_drawings() {
    let (store, dir) = temp_store();
    assert!(store.list().unwrap().is_empty());

    store.save(&sample_canvas(), "zebra").unwrap();
    store.save(&sample_canvas(), "apple").unwrap();
    std::fs::write(dir.join("readme.txt"), "ignored").unwrap();
    std::fs::create_dir(dir.join("folder.json")).unwrap();

    assert_eq!(store.list().unwrap(), vec!["apple".to_owned(), "zebra".to_owned()]);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_file_is_human_readable() {
    let (store, dir) = temp_store();
    let path = store.save(&sample_canvas(), "readable").unwrap();

    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("\"Strokes\""));
    assert!(text.contains("\"StartPos\""));
    assert!(text.contains("\"Circle\""));
    assert!(text.lines().count() > 10);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_loads_file_with_null_lists_and_numeric_types() {
    let (store, dir) = temp_store();
    std::fs::create_dir_all(&dir).unwrap();
    let legacy = r#"{
  "Strokes": [
    {
      "Points": [{"X": 10, "Y": 20}, {"X": 13, "Y": 20}],
      "Color": {"R": 255, "G": 0, "B": 0, "A": 255},
      "Width": 6
    },
    {
      "Points": null,
      "Color": {"R": 0, "G": 0, "B": 255, "A": 255},
      "Width": 3
    }
  ],
  "Shapes": [
    {
      "Type": 2,
      "StartPos": {"X": 0, "Y": 0},
      "EndPos": {"X": 40, "Y": 30},
      "Color": {"R": 0, "G": 255, "B": 0, "A": 255},
      "WidthPx": 4
    },
    {
      "Type": "Circle",
      "StartPos": {"X": 100, "Y": 100},
      "EndPos": {"X": 110, "Y": 100},
      "Color": {"R": 0, "G": 0, "B": 0, "A": 255},
      "WidthPx": 2
    }
  ]
}"#;
    std::fs::write(dir.join("legacy.json"), legacy).unwrap();

    let mut canvas = Canvas::new();
    store.load(&mut canvas, "legacy").unwrap();

    // the stroke with null points has nothing to draw and is skipped
    assert_eq!(canvas.strokes().len(), 1);
    assert_eq!(canvas.strokes()[0].points(), &[pos2(10.0, 20.0), pos2(13.0, 20.0)]);
    assert_eq!(canvas.strokes()[0].color(), Color32::from_rgb(255, 0, 0));

    let kinds: Vec<ShapeKind> = canvas.shapes().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Rectangle, ShapeKind::Circle]);
    assert_eq!(canvas.shapes()[0].end(), pos2(40.0, 30.0));

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_loads_file_with_null_sections() {
    let (store, dir) = temp_store();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("blank.json"), r#"{"Strokes": null, "Shapes": null}"#).unwrap();

    let mut canvas = sample_canvas();
    store.load(&mut canvas, "blank").unwrap();
    assert!(canvas.is_empty());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_unknown_shape_code_is_malformed() {
    let (store, dir) = temp_store();
    std::fs::create_dir_all(&dir).unwrap();
    let bad = r#"{"Strokes": null, "Shapes": [{"Type": 7,
        "StartPos": {"X": 0, "Y": 0}, "EndPos": {"X": 1, "Y": 1},
        "Color": {"R": 0, "G": 0, "B": 0, "A": 255}, "WidthPx": 2}]}"#;
    std::fs::write(dir.join("bad.json"), bad).unwrap();

    let mut canvas = sample_canvas();
    let err = store.load(&mut canvas, "bad").unwrap_err();
    assert!(matches!(err, PersistenceError::MalformedContent { .. }));
    assert_eq!(canvas.shapes().len(), 2);

    std::fs::remove_dir_all(dir).ok();
}
