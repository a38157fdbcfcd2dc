use layoutkit_core::{Bounds, Point};
use layoutkit_designer::{Document, Shape, ShapeType};
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "id": "doc1",
  "current_page_id": "page1",
  "pages": {
    "page1": {
      "id": "page1",
      "shapes": {
        "rect": { "id": "rect", "type": "rectangle", "point": { "x": 0.0, "y": 0.0 }, "width": 10.0, "height": 20.0 },
        "oval": { "id": "oval", "type": "ellipse", "point": { "x": 30.0, "y": 0.0 }, "rx": 5.0, "ry": 5.0, "parent_id": "grp" },
        "ln": { "id": "ln", "type": "line", "point": { "x": 50.0, "y": 0.0 }, "start": { "x": -5.0, "y": 0.0 }, "end": { "x": 5.0, "y": 10.0 }, "parent_id": "grp" },
        "grp": { "id": "grp", "type": "group", "point": { "x": 0.0, "y": 0.0 }, "children": ["oval", "ln"] }
      }
    }
  },
  "page_states": {
    "page1": { "id": "page1", "selected_ids": ["rect", "grp"] }
  }
}"#;

#[test]
fn test_from_json_fits_groups() {
    let doc = Document::from_json(SAMPLE).unwrap();
    let group = doc.get_shape("grp", "page1").unwrap();
    assert_eq!(group.shape_type(), ShapeType::Group);
    assert_eq!(group.bounds(), Bounds::new(30.0, 0.0, 55.0, 10.0));
    assert_eq!(group.point, Point::new(30.0, 0.0));
    assert_eq!(doc.selected_ids(), &["rect".to_string(), "grp".to_string()]);
}

#[test]
fn test_line_bounds_differ_from_point() {
    let doc = Document::from_json(SAMPLE).unwrap();
    let line = doc.get_shape("ln", "page1").unwrap();
    assert_eq!(line.bounds().min(), Point::new(45.0, 0.0));
    assert_eq!(line.point, Point::new(50.0, 0.0));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");

    let doc = Document::from_json(SAMPLE).unwrap();
    doc.save_to_file(&path).unwrap();
    let loaded = Document::load_from_file(&path).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(Document::load_from_file(dir.path().join("none.json")).is_err());
}

#[test]
fn test_rotated_rectangle_bounds_grow() {
    let shape = Shape::rectangle("r", Point::new(0.0, 0.0), 10.0, 10.0)
        .with_rotation(std::f64::consts::FRAC_PI_4);
    let bounds = shape.bounds();
    assert!(bounds.width > 14.0 && bounds.width < 14.2);
    assert_eq!(shape.center(), Point::new(5.0, 5.0));
}
