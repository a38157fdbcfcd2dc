use layoutkit_core::{Axis, Point};
use layoutkit_designer::{distribute_shapes, Document, Shape, DISTRIBUTE_COMMAND_ID};
use layoutkit_settings::DistributeSettings;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn doc_with(rects: &[(&str, f64, f64, f64)]) -> Document {
    let mut doc = Document::new("page1");
    for (id, x, y, w) in rects {
        doc.add_shape(Shape::rectangle(*id, Point::new(*x, *y), *w, 10.0))
            .unwrap();
    }
    doc
}

fn x_of(doc: &Document, id: &str) -> f64 {
    doc.get_shape(id, "page1").unwrap().point.x
}

#[test]
fn test_slack_spacing_regression() {
    let mut doc = doc_with(&[
        ("a", 0.0, 0.0, 10.0),
        ("b", 10.0, 0.0, 20.0),
        ("c", 50.0, 0.0, 10.0),
    ]);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    assert_eq!(cmd.id, DISTRIBUTE_COMMAND_ID);
    assert_eq!(cmd.name, "Distribute Horizontally");
    let after = cmd.after.shapes("page1").unwrap();
    assert_eq!(after["a"].point, Some(Point::new(0.0, 0.0)));
    assert_eq!(after["b"].point, Some(Point::new(20.0, 0.0)));
    assert_eq!(after["c"].point, Some(Point::new(50.0, 0.0)));
    assert_eq!(x_of(&doc, "b"), 20.0);
}

#[test]
fn test_before_and_after_share_ids() {
    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)]);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["c", "a", "b"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    let before: Vec<_> = cmd.before.shapes("page1").unwrap().keys().collect();
    let after: Vec<_> = cmd.after.shapes("page1").unwrap().keys().collect();
    assert_eq!(before, after);
    assert_eq!(cmd.moved_ids(), vec!["a", "b", "c"]);
}

#[test]
fn test_selection_preserved_in_both_envelopes() {
    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)]);
    let input = ids(&["c", "a", "b"]);
    let cmd = distribute_shapes(&mut doc, &input, Axis::Horizontal, &DistributeSettings::default())
        .unwrap();

    assert_eq!(cmd.before.selected_ids("page1"), Some(input.as_slice()));
    assert_eq!(cmd.after.selected_ids("page1"), Some(input.as_slice()));
}

#[test]
fn test_overlap_keeps_anchors() {
    let mut doc = doc_with(&[
        ("a", 0.0, 0.0, 40.0),
        ("b", 10.0, 0.0, 10.0),
        ("c", 30.0, 0.0, 10.0),
        ("d", 50.0, 0.0, 30.0),
    ]);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c", "d"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    let after = cmd.after.shapes("page1").unwrap();
    assert!(!after.contains_key("a"));
    assert!(!after.contains_key("d"));
    assert_eq!(after["b"].point, Some(Point::new(30.0, 0.0)));
    assert_eq!(after["c"].point, Some(Point::new(45.0, 0.0)));
    assert_eq!(x_of(&doc, "a"), 0.0);
    assert_eq!(x_of(&doc, "d"), 50.0);
}

#[test]
fn test_anchor_tie_goes_to_first_input() {
    let rects = [("a", 0.0, 0.0, 10.0), ("b", 0.0, 0.0, 30.0), ("c", 25.0, 0.0, 15.0)];

    let mut doc = doc_with(&rects);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();
    let after = cmd.after.shapes("page1").unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after["b"].point, Some(Point::new(3.75, 0.0)));

    let mut doc = doc_with(&rects);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["b", "a", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();
    let after = cmd.after.shapes("page1").unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after["a"].point, Some(Point::new(18.75, 0.0)));
}

#[test]
fn test_vertical_keeps_x() {
    let mut doc = Document::new("page1");
    doc.add_shape(Shape::rectangle("a", Point::new(7.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("b", Point::new(3.0, 12.0), 10.0, 20.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("c", Point::new(9.0, 50.0), 10.0, 10.0))
        .unwrap();
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c"]),
        Axis::Vertical,
        &DistributeSettings::default(),
    )
    .unwrap();

    assert_eq!(cmd.name, "Distribute Vertically");
    let after = cmd.after.shapes("page1").unwrap();
    assert_eq!(after["b"].point, Some(Point::new(3.0, 20.0)));
    assert_eq!(after["c"].point, Some(Point::new(9.0, 50.0)));
}

#[test]
fn test_evenly_spaced_input_is_identity() {
    let rects = [("a", 0.0, 0.0, 10.0), ("b", 20.0, 0.0, 10.0), ("c", 40.0, 0.0, 10.0)];
    let mut doc = doc_with(&rects);
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    assert_eq!(cmd.before.shapes("page1"), cmd.after.shapes("page1"));
    assert_eq!(cmd.after.shape_count(), 3);
    assert_eq!(doc, doc_with(&rects));
}

#[test]
fn test_skip_unchanged_drops_identity_moves() {
    let mut doc = doc_with(&[
        ("a", 0.0, 0.0, 10.0),
        ("b", 20.0, 0.0, 10.0),
        ("c", 40.0, 0.0, 10.0),
    ]);
    let settings = DistributeSettings {
        skip_unchanged: true,
        ..DistributeSettings::default()
    };
    let cmd = distribute_shapes(&mut doc, &ids(&["a", "b", "c"]), Axis::Horizontal, &settings)
        .unwrap();
    assert!(cmd.is_empty());

    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 40.0, 0.0, 10.0)]);
    let cmd = distribute_shapes(&mut doc, &ids(&["a", "b", "c"]), Axis::Horizontal, &settings)
        .unwrap();
    assert_eq!(cmd.moved_ids(), vec!["b"]);
}

#[test]
fn test_too_few_shapes_is_a_no_op() {
    let rects = [("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)];
    for count in 0..3 {
        let mut doc = doc_with(&rects);
        let input: Vec<String> = ids(&["b", "c", "a"]).into_iter().take(count).collect();
        let cmd = distribute_shapes(
            &mut doc,
            &input,
            Axis::Horizontal,
            &DistributeSettings::default(),
        )
        .unwrap();

        assert!(cmd.is_empty(), "{} shapes", count);
        assert_eq!(cmd.before.shapes("page1").map(|s| s.len()), Some(0));
        assert_eq!(cmd.after.selected_ids("page1"), Some(input.as_slice()));
        assert_eq!(doc, doc_with(&rects));
    }
}

#[test]
fn test_min_shapes_setting_raises_threshold() {
    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)]);
    let settings = DistributeSettings {
        min_shapes: 4,
        ..DistributeSettings::default()
    };
    let cmd = distribute_shapes(&mut doc, &ids(&["a", "b", "c"]), Axis::Horizontal, &settings)
        .unwrap();
    assert!(cmd.is_empty());
}

#[test]
fn test_missing_id_leaves_document_untouched() {
    let rects = [("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)];
    let mut doc = doc_with(&rects);
    let err = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "ghost", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap_err();

    assert!(err.is_shape_not_found());
    assert!(err.to_string().contains("ghost"));
    assert_eq!(doc, doc_with(&rects));
}

#[test]
fn test_duplicate_ids_are_planned_once() {
    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)]);
    let input = ids(&["a", "b", "b", "c"]);
    let cmd = distribute_shapes(&mut doc, &input, Axis::Horizontal, &DistributeSettings::default())
        .unwrap();

    assert_eq!(cmd.after.shapes("page1").unwrap()["b"].point, Some(Point::new(25.0, 0.0)));
    assert_eq!(cmd.after.selected_ids("page1"), Some(input.as_slice()));
}

fn grouped_doc() -> Document {
    let mut doc = Document::new("page1");
    doc.add_shape(Shape::rectangle("s", Point::new(0.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("r1", Point::new(30.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("r2", Point::new(40.0, 20.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("t", Point::new(90.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.create_group("g", &["r1", "r2"]).unwrap();
    doc
}

#[test]
fn test_group_delta_moves_children() {
    let mut doc = grouped_doc();
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["s", "g", "t"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    let before = cmd.before.shapes("page1").unwrap();
    let after = cmd.after.shapes("page1").unwrap();
    assert!(!before.contains_key("g"));
    assert!(!after.contains_key("g"));
    assert_eq!(before["r1"].point, Some(Point::new(30.0, 0.0)));
    assert_eq!(after["r1"].point, Some(Point::new(40.0, 0.0)));
    assert_eq!(before["r2"].point, Some(Point::new(40.0, 20.0)));
    assert_eq!(after["r2"].point, Some(Point::new(50.0, 20.0)));
    assert_eq!(cmd.moved_ids(), vec!["r1", "r2", "s", "t"]);

    assert_eq!(x_of(&doc, "r2"), 50.0);
    assert_eq!(doc.get_shape("g", "page1").unwrap().point, Point::new(40.0, 0.0));
}

#[test]
fn test_group_entry_wins_over_selected_child() {
    let mut doc = grouped_doc();
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["s", "r1", "g", "t"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    let before = cmd.before.shapes("page1").unwrap();
    let after = cmd.after.shapes("page1").unwrap();
    let group_delta = after["r2"].point.unwrap() - before["r2"].point.unwrap();
    assert_eq!(before["r1"].point, Some(Point::new(30.0, 0.0)));
    let child_delta = after["r1"].point.unwrap() - before["r1"].point.unwrap();
    assert!((child_delta.x - group_delta.x).abs() < 1e-9);
    assert_eq!(child_delta.y, 0.0);
    assert!(!after.contains_key("g"));

    doc.apply_patch(&cmd.before).unwrap();
    let original = grouped_doc();
    for id in ["s", "r1", "r2", "t", "g"] {
        assert_eq!(
            doc.get_shape(id, "page1").unwrap().point,
            original.get_shape(id, "page1").unwrap().point,
            "{}",
            id
        );
    }
}

#[test]
fn test_nested_group_moves_with_parent() {
    let mut doc = Document::new("page1");
    doc.add_shape(Shape::rectangle("s", Point::new(0.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("r", Point::new(30.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("h1", Point::new(40.0, 20.0), 10.0, 10.0))
        .unwrap();
    doc.add_shape(Shape::rectangle("t", Point::new(90.0, 0.0), 10.0, 10.0))
        .unwrap();
    doc.create_group("h", &["h1"]).unwrap();
    doc.create_group("g", &["r", "h"]).unwrap();
    let original = doc.clone();

    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["s", "g", "t"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    assert_eq!(cmd.moved_ids(), vec!["h1", "r", "s", "t"]);
    let before = cmd.before.shapes("page1").unwrap();
    let after = cmd.after.shapes("page1").unwrap();
    assert_eq!(before["h1"].point, Some(Point::new(40.0, 20.0)));
    assert_eq!(after["h1"].point, Some(Point::new(50.0, 20.0)));
    assert_eq!(after["r"].point, Some(Point::new(40.0, 0.0)));
    assert_eq!(doc.get_shape("h", "page1").unwrap().point, Point::new(50.0, 20.0));
    assert_eq!(doc.get_shape("g", "page1").unwrap().point, Point::new(40.0, 0.0));

    doc.apply_patch(&cmd.before).unwrap();
    for id in ["h1", "h", "r", "g"] {
        assert_eq!(
            doc.get_shape(id, "page1").unwrap().point,
            original.get_shape(id, "page1").unwrap().point,
            "{}",
            id
        );
    }
}

#[test]
fn test_empty_group_is_not_moved() {
    let mut doc = doc_with(&[("a", 0.0, 0.0, 10.0), ("b", 5.0, 0.0, 10.0), ("c", 50.0, 0.0, 10.0)]);
    doc.add_shape(Shape::group("empty", Vec::<String>::new()))
        .unwrap();
    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c", "empty"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();

    assert!(!cmd.after.shapes("page1").unwrap().contains_key("empty"));
}

#[test]
fn test_apply_after_then_before_restores_points() {
    let rects = [("a", 0.0, 3.0, 10.0), ("b", 7.0, 1.0, 20.0), ("c", 80.0, 2.0, 10.0)];
    let mut doc = doc_with(&rects);
    doc.set_selected_ids(ids(&["a", "b", "c"]));
    let original = doc.clone();

    let cmd = distribute_shapes(
        &mut doc,
        &ids(&["a", "b", "c"]),
        Axis::Horizontal,
        &DistributeSettings::default(),
    )
    .unwrap();
    let distributed = doc.clone();

    doc.apply_patch(&cmd.before).unwrap();
    assert_eq!(doc, original);
    doc.apply_patch(&cmd.after).unwrap();
    assert_eq!(doc, distributed);
}
