//! Rendering tests — PVJSON input through the PVJSON → SVG stage.

use pathwaylib::{pvjson_to_svg, pvjson, RenderError, RenderOptions};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

/// A one-entity document with the metadata block filled in.
fn document(entities: &str) -> String {
    format!(
        r#"{{
  "id": "WP4",
  "pathwayVersion": "0",
  "organism": "Homo sapiens",
  "name": "test",
  "width": 300.0,
  "height": 200.0,
  "entities": [{entities}]
}}
"#
    )
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ─── Fixture round trip ─────────────────────────────────────────────

#[test]
fn render_minimal_fixture_matches_fixture() {
    let input = std::fs::read_to_string(data_dir().join("minimal.json"))
        .expect("Failed to read minimal.json");
    let expected = std::fs::read_to_string(data_dir().join("minimal.svg"))
        .expect("Failed to read minimal.svg");

    let rendered =
        pvjson_to_svg(&input, &RenderOptions::default()).expect("Failed to render minimal.json");

    assert_eq!(expected, rendered);
}

#[test]
fn rendering_is_deterministic() {
    let input = std::fs::read_to_string(data_dir().join("minimal.json")).unwrap();

    let first = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();
    let second = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reserialization_is_idempotent() {
    let input = std::fs::read_to_string(data_dir().join("minimal.json")).unwrap();

    let parsed = pvjson::parse_pvjson(&input).unwrap();
    let reserialized = pvjson::to_canonical_string(&parsed).unwrap();

    assert_eq!(input, reserialized);
}

// ─── Scenarios ──────────────────────────────────────────────────────

#[test]
fn single_node_renders_one_shape_and_no_markers() {
    let input = document(
        r#"
    {
      "id": "n1",
      "kind": "DataNode",
      "textContent": "A",
      "x": 60.0,
      "y": 90.0,
      "width": 80.0,
      "height": 20.0,
      "shape": "rectangle"
    }
  "#,
    );

    let options = RenderOptions {
        margin: 10.0,
        background: None,
    };
    let svg = pvjson_to_svg(&input, &options).unwrap();

    assert_eq!(count(&svg, "<rect"), 1, "Expected exactly one shape primitive");
    assert_eq!(count(&svg, "<defs>"), 0, "Expected no marker definitions");
    assert_eq!(count(&svg, "<path"), 0);
}

#[test]
fn arrow_interaction_renders_one_path_and_one_marker() {
    let input = std::fs::read_to_string(data_dir().join("minimal.json")).unwrap();
    let svg = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    assert_eq!(count(&svg, "<marker "), 1, "Expected exactly one marker definition");
    assert_eq!(count(&svg, "\n  <path"), 1, "Expected exactly one path element");
    assert_eq!(count(&svg, r##"marker-end="url(#arrow-000000)""##), 1);
}

#[test]
fn view_box_is_bounding_box_plus_margin() {
    let input = document("");

    let options = RenderOptions {
        margin: 25.0,
        background: None,
    };
    let svg = pvjson_to_svg(&input, &options).unwrap();

    assert!(
        svg.contains(r#"viewBox="-25.0 -25.0 350.0 250.0""#),
        "Unexpected viewBox in: {svg}"
    );
}

#[test]
fn groups_render_behind_their_members() {
    let input = document(
        r#"
    {
      "id": "n1",
      "kind": "DataNode",
      "textContent": "A",
      "x": 60.0,
      "y": 90.0,
      "width": 80.0,
      "height": 20.0,
      "shape": "rectangle",
      "isPartOf": "g1"
    },
    {
      "id": "g1",
      "kind": "Group",
      "entityType": "Complex",
      "x": 52.0,
      "y": 82.0,
      "width": 96.0,
      "height": 36.0
    }
  "#,
    );

    let svg = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    let group_at = svg.find(r#"<rect x="52.0""#).expect("group rect missing");
    let node_at = svg.find(r#"<rect x="60.0""#).expect("node rect missing");
    assert!(
        group_at < node_at,
        "Group must render behind its members"
    );
}

#[test]
fn anchors_are_never_drawn() {
    let input = document(
        r#"
    {
      "id": "e1",
      "kind": "Interaction",
      "points": [
        { "x": 100.0, "y": 100.0 },
        { "x": 200.0, "y": 100.0 }
      ]
    },
    {
      "id": "a1",
      "kind": "Anchor",
      "x": 150.0,
      "y": 100.0,
      "on": "e1",
      "position": 0.5
    }
  "#,
    );

    let options = RenderOptions {
        margin: 10.0,
        background: None,
    };
    let svg = pvjson_to_svg(&input, &options).unwrap();

    assert_eq!(count(&svg, "\n  <path"), 1, "Only the edge itself is drawn");
    assert_eq!(count(&svg, "<circle"), 0);
    assert_eq!(count(&svg, "<rect"), 0);
}

#[test]
fn dashed_interaction_gets_a_dash_pattern() {
    let input = document(
        r#"
    {
      "id": "e1",
      "kind": "Interaction",
      "lineStyle": "dashed",
      "points": [
        { "x": 100.0, "y": 100.0 },
        { "x": 200.0, "y": 100.0 }
      ]
    }
  "#,
    );

    let svg = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    assert!(svg.contains(r#"stroke-dasharray="6.0,3.0""#));
}

#[test]
fn long_labels_wrap_deterministically() {
    let input = document(
        r#"
    {
      "id": "label-1",
      "kind": "Label",
      "textContent": "hydrolysis of ATP",
      "x": 70.0,
      "y": 90.0,
      "width": 60.0,
      "height": 40.0,
      "fontSize": 10.0
    }
  "#,
    );

    let svg = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    // 60.0 / (10.0 * 0.6) = 10 characters per line
    assert_eq!(count(&svg, "<text"), 2);
    assert!(svg.contains(">hydrolysis</text>"));
    assert!(svg.contains(">of ATP</text>"));
}

#[test]
fn ellipse_shape_renders_an_ellipse() {
    let input = document(
        r#"
    {
      "id": "s1",
      "kind": "Shape",
      "x": 100.0,
      "y": 100.0,
      "width": 40.0,
      "height": 20.0,
      "shape": "ellipse"
    }
  "#,
    );

    let svg = pvjson_to_svg(&input, &RenderOptions::default()).unwrap();

    assert!(svg.contains(r#"<ellipse cx="120.0" cy="110.0" rx="20.0" ry="10.0""#));
}

// ─── Error cases ────────────────────────────────────────────────────

#[test]
fn unknown_shape_kind_fails() {
    let input = document(
        r#"
    {
      "id": "n1",
      "kind": "DataNode",
      "x": 60.0,
      "y": 90.0,
      "width": 80.0,
      "height": 20.0,
      "shape": "star"
    }
  "#,
    );

    match pvjson_to_svg(&input, &RenderOptions::default()) {
        Err(RenderError::UnknownShape { id, kind }) => {
            assert_eq!(id, "n1");
            assert_eq!(kind, "star");
        }
        other => panic!("Expected UnknownShape, got {other:?}"),
    }
}

#[test]
fn unknown_arrowhead_kind_fails() {
    let input = document(
        r#"
    {
      "id": "e1",
      "kind": "Interaction",
      "points": [
        { "x": 100.0, "y": 100.0 },
        { "x": 200.0, "y": 100.0 }
      ],
      "markerEnd": "zigzag"
    }
  "#,
    );

    match pvjson_to_svg(&input, &RenderOptions::default()) {
        Err(RenderError::UnknownArrowHead { id, kind }) => {
            assert_eq!(id, "e1");
            assert_eq!(kind, "zigzag");
        }
        other => panic!("Expected UnknownArrowHead, got {other:?}"),
    }
}

#[test]
fn structurally_invalid_pvjson_fails() {
    assert!(matches!(
        pvjson_to_svg("not json at all", &RenderOptions::default()),
        Err(RenderError::InvalidJson { .. })
    ));

    let unknown_kind = document(r#"{ "id": "x1", "kind": "Sparkle" }"#);
    assert!(matches!(
        pvjson_to_svg(&unknown_kind, &RenderOptions::default()),
        Err(RenderError::InvalidJson { .. })
    ));
}
