//! Conversion tests — GPML input through the GPML → PVJSON stage.

use pathwaylib::{gpml_to_pvjson, ConvertError, PathwayMetadata};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn metadata() -> PathwayMetadata {
    PathwayMetadata {
        identifier: "WP4".to_string(),
        version: "0".to_string(),
        organism: "Homo sapiens".to_string(),
    }
}

fn gpml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Pathway xmlns="http://pathvisio.org/GPML/2013a" Name="test" Organism="Homo sapiens">
{body}
</Pathway>
"#
    )
}

// ─── Fixture round trip ─────────────────────────────────────────────

#[test]
fn convert_minimal_gpml_matches_fixture() {
    let input = std::fs::read_to_string(data_dir().join("minimal.gpml"))
        .expect("Failed to read minimal.gpml");
    let expected = std::fs::read_to_string(data_dir().join("minimal.json"))
        .expect("Failed to read minimal.json");

    let converted = gpml_to_pvjson(&input, &metadata()).expect("Failed to convert minimal.gpml");

    assert_eq!(expected, converted);
}

#[test]
fn conversion_is_deterministic() {
    let input = std::fs::read_to_string(data_dir().join("minimal.gpml")).unwrap();

    let first = gpml_to_pvjson(&input, &metadata()).unwrap();
    let second = gpml_to_pvjson(&input, &metadata()).unwrap();

    assert_eq!(first, second);
}

// ─── Scenarios ──────────────────────────────────────────────────────

#[test]
fn single_node_pathway_has_one_entity_and_no_edges() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1">
    <Graphics CenterX="50.0" CenterY="50.0" Width="80.0" Height="20.0"/>
  </DataNode>"#,
    );

    let pvjson = gpml_to_pvjson(&input, &metadata()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&pvjson).unwrap();

    let entities = value["entities"].as_array().unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0]["id"], "n1");
    assert_eq!(entities[0]["kind"], "DataNode");
    assert_eq!(entities[0]["textContent"], "A");
    // Type defaults to "Unknown" when the source omits it
    assert_eq!(entities[0]["entityType"], "Unknown");
}

#[test]
fn interaction_endpoints_reference_both_nodes() {
    let input = std::fs::read_to_string(data_dir().join("minimal.gpml")).unwrap();
    let pvjson = gpml_to_pvjson(&input, &metadata()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&pvjson).unwrap();

    let entities = value["entities"].as_array().unwrap();
    let edges: Vec<_> = entities
        .iter()
        .filter(|e| e["kind"] == "Interaction")
        .collect();
    assert_eq!(edges.len(), 1);

    let points = edges[0]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["isAttachedTo"], "n1");
    assert_eq!(points[1]["isAttachedTo"], "n2");
    assert_eq!(edges[0]["markerEnd"], "arrow");
}

#[test]
fn metadata_is_carried_into_the_document() {
    let input = std::fs::read_to_string(data_dir().join("minimal.gpml")).unwrap();
    let pvjson = gpml_to_pvjson(&input, &metadata()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&pvjson).unwrap();

    assert_eq!(value["id"], "WP4");
    assert_eq!(value["pathwayVersion"], "0");
    assert_eq!(value["organism"], "Homo sapiens");
    assert_eq!(value["name"], "minimal");
    assert_eq!(value["width"], 300.0);
    assert_eq!(value["height"], 200.0);
}

#[test]
fn anchors_are_materialized_with_interpolated_positions() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <DataNode TextLabel="B" GraphId="n2">
    <Graphics CenterX="300.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <Interaction GraphId="e1">
    <Graphics>
      <Point X="100.0" Y="100.0" GraphRef="n1"/>
      <Point X="300.0" Y="100.0" GraphRef="n2" ArrowHead="Arrow"/>
      <Anchor Position="0.5" GraphId="a1"/>
    </Graphics>
  </Interaction>
  <Interaction GraphId="e2">
    <Graphics>
      <Point X="200.0" Y="200.0"/>
      <Point X="200.0" Y="100.0" GraphRef="a1" ArrowHead="TBar"/>
    </Graphics>
  </Interaction>"#,
    );

    let pvjson = gpml_to_pvjson(&input, &metadata()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&pvjson).unwrap();

    let entities = value["entities"].as_array().unwrap();
    let anchor = entities
        .iter()
        .find(|e| e["kind"] == "Anchor")
        .expect("Anchor entity should be emitted");
    assert_eq!(anchor["id"], "a1");
    assert_eq!(anchor["on"], "e1");
    assert_eq!(anchor["position"], 0.5);
    assert_eq!(anchor["x"], 200.0);
    assert_eq!(anchor["y"], 100.0);

    // The anchor entity follows its owning edge in document order
    let kinds: Vec<_> = entities.iter().map(|e| e["kind"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        ["DataNode", "DataNode", "Interaction", "Anchor", "Interaction"]
    );

    let e2 = entities.iter().find(|e| e["id"] == "e2").unwrap();
    assert_eq!(e2["points"][1]["isAttachedTo"], "a1");
    assert_eq!(e2["markerEnd"], "inhibition");
}

#[test]
fn groups_get_computed_bounds_and_membership() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1" GroupRef="g1">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <DataNode TextLabel="B" GraphId="n2" GroupRef="g1">
    <Graphics CenterX="200.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <Group GroupId="g1" Style="Complex"/>"#,
    );

    let pvjson = gpml_to_pvjson(&input, &metadata()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&pvjson).unwrap();

    let entities = value["entities"].as_array().unwrap();
    let group = entities
        .iter()
        .find(|e| e["kind"] == "Group")
        .expect("Group entity should be emitted");
    assert_eq!(group["id"], "g1");
    assert_eq!(group["entityType"], "Complex");

    // Union of the member boxes (60..240 × 90..110) plus 8.0 padding
    assert_eq!(group["x"], 52.0);
    assert_eq!(group["y"], 82.0);
    assert_eq!(group["width"], 196.0);
    assert_eq!(group["height"], 36.0);

    for id in ["n1", "n2"] {
        let member = entities.iter().find(|e| e["id"] == id).unwrap();
        assert_eq!(member["isPartOf"], "g1");
    }

    // No declared canvas, so the box is the maximum content extent
    assert_eq!(value["width"], 248.0);
    assert_eq!(value["height"], 118.0);
}

// ─── Error cases ────────────────────────────────────────────────────

#[test]
fn dangling_endpoint_reference_fails() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <Interaction GraphId="e1">
    <Graphics>
      <Point X="100.0" Y="100.0" GraphRef="n1"/>
      <Point X="200.0" Y="100.0" GraphRef="nope"/>
    </Graphics>
  </Interaction>"#,
    );

    match gpml_to_pvjson(&input, &metadata()) {
        Err(ConvertError::DanglingReference {
            reference,
            referrer,
        }) => {
            assert_eq!(reference, "nope");
            assert_eq!(referrer, "e1");
        }
        other => panic!("Expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn dangling_group_reference_fails() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1" GroupRef="missing">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>"#,
    );

    assert!(matches!(
        gpml_to_pvjson(&input, &metadata()),
        Err(ConvertError::DanglingReference { .. })
    ));
}

#[test]
fn duplicate_identifier_fails() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>
  <DataNode TextLabel="B" GraphId="n1">
    <Graphics CenterX="200.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>"#,
    );

    match gpml_to_pvjson(&input, &metadata()) {
        Err(ConvertError::DuplicateId { id }) => assert_eq!(id, "n1"),
        other => panic!("Expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn unsupported_schema_version_fails() {
    let input = r#"<?xml version="1.0"?>
<Pathway xmlns="http://example.org/NotGPML" Name="test"/>
"#;

    assert!(matches!(
        gpml_to_pvjson(input, &metadata()),
        Err(ConvertError::SchemaVersion { .. })
    ));
}

#[test]
fn missing_required_attribute_fails() {
    let input = gpml(
        r#"  <DataNode GraphId="n1">
    <Graphics CenterX="100.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>"#,
    );

    match gpml_to_pvjson(&input, &metadata()) {
        Err(ConvertError::MissingAttribute { element, attribute }) => {
            assert_eq!(element, "DataNode");
            assert_eq!(attribute, "TextLabel");
        }
        other => panic!("Expected MissingAttribute, got {other:?}"),
    }
}

#[test]
fn negative_coordinate_fails() {
    let input = gpml(
        r#"  <DataNode TextLabel="A" GraphId="n1">
    <Graphics CenterX="-5.0" CenterY="100.0" Width="80.0" Height="20.0"/>
  </DataNode>"#,
    );

    assert!(matches!(
        gpml_to_pvjson(&input, &metadata()),
        Err(ConvertError::NegativeCoordinate { .. })
    ));
}

#[test]
fn malformed_markup_fails() {
    assert!(matches!(
        gpml_to_pvjson("<Pathway", &metadata()),
        Err(ConvertError::Parse { .. })
    ));
}
