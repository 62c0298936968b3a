//! Envelope tests — webservice JSON/base64 unwrapping and organism lookup.

use pathwaylib::{decode_envelope, extract_organism, ConvertError};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

#[test]
fn decode_envelope_unwraps_base64_gpml() {
    // base64 of `<Pathway/>`
    let envelope = r#"{"data":"PFBhdGh3YXkvPg=="}"#;

    let gpml = decode_envelope(envelope).expect("Failed to decode envelope");

    assert_eq!(gpml, "<Pathway/>");
}

#[test]
fn decode_envelope_rejects_malformed_json() {
    assert!(matches!(
        decode_envelope("{\"data\""),
        Err(ConvertError::Envelope { .. })
    ));
}

#[test]
fn decode_envelope_rejects_invalid_base64() {
    assert!(matches!(
        decode_envelope(r#"{"data":"!!not-base64!!"}"#),
        Err(ConvertError::Envelope { .. })
    ));
}

#[test]
fn extract_organism_reads_the_root_attribute() {
    let gpml = std::fs::read_to_string(data_dir().join("minimal.gpml")).unwrap();

    let organism = extract_organism(&gpml).expect("Failed to read organism");

    assert_eq!(organism, "Homo sapiens");
}

#[test]
fn extract_organism_defaults_to_empty() {
    let gpml = r#"<Pathway xmlns="http://pathvisio.org/GPML/2013a" Name="test"/>"#;

    assert_eq!(extract_organism(gpml).unwrap(), "");
}

#[test]
fn extract_organism_rejects_malformed_markup() {
    assert!(matches!(
        extract_organism("<Pathway"),
        Err(ConvertError::Parse { .. })
    ));
}
