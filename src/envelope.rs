//! Webservice envelope handler — unwraps the JSON payload that the pathway
//! webservice returns around raw GPML text.
//!
//! The service answers `getPathwayAs?fileType=gpml` requests with a JSON
//! object whose `data` member holds the GPML document base64-encoded.
//! Fetching that envelope is the caller's job; decoding it is handled here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::error::ConvertError;

#[derive(Deserialize)]
struct Envelope {
    data: String,
}

/// Decode a webservice envelope into GPML text.
pub fn decode_envelope(json: &str) -> Result<String, ConvertError> {
    let envelope: Envelope = serde_json::from_str(json).map_err(|e| ConvertError::Envelope {
        message: format!("invalid envelope JSON: {e}"),
    })?;

    let bytes = STANDARD
        .decode(envelope.data.trim())
        .map_err(|e| ConvertError::Envelope {
            message: format!("invalid base64 payload: {e}"),
        })?;

    String::from_utf8(bytes).map_err(|e| ConvertError::Envelope {
        message: format!("payload is not UTF-8: {e}"),
    })
}

/// Read the `Organism` attribute from a GPML document's root element.
///
/// Returns an empty string when the attribute is absent; callers assembling
/// `PathwayMetadata` decide what an unknown organism should look like.
pub fn extract_organism(gpml: &str) -> Result<String, ConvertError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(gpml, options).map_err(|e| {
        ConvertError::Parse {
            message: e.to_string(),
        }
    })?;

    Ok(doc
        .root_element()
        .attribute("Organism")
        .unwrap_or("")
        .to_string())
}
