//! pathwaylib — GPML pathway parser, PVJSON converter and SVG rendering library.
//!
//! Converts biological pathway diagrams authored in GPML (the XML dialect
//! used by pathway databases) into the canonical PVJSON representation, and
//! renders PVJSON into SVG markup. The two stages share no state and are
//! safely composable or invokable independently; both are deterministic,
//! producing byte-identical output for identical input.
//!
//! # Example
//! ```no_run
//! use pathwaylib::{gpml_to_pvjson, pvjson_to_svg, PathwayMetadata, RenderOptions};
//!
//! let gpml = std::fs::read_to_string("pathway.gpml").unwrap();
//! let metadata = PathwayMetadata {
//!     identifier: "WP4".to_string(),
//!     version: "0".to_string(),
//!     organism: "Homo sapiens".to_string(),
//! };
//! let pvjson = gpml_to_pvjson(&gpml, &metadata).unwrap();
//! let svg = pvjson_to_svg(&pvjson, &RenderOptions::default()).unwrap();
//! println!("{svg}");
//! ```

pub mod envelope;
pub mod error;
pub mod graph;
pub mod model;
pub mod parser;
pub mod pvjson;
pub mod renderer;

use std::path::Path;

pub use envelope::{decode_envelope, extract_organism};
pub use error::{ConvertError, RenderError};
pub use model::PathwayMetadata;
pub use renderer::RenderOptions;

/// Convert GPML text into PVJSON text (stage 1).
///
/// Fails with a [`ConvertError`] on malformed markup, an unsupported schema
/// version, a duplicate identifier, or a dangling reference; there is no
/// partial output.
pub fn gpml_to_pvjson(gpml: &str, metadata: &PathwayMetadata) -> Result<String, ConvertError> {
    let document = parser::parse_gpml(gpml)?;
    let graph = graph::build(&document, metadata)?;
    pvjson::to_pvjson_string(&graph)
}

/// Render PVJSON text into SVG text (stage 2).
///
/// Fails with a [`RenderError`] on structurally invalid PVJSON or an unknown
/// shape or arrowhead kind.
pub fn pvjson_to_svg(pvjson_text: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let document = pvjson::parse_pvjson(pvjson_text)?;
    renderer::render_pvjson(&document, options)
}

/// Read a GPML file and convert it to PVJSON.
/// Convenience wrapper around [`gpml_to_pvjson`].
pub fn gpml_file_to_pvjson<P: AsRef<Path>>(
    path: P,
    metadata: &PathwayMetadata,
) -> Result<String, ConvertError> {
    let path = path.as_ref();
    let gpml = std::fs::read_to_string(path).map_err(|e| ConvertError::Parse {
        message: format!("failed to read '{}': {e}", path.display()),
    })?;
    gpml_to_pvjson(&gpml, metadata)
}
