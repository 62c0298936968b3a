//! Error taxonomies for the two conversion stages.
//!
//! The core performs no local recovery: the first structural problem aborts
//! the conversion and surfaces the error kind plus the offending identifier.

/// Errors produced while converting GPML into PVJSON (stage 1).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("GPML parse error: {message}")]
    Parse { message: String },

    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("unsupported GPML schema version '{version}'")]
    SchemaVersion { version: String },

    #[error("duplicate identifier '{id}'")]
    DuplicateId { id: String },

    #[error("dangling reference '{reference}' from '{referrer}'")]
    DanglingReference { reference: String, referrer: String },

    #[error("negative coordinate on element '{id}'")]
    NegativeCoordinate { id: String },

    #[error("group membership cycle through '{id}'")]
    GroupCycle { id: String },

    #[error("invalid pathway envelope: {message}")]
    Envelope { message: String },

    #[error("PVJSON serialization error: {message}")]
    Serialize { message: String },
}

/// Errors produced while rendering PVJSON into SVG (stage 2).
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid PVJSON: {message}")]
    InvalidJson { message: String },

    #[error("unknown shape kind '{kind}' on element '{id}'")]
    UnknownShape { id: String, kind: String },

    #[error("unknown arrowhead kind '{kind}' on edge '{id}'")]
    UnknownArrowHead { id: String, kind: String },
}
