//! Arrowhead markers — one `<marker>` definition per distinct
//! (kind, color) pair in use, referenced by id from interaction paths.

use crate::error::RenderError;
use crate::pvjson::PvjsonEntity;

use super::constants::*;
use super::svg_builder::SvgBuilder;

/// The closed set of arrowhead kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArrowHeadKind {
    Arrow,
    Stimulation,
    Inhibition,
    Binding,
    Conversion,
    Unknown,
}

impl ArrowHeadKind {
    pub(super) fn from_name(name: &str) -> Option<ArrowHeadKind> {
        match name {
            "arrow" => Some(ArrowHeadKind::Arrow),
            "stimulation" => Some(ArrowHeadKind::Stimulation),
            "inhibition" => Some(ArrowHeadKind::Inhibition),
            "binding" => Some(ArrowHeadKind::Binding),
            "conversion" => Some(ArrowHeadKind::Conversion),
            "unknown" => Some(ArrowHeadKind::Unknown),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ArrowHeadKind::Arrow => "arrow",
            ArrowHeadKind::Stimulation => "stimulation",
            ArrowHeadKind::Inhibition => "inhibition",
            ArrowHeadKind::Binding => "binding",
            ArrowHeadKind::Conversion => "conversion",
            ArrowHeadKind::Unknown => "unknown",
        }
    }
}

/// The marker definition id for an arrowhead kind drawn in a given color.
pub(super) fn marker_id(kind: &str, color: &str) -> String {
    format!("{}-{}", kind, color.trim_start_matches('#'))
}

/// The distinct (kind, color) marker pairs a document uses, in first-use
/// document order.
pub(super) struct MarkerTable {
    markers: Vec<(ArrowHeadKind, String)>,
}

impl MarkerTable {
    /// Walk all edges, validating every marker kind against the closed set.
    pub(super) fn collect(entities: &[PvjsonEntity]) -> Result<MarkerTable, RenderError> {
        let mut markers: Vec<(ArrowHeadKind, String)> = Vec::new();

        for entity in entities {
            let color = entity.color.as_deref().unwrap_or(DEFAULT_STROKE);
            for name in [entity.marker_start.as_deref(), entity.marker_end.as_deref()]
                .into_iter()
                .flatten()
            {
                let kind =
                    ArrowHeadKind::from_name(name).ok_or_else(|| RenderError::UnknownArrowHead {
                        id: entity.id.clone(),
                        kind: name.to_string(),
                    })?;
                if !markers.iter().any(|(k, c)| *k == kind && c == color) {
                    markers.push((kind, color.to_string()));
                }
            }
        }

        Ok(MarkerTable { markers })
    }

    /// Emit the `<defs>` block; nothing at all when no edge carries a head.
    pub(super) fn emit_defs(&self, svg: &mut SvgBuilder) {
        if self.markers.is_empty() {
            return;
        }

        svg.raw("<defs>".to_string());
        for (kind, color) in &self.markers {
            svg.raw(marker_definition(*kind, color));
        }
        svg.raw("</defs>".to_string());
    }
}

fn marker_definition(kind: ArrowHeadKind, color: &str) -> String {
    let (ref_x, content) = match kind {
        // Filled triangle at the line tip
        ArrowHeadKind::Arrow | ArrowHeadKind::Conversion => (
            10.0,
            format!(r#"<path d="M0.0,0.0 L10.0,5.0 L0.0,10.0 Z" fill="{}"/>"#, color),
        ),
        // Open triangle
        ArrowHeadKind::Stimulation => (
            10.0,
            format!(
                r##"<path d="M0.0,0.0 L10.0,5.0 L0.0,10.0 Z" fill="#ffffff" stroke="{}" stroke-width="1.0"/>"##,
                color
            ),
        ),
        // Perpendicular bar
        ArrowHeadKind::Inhibition => (
            9.0,
            format!(
                r#"<path d="M8.0,0.0 L8.0,10.0" fill="none" stroke="{}" stroke-width="2.0"/>"#,
                color
            ),
        ),
        // Filled diamond
        ArrowHeadKind::Binding => (
            10.0,
            format!(
                r#"<path d="M0.0,5.0 L5.0,0.0 L10.0,5.0 L5.0,10.0 Z" fill="{}"/>"#,
                color
            ),
        ),
        // Open circle
        ArrowHeadKind::Unknown => (
            9.0,
            format!(
                r##"<circle cx="5.0" cy="5.0" r="4.0" fill="#ffffff" stroke="{}" stroke-width="1.0"/>"##,
                color
            ),
        ),
    };

    format!(
        r#"<marker id="{}" markerWidth="{:.1}" markerHeight="{:.1}" refX="{:.1}" refY="5.0" orient="auto" markerUnits="userSpaceOnUse">{}</marker>"#,
        marker_id(kind.name(), color),
        MARKER_SIZE,
        MARKER_SIZE,
        ref_x,
        content
    )
}
