//! PVJSON wire format — canonical JSON documents for visualization tooling.
//!
//! Key order is fixed by struct field order and element order is document
//! order, so repeated serialization of the same graph is byte-identical, and
//! parsing an emitted document and re-emitting it round-trips exactly.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, RenderError};
use crate::graph::{Entity, PathwayGraph};

/// A complete PVJSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PvjsonDocument {
    /// Pathway identifier (supplied metadata)
    pub id: String,
    /// Pathway revision (supplied metadata)
    pub pathway_version: String,
    /// Organism name (supplied metadata)
    pub organism: String,
    /// Pathway title
    pub name: String,
    /// Overall bounding box in source units
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    /// All entities, in source document order
    pub entities: Vec<PvjsonEntity>,
}

/// One pathway entity. `kind` tags the element kind; the optional properties
/// valid for that kind are present, everything else is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PvjsonEntity {
    pub id: String,
    /// "DataNode", "Interaction", "Anchor", "Group", "Label" or "Shape"
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// DataNode `Type` or Group `Style`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Border, text or stroke color, `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    /// "solid" or "dashed" (interactions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Shape kind name; the renderer's dispatch is the closed vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Stacking order; omitted when 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_order: Option<i64>,
    /// Interaction waypoints, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PvjsonPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<String>,
    /// Owning interaction id (anchors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
    /// Fraction of the owning path's arc length (anchors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    /// Entity id of the owning group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<PvjsonXref>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// An interaction waypoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PvjsonPoint {
    pub x: f64,
    pub y: f64,
    /// Identifier of the entity this endpoint is attached to, when any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_attached_to: Option<String>,
}

/// External database cross-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PvjsonXref {
    pub database: String,
    pub id: String,
}

impl PvjsonEntity {
    fn new(id: String, kind: &str) -> Self {
        PvjsonEntity {
            id,
            kind: kind.to_string(),
            text_content: None,
            entity_type: None,
            x: None,
            y: None,
            width: None,
            height: None,
            color: None,
            fill_color: None,
            line_width: None,
            line_style: None,
            font_size: None,
            shape: None,
            z_order: None,
            points: None,
            marker_start: None,
            marker_end: None,
            on: None,
            position: None,
            is_part_of: None,
            xref: None,
            comments: Vec::new(),
        }
    }
}

/// Serialize a pathway graph into PVJSON text.
pub fn to_pvjson_string(graph: &PathwayGraph) -> Result<String, ConvertError> {
    to_canonical_string(&to_pvjson(graph))
}

/// Serialize a PVJSON document to its canonical, newline-terminated text
/// form. Re-serializing a parsed document reproduces its bytes exactly.
pub fn to_canonical_string(document: &PvjsonDocument) -> Result<String, ConvertError> {
    let mut text = serde_json::to_string_pretty(document).map_err(|e| ConvertError::Serialize {
        message: e.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}

/// Parse PVJSON text back into a document (the renderer's input form).
pub fn parse_pvjson(text: &str) -> Result<PvjsonDocument, RenderError> {
    serde_json::from_str(text).map_err(|e| RenderError::InvalidJson {
        message: e.to_string(),
    })
}

/// Map a resolved pathway graph onto the PVJSON property vocabulary.
pub fn to_pvjson(graph: &PathwayGraph) -> PvjsonDocument {
    PvjsonDocument {
        id: graph.identifier.clone(),
        pathway_version: graph.pathway_version.clone(),
        organism: graph.organism.clone(),
        name: graph.name.clone(),
        width: graph.width,
        height: graph.height,
        comments: graph.comments.clone(),
        entities: graph.entities.iter().map(entity_to_pvjson).collect(),
    }
}

fn entity_to_pvjson(entity: &Entity) -> PvjsonEntity {
    match entity {
        Entity::DataNode(n) => {
            let mut e = PvjsonEntity::new(n.id.clone(), "DataNode");
            e.text_content = Some(n.text.clone());
            e.entity_type = Some(n.entity_type.clone());
            e.x = Some(n.x);
            e.y = Some(n.y);
            e.width = Some(n.width);
            e.height = Some(n.height);
            e.color = Some(n.color.clone());
            e.fill_color = Some(n.fill_color.clone());
            e.line_width = Some(n.line_width);
            e.font_size = Some(n.font_size);
            e.shape = Some(n.shape.clone());
            e.z_order = z_order(n.z_order);
            e.is_part_of = n.is_part_of.clone();
            e.xref = xref(&n.xref);
            e.comments = n.comments.clone();
            e
        }
        Entity::Interaction(edge) => {
            let mut e = PvjsonEntity::new(edge.id.clone(), "Interaction");
            e.color = Some(edge.color.clone());
            e.line_width = Some(edge.line_width);
            e.line_style = Some(edge.line_style.as_name().to_string());
            e.z_order = z_order(edge.z_order);
            e.points = Some(
                edge.points
                    .iter()
                    .map(|p| PvjsonPoint {
                        x: p.x,
                        y: p.y,
                        is_attached_to: p.attached_to.clone(),
                    })
                    .collect(),
            );
            e.marker_start = edge.marker_start.clone();
            e.marker_end = edge.marker_end.clone();
            e.is_part_of = edge.is_part_of.clone();
            e.xref = xref(&edge.xref);
            e.comments = edge.comments.clone();
            e
        }
        Entity::Anchor(a) => {
            let mut e = PvjsonEntity::new(a.id.clone(), "Anchor");
            e.x = Some(a.x);
            e.y = Some(a.y);
            e.on = Some(a.on.clone());
            e.position = Some(a.position);
            e
        }
        Entity::Group(g) => {
            let mut e = PvjsonEntity::new(g.id.clone(), "Group");
            e.entity_type = Some(g.style.clone());
            e.x = Some(g.x);
            e.y = Some(g.y);
            e.width = Some(g.width);
            e.height = Some(g.height);
            e.z_order = z_order(g.z_order);
            e.is_part_of = g.is_part_of.clone();
            e.comments = g.comments.clone();
            e
        }
        Entity::Label(l) => {
            let mut e = PvjsonEntity::new(l.id.clone(), "Label");
            e.text_content = Some(l.text.clone());
            e.x = Some(l.x);
            e.y = Some(l.y);
            e.width = Some(l.width);
            e.height = Some(l.height);
            e.color = Some(l.color.clone());
            e.font_size = Some(l.font_size);
            e.z_order = z_order(l.z_order);
            e.is_part_of = l.is_part_of.clone();
            e.comments = l.comments.clone();
            e
        }
        Entity::Shape(s) => {
            let mut e = PvjsonEntity::new(s.id.clone(), "Shape");
            e.text_content = s.text.clone();
            e.x = Some(s.x);
            e.y = Some(s.y);
            e.width = Some(s.width);
            e.height = Some(s.height);
            e.color = Some(s.color.clone());
            e.fill_color = Some(s.fill_color.clone());
            e.line_width = Some(s.line_width);
            e.font_size = Some(s.font_size);
            e.shape = Some(s.shape.clone());
            e.z_order = z_order(s.z_order);
            e.is_part_of = s.is_part_of.clone();
            e.comments = s.comments.clone();
            e
        }
    }
}

fn z_order(z: i64) -> Option<i64> {
    if z == 0 {
        None
    } else {
        Some(z)
    }
}

fn xref(xref: &Option<crate::model::Xref>) -> Option<PvjsonXref> {
    xref.as_ref().map(|x| PvjsonXref {
        database: x.database.clone(),
        id: x.id.clone(),
    })
}
