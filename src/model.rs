//! Data model for a parsed GPML pathway document.
//!
//! These structures are a faithful, document-ordered record of the source
//! markup after default substitution. Reference resolution and geometry
//! normalization happen later, in the graph builder.

/// Externally supplied pathway metadata (identifier, revision, organism).
#[derive(Debug, Clone)]
pub struct PathwayMetadata {
    /// Stable pathway identifier (e.g., "WP4")
    pub identifier: String,
    /// Pathway revision version (not the GPML schema version)
    pub version: String,
    /// Organism name (e.g., "Homo sapiens")
    pub organism: String,
}

/// A parsed GPML document: root attributes plus children in document order.
#[derive(Debug, Clone)]
pub struct PathwayDocument {
    /// Pathway title (root `Name` attribute)
    pub name: String,
    /// Root `Organism` attribute, when present
    pub organism: Option<String>,
    /// Declared canvas size in source units, when present
    pub board_width: Option<f64>,
    pub board_height: Option<f64>,
    /// Pathway-level comments
    pub comments: Vec<String>,
    /// Top-level elements, in document order
    pub elements: Vec<Element>,
}

/// A top-level pathway element. One variant per GPML element kind.
#[derive(Debug, Clone)]
pub enum Element {
    DataNode(DataNode),
    Interaction(Interaction),
    Label(Label),
    Shape(Shape),
    Group(Group),
}

/// A biological entity node (gene, protein, metabolite, ...).
#[derive(Debug, Clone)]
pub struct DataNode {
    /// Stable identifier (`GraphId`)
    pub graph_id: String,
    /// Display text
    pub text_label: String,
    /// Entity kind tag (`Type`; defaults to "Unknown")
    pub node_type: String,
    /// Center position in source units
    pub center_x: f64,
    pub center_y: f64,
    /// Box size in source units
    pub width: f64,
    pub height: f64,
    /// Border and text color, `#rrggbb`
    pub color: String,
    /// Fill color, `#rrggbb`
    pub fill_color: String,
    /// Border thickness
    pub line_width: f64,
    /// Font size in source units
    pub font_size: f64,
    /// Canonical shape name (see the renderer's closed shape set)
    pub shape: String,
    /// Stacking order (defaults to 0; document order breaks ties)
    pub z_order: i64,
    /// Owning group (`GroupRef` → a group's `GroupId`)
    pub group_ref: Option<String>,
    /// External database cross-reference
    pub xref: Option<Xref>,
    /// Element-level comments
    pub comments: Vec<String>,
}

/// A directed or undirected connection between two endpoints.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// Stable identifier (`GraphId`)
    pub graph_id: String,
    /// Waypoints, in document order; first and last are the endpoints
    pub points: Vec<EdgePoint>,
    /// Virtual points along the path that other edges may attach to
    pub anchors: Vec<Anchor>,
    /// Stroke color, `#rrggbb`
    pub color: String,
    /// Stroke thickness
    pub line_width: f64,
    pub line_style: LineStyle,
    pub z_order: i64,
    pub group_ref: Option<String>,
    pub xref: Option<Xref>,
    pub comments: Vec<String>,
}

/// A single interaction waypoint.
#[derive(Debug, Clone)]
pub struct EdgePoint {
    /// Absolute position in source units
    pub x: f64,
    pub y: f64,
    /// Identifier of the element this point is attached to, when any
    pub graph_ref: Option<String>,
    /// Canonical arrowhead kind at this point (endpoints only)
    pub arrow_head: Option<String>,
}

/// A virtual point fixed at a relative position along an interaction's path.
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Stable identifier (`GraphId`)
    pub graph_id: String,
    /// Fraction of the path's arc length, 0.0 ..= 1.0
    pub position: f64,
}

/// A free-standing text annotation.
#[derive(Debug, Clone)]
pub struct Label {
    /// Stable identifier; generated by the builder when the source omits it
    pub graph_id: Option<String>,
    pub text_label: String,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub font_size: f64,
    pub z_order: i64,
    pub group_ref: Option<String>,
    pub comments: Vec<String>,
}

/// A decorative shape, optionally carrying text.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Stable identifier; generated by the builder when the source omits it
    pub graph_id: Option<String>,
    pub text_label: Option<String>,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub fill_color: String,
    pub line_width: f64,
    pub font_size: f64,
    /// Canonical shape name
    pub shape: String,
    pub z_order: i64,
    pub group_ref: Option<String>,
    pub comments: Vec<String>,
}

/// A set of member elements with aggregate style; may be nested.
#[derive(Debug, Clone)]
pub struct Group {
    /// Identifier that members reference via `GroupRef`
    pub group_id: String,
    /// Identifier that edges may attach to, when present
    pub graph_id: Option<String>,
    /// Group style tag (`Style`; defaults to "Group")
    pub style: String,
    /// Owning group, for nested groups
    pub group_ref: Option<String>,
    pub comments: Vec<String>,
}

/// External database cross-reference.
#[derive(Debug, Clone)]
pub struct Xref {
    pub database: String,
    pub id: String,
}

/// Stroke style of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    /// The PVJSON name of this style.
    pub fn as_name(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}
