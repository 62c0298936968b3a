//! GPML parser — converts GPML XML into the PathwayDocument model.
//!
//! Pure function of the input text. Optional attributes are substituted with
//! their documented defaults here; reference resolution happens later in the
//! graph builder. Source document order is preserved throughout, since later
//! stages use it as the deterministic ordering tie-break.

use roxmltree::{Document, Node};

use crate::error::ConvertError;
use crate::model::*;

/// GPML namespaces this parser accepts.
const SUPPORTED_NAMESPACES: [&str; 3] = [
    "http://pathvisio.org/GPML/2013a",
    "http://genmapp.org/GPML/2010a",
    "http://genmapp.org/GPML/2008a",
];

const DEFAULT_COLOR: &str = "#000000";
const DEFAULT_FILL_COLOR: &str = "#ffffff";
const DEFAULT_FONT_SIZE: f64 = 10.0;
const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Parse a GPML XML string into a PathwayDocument.
pub fn parse_gpml(xml: &str) -> Result<PathwayDocument, ConvertError> {
    // Some exporters ship GPML with a DOCTYPE declaration, so allow DTDs
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(xml, options).map_err(|e| ConvertError::Parse {
        message: e.to_string(),
    })?;
    let root = doc.root_element();

    if root.tag_name().name() != "Pathway" {
        return Err(ConvertError::Parse {
            message: format!(
                "unexpected root element <{}>; expected <Pathway>",
                root.tag_name().name()
            ),
        });
    }

    let namespace = root.tag_name().namespace().unwrap_or("");
    if !SUPPORTED_NAMESPACES.contains(&namespace) {
        return Err(ConvertError::SchemaVersion {
            version: namespace.to_string(),
        });
    }

    let mut pathway = PathwayDocument {
        name: require_attr(&root, "Pathway", "Name")?.to_string(),
        organism: root.attribute("Organism").map(String::from),
        board_width: None,
        board_height: None,
        comments: Vec::new(),
        elements: Vec::new(),
    };

    for child in root.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "Graphics" => {
                pathway.board_width = attr_f64(&child, "BoardWidth");
                pathway.board_height = attr_f64(&child, "BoardHeight");
            }
            "Comment" => {
                if let Some(text) = comment_text(&child) {
                    pathway.comments.push(text);
                }
            }
            "DataNode" => pathway
                .elements
                .push(Element::DataNode(parse_data_node(&child)?)),
            "Interaction" => pathway
                .elements
                .push(Element::Interaction(parse_interaction(&child)?)),
            "Label" => pathway.elements.push(Element::Label(parse_label(&child)?)),
            "Shape" => pathway.elements.push(Element::Shape(parse_shape(&child)?)),
            "Group" => pathway.elements.push(Element::Group(parse_group(&child)?)),
            _ => {}
        }
    }

    Ok(pathway)
}

// ─── DataNode ────────────────────────────────────────────────────────

fn parse_data_node(node: &Node) -> Result<DataNode, ConvertError> {
    let graphics = require_child(node, "DataNode", "Graphics")?;

    Ok(DataNode {
        graph_id: require_attr(node, "DataNode", "GraphId")?.to_string(),
        text_label: require_attr(node, "DataNode", "TextLabel")?.to_string(),
        node_type: node.attribute("Type").unwrap_or("Unknown").to_string(),
        center_x: require_attr_f64(&graphics, "DataNode", "CenterX")?,
        center_y: require_attr_f64(&graphics, "DataNode", "CenterY")?,
        width: require_attr_f64(&graphics, "DataNode", "Width")?,
        height: require_attr_f64(&graphics, "DataNode", "Height")?,
        color: color_attr(&graphics, "Color", DEFAULT_COLOR),
        fill_color: color_attr(&graphics, "FillColor", DEFAULT_FILL_COLOR),
        line_width: attr_f64(&graphics, "LineThickness").unwrap_or(DEFAULT_LINE_WIDTH),
        font_size: attr_f64(&graphics, "FontSize").unwrap_or(DEFAULT_FONT_SIZE),
        shape: canonical_shape_name(graphics.attribute("ShapeType").unwrap_or("Rectangle")),
        z_order: attr_i64(&graphics, "ZOrder").unwrap_or(0),
        group_ref: node.attribute("GroupRef").map(String::from),
        xref: parse_xref(node),
        comments: parse_comments(node),
    })
}

// ─── Interaction ─────────────────────────────────────────────────────

fn parse_interaction(node: &Node) -> Result<Interaction, ConvertError> {
    let graph_id = require_attr(node, "Interaction", "GraphId")?.to_string();
    let graphics = require_child(node, "Interaction", "Graphics")?;

    let mut points = Vec::new();
    let mut anchors = Vec::new();
    for child in graphics.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "Point" => points.push(EdgePoint {
                x: require_attr_f64(&child, "Point", "X")?,
                y: require_attr_f64(&child, "Point", "Y")?,
                graph_ref: child.attribute("GraphRef").map(String::from),
                arrow_head: child.attribute("ArrowHead").and_then(canonical_arrow_head),
            }),
            "Anchor" => anchors.push(Anchor {
                graph_id: require_attr(&child, "Anchor", "GraphId")?.to_string(),
                position: require_attr_f64(&child, "Anchor", "Position")?,
            }),
            _ => {}
        }
    }

    if points.len() < 2 {
        return Err(ConvertError::Parse {
            message: format!("interaction '{graph_id}' has fewer than two points"),
        });
    }

    Ok(Interaction {
        graph_id,
        points,
        anchors,
        color: color_attr(&graphics, "Color", DEFAULT_COLOR),
        line_width: attr_f64(&graphics, "LineThickness").unwrap_or(DEFAULT_LINE_WIDTH),
        line_style: match graphics.attribute("LineStyle") {
            Some("Broken") => LineStyle::Dashed,
            _ => LineStyle::Solid,
        },
        z_order: attr_i64(&graphics, "ZOrder").unwrap_or(0),
        group_ref: node.attribute("GroupRef").map(String::from),
        xref: parse_xref(node),
        comments: parse_comments(node),
    })
}

// ─── Label ───────────────────────────────────────────────────────────

fn parse_label(node: &Node) -> Result<Label, ConvertError> {
    let graphics = require_child(node, "Label", "Graphics")?;

    Ok(Label {
        graph_id: node.attribute("GraphId").map(String::from),
        text_label: require_attr(node, "Label", "TextLabel")?.to_string(),
        center_x: require_attr_f64(&graphics, "Label", "CenterX")?,
        center_y: require_attr_f64(&graphics, "Label", "CenterY")?,
        width: require_attr_f64(&graphics, "Label", "Width")?,
        height: require_attr_f64(&graphics, "Label", "Height")?,
        color: color_attr(&graphics, "Color", DEFAULT_COLOR),
        font_size: attr_f64(&graphics, "FontSize").unwrap_or(DEFAULT_FONT_SIZE),
        z_order: attr_i64(&graphics, "ZOrder").unwrap_or(0),
        group_ref: node.attribute("GroupRef").map(String::from),
        comments: parse_comments(node),
    })
}

// ─── Shape ───────────────────────────────────────────────────────────

fn parse_shape(node: &Node) -> Result<Shape, ConvertError> {
    let graphics = require_child(node, "Shape", "Graphics")?;

    Ok(Shape {
        graph_id: node.attribute("GraphId").map(String::from),
        text_label: node
            .attribute("TextLabel")
            .map(String::from)
            .filter(|t| !t.is_empty()),
        center_x: require_attr_f64(&graphics, "Shape", "CenterX")?,
        center_y: require_attr_f64(&graphics, "Shape", "CenterY")?,
        width: require_attr_f64(&graphics, "Shape", "Width")?,
        height: require_attr_f64(&graphics, "Shape", "Height")?,
        color: color_attr(&graphics, "Color", DEFAULT_COLOR),
        fill_color: color_attr(&graphics, "FillColor", DEFAULT_FILL_COLOR),
        line_width: attr_f64(&graphics, "LineThickness").unwrap_or(DEFAULT_LINE_WIDTH),
        font_size: attr_f64(&graphics, "FontSize").unwrap_or(DEFAULT_FONT_SIZE),
        shape: canonical_shape_name(graphics.attribute("ShapeType").unwrap_or("Rectangle")),
        z_order: attr_i64(&graphics, "ZOrder").unwrap_or(0),
        group_ref: node.attribute("GroupRef").map(String::from),
        comments: parse_comments(node),
    })
}

// ─── Group ───────────────────────────────────────────────────────────

fn parse_group(node: &Node) -> Result<Group, ConvertError> {
    Ok(Group {
        group_id: require_attr(node, "Group", "GroupId")?.to_string(),
        graph_id: node.attribute("GraphId").map(String::from),
        style: node.attribute("Style").unwrap_or("Group").to_string(),
        group_ref: node.attribute("GroupRef").map(String::from),
        comments: parse_comments(node),
    })
}

// ─── Shared sub-elements ─────────────────────────────────────────────

fn parse_xref(node: &Node) -> Option<Xref> {
    let xref = node
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "Xref")?;
    let database = xref.attribute("Database").unwrap_or("").trim().to_string();
    let id = xref.attribute("ID").unwrap_or("").trim().to_string();
    if database.is_empty() && id.is_empty() {
        None
    } else {
        Some(Xref { database, id })
    }
}

fn parse_comments(node: &Node) -> Vec<String> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Comment")
        .filter_map(|n| comment_text(&n))
        .collect()
}

fn comment_text(node: &Node) -> Option<String> {
    let text = node.text()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

// ─── Vocabulary mapping ──────────────────────────────────────────────

/// Map a GPML `ShapeType` to its canonical PVJSON name.
///
/// Unrecognized values pass through verbatim; the renderer's shape dispatch
/// is the single site that rejects them.
fn canonical_shape_name(shape_type: &str) -> String {
    match shape_type {
        "Rectangle" => "rectangle".to_string(),
        "RoundedRectangle" => "rounded-rectangle".to_string(),
        "Oval" => "ellipse".to_string(),
        "Hexagon" => "hexagon".to_string(),
        "Triangle" => "triangle".to_string(),
        "None" => "none".to_string(),
        other => other.to_string(),
    }
}

/// Map a GPML `ArrowHead` to its canonical PVJSON kind.
///
/// `Line` means no head. Values outside the known vocabulary map to the
/// `unknown` kind rather than failing the conversion.
fn canonical_arrow_head(arrow_head: &str) -> Option<String> {
    match arrow_head {
        "Line" => None,
        "Arrow" => Some("arrow".to_string()),
        "TBar" | "mim-inhibition" => Some("inhibition".to_string()),
        "mim-stimulation" => Some("stimulation".to_string()),
        "mim-binding" => Some("binding".to_string()),
        "mim-conversion" => Some("conversion".to_string()),
        _ => Some("unknown".to_string()),
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────

fn require_attr<'a>(
    node: &Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, ConvertError> {
    node.attribute(attribute)
        .ok_or(ConvertError::MissingAttribute { element, attribute })
}

fn require_attr_f64(
    node: &Node,
    element: &'static str,
    attribute: &'static str,
) -> Result<f64, ConvertError> {
    require_attr(node, element, attribute)?
        .trim()
        .parse()
        .map_err(|_| ConvertError::Parse {
            message: format!("attribute '{attribute}' on <{element}> is not a number"),
        })
}

fn require_child<'a, 'd>(
    node: &Node<'a, 'd>,
    element: &'static str,
    child: &'static str,
) -> Result<Node<'a, 'd>, ConvertError> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == child)
        .ok_or_else(|| ConvertError::Parse {
            message: format!("<{element}> is missing its <{child}> child"),
        })
}

fn attr_f64(node: &Node, attribute: &str) -> Option<f64> {
    node.attribute(attribute)?.trim().parse().ok()
}

fn attr_i64(node: &Node, attribute: &str) -> Option<i64> {
    node.attribute(attribute)?.trim().parse().ok()
}

/// Normalize a GPML color attribute to `#rrggbb` (or `none` for transparent).
fn color_attr(node: &Node, attribute: &str, default: &str) -> String {
    match node.attribute(attribute) {
        Some(color) => {
            let color = color.trim();
            if color.eq_ignore_ascii_case("transparent") {
                "none".to_string()
            } else if let Some(hex) = color.strip_prefix('#') {
                format!("#{}", hex.to_lowercase())
            } else {
                format!("#{}", color.to_lowercase())
            }
        }
        None => default.to_string(),
    }
}
