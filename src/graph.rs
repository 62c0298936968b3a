//! Graph model builder — resolves references and computes geometry.
//!
//! Consumes the parsed element list plus external metadata and yields an
//! immutable `PathwayGraph`: every identifier checked for uniqueness, every
//! reference resolved against an explicit index, GPML center geometry
//! re-expressed as top-left boxes, anchor and group geometry computed, and
//! the overall bounding box fixed. Source coordinates are preserved verbatim;
//! there is no re-origin translation.

use std::collections::HashMap;

use crate::error::ConvertError;
use crate::model::{self, Element, LineStyle, PathwayDocument, PathwayMetadata, Xref};

/// Padding added around a group's member boxes, on every side.
const GROUP_PADDING: f64 = 8.0;

/// An immutable, fully resolved pathway graph.
#[derive(Debug, Clone)]
pub struct PathwayGraph {
    pub identifier: String,
    pub pathway_version: String,
    pub organism: String,
    pub name: String,
    /// Overall bounding box; the declared canvas size when the source
    /// carries one, else the maximum content extent
    pub width: f64,
    pub height: f64,
    pub comments: Vec<String>,
    /// Resolved entities in document order; each interaction's anchors
    /// immediately follow it
    pub entities: Vec<Entity>,
}

/// A resolved pathway entity. One variant per element kind.
#[derive(Debug, Clone)]
pub enum Entity {
    DataNode(NodeEntity),
    Interaction(EdgeEntity),
    Anchor(AnchorEntity),
    Group(GroupEntity),
    Label(LabelEntity),
    Shape(ShapeEntity),
}

#[derive(Debug, Clone)]
pub struct NodeEntity {
    pub id: String,
    pub text: String,
    pub entity_type: String,
    /// Top-left corner
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub fill_color: String,
    pub line_width: f64,
    pub font_size: f64,
    pub shape: String,
    pub z_order: i64,
    /// Entity id of the owning group, when any
    pub is_part_of: Option<String>,
    pub xref: Option<Xref>,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EdgeEntity {
    pub id: String,
    pub points: Vec<EdgePoint>,
    pub color: String,
    pub line_width: f64,
    pub line_style: LineStyle,
    pub marker_start: Option<String>,
    pub marker_end: Option<String>,
    pub z_order: i64,
    pub is_part_of: Option<String>,
    pub xref: Option<Xref>,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EdgePoint {
    pub x: f64,
    pub y: f64,
    pub attached_to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnchorEntity {
    pub id: String,
    /// Entity id of the owning interaction
    pub on: String,
    pub position: f64,
    /// Interpolated position along the owning interaction's path
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct GroupEntity {
    pub id: String,
    pub style: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_order: i64,
    pub is_part_of: Option<String>,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LabelEntity {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub font_size: f64,
    pub z_order: i64,
    pub is_part_of: Option<String>,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShapeEntity {
    pub id: String,
    pub text: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub fill_color: String,
    pub line_width: f64,
    pub font_size: f64,
    pub shape: String,
    pub z_order: i64,
    pub is_part_of: Option<String>,
    pub comments: Vec<String>,
}

/// Build an immutable PathwayGraph from a parsed document and its metadata.
pub fn build(
    document: &PathwayDocument,
    metadata: &PathwayMetadata,
) -> Result<PathwayGraph, ConvertError> {
    let ids = assign_ids(document);
    let index = index_ids(document, &ids)?;
    let group_ids = index_groups(document);

    check_coordinates(document, &ids)?;
    resolve_references(document, &ids, &index, &group_ids)?;

    let group_boxes = compute_group_boxes(document)?;
    let (width, height) = bounding_box(document, &group_boxes);

    let entities = materialize(document, &ids, &group_ids, &group_boxes);

    Ok(PathwayGraph {
        identifier: metadata.identifier.clone(),
        pathway_version: metadata.version.clone(),
        organism: metadata.organism.clone(),
        name: document.name.clone(),
        width,
        height,
        comments: document.comments.clone(),
        entities,
    })
}

// ─── Identifier assignment & index ───────────────────────────────────

/// Effective entity id per element, in document order. Labels and shapes
/// without a source `GraphId` get a deterministic per-kind fallback; a
/// group's entity id is its `GraphId` when present, else its `GroupId`.
fn assign_ids(document: &PathwayDocument) -> Vec<String> {
    let mut ids = Vec::with_capacity(document.elements.len());
    let mut labels = 0usize;
    let mut shapes = 0usize;

    for element in &document.elements {
        let id = match element {
            Element::DataNode(n) => n.graph_id.clone(),
            Element::Interaction(e) => e.graph_id.clone(),
            Element::Label(l) => {
                labels += 1;
                l.graph_id
                    .clone()
                    .unwrap_or_else(|| format!("label-{labels}"))
            }
            Element::Shape(s) => {
                shapes += 1;
                s.graph_id
                    .clone()
                    .unwrap_or_else(|| format!("shape-{shapes}"))
            }
            Element::Group(g) => g.graph_id.clone().unwrap_or_else(|| g.group_id.clone()),
        };
        ids.push(id);
    }

    ids
}

/// Index every stable identifier; any repeat is a build failure.
fn index_ids<'a>(
    document: &'a PathwayDocument,
    ids: &'a [String],
) -> Result<HashMap<&'a str, usize>, ConvertError> {
    let mut index = HashMap::new();

    let mut insert = |id: &'a str, element: usize| -> Result<(), ConvertError> {
        if index.insert(id, element).is_some() {
            return Err(ConvertError::DuplicateId { id: id.to_string() });
        }
        Ok(())
    };

    for (i, element) in document.elements.iter().enumerate() {
        insert(&ids[i], i)?;
        match element {
            Element::Interaction(edge) => {
                for anchor in &edge.anchors {
                    insert(&anchor.graph_id, i)?;
                }
            }
            Element::Group(group) => {
                // A group's GroupId and GraphId are both stable identifiers
                if group.graph_id.is_some() {
                    insert(&group.group_id, i)?;
                }
            }
            _ => {}
        }
    }

    Ok(index)
}

/// Map each `GroupId` to the owning group's entity id.
fn index_groups(document: &PathwayDocument) -> HashMap<&str, String> {
    document
        .elements
        .iter()
        .filter_map(|element| match element {
            Element::Group(g) => Some((
                g.group_id.as_str(),
                g.graph_id.clone().unwrap_or_else(|| g.group_id.clone()),
            )),
            _ => None,
        })
        .collect()
}

// ─── Validation ──────────────────────────────────────────────────────

fn check_coordinates(document: &PathwayDocument, ids: &[String]) -> Result<(), ConvertError> {
    for (i, element) in document.elements.iter().enumerate() {
        let negative = match element {
            Element::DataNode(n) => n.center_x < 0.0 || n.center_y < 0.0,
            Element::Label(l) => l.center_x < 0.0 || l.center_y < 0.0,
            Element::Shape(s) => s.center_x < 0.0 || s.center_y < 0.0,
            Element::Interaction(e) => e.points.iter().any(|p| p.x < 0.0 || p.y < 0.0),
            Element::Group(_) => false,
        };
        if negative {
            return Err(ConvertError::NegativeCoordinate {
                id: ids[i].clone(),
            });
        }
    }
    Ok(())
}

fn resolve_references(
    document: &PathwayDocument,
    ids: &[String],
    index: &HashMap<&str, usize>,
    group_ids: &HashMap<&str, String>,
) -> Result<(), ConvertError> {
    let dangling = |reference: &str, referrer: &str| ConvertError::DanglingReference {
        reference: reference.to_string(),
        referrer: referrer.to_string(),
    };

    for (i, element) in document.elements.iter().enumerate() {
        let group_ref = match element {
            Element::DataNode(n) => n.group_ref.as_deref(),
            Element::Interaction(e) => {
                for point in &e.points {
                    if let Some(target) = &point.graph_ref {
                        if !index.contains_key(target.as_str()) {
                            return Err(dangling(target, &ids[i]));
                        }
                    }
                }
                e.group_ref.as_deref()
            }
            Element::Label(l) => l.group_ref.as_deref(),
            Element::Shape(s) => s.group_ref.as_deref(),
            Element::Group(g) => g.group_ref.as_deref(),
        };

        if let Some(target) = group_ref {
            if !group_ids.contains_key(target) {
                return Err(dangling(target, &ids[i]));
            }
        }
    }

    Ok(())
}

// ─── Geometry ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    fn union(self, other: Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Bounds {
            x,
            y,
            width: (self.x + self.width).max(other.x + other.width) - x,
            height: (self.y + self.height).max(other.y + other.height) - y,
        }
    }
}

fn element_box(element: &Element) -> Option<Bounds> {
    match element {
        Element::DataNode(n) => Some(Bounds {
            x: n.center_x - n.width / 2.0,
            y: n.center_y - n.height / 2.0,
            width: n.width,
            height: n.height,
        }),
        Element::Label(l) => Some(Bounds {
            x: l.center_x - l.width / 2.0,
            y: l.center_y - l.height / 2.0,
            width: l.width,
            height: l.height,
        }),
        Element::Shape(s) => Some(Bounds {
            x: s.center_x - s.width / 2.0,
            y: s.center_y - s.height / 2.0,
            width: s.width,
            height: s.height,
        }),
        Element::Interaction(e) => {
            let min_x = e.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let min_y = e.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max_x = e.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let max_y = e.points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            Some(Bounds {
                x: min_x,
                y: min_y,
                width: max_x - min_x,
                height: max_y - min_y,
            })
        }
        Element::Group(_) => None,
    }
}

/// Compute the box of every group: the union of its members' boxes plus a
/// fixed padding. Nested groups resolve recursively; a membership cycle is a
/// build failure, and a group without members gets a zero box at the origin.
fn compute_group_boxes(
    document: &PathwayDocument,
) -> Result<HashMap<String, Bounds>, ConvertError> {
    // group_id → (member element indexes, member group_ids)
    let mut members: HashMap<&str, (Vec<usize>, Vec<&str>)> = HashMap::new();
    for element in &document.elements {
        if let Element::Group(g) = element {
            members.entry(&g.group_id).or_default();
        }
    }
    for (i, element) in document.elements.iter().enumerate() {
        let group_ref = match element {
            Element::DataNode(n) => n.group_ref.as_deref(),
            Element::Interaction(e) => e.group_ref.as_deref(),
            Element::Label(l) => l.group_ref.as_deref(),
            Element::Shape(s) => s.group_ref.as_deref(),
            Element::Group(g) => {
                if let Some(parent) = g.group_ref.as_deref() {
                    if let Some((_, nested)) = members.get_mut(parent) {
                        nested.push(&g.group_id);
                    }
                }
                None
            }
        };
        if let Some(group_id) = group_ref {
            if let Some((leaves, _)) = members.get_mut(group_id) {
                leaves.push(i);
            }
        }
    }

    fn resolve(
        group_id: &str,
        document: &PathwayDocument,
        members: &HashMap<&str, (Vec<usize>, Vec<&str>)>,
        resolved: &mut HashMap<String, Bounds>,
        stack: &mut Vec<String>,
    ) -> Result<Bounds, ConvertError> {
        if let Some(done) = resolved.get(group_id) {
            return Ok(*done);
        }
        if stack.iter().any(|g| g == group_id) {
            return Err(ConvertError::GroupCycle {
                id: group_id.to_string(),
            });
        }
        stack.push(group_id.to_string());

        let (leaves, nested) = &members[group_id];
        let mut combined: Option<Bounds> = None;
        for &i in leaves {
            if let Some(b) = element_box(&document.elements[i]) {
                combined = Some(combined.map_or(b, |c| c.union(b)));
            }
        }
        for child in nested {
            let b = resolve(child, document, members, resolved, stack)?;
            combined = Some(combined.map_or(b, |c| c.union(b)));
        }

        stack.pop();

        let padded = match combined {
            Some(b) => Bounds {
                x: b.x - GROUP_PADDING,
                y: b.y - GROUP_PADDING,
                width: b.width + GROUP_PADDING * 2.0,
                height: b.height + GROUP_PADDING * 2.0,
            },
            None => Bounds {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        };
        resolved.insert(group_id.to_string(), padded);
        Ok(padded)
    }

    let mut resolved = HashMap::new();
    for element in &document.elements {
        if let Element::Group(g) = element {
            let mut stack = Vec::new();
            resolve(&g.group_id, document, &members, &mut resolved, &mut stack)?;
        }
    }

    Ok(resolved)
}

fn bounding_box(document: &PathwayDocument, group_boxes: &HashMap<String, Bounds>) -> (f64, f64) {
    if let (Some(w), Some(h)) = (document.board_width, document.board_height) {
        return (w, h);
    }

    let mut max_x = 0.0f64;
    let mut max_y = 0.0f64;
    for element in &document.elements {
        let b = match element {
            Element::Group(g) => group_boxes.get(&g.group_id).copied(),
            other => element_box(other),
        };
        if let Some(b) = b {
            max_x = max_x.max(b.x + b.width);
            max_y = max_y.max(b.y + b.height);
        }
    }
    (max_x, max_y)
}

/// The point at `position` of a polyline's total arc length.
fn point_along(points: &[model::EdgePoint], position: f64) -> (f64, f64) {
    let total: f64 = points
        .windows(2)
        .map(|w| ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt())
        .sum();
    if total <= 0.0 {
        return (points[0].x, points[0].y);
    }

    let mut remaining = position.clamp(0.0, 1.0) * total;
    for w in points.windows(2) {
        let segment = ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt();
        if segment >= remaining {
            let t = if segment > 0.0 { remaining / segment } else { 0.0 };
            return (w[0].x + (w[1].x - w[0].x) * t, w[0].y + (w[1].y - w[0].y) * t);
        }
        remaining -= segment;
    }

    let last = &points[points.len() - 1];
    (last.x, last.y)
}

// ─── Materialization ─────────────────────────────────────────────────

fn materialize(
    document: &PathwayDocument,
    ids: &[String],
    group_ids: &HashMap<&str, String>,
    group_boxes: &HashMap<String, Bounds>,
) -> Vec<Entity> {
    let owner = |group_ref: &Option<String>| -> Option<String> {
        group_ref
            .as_deref()
            .and_then(|g| group_ids.get(g).cloned())
    };

    let mut entities = Vec::new();
    for (i, element) in document.elements.iter().enumerate() {
        match element {
            Element::DataNode(n) => entities.push(Entity::DataNode(NodeEntity {
                id: ids[i].clone(),
                text: n.text_label.clone(),
                entity_type: n.node_type.clone(),
                x: n.center_x - n.width / 2.0,
                y: n.center_y - n.height / 2.0,
                width: n.width,
                height: n.height,
                color: n.color.clone(),
                fill_color: n.fill_color.clone(),
                line_width: n.line_width,
                font_size: n.font_size,
                shape: n.shape.clone(),
                z_order: n.z_order,
                is_part_of: owner(&n.group_ref),
                xref: n.xref.clone(),
                comments: n.comments.clone(),
            })),
            Element::Interaction(e) => {
                entities.push(Entity::Interaction(EdgeEntity {
                    id: ids[i].clone(),
                    points: e
                        .points
                        .iter()
                        .map(|p| EdgePoint {
                            x: p.x,
                            y: p.y,
                            attached_to: p.graph_ref.clone(),
                        })
                        .collect(),
                    color: e.color.clone(),
                    line_width: e.line_width,
                    line_style: e.line_style,
                    marker_start: e.points.first().and_then(|p| p.arrow_head.clone()),
                    marker_end: e.points.last().and_then(|p| p.arrow_head.clone()),
                    z_order: e.z_order,
                    is_part_of: owner(&e.group_ref),
                    xref: e.xref.clone(),
                    comments: e.comments.clone(),
                }));
                for anchor in &e.anchors {
                    let (x, y) = point_along(&e.points, anchor.position);
                    entities.push(Entity::Anchor(AnchorEntity {
                        id: anchor.graph_id.clone(),
                        on: ids[i].clone(),
                        position: anchor.position,
                        x,
                        y,
                    }));
                }
            }
            Element::Label(l) => entities.push(Entity::Label(LabelEntity {
                id: ids[i].clone(),
                text: l.text_label.clone(),
                x: l.center_x - l.width / 2.0,
                y: l.center_y - l.height / 2.0,
                width: l.width,
                height: l.height,
                color: l.color.clone(),
                font_size: l.font_size,
                z_order: l.z_order,
                is_part_of: owner(&l.group_ref),
                comments: l.comments.clone(),
            })),
            Element::Shape(s) => entities.push(Entity::Shape(ShapeEntity {
                id: ids[i].clone(),
                text: s.text_label.clone(),
                x: s.center_x - s.width / 2.0,
                y: s.center_y - s.height / 2.0,
                width: s.width,
                height: s.height,
                color: s.color.clone(),
                fill_color: s.fill_color.clone(),
                line_width: s.line_width,
                font_size: s.font_size,
                shape: s.shape.clone(),
                z_order: s.z_order,
                is_part_of: owner(&s.group_ref),
                comments: s.comments.clone(),
            })),
            Element::Group(g) => {
                let b = group_boxes[&g.group_id];
                entities.push(Entity::Group(GroupEntity {
                    id: ids[i].clone(),
                    style: g.style.clone(),
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    height: b.height,
                    z_order: 0,
                    is_part_of: owner(&g.group_ref),
                    comments: g.comments.clone(),
                }));
            }
        }
    }

    entities
}
