//! Pathway renderer — converts a PVJSON document into SVG output.
//!
//! The renderer is independent of the GPML stages: it consumes the canonical
//! PVJSON form, resolves each entity's visual style, computes geometry per
//! shape kind, lays out label text, defines arrow markers once per distinct
//! kind and color, and emits a byte-stable SVG document.

mod constants;
mod markers;
mod shapes;
mod svg_builder;
mod text;

use crate::error::RenderError;
use crate::pvjson::{PvjsonDocument, PvjsonEntity};

use constants::*;
use markers::{marker_id, MarkerTable};
use shapes::draw_shape;
use svg_builder::SvgBuilder;
use text::draw_text_block;

/// Rendering tunables. Unset options use the documented defaults.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Margin added around the pathway's bounding box
    pub margin: f64,
    /// Background color; `None` leaves the canvas transparent
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            background: Some(DEFAULT_BACKGROUND.to_string()),
        }
    }
}

/// Render a PVJSON document into a complete SVG string.
pub fn render_pvjson(
    document: &PvjsonDocument,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    for entity in &document.entities {
        if !matches!(
            entity.kind.as_str(),
            "DataNode" | "Interaction" | "Anchor" | "Group" | "Label" | "Shape"
        ) {
            return Err(RenderError::InvalidJson {
                message: format!(
                    "unknown entity kind '{}' on '{}'",
                    entity.kind, entity.id
                ),
            });
        }
    }

    let margin = options.margin;
    let width = document.width + margin * 2.0;
    let height = document.height + margin * 2.0;
    let mut svg = SvgBuilder::new(-margin, -margin, width, height);

    // Every marker definition is emitted once, before any element uses it
    let markers = MarkerTable::collect(&document.entities)?;
    markers.emit_defs(&mut svg);

    if let Some(background) = &options.background {
        svg.fill_rect(-margin, -margin, width, height, background);
    }

    // Groups render behind their members
    let mut groups: Vec<&PvjsonEntity> = document
        .entities
        .iter()
        .filter(|e| e.kind == "Group")
        .collect();
    groups.sort_by_key(|e| e.z_order.unwrap_or(0));
    for group in groups {
        draw_group(&mut svg, group);
    }

    // Everything else in (zOrder, document order); anchors are addressable
    // for edge paths but never drawn
    let mut drawable: Vec<&PvjsonEntity> = document
        .entities
        .iter()
        .filter(|e| e.kind != "Group" && e.kind != "Anchor")
        .collect();
    drawable.sort_by_key(|e| e.z_order.unwrap_or(0));

    for entity in drawable {
        match entity.kind.as_str() {
            "DataNode" | "Shape" => draw_node(&mut svg, entity)?,
            "Label" => draw_label(&mut svg, entity),
            "Interaction" => draw_edge(&mut svg, entity),
            _ => {}
        }
    }

    Ok(svg.build())
}

// ─── Element drawing ─────────────────────────────────────────────────

fn draw_group(svg: &mut SvgBuilder, entity: &PvjsonEntity) {
    svg.rounded_rect(
        entity.x.unwrap_or(0.0),
        entity.y.unwrap_or(0.0),
        entity.width.unwrap_or(0.0),
        entity.height.unwrap_or(0.0),
        GROUP_RADIUS,
        GROUP_FILL,
        GROUP_STROKE,
        GROUP_STROKE_WIDTH,
    );
}

fn draw_node(svg: &mut SvgBuilder, entity: &PvjsonEntity) -> Result<(), RenderError> {
    let x = entity.x.unwrap_or(0.0);
    let y = entity.y.unwrap_or(0.0);
    let width = entity.width.unwrap_or(0.0);
    let height = entity.height.unwrap_or(0.0);
    let stroke = entity.color.as_deref().unwrap_or(DEFAULT_STROKE);

    draw_shape(
        svg,
        &entity.id,
        entity.shape.as_deref().unwrap_or("rectangle"),
        x,
        y,
        width,
        height,
        entity.fill_color.as_deref().unwrap_or(DEFAULT_FILL),
        stroke,
        entity.line_width.unwrap_or(DEFAULT_LINE_WIDTH),
    )?;

    if let Some(content) = &entity.text_content {
        draw_text_block(
            svg,
            x + width / 2.0,
            y + height / 2.0,
            width,
            content,
            entity.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            stroke,
        );
    }

    Ok(())
}

fn draw_label(svg: &mut SvgBuilder, entity: &PvjsonEntity) {
    if let Some(content) = &entity.text_content {
        let width = entity.width.unwrap_or(0.0);
        draw_text_block(
            svg,
            entity.x.unwrap_or(0.0) + width / 2.0,
            entity.y.unwrap_or(0.0) + entity.height.unwrap_or(0.0) / 2.0,
            width,
            content,
            entity.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            entity.color.as_deref().unwrap_or(DEFAULT_STROKE),
        );
    }
}

fn draw_edge(svg: &mut SvgBuilder, entity: &PvjsonEntity) {
    let points = match &entity.points {
        Some(points) if !points.is_empty() => points,
        _ => return,
    };

    let mut d = format!("M{:.1},{:.1}", points[0].x, points[0].y);
    for point in &points[1..] {
        d.push_str(&format!(" L{:.1},{:.1}", point.x, point.y));
    }

    let stroke = entity.color.as_deref().unwrap_or(DEFAULT_STROKE);
    let dash = (entity.line_style.as_deref() == Some("dashed")).then_some(DASH_PATTERN);
    let marker_start = entity
        .marker_start
        .as_deref()
        .map(|kind| marker_id(kind, stroke));
    let marker_end = entity
        .marker_end
        .as_deref()
        .map(|kind| marker_id(kind, stroke));

    svg.edge_path(
        &d,
        stroke,
        entity.line_width.unwrap_or(DEFAULT_LINE_WIDTH),
        dash,
        marker_start.as_deref(),
        marker_end.as_deref(),
    );
}
