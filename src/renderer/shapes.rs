//! Shape geometry — maps a PVJSON shape kind onto an SVG primitive.
//!
//! The closed shape vocabulary lives here; an unrecognized kind surfaces as
//! a RenderError at this single dispatch site.

use crate::error::RenderError;

use super::constants::*;
use super::svg_builder::SvgBuilder;

/// The closed set of drawable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Ellipse,
    Hexagon,
    Triangle,
    None,
}

impl ShapeKind {
    pub(super) fn from_name(name: &str) -> Option<ShapeKind> {
        match name {
            "rectangle" => Some(ShapeKind::Rectangle),
            "rounded-rectangle" => Some(ShapeKind::RoundedRectangle),
            "ellipse" => Some(ShapeKind::Ellipse),
            "hexagon" => Some(ShapeKind::Hexagon),
            "triangle" => Some(ShapeKind::Triangle),
            "none" => Some(ShapeKind::None),
            _ => None,
        }
    }
}

/// Draw one shape primitive into `svg`.
#[allow(clippy::too_many_arguments)]
pub(super) fn draw_shape(
    svg: &mut SvgBuilder,
    id: &str,
    kind_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: &str,
    stroke: &str,
    stroke_width: f64,
) -> Result<(), RenderError> {
    let kind = ShapeKind::from_name(kind_name).ok_or_else(|| RenderError::UnknownShape {
        id: id.to_string(),
        kind: kind_name.to_string(),
    })?;

    match kind {
        ShapeKind::Rectangle => svg.rect(x, y, width, height, fill, stroke, stroke_width),
        ShapeKind::RoundedRectangle => svg.rounded_rect(
            x,
            y,
            width,
            height,
            ROUND_RECT_RADIUS,
            fill,
            stroke,
            stroke_width,
        ),
        ShapeKind::Ellipse => svg.ellipse(
            x + width / 2.0,
            y + height / 2.0,
            width / 2.0,
            height / 2.0,
            fill,
            stroke,
            stroke_width,
        ),
        ShapeKind::Hexagon => {
            let d = format!(
                "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Z",
                x + width * 0.25,
                y,
                x + width * 0.75,
                y,
                x + width,
                y + height / 2.0,
                x + width * 0.75,
                y + height,
                x + width * 0.25,
                y + height,
                x,
                y + height / 2.0,
            );
            svg.shape_path(&d, fill, stroke, stroke_width);
        }
        ShapeKind::Triangle => {
            let d = format!(
                "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Z",
                x,
                y + height,
                x + width / 2.0,
                y,
                x + width,
                y + height,
            );
            svg.shape_path(&d, fill, stroke, stroke_width);
        }
        ShapeKind::None => {}
    }

    Ok(())
}
