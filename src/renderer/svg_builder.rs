//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Every emitter writes attributes in one fixed order and formats every
//! number with one decimal place, so the assembled document is byte-stable
//! across runs.

use super::constants::*;

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.1} {:.1} {:.1} {:.1}" width="{:.1}" height="{:.1}" font-family="{}">"#,
            self.min_x, self.min_y, self.width, self.height, self.width, self.height, FONT_FAMILY
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Append a pre-formatted element line (marker definitions).
    pub(super) fn raw(&mut self, element: String) {
        self.elements.push(element);
    }

    pub(super) fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    pub(super) fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            x, y, w, h, fill, stroke, stroke_width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            x, y, w, h, radius, fill, stroke, stroke_width
        ));
    }

    pub(super) fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.elements.push(format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            cx, cy, rx, ry, fill, stroke, stroke_width
        ));
    }

    pub(super) fn shape_path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            d, fill, stroke, stroke_width
        ));
    }

    /// An interaction path: no fill, optional dash pattern and arrow markers.
    pub(super) fn edge_path(
        &mut self,
        d: &str,
        stroke: &str,
        stroke_width: f64,
        dash: Option<&str>,
        marker_start: Option<&str>,
        marker_end: Option<&str>,
    ) {
        let mut el = format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}""#,
            d, stroke, stroke_width
        );
        if let Some(dash) = dash {
            el.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
        }
        if let Some(id) = marker_start {
            el.push_str(&format!(r#" marker-start="url(#{})""#, id));
        }
        if let Some(id) = marker_end {
            el.push_str(&format!(r#" marker-end="url(#{})""#, id));
        }
        el.push_str("/>");
        self.elements.push(el);
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, fill: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" fill="{}" text-anchor="middle">{}</text>"#,
            x,
            y,
            size,
            fill,
            escape_text(content)
        ));
    }
}

/// Escape text content for embedding in SVG markup.
pub(super) fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
