//! Shared constants for the pathway renderer (all in SVG user units).

// ── View box ────────────────────────────────────────────────────────
pub(super) const DEFAULT_MARGIN: f64 = 10.0;
pub(super) const DEFAULT_BACKGROUND: &str = "white";

// ── Text ────────────────────────────────────────────────────────────
pub(super) const FONT_FAMILY: &str = "Arial, sans-serif";
pub(super) const DEFAULT_FONT_SIZE: f64 = 10.0;
// Average character width as a fraction of font size; wrapping uses this
// fixed estimate, never live font metrics
pub(super) const CHAR_WIDTH_FACTOR: f64 = 0.6;
pub(super) const LINE_HEIGHT_FACTOR: f64 = 1.2;
pub(super) const BASELINE_SHIFT_FACTOR: f64 = 0.35;

// ── Strokes & fills ─────────────────────────────────────────────────
pub(super) const DEFAULT_STROKE: &str = "#000000";
pub(super) const DEFAULT_FILL: &str = "#ffffff";
pub(super) const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub(super) const DASH_PATTERN: &str = "6.0,3.0";
pub(super) const ROUND_RECT_RADIUS: f64 = 6.0;

// ── Groups ──────────────────────────────────────────────────────────
pub(super) const GROUP_FILL: &str = "#f2f4f7";
pub(super) const GROUP_STROKE: &str = "#808080";
pub(super) const GROUP_STROKE_WIDTH: f64 = 1.0;
pub(super) const GROUP_RADIUS: f64 = 8.0;

// ── Arrow markers ───────────────────────────────────────────────────
pub(super) const MARKER_SIZE: f64 = 12.0;
