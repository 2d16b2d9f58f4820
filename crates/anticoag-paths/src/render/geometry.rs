//! Canvas sizing, layout-to-pixel mapping, and arrow/label placement.
//!
//! Marker sizes are areas in pt² and lengths are in pt, converted to pixels
//! at the configured DPI (`px = pt * dpi / 72`).

use anticoag_core::config::RenderConfig;
use anticoag_core::errors::RenderError;

/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_PX: u32 = 20_000;

/// Fraction of the canvas reserved around the plot area: left, right, top, bottom.
const MARGINS: (f64, f64, f64, f64) = (0.06, 0.06, 0.10, 0.06);

/// Padding added around the layout's bounding box, as a fraction of its span.
const DATA_PAD: f64 = 0.12;

pub type Point = (f64, f64);

/// Pixel dimensions of the output image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: u32,
}

impl Canvas {
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let (w_in, h_in) = config.effective_figure_inches();
        let dpi = config.effective_dpi();
        let width = (w_in * f64::from(dpi)).round();
        let height = (h_in * f64::from(dpi)).round();
        let limit = f64::from(MAX_CANVAS_PX);
        if !(width >= 1.0 && height >= 1.0 && width <= limit && height <= limit) {
            return Err(RenderError::InvalidCanvas(format!(
                "{w_in} x {h_in} in at {dpi} dpi gives {width} x {height} px"
            )));
        }
        Ok(Self {
            width_px: width as u32,
            height_px: height as u32,
            dpi,
        })
    }

    /// Resolution in pixels per metre, as recorded in the PNG `pHYs` chunk.
    pub fn pixels_per_meter(&self) -> u32 {
        (f64::from(self.dpi) / 0.0254).round() as u32
    }

    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * f64::from(self.dpi) / 72.0
    }

    /// Radius in pixels of a circular marker with the given area in pt².
    pub fn marker_radius_px(&self, area_pt2: f64) -> f64 {
        self.pt_to_px(area_pt2.max(0.0).sqrt() / 2.0)
    }
}

/// Affine map from layout units to pixels. Pixel `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    min_x: f64,
    max_y: f64,
    span_x: f64,
    span_y: f64,
}

impl Viewport {
    /// Fit the bounding box of `points` into the canvas plot area.
    pub fn fit(canvas: &Canvas, points: impl IntoIterator<Item = Point>) -> Self {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (x, y) in points {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        if !min.0.is_finite() {
            min = (0.0, 0.0);
            max = (0.0, 0.0);
        }
        let (min_x, span_x) = padded(min.0, max.0);
        let (min_y, span_y) = padded(min.1, max.1);

        let w = f64::from(canvas.width_px);
        let h = f64::from(canvas.height_px);
        let (ml, mr, mt, mb) = MARGINS;
        Self {
            left: w * ml,
            top: h * mt,
            width: w * (1.0 - ml - mr),
            height: h * (1.0 - mt - mb),
            min_x,
            max_y: min_y + span_y,
            span_x,
            span_y,
        }
    }

    pub fn to_pixel(&self, (x, y): Point) -> Point {
        (
            self.left + (x - self.min_x) / self.span_x * self.width,
            self.top + (self.max_y - y) / self.span_y * self.height,
        )
    }
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= f64::EPSILON {
        (lo - 0.5, 1.0)
    } else {
        (lo - span * DATA_PAD, span * (1.0 + 2.0 * DATA_PAD))
    }
}

/// A straight arrow: shaft plus a filled triangular head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub shaft: [Point; 2],
    /// Tip first, then the two base corners.
    pub head: [Point; 3],
}

/// Arrow from `from` to `to` (pixels), trimmed by `clip` at both ends so it
/// stops at the marker boundary. `None` when the markers overlap.
pub fn arrow(from: Point, to: Point, clip: f64, head_len: f64) -> Option<Arrow> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = dx.hypot(dy);
    if len <= 2.0 * clip || len <= f64::EPSILON {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    let start = (from.0 + ux * clip, from.1 + uy * clip);
    let tip = (to.0 - ux * clip, to.1 - uy * clip);

    let head_len = head_len.min(len - 2.0 * clip);
    let half = head_len * 0.3;
    let base = (tip.0 - ux * head_len, tip.1 - uy * head_len);
    let (nx, ny) = (-uy, ux);

    Some(Arrow {
        shaft: [start, base],
        head: [
            tip,
            (base.0 + nx * half, base.1 + ny * half),
            (base.0 - nx * half, base.1 - ny * half),
        ],
    })
}

/// Edge label anchor in layout units: both endpoints shifted down by
/// `offset`, then the point at `position` (0 = source, 1 = target).
pub fn label_anchor(source: Point, target: Point, offset: f64, position: f64) -> Point {
    let t = position.clamp(0.0, 1.0);
    (
        source.0 + (target.0 - source.0) * t,
        source.1 - offset + (target.1 - source.1) * t,
    )
}

/// Stroke width in pixels for a path coefficient: `2 * |weight|` pt, at least 1 px.
pub fn edge_width_px(canvas: &Canvas, weight: f64) -> u32 {
    let px = canvas.pt_to_px(2.0 * weight.abs()).round();
    if px.is_finite() && px >= 1.0 {
        px.min(f64::from(MAX_CANVAS_PX)) as u32
    } else {
        1
    }
}
