//! PNG path diagram: drawn into an RGB buffer with the plotters bitmap
//! backend, then encoded with `png` so the file records its DPI.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anticoag_core::config::RenderConfig;
use anticoag_core::errors::RenderError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::geometry::{self, Canvas, Point, Viewport};
use crate::graph::PathGraph;

const NODE_FILL: RGBColor = RGBColor(173, 216, 230);
const EDGE_COLOR: RGBColor = RGBColor(128, 128, 128);

const NODE_LABEL_PT: f64 = 12.0;
const EDGE_LABEL_PT: f64 = 10.0;
const TITLE_PT: f64 = 18.0;
/// Padding around edge labels inside their white box.
const LABEL_BOX_PAD_PT: f64 = 3.0;

/// Draw `graph` to the configured output path and return that path.
pub fn render_png(graph: &PathGraph, config: &RenderConfig) -> Result<PathBuf, RenderError> {
    let started = Instant::now();
    let canvas = Canvas::from_config(config)?;
    let path = PathBuf::from(config.effective_output());
    check_parent(&path)?;

    let mut pixels = vec![0u8; canvas.width_px as usize * canvas.height_px as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (canvas.width_px, canvas.height_px))
            .into_drawing_area();
        draw(&root, graph, config, &canvas)?;
        root.present().map_err(backend)?;
    }
    write_png(&path, &pixels, &canvas).map_err(|e| RenderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(
        path = %path.display(),
        width_px = canvas.width_px,
        height_px = canvas.height_px,
        dpi = canvas.dpi,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "path diagram written"
    );
    Ok(path)
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    graph: &PathGraph,
    config: &RenderConfig,
    canvas: &Canvas,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(backend)?;

    let viewport = Viewport::fit(canvas, graph.nodes().map(|n| (n.x, n.y)));
    let px = |p: Point| round(viewport.to_pixel(p));

    // Edges first so nodes cover the shaft ends.
    let clip = canvas.marker_radius_px(config.effective_edge_node_size());
    let head = canvas.pt_to_px(config.effective_arrow_size());
    for (source, target, edge) in graph.edges() {
        let from = viewport.to_pixel((source.x, source.y));
        let to = viewport.to_pixel((target.x, target.y));
        let Some(arrow) = geometry::arrow(from, to, clip, head) else {
            tracing::debug!(
                source = %source.variable,
                target = %target.variable,
                "markers overlap, arrow skipped"
            );
            continue;
        };
        let width = geometry::edge_width_px(canvas, edge.weight);
        root.draw(&PathElement::new(
            arrow.shaft.iter().map(|&p| round(p)).collect::<Vec<_>>(),
            EDGE_COLOR.stroke_width(width),
        ))
        .map_err(backend)?;
        root.draw(&Polygon::new(
            arrow.head.iter().map(|&p| round(p)).collect::<Vec<_>>(),
            EDGE_COLOR.filled(),
        ))
        .map_err(backend)?;
    }

    let radius = canvas.marker_radius_px(config.effective_node_size()).round() as u32;
    for node in graph.nodes() {
        root.draw(&Circle::new(px((node.x, node.y)), radius, NODE_FILL.filled()))
            .map_err(backend)?;
    }

    let node_font = text_style(canvas, NODE_LABEL_PT, &BLACK);
    for node in graph.nodes() {
        root.draw_text(&node.label, &node_font, px((node.x, node.y)))
            .map_err(backend)?;
    }

    let edge_font = text_style(canvas, EDGE_LABEL_PT, &RED);
    let pad = canvas.pt_to_px(LABEL_BOX_PAD_PT).round() as i32;
    let offset = config.effective_label_offset();
    let position = config.effective_label_position();
    for (source, target, edge) in graph.edges() {
        let anchor = px(geometry::label_anchor(
            (source.x, source.y),
            (target.x, target.y),
            offset,
            position,
        ));
        let (w, h) = root
            .estimate_text_size(&edge.label, &edge_font)
            .map_err(backend)?;
        let (hw, hh) = (w as i32 / 2 + pad, h as i32 / 2 + pad);
        root.draw(&Rectangle::new(
            [(anchor.0 - hw, anchor.1 - hh), (anchor.0 + hw, anchor.1 + hh)],
            WHITE.filled(),
        ))
        .map_err(backend)?;
        root.draw_text(&edge.label, &edge_font, anchor)
            .map_err(backend)?;
    }

    let title_font = text_style(canvas, TITLE_PT, &BLACK);
    let title_y = (f64::from(canvas.height_px) * 0.05).round() as i32;
    root.draw_text(
        config.effective_title(),
        &title_font,
        (canvas.width_px as i32 / 2, title_y),
    )
    .map_err(backend)?;
    Ok(())
}

/// Encode an RGB buffer as 8-bit PNG with the canvas DPI in the `pHYs` chunk.
fn write_png(path: &Path, pixels: &[u8], canvas: &Canvas) -> Result<(), ::png::EncodingError> {
    let file = File::create(path)?;
    let mut encoder = ::png::Encoder::new(BufWriter::new(file), canvas.width_px, canvas.height_px);
    encoder.set_color(::png::ColorType::Rgb);
    encoder.set_depth(::png::BitDepth::Eight);
    let ppm = canvas.pixels_per_meter();
    encoder.set_pixel_dims(Some(::png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: ::png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()
}

fn text_style(canvas: &Canvas, pt: f64, color: &RGBColor) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, canvas.pt_to_px(pt), FontStyle::Normal)
        .color(color)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn round((x, y): Point) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Fail before drawing when the output directory is missing.
fn check_parent(path: &Path) -> Result<(), RenderError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(RenderError::Io {
                path: path.display().to_string(),
                message: format!("directory {} does not exist", parent.display()),
            })
        }
        _ => Ok(()),
    }
}
