//! Reporting and diagram tests on the fitted anticoagulant model.

use std::fs::File;

use anticoag_cohort::synthesize;
use anticoag_core::config::{CohortConfig, LayoutConfig, RenderConfig};
use anticoag_core::constants::{DEFAULT_MODEL_SPEC, DOAC_TREATMENT, MCA_INFARCTS};
use anticoag_core::errors::RenderError;
use anticoag_paths::render::geometry;
use anticoag_paths::report::templates::HEADER;
use anticoag_paths::{describe_paths, render_png, PathGraph};
use anticoag_sem::{FittedModel, ModelSpec, RecursivePathEstimator, SemEstimator};
use proptest::prelude::*;

fn fitted() -> FittedModel {
    let data = synthesize(&CohortConfig::default()).unwrap().to_observed();
    RecursivePathEstimator::new()
        .fit(&ModelSpec::parse(DEFAULT_MODEL_SPEC).unwrap(), &data)
        .unwrap()
}

#[test]
fn one_sentence_per_regression_row() {
    let model = fitted();
    let report = describe_paths(&model);
    assert_eq!(report.header, HEADER);
    assert_eq!(report.len(), model.regressions().count());

    for (sentence, row) in report.sentences.iter().zip(model.regressions()) {
        assert_eq!(sentence.target, row.lval);
        assert_eq!(sentence.predictor, row.rval);
        assert_eq!(sentence.identified, row.identified);
        assert_eq!(
            sentence.text,
            format!(
                "{} is influenced by {} with an estimate of {:.2} (p={:.4})",
                row.lval, row.rval, row.estimate, row.p_value
            )
        );
    }

    let printed = report.to_string();
    let mut lines = printed.lines();
    assert_eq!(lines.next(), Some("Intuitive Presentation of Results:"));
    assert_eq!(lines.count(), 8);
}

#[test]
fn graph_has_every_layout_node_and_one_edge_per_path() {
    let model = fitted();
    let graph = PathGraph::from_fitted(&model, &LayoutConfig::default()).unwrap();
    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), model.regressions().count());

    let row = model
        .regressions()
        .find(|r| r.lval == MCA_INFARCTS && r.rval == DOAC_TREATMENT)
        .unwrap();
    let edge = graph.edge(DOAC_TREATMENT, MCA_INFARCTS).unwrap();
    assert_eq!(edge.weight, row.estimate);
    assert_eq!(edge.label, format!("{:.2}", row.estimate));
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let graph = PathGraph::from_fitted(&fitted(), &LayoutConfig::default()).unwrap();
    let config = RenderConfig {
        output: Some(dir.path().join("absent/diagram.png").display().to_string()),
        ..Default::default()
    };
    let err = render_png(&graph, &config).unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}

#[test]
fn renders_png_to_the_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("paths.png");
    let graph = PathGraph::from_fitted(&fitted(), &LayoutConfig::default()).unwrap();
    let config = RenderConfig {
        output: Some(out.display().to_string()),
        open_viewer: Some(false),
        ..Default::default()
    };
    let written = render_png(&graph, &config).unwrap();
    assert_eq!(written, out);

    let decoder = png::Decoder::new(File::open(&out).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (3600, 3300));
    let dims = info.pixel_dims.unwrap();
    assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
    assert_eq!(dims.unit, png::Unit::Meter);

    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels).unwrap();
    assert_eq!(frame.color_type, png::ColorType::Rgb);
    let rgb: Vec<&[u8]> = pixels[..frame.buffer_size()].chunks(3).collect();
    // Node markers are light blue, the background white.
    assert!(rgb.iter().any(|p| *p == [173, 216, 230]));
    assert!(rgb.iter().any(|p| *p == [255, 255, 255]));
}

proptest! {
    #[test]
    fn label_anchor_lies_on_the_shifted_segment(
        sx in -5.0f64..5.0, sy in -5.0f64..5.0,
        tx in -5.0f64..5.0, ty in -5.0f64..5.0,
        offset in 0.0f64..1.0, t in 0.0f64..=1.0,
    ) {
        let (x, y) = geometry::label_anchor((sx, sy), (tx, ty), offset, t);
        prop_assert!((x - (sx + (tx - sx) * t)).abs() < 1e-9);
        prop_assert!((y - (sy - offset + (ty - sy) * t)).abs() < 1e-9);
    }

    #[test]
    fn arrow_tip_is_clip_distance_from_target(
        fx in 0.0f64..1000.0, fy in 0.0f64..1000.0,
        tx in 0.0f64..1000.0, ty in 0.0f64..1000.0,
        clip in 1.0f64..50.0, head in 1.0f64..80.0,
    ) {
        let len = (tx - fx).hypot(ty - fy);
        match geometry::arrow((fx, fy), (tx, ty), clip, head) {
            None => prop_assert!(len <= 2.0 * clip),
            Some(a) => {
                let tip = a.head[0];
                prop_assert!(((tip.0 - tx).hypot(tip.1 - ty) - clip).abs() < 1e-6);
                let start = a.shaft[0];
                prop_assert!(((start.0 - fx).hypot(start.1 - fy) - clip).abs() < 1e-6);
            }
        }
    }
}
