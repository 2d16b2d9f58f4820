//! End-to-end pipeline tests.

use anticoag_cli::{analyze, run, write_results};
use anticoag_core::config::{AnticoagConfig, LayoutConfig, NodeLayout};
use anticoag_core::errors::{error_code, AnticoagErrorCode, FitError, PipelineError, RenderError};

fn quiet_config() -> AnticoagConfig {
    let mut config = AnticoagConfig::default();
    config.render.open_viewer = Some(false);
    config
}

#[test]
fn default_analysis_matches_the_declared_model() {
    let analysis = analyze(&quiet_config()).unwrap();
    assert_eq!(analysis.patients, 500);
    assert_eq!(analysis.model.regressions().count(), 8);
    assert_eq!(analysis.report.len(), 8);
    assert_eq!(analysis.graph.node_count(), 7);
    assert_eq!(analysis.graph.edge_count(), 8);
}

#[test]
fn analysis_is_reproducible() {
    let a = analyze(&quiet_config()).unwrap();
    let b = analyze(&quiet_config()).unwrap();
    assert_eq!(a.model, b.model);
    assert_eq!(a.report, b.report);
}

#[test]
fn console_output_is_table_then_sentences() {
    let analysis = analyze(&quiet_config()).unwrap();
    let mut buf = Vec::new();
    write_results(&analysis, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("lval"));
    let header = lines
        .iter()
        .position(|l| *l == "Intuitive Presentation of Results:")
        .unwrap();
    // Header row, 8 paths, 2 residual variances, the collinearity footnote,
    // then a blank line.
    assert_eq!(header, 13);
    assert!(lines[11].starts_with("* not separately identified"));
    assert_eq!(lines[12], "");
    let sentences = &lines[header + 1..];
    assert_eq!(sentences.len(), 8);
    assert!(sentences.iter().all(|s| s.contains(" is influenced by ")));
}

#[test]
fn strict_fit_reports_singular_covariance() {
    let mut config = quiet_config();
    config.fit.pseudo_inverse = Some(false);
    let err = analyze(&config).unwrap_err();
    assert!(matches!(err, PipelineError::Fit(FitError::SingularCovariance { .. })));
    assert_eq!(err.error_code(), error_code::SINGULAR_COVARIANCE);
}

#[test]
fn malformed_model_text_is_a_model_error() {
    let mut config = quiet_config();
    config.model.spec = Some("MCA_Infarcts DOAC_Treatment".to_string());
    let err = analyze(&config).unwrap_err();
    assert_eq!(err.error_code(), error_code::MODEL_ERROR);
}

#[test]
fn layout_without_an_outcome_is_a_graph_error() {
    let mut config = quiet_config();
    let mut layout = LayoutConfig::default();
    layout.nodes.retain(|n| n.variable != "Hemorrhagic_Processes");
    layout.nodes.push(NodeLayout::new("Age", "Age", 3.0, 0.0));
    config.render.layout = Some(layout);
    let err = analyze(&config).unwrap_err();
    assert_eq!(err.error_code(), error_code::GRAPH_ERROR);
}

#[test]
fn unwritable_output_fails_after_printing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = quiet_config();
    config.render.output = Some(dir.path().join("missing/out.png").display().to_string());

    let mut buf = Vec::new();
    let err = run(&config, &mut buf).unwrap_err();
    assert!(matches!(err, PipelineError::Render(RenderError::Io { .. })));
    assert!(err.coded_message().starts_with("[RENDER_ERROR]"));
    assert!(String::from_utf8(buf).unwrap().contains("Intuitive Presentation of Results:"));
}

#[test]
fn full_run_writes_the_diagram() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sem.png");
    let mut config = quiet_config();
    config.render.output = Some(out.display().to_string());
    config.render.dpi = Some(60);

    let mut buf = Vec::new();
    let image = run(&config, &mut buf).unwrap();
    assert_eq!(image, out);

    let reader = png::Decoder::new(std::fs::File::open(&out).unwrap())
        .read_info()
        .unwrap();
    let info = reader.info();
    // 12 x 11 in at 60 dpi, 60 / 0.0254 px per metre.
    assert_eq!((info.width, info.height), (720, 660));
    let dims = info.pixel_dims.unwrap();
    assert_eq!((dims.xppu, dims.unit), (2362, png::Unit::Meter));
}
