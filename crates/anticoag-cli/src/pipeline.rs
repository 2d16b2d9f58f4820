//! Synthesize the cohort, fit the path model, report, draw, and show.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anticoag_cohort::synthesize;
use anticoag_core::config::AnticoagConfig;
use anticoag_core::errors::PipelineError;
use anticoag_paths::{describe_paths, render_png, show, PathGraph, PathReport};
use anticoag_sem::{FittedModel, ModelSpec, RecursivePathEstimator, SemEstimator};

/// Everything computed before any output is produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub patients: usize,
    pub model: FittedModel,
    pub report: PathReport,
    pub graph: PathGraph,
}

/// Synthesize, fit, and build the report and path graph.
pub fn analyze(config: &AnticoagConfig) -> Result<Analysis, PipelineError> {
    let cohort = synthesize(&config.cohort)?;
    for summary in cohort.summarize() {
        tracing::debug!(
            column = %summary.name,
            mean = summary.mean,
            std = summary.std,
            min = summary.min,
            max = summary.max,
            "cohort column"
        );
    }

    let spec = ModelSpec::parse(config.model.effective_spec())?;
    let estimator = RecursivePathEstimator::from_config(&config.fit);
    let model = estimator.fit(&spec, &cohort.to_observed())?;
    tracing::info!(
        estimator = estimator.name(),
        log_likelihood = model.log_likelihood,
        aic = model.aic(),
        "model fit summary"
    );

    let report = describe_paths(&model);
    let graph = PathGraph::from_fitted(&model, &config.render.effective_layout())?;

    Ok(Analysis {
        patients: cohort.len(),
        model,
        report,
        graph,
    })
}

/// Print the fitted table followed by the path sentences.
pub fn write_results(analysis: &Analysis, out: &mut impl Write) -> Result<(), PipelineError> {
    write!(out, "{}", analysis.model)?;
    writeln!(out)?;
    write!(out, "{}", analysis.report)?;
    out.flush()?;
    Ok(())
}

/// Full run: analyze, print to `out`, write the diagram, optionally open it.
pub fn run(config: &AnticoagConfig, out: &mut impl Write) -> Result<PathBuf, PipelineError> {
    let started = Instant::now();
    let analysis = analyze(config)?;
    write_results(&analysis, out)?;

    let image = render_png(&analysis.graph, &config.render)?;
    if config.render.effective_open_viewer() {
        show(&image);
    }

    tracing::info!(
        patients = analysis.patients,
        paths = analysis.report.len(),
        image = %image.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(image)
}
