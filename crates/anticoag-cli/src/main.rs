//! `anticoag-sem`: simulate the anticoagulant cohort, fit the path model,
//! print the results, and draw the path diagram.
//!
//! ```bash
//! anticoag-sem
//! anticoag-sem --output paths.png --no-view
//! ANTICOAG_LOG=anticoag_sem=debug anticoag-sem --config study.toml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anticoag_cli::pipeline;
use anticoag_core::config::{AnticoagConfig, CliOverrides};
use anticoag_core::errors::{AnticoagErrorCode, PipelineError};
use anticoag_core::tracing::init_tracing;
use clap::Parser;

/// Structural equation model of anticoagulant treatment and stroke imaging outcomes
#[derive(Parser)]
#[command(name = "anticoag-sem")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: ./anticoag.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<String>,

    /// Do not open the diagram in the image viewer
    #[arg(long)]
    no_view: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let overrides = CliOverrides {
        config_path: cli.config,
        output: cli.output,
        open_viewer: cli.no_view.then_some(false),
    };

    let result = AnticoagConfig::load(Path::new("."), Some(&overrides))
        .map_err(PipelineError::from)
        .and_then(|config| pipeline::run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "run failed");
            eprintln!("{}", e.coded_message());
            ExitCode::FAILURE
        }
    }
}
