//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod anticoag_config;
pub mod cohort_config;
pub mod fit_config;
pub mod model_config;
pub mod render_config;

pub use anticoag_config::{AnticoagConfig, CliOverrides};
pub use cohort_config::CohortConfig;
pub use fit_config::FitConfig;
pub use model_config::ModelConfig;
pub use render_config::{LayoutConfig, NodeLayout, RenderConfig};
