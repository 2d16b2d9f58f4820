//! Path diagram rendering configuration, including the node layout.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DPI, DEFAULT_FIGURE_INCHES, DEFAULT_OUTPUT, DEFAULT_TITLE, DOAC_TREATMENT,
    HEMORRHAGIC_PROCESSES, HIGH_BMI, HIGH_SBP, MCA_INFARCTS, NO_COAGULATION_TREATMENT,
    WARFARIN_TREATMENT,
};

/// Placement and display label of one variable in the diagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeLayout {
    pub variable: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl NodeLayout {
    pub fn new(variable: &str, label: &str, x: f64, y: f64) -> Self {
        Self {
            variable: variable.to_string(),
            label: label.to_string(),
            x,
            y,
        }
    }
}

/// Hand-authored node placement in layout units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    pub nodes: Vec<NodeLayout>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nodes: vec![
                NodeLayout::new(DOAC_TREATMENT, "DOACs", 0.0, 1.0),
                NodeLayout::new(WARFARIN_TREATMENT, "Warfarin", -1.0, 0.0),
                NodeLayout::new(NO_COAGULATION_TREATMENT, "No Anti-Coag", 0.0, 0.0),
                NodeLayout::new(MCA_INFARCTS, "MCA Infarcts", -1.0, -1.0),
                NodeLayout::new(HEMORRHAGIC_PROCESSES, "Hemorrhage", 1.0, -1.0),
                NodeLayout::new(HIGH_BMI, "High BMI", 2.0, 1.0),
                NodeLayout::new(HIGH_SBP, "High SBP", 2.0, -1.0),
            ],
        }
    }
}

impl LayoutConfig {
    /// Look up a node's placement by variable name.
    pub fn node(&self, variable: &str) -> Option<&NodeLayout> {
        self.nodes.iter().find(|n| n.variable == variable)
    }
}

/// Configuration for the rendered path diagram.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Output PNG path. Default: `sem_AntiCoagulants_Remy_Cohan.png`.
    pub output: Option<String>,
    /// Raster resolution. Default: 300.
    pub dpi: Option<u32>,
    /// Figure width in inches. Default: 12.
    pub width_in: Option<f64>,
    /// Figure height in inches. Default: 11.
    pub height_in: Option<f64>,
    /// Diagram title.
    pub title: Option<String>,
    /// Node marker area in pt². Default: 3000.
    pub node_size: Option<f64>,
    /// Marker area arrows are clipped against, in pt². Default: 4000.
    pub edge_node_size: Option<f64>,
    /// Arrow head length in pt. Default: 20.
    pub arrow_size: Option<f64>,
    /// Downward shift of edge labels in layout units. Default: 0.2.
    pub label_offset: Option<f64>,
    /// Fraction along the edge (0 = source, 1 = target) where its label sits. Default: 0.5.
    pub label_position: Option<f64>,
    /// Open the written image in the platform viewer. Default: true.
    pub open_viewer: Option<bool>,
    /// Node placement. Default: the seven-variable anticoagulant layout.
    pub layout: Option<LayoutConfig>,
}

impl RenderConfig {
    pub fn effective_output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn effective_dpi(&self) -> u32 {
        self.dpi.unwrap_or(DEFAULT_DPI)
    }

    pub fn effective_figure_inches(&self) -> (f64, f64) {
        (
            self.width_in.unwrap_or(DEFAULT_FIGURE_INCHES.0),
            self.height_in.unwrap_or(DEFAULT_FIGURE_INCHES.1),
        )
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn effective_node_size(&self) -> f64 {
        self.node_size.unwrap_or(3000.0)
    }

    pub fn effective_edge_node_size(&self) -> f64 {
        self.edge_node_size.unwrap_or(4000.0)
    }

    pub fn effective_arrow_size(&self) -> f64 {
        self.arrow_size.unwrap_or(20.0)
    }

    pub fn effective_label_offset(&self) -> f64 {
        self.label_offset.unwrap_or(0.2)
    }

    pub fn effective_label_position(&self) -> f64 {
        self.label_position.unwrap_or(0.5)
    }

    pub fn effective_open_viewer(&self) -> bool {
        self.open_viewer.unwrap_or(true)
    }

    pub fn effective_layout(&self) -> LayoutConfig {
        self.layout.clone().unwrap_or_default()
    }
}
