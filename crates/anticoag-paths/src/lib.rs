//! # anticoag-paths
//!
//! Presentation of a fitted path model: one plain-language sentence per
//! regression path, and a path diagram drawn to PNG.

pub mod graph;
pub mod render;
pub mod report;

pub use graph::{PathEdge, PathGraph, PathNode};
pub use render::{render_png, show};
pub use report::{describe_paths, PathReport, PathSentence};
