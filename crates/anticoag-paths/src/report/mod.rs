//! Plain-language presentation of fitted regression paths.

pub mod builder;
pub mod templates;

pub use builder::{describe_paths, PathReport, PathSentence};
