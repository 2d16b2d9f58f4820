//! Path diagram rendering: pixel geometry, PNG output, and the image viewer.

pub mod geometry;
pub mod png;
pub mod viewer;

pub use self::png::render_png;
pub use viewer::show;
