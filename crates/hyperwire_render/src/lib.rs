//! Hyperwire render adapter
//!
//! Everything between the pure math in `hyperwire_math` and the outside
//! world: slider state in degrees, the auto-rotation driver, and the SVG
//! frame builder.
//!
//! ## Key Components
//!
//! - [`controls::RotationSliders`] - WX/WY/WZ angles in degrees
//! - [`controls::AutoRotator`] - tick-driven slider animation
//! - [`svg::SvgRenderer`] - draws a projected frame as SVG
//! - [`error::RenderError`] - failures while building or writing output

pub mod controls;
pub mod error;
pub mod svg;

// Re-export math types for convenience
pub use hyperwire_math::{Frame, ProjectedVertex, Rotations, Tesseract};

pub use controls::{AutoRotator, RotationSliders};
pub use error::RenderError;
pub use svg::SvgRenderer;
