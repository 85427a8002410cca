//! Hyperwire - animated tesseract wireframes
//!
//! The application layer: configuration loading and the animation system that
//! drives render passes and writes SVG frames.

pub mod config;
pub mod systems;
