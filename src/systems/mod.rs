//! Application systems

mod animation;

pub use animation::{AnimationSummary, AnimationSystem};
