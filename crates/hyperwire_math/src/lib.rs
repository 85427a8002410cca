//! 4D Mathematics Library
//!
//! This crate provides the geometry engine behind the Hyperwire tesseract
//! visualization. Everything here is pure: no logging, no I/O, no state that
//! outlives a call.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`] - projected 3D point
//! - [`Mat4`] - row-major 4x4 matrix used for 4D rotations
//!
//! ## Geometry
//!
//! - [`Tesseract`] - the 16 labelled vertices and 32 edges of the hypercube
//! - [`projection`] - rotation composition and the perspective divide

mod vec4;
pub mod mat4;
pub mod tesseract;
pub mod projection;

pub use vec4::{Vec3, Vec4};
pub use mat4::{Mat4, RotationPlane};
pub use tesseract::{Edge, Tesseract, Vertex};
pub use projection::{Frame, ProjectedVertex, Rotations};
