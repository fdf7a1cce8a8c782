//! Vector and matrix algebra
//!
//! Everything uses the row-vector convention: a point transforms as `v * M`,
//! and `A * B` applies `A` first. Composition order in `camera` depends on it.

pub mod matrix;
pub mod vector;

pub use matrix::{Matrix4x4, multiply, transform};
pub use vector::{Vector3, cross, dot, length, normalize};
