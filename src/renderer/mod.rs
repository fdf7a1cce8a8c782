//! Rendering module
//!
//! Projects the scene through the camera matrices and emits primitive
//! draw calls for the host to rasterize.

pub mod commands;
pub mod scene;

pub use commands::{DrawCommand, DrawList, FillMode, RenderHost, colors};
pub use scene::{Grid, draw_scene};
