//! Spring View - A damped spring in a projected 3D scene
//!
//! Core modules:
//! - `math`: Row-vector 3D vector and 4x4 matrix algebra
//! - `camera`: Rotation, view, projection and viewport matrices
//! - `sim`: Deterministic spring-damper simulation
//! - `renderer`: Scene projection into 2D draw commands
//! - `input`: Control panel and keyboard state from the host
//! - `app`: Per-frame loop tying everything together
//! - `settings`: JSON configuration

pub mod app;
pub mod camera;
pub mod input;
pub mod math;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, FrameInput, FrameOutcome};
pub use settings::Settings;

/// Scene configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, independent of frame time)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    /// Perspective projection
    pub const FOV_Y: f32 = 0.5; // radians
    pub const NEAR_Z: f32 = 0.1;
    pub const FAR_Z: f32 = 100.0;

    /// Spring defaults
    pub const SPRING_NATURAL_LENGTH: f32 = 1.0;
    pub const SPRING_STIFFNESS: f32 = 100.0;
    pub const SPRING_DAMPING: f32 = 2.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 1.20;
    pub const BALL_MASS: f32 = 2.0;
    pub const BALL_RADIUS: f32 = 0.05;
    /// On-screen ball radius in pixels (the world radius is not projected)
    pub const BALL_SCREEN_RADIUS: i32 = 10;

    /// Ground grid: 4x4 units split into 10 divisions
    pub const GRID_HALF_WIDTH: f32 = 2.0;
    pub const GRID_DIVISIONS: u32 = 10;

    /// Starting camera position
    pub const CAMERA_START: [f32; 3] = [0.0, 2.0, -6.0];
}
