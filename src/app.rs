//! Per-frame loop
//!
//! `App` owns the simulation state and the current camera. The host calls
//! [`App::frame`] once per displayed frame with the panel values and held
//! keys, and receives the frame's draw calls through its [`RenderHost`].

use crate::camera::{CameraMatrices, CameraParams, Projection};
use crate::input::{ControlPanel, KEY_ESCAPE, KeyboardState};
use crate::renderer::{Grid, RenderHost, draw_scene};
use crate::settings::Settings;
use crate::sim::{SimState, tick};

/// Everything the host reports for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub panel: ControlPanel,
    /// Key codes held down this frame
    pub pressed_keys: Vec<usize>,
}

impl FrameInput {
    /// Panel showing `camera` with no buttons clicked and no keys held
    pub fn with_camera(camera: CameraParams) -> Self {
        Self {
            panel: ControlPanel {
                camera,
                ..Default::default()
            },
            pressed_keys: Vec::new(),
        }
    }
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Frame loop state
#[derive(Debug, Clone)]
pub struct App {
    pub settings: Settings,
    pub sim: SimState,
    pub camera: CameraParams,
    projection: Projection,
    grid: Grid,
    keyboard: KeyboardState,
    frame_count: u64,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        log::info!(
            "Spring view {}x{} (dt = {:.4}s)",
            settings.viewport.width,
            settings.viewport.height,
            settings.sim_dt
        );
        Self {
            sim: settings.sim_state(),
            camera: settings.camera,
            projection: settings.projection(),
            grid: settings.grid(),
            keyboard: KeyboardState::new(),
            frame_count: 0,
            settings,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Matrices for the current camera
    pub fn camera_matrices(&self) -> CameraMatrices {
        CameraMatrices::build(&self.camera, &self.projection, &self.settings.viewport)
    }

    /// Run one frame: ingest input, step physics, rebuild matrices, draw
    pub fn frame(&mut self, input: &FrameInput, host: &mut impl RenderHost) -> FrameOutcome {
        self.keyboard.update_pressed(&input.pressed_keys);
        self.camera = input.panel.camera;

        tick(&mut self.sim, &input.panel.triggers(), self.settings.sim_dt);

        let matrices = self.camera_matrices();
        draw_scene(&matrices, &self.grid, &self.sim, host);
        self.frame_count += 1;

        if self.keyboard.just_pressed(KEY_ESCAPE) {
            log::info!("Escape pressed, exiting after frame {}", self.frame_count);
            FrameOutcome::Exit
        } else {
            FrameOutcome::Continue
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
