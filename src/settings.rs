//! Scene and simulation settings
//!
//! Stored as JSON. Missing fields fall back to the built-in defaults, so a
//! settings file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{CameraParams, Projection, Viewport};
use crate::consts::*;
use crate::renderer::Grid;
use crate::sim::{Ball, SimState, Spring};

/// Failure to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Everything the frame loop needs to set itself up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Camera ===
    /// Camera pose at startup (the panel edits it afterwards)
    pub camera: CameraParams,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub near_z: f32,
    pub far_z: f32,

    // === Output ===
    pub viewport: Viewport,

    // === Physics ===
    pub spring: Spring,
    /// Ball at startup; also the reset point
    pub ball: Ball,
    /// Fixed timestep (seconds)
    pub sim_dt: f32,

    // === Ground ===
    pub grid_half_width: f32,
    pub grid_divisions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: CameraParams::default(),
            fov_y: FOV_Y,
            near_z: NEAR_Z,
            far_z: FAR_Z,

            viewport: Viewport::default(),

            spring: Spring::default(),
            ball: Ball::default(),
            sim_dt: SIM_DT,

            grid_half_width: GRID_HALF_WIDTH,
            grid_divisions: GRID_DIVISIONS,
        }
    }
}

impl Settings {
    /// Projection with the aspect ratio taken from the viewport
    pub fn projection(&self) -> Projection {
        Projection {
            fov_y: self.fov_y,
            aspect: self.viewport.aspect(),
            near: self.near_z,
            far: self.far_z,
        }
    }

    pub fn grid(&self) -> Grid {
        Grid {
            half_width: self.grid_half_width,
            divisions: self.grid_divisions,
        }
    }

    /// Fresh simulation state (not moving, ball at its start point)
    pub fn sim_state(&self) -> SimState {
        SimState::new(self.spring, self.ball)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(SettingsError::Parse)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}");
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
