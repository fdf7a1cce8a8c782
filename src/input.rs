//! Host input: the control panel values and keyboard snapshots
//!
//! The panel is an immediate-mode editor owned by the host; each frame it
//! hands over the edited camera and whether a button was clicked.

use serde::{Deserialize, Serialize};

use crate::camera::CameraParams;
use crate::sim::TickInput;

/// Escape key scan code (DirectInput numbering)
pub const KEY_ESCAPE: usize = 0x01;
/// Number of tracked key slots
pub const KEY_COUNT: usize = 256;

/// Values read back from the control panel this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    /// Camera as edited this frame
    pub camera: CameraParams,
    /// "Start Spring" button clicked
    pub start_clicked: bool,
    /// "Reset" button clicked
    pub reset_clicked: bool,
}

impl ControlPanel {
    /// Button clicks as one-shot simulation triggers
    pub fn triggers(&self) -> TickInput {
        TickInput {
            start: self.start_clicked,
            reset: self.reset_clicked,
        }
    }
}

/// Current and previous keyboard snapshots for edge detection
#[derive(Debug, Clone)]
pub struct KeyboardState {
    keys: [bool; KEY_COUNT],
    pre_keys: [bool; KEY_COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            pre_keys: [false; KEY_COUNT],
        }
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current snapshot into the previous one and store `keys`
    pub fn update(&mut self, keys: &[bool; KEY_COUNT]) {
        self.pre_keys = self.keys;
        self.keys = *keys;
    }

    /// Convenience for hosts that report a list of held keys
    pub fn update_pressed(&mut self, pressed: &[usize]) {
        let mut keys = [false; KEY_COUNT];
        for &key in pressed {
            if let Some(slot) = keys.get_mut(key) {
                *slot = true;
            }
        }
        self.update(&keys);
    }

    pub fn is_down(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Down now, up last frame
    pub fn just_pressed(&self, key: usize) -> bool {
        self.is_down(key) && !self.pre_keys.get(key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_fires_once() {
        let mut kb = KeyboardState::new();
        kb.update_pressed(&[KEY_ESCAPE]);
        assert!(kb.just_pressed(KEY_ESCAPE));

        kb.update_pressed(&[KEY_ESCAPE]);
        assert!(kb.is_down(KEY_ESCAPE));
        assert!(!kb.just_pressed(KEY_ESCAPE));

        kb.update_pressed(&[]);
        kb.update_pressed(&[KEY_ESCAPE]);
        assert!(kb.just_pressed(KEY_ESCAPE));
    }

    #[test]
    fn test_out_of_range_keys_are_ignored() {
        let mut kb = KeyboardState::new();
        kb.update_pressed(&[KEY_COUNT + 5]);
        assert!(!kb.is_down(KEY_COUNT + 5));
        assert!(!kb.just_pressed(KEY_COUNT + 5));
    }

    #[test]
    fn test_panel_triggers() {
        let panel = ControlPanel {
            reset_clicked: true,
            ..Default::default()
        };
        assert_eq!(
            panel.triggers(),
            TickInput {
                start: false,
                reset: true
            }
        );
    }
}
