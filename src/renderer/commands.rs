//! Draw commands handed to the rendering host
//!
//! All coordinates are already projected integer pixels; the host only
//! rasterizes.

use serde::{Deserialize, Serialize};

/// RGBA colors (0xRRGGBBAA) for scene elements
pub mod colors {
    pub const BLACK: u32 = 0x000000FF;
    pub const GRID_GRAY: u32 = 0xAAAAAAFF;
    pub const SPRING_RED: u32 = 0xFF0000FF;
    pub const BALL_BLUE: u32 = 0x0000FFFF;
}

/// How an ellipse is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    #[default]
    Solid,
    WireFrame,
}

/// A single primitive draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u32,
    },
    Ellipse {
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        /// Radians
        rotation: f32,
        color: u32,
        fill: FillMode,
    },
}

/// Anything that can rasterize lines and ellipses
pub trait RenderHost {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32);

    #[allow(clippy::too_many_arguments)]
    fn draw_ellipse(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        rotation: f32,
        color: u32,
        fill: FillMode,
    );
}

/// Records draw calls in order (headless runs and tests)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl RenderHost for DrawList {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn draw_ellipse(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        rotation: f32,
        color: u32,
        fill: FillMode,
    ) {
        self.commands.push(DrawCommand::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            color,
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw_line(0, 0, 10, 10, colors::BLACK);
        list.draw_ellipse(5, 5, 3, 3, 0.0, colors::BALL_BLUE, FillMode::Solid);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands[0], DrawCommand::Line { x1: 10, .. }));
        assert!(matches!(list.commands[1], DrawCommand::Ellipse { rx: 3, .. }));
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&DrawCommand::Line {
            x0: 1,
            y0: 2,
            x1: 3,
            y1: 4,
            color: colors::BLACK,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"line","x0":1,"y0":2,"x1":3,"y1":4,"color":255}"#);
    }
}
