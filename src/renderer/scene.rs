//! Scene projection: world entities to screen-space draw calls

use super::commands::{FillMode, RenderHost, colors};
use crate::camera::CameraMatrices;
use crate::consts::{BALL_SCREEN_RADIUS, GRID_DIVISIONS, GRID_HALF_WIDTH};
use crate::math::Vector3;
use crate::sim::SimState;

/// Square ground grid on the y = 0 plane, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub half_width: f32,
    pub divisions: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            half_width: GRID_HALF_WIDTH,
            divisions: GRID_DIVISIONS,
        }
    }
}

impl Grid {
    /// World-space endpoints and color of every grid line.
    ///
    /// Each offset yields a line parallel to z followed by one parallel to x.
    /// The center pair (the world axes) is black.
    pub fn lines(&self) -> Vec<(Vector3, Vector3, u32)> {
        let hw = self.half_width;
        let step = (hw * 2.0) / self.divisions as f32;
        let mut lines = Vec::with_capacity((self.divisions as usize + 1) * 2);

        for i in 0..=self.divisions {
            let offset = -hw + step * i as f32;
            let color = if self.is_axis_line(i) {
                colors::BLACK
            } else {
                colors::GRID_GRAY
            };
            lines.push((
                Vector3::new(offset, 0.0, -hw),
                Vector3::new(offset, 0.0, hw),
                color,
            ));
            lines.push((
                Vector3::new(-hw, 0.0, offset),
                Vector3::new(hw, 0.0, offset),
                color,
            ));
        }
        lines
    }

    /// Line `i` sits on a world axis (only when the division count is even)
    pub fn is_axis_line(&self, i: u32) -> bool {
        u64::from(i) * 2 == u64::from(self.divisions)
    }

    pub fn draw(&self, camera: &CameraMatrices, host: &mut impl RenderHost) {
        for (start, end, color) in self.lines() {
            let (x0, y0) = camera.project_to_pixel(start);
            let (x1, y1) = camera.project_to_pixel(end);
            host.draw_line(x0, y0, x1, y1, color);
        }
    }
}

/// Project and submit the whole scene: grid, ball, then the spring line
pub fn draw_scene(
    camera: &CameraMatrices,
    grid: &Grid,
    state: &SimState,
    host: &mut impl RenderHost,
) {
    grid.draw(camera, host);

    let (ax, ay) = camera.project_to_pixel(state.spring.anchor);
    let (bx, by) = camera.project_to_pixel(state.ball.position);

    host.draw_ellipse(
        bx,
        by,
        BALL_SCREEN_RADIUS,
        BALL_SCREEN_RADIUS,
        0.0,
        state.ball.color,
        FillMode::Solid,
    );
    host.draw_line(ax, ay, bx, by, colors::SPRING_RED);
}
