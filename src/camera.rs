//! Camera pipeline
//!
//! Stateless: every frame the matrices are rebuilt from the current
//! [`CameraParams`]. A world point reaches the screen through
//! `transform(transform(p, view_projection), viewport)`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::math::{Matrix4x4, Vector3, cross, dot, normalize, transform};

/// World-space forward direction before camera rotation
pub const WORLD_FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);
/// World-space up direction before camera rotation
pub const WORLD_UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

/// Editable camera parameters, handed in fresh each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Eye position in world space
    pub translate: Vector3,
    /// Euler angles (radians)
    pub rotate: Vector3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            translate: Vector3::from_array(CAMERA_START),
            rotate: Vector3::ZERO,
        }
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: FOV_Y,
            aspect: WINDOW_WIDTH / WINDOW_HEIGHT,
            near: NEAR_Z,
            far: FAR_Z,
        }
    }
}

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

pub fn make_rotate_x(angle: f32) -> Matrix4x4 {
    let (s, c) = angle.sin_cos();
    Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn make_rotate_y(angle: f32) -> Matrix4x4 {
    let (s, c) = angle.sin_cos();
    Matrix4x4::from_rows([
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn make_rotate_z(angle: f32) -> Matrix4x4 {
    let (s, c) = angle.sin_cos();
    Matrix4x4::from_rows([
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Combined camera rotation: `rotZ * rotX * rotY`.
///
/// Rotations don't commute; this order is fixed.
pub fn make_rotate_matrix(rotate: Vector3) -> Matrix4x4 {
    make_rotate_z(rotate.z) * make_rotate_x(rotate.x) * make_rotate_y(rotate.y)
}

/// Look-at view matrix built directly as the inverse of the camera transform
pub fn make_view_matrix(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4x4 {
    let z = normalize(target - eye);
    let x = normalize(cross(up, z));
    let y = cross(z, x);

    Matrix4x4::from_rows([
        [x.x, y.x, z.x, 0.0],
        [x.y, y.y, z.y, 0.0],
        [x.z, y.z, z.z, 0.0],
        [-dot(x, eye), -dot(y, eye), -dot(z, eye), 1.0],
    ])
}

/// Perspective projection mapping view depth into `[0, 1]` after the divide
pub fn make_perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4x4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let mut m = Matrix4x4::ZERO;
    m.m[0][0] = f / aspect;
    m.m[1][1] = f;
    m.m[2][2] = far / (far - near);
    m.m[2][3] = 1.0;
    m.m[3][2] = -near * far / (far - near);
    m
}

/// NDC to pixels, with y flipped so +y points down the screen
pub fn make_viewport_matrix(width: f32, height: f32) -> Matrix4x4 {
    let hw = width / 2.0;
    let hh = height / 2.0;
    Matrix4x4::from_rows([
        [hw, 0.0, 0.0, 0.0],
        [0.0, -hh, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [hw, hh, 0.0, 1.0],
    ])
}

/// All matrices for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub rotation: Matrix4x4,
    pub forward: Vector3,
    pub up: Vector3,
    pub view: Matrix4x4,
    pub projection: Matrix4x4,
    pub view_projection: Matrix4x4,
    pub viewport: Matrix4x4,
}

impl CameraMatrices {
    pub fn build(camera: &CameraParams, projection: &Projection, viewport: &Viewport) -> Self {
        let rotation = make_rotate_matrix(camera.rotate);
        let forward = transform(WORLD_FORWARD, &rotation);
        let up = transform(WORLD_UP, &rotation);
        let target = camera.translate + forward;

        let view = make_view_matrix(camera.translate, target, up);
        let projection = make_perspective_matrix(
            projection.fov_y,
            projection.aspect,
            projection.near,
            projection.far,
        );
        let view_projection = view * projection;
        let viewport = make_viewport_matrix(viewport.width, viewport.height);

        Self {
            rotation,
            forward,
            up,
            view,
            projection,
            view_projection,
            viewport,
        }
    }

    /// World point to screen space (pixels, z = depth)
    #[inline]
    pub fn project(&self, point: Vector3) -> Vector3 {
        transform(transform(point, &self.view_projection), &self.viewport)
    }

    /// World point to integer pixel coordinates.
    ///
    /// Truncates toward zero. The cast saturates, so NaN lands on 0 and
    /// infinities clamp to the i32 range.
    #[inline]
    pub fn project_to_pixel(&self, point: Vector3) -> (i32, i32) {
        let p = self.project(point);
        (p.x as i32, p.y as i32)
    }
}
