//! 4x4 homogeneous matrices in row-vector convention
//!
//! `m[i][j]` is row `i`, column `j`. Points are row vectors `(x, y, z, 1)`
//! multiplied on the left, so the translation lives in row 3.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use super::vector::Vector3;

/// A 4x4 transform matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Matrix product `self * other` (apply `self` first, then `other`)
    pub fn multiply(&self, other: &Matrix4x4) -> Matrix4x4 {
        let mut result = Matrix4x4::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }

    /// Transform a point, dividing by `w` unless it is exactly zero.
    ///
    /// With `w == 0` the undivided `(x, y, z)` is returned as-is.
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        let m = &self.m;
        let mut x = v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0];
        let mut y = v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1];
        let mut z = v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2];
        let w = v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + m[3][3];
        if w != 0.0 {
            x /= w;
            y /= w;
            z /= w;
        }
        Vector3::new(x, y, z)
    }

    /// Gauss-Jordan inverse with partial pivoting. `None` if singular.
    pub fn inverse(&self) -> Option<Matrix4x4> {
        let mut a = self.m;
        let mut inv = Matrix4x4::IDENTITY.m;

        for col in 0..4 {
            let pivot_row = (col..4).max_by(|&r1, &r2| {
                a[r1][col]
                    .abs()
                    .partial_cmp(&a[r2][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;
            let pivot = a[pivot_row][col];
            if pivot == 0.0 || !pivot.is_finite() {
                return None;
            }
            a.swap(col, pivot_row);
            inv.swap(col, pivot_row);

            let scale = 1.0 / pivot;
            for j in 0..4 {
                a[col][j] *= scale;
                inv[col][j] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor != 0.0 {
                    for j in 0..4 {
                        a[row][j] -= factor * a[col][j];
                        inv[row][j] -= factor * inv[col][j];
                    }
                }
            }
        }

        Some(Matrix4x4 { m: inv })
    }

    /// Elementwise comparison within an absolute tolerance
    pub fn approx_eq(&self, other: &Matrix4x4, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, other: Matrix4x4) -> Matrix4x4 {
        self.multiply(&other)
    }
}

impl Mul<&Matrix4x4> for &Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, other: &Matrix4x4) -> Matrix4x4 {
        self.multiply(other)
    }
}

/// Free-function form of [`Matrix4x4::multiply`]
#[inline]
pub fn multiply(a: &Matrix4x4, b: &Matrix4x4) -> Matrix4x4 {
    a.multiply(b)
}

/// Free-function form of [`Matrix4x4::transform_point`]
#[inline]
pub fn transform(v: Vector3, m: &Matrix4x4) -> Vector3 {
    m.transform_point(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = Matrix4x4> {
        proptest::array::uniform4(proptest::array::uniform4(-2.0f32..2.0))
            .prop_map(Matrix4x4::from_rows)
    }

    fn translation(t: Vector3) -> Matrix4x4 {
        let mut m = Matrix4x4::IDENTITY;
        m.m[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = Matrix4x4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(a * Matrix4x4::IDENTITY, a);
        assert_eq!(Matrix4x4::IDENTITY * a, a);
    }

    #[test]
    fn test_transform_applies_translation() {
        let m = translation(Vector3::new(1.0, -2.0, 3.0));
        let p = transform(Vector3::new(1.0, 1.0, 1.0), &m);
        assert_eq!(p, Vector3::new(2.0, -1.0, 4.0));
    }

    #[test]
    fn test_row_vector_composition_order() {
        // Translate first, then scale by 2: (1,0,0) -> (2,0,0) -> (4,0,0)
        let t = translation(Vector3::X);
        let mut s = Matrix4x4::IDENTITY;
        s.m[0][0] = 2.0;
        let p = transform(Vector3::new(1.0, 0.0, 0.0), &(t * s));
        assert_eq!(p, Vector3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_transform_divides_by_w() {
        let mut m = Matrix4x4::IDENTITY;
        m.m[3][3] = 2.0;
        let p = transform(Vector3::new(2.0, 4.0, 6.0), &m);
        assert_eq!(p, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_zero_w_skips_divide() {
        let mut m = Matrix4x4::IDENTITY;
        m.m[3][3] = 0.0;
        let p = transform(Vector3::new(2.0, 4.0, 6.0), &m);
        assert_eq!(p, Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_inverse_of_singular_is_none() {
        assert!(Matrix4x4::ZERO.inverse().is_none());
    }

    #[test]
    fn test_inverse_of_translation() {
        let t = translation(Vector3::new(3.0, 4.0, 5.0));
        let inv = t.inverse().expect("translation is invertible");
        assert!((t * inv).approx_eq(&Matrix4x4::IDENTITY, 1e-6));
        assert!(inv.approx_eq(&translation(Vector3::new(-3.0, -4.0, -5.0)), 1e-6));
    }

    proptest! {
        #[test]
        fn multiply_is_associative(
            a in matrix_strategy(),
            b in matrix_strategy(),
            c in matrix_strategy(),
        ) {
            let left = multiply(&multiply(&a, &b), &c);
            let right = multiply(&a, &multiply(&b, &c));
            prop_assert!(left.approx_eq(&right, 1e-3));
        }
    }
}
