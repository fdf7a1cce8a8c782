//! 3-component vector helpers
//!
//! `Vector3` is glam's `Vec3`; componentwise add/sub/scale come from its
//! operator impls. The free functions below pin down the exact formulas the
//! camera pipeline and integrator rely on.

pub use glam::Vec3 as Vector3;

/// Euclidean length
#[inline]
pub fn length(v: Vector3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Dot product
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Scale `v` to unit length.
///
/// There is no zero-length guard: a zero vector divides by zero and yields
/// NaN components, which callers propagate rather than hide.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    let len = length(v);
    Vector3::new(v.x / len, v.y / len, v.z / len)
}

/// Right-handed cross product `a x b`
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vec3_strategy() -> impl Strategy<Value = Vector3> {
        (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
            .prop_map(|(x, y, z)| Vector3::new(x, y, z))
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(cross(Vector3::X, Vector3::Y), Vector3::Z);
        assert_eq!(cross(Vector3::Y, Vector3::Z), Vector3::X);
        assert_eq!(cross(Vector3::Z, Vector3::X), Vector3::Y);
    }

    #[test]
    fn test_normalize_axis() {
        let n = normalize(Vector3::new(0.0, 3.0, 4.0));
        assert!((n - Vector3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = normalize(Vector3::ZERO);
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_dot_and_length() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_eq!(dot(v, v), 9.0);
        assert_eq!(length(v), 3.0);
    }

    proptest! {
        #[test]
        fn normalize_has_unit_length(v in vec3_strategy()) {
            prop_assume!(length(v) > 1e-3);
            prop_assert!((length(normalize(v)) - 1.0).abs() < 1e-4);
        }

        #[test]
        fn cross_is_anticommutative(a in vec3_strategy(), b in vec3_strategy()) {
            prop_assert_eq!(cross(a, b), -cross(b, a));
        }

        #[test]
        fn cross_is_orthogonal_to_inputs(a in vec3_strategy(), b in vec3_strategy()) {
            let c = cross(a, b);
            let scale = length(a) * length(b) * (length(a) + length(b)) + 1.0;
            prop_assert!(dot(c, a).abs() / scale < 1e-4);
            prop_assert!(dot(c, b).abs() / scale < 1e-4);
        }
    }
}
