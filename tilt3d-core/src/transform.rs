/// Perspective tilt transform construction
use nalgebra::{Matrix4, Unit, Vector3};

use crate::corner::Corner;
use crate::geometry::tilt_axis;

/// Axes shorter than this produce no rotation at all.
const AXIS_EPSILON: f32 = 1.0e-9;

/// Builder for perspective-rotation matrices.
pub struct Perspective;

impl Perspective {
    /// Combine a perspective-divide term with a rotation about `axis`.
    ///
    /// Starts from identity, writes `1 / distortion` into the
    /// perspective cell `(3, 2)` and rotates by `angle_degrees` about the
    /// normalized axis. `distortion` must be non-zero; a zero value
    /// divides by zero and the resulting matrix is unusable. A zero axis
    /// leaves the rotation at identity.
    ///
    /// The result depends only on the arguments, so concurrent callers
    /// need no synchronization.
    pub fn transform(distortion: f32, angle_degrees: f32, axis: Vector3<f32>) -> Matrix4<f32> {
        let mut perspective = Matrix4::identity();
        perspective[(3, 2)] = 1.0 / distortion;

        let radians = angle_degrees * std::f32::consts::PI / 180.0;
        let rotation = match Unit::try_new(axis, AXIS_EPSILON) {
            Some(unit_axis) => Matrix4::from_axis_angle(&unit_axis, radians),
            None => Matrix4::identity(),
        };

        perspective * rotation
    }

    /// Tilt toward a named corner: the corner's rotation axis composed
    /// with the perspective-rotation above.
    pub fn toward_corner(
        corner: Corner,
        distortion: f32,
        angle_degrees: f32,
        step: f32,
    ) -> Matrix4<f32> {
        Self::transform(distortion, angle_degrees, tilt_axis(corner, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    #[test]
    fn test_zero_angle_keeps_identity_rotation() {
        let matrix = Perspective::transform(2.0, 0.0, Vector3::new(1.0, 0.0, 0.0));
        assert!((matrix[(3, 2)] - 0.5).abs() < 1e-6);
        let mut expected = Matrix4::identity();
        expected[(3, 2)] = 0.5;
        assert!((matrix - expected).norm() < 1e-6);
    }

    #[test]
    fn test_half_turn_about_y_flips_z() {
        let matrix = Perspective::transform(1.0, 180.0, Vector3::new(0.0, 1.0, 0.0));
        assert!((matrix[(3, 2)] - 1.0).abs() < 1e-6);

        let image = matrix * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert!(image.x.abs() < 1e-6);
        assert!(image.y.abs() < 1e-6);
        assert!((image.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_axis_yields_pure_perspective() {
        let matrix = Perspective::transform(4.0, 90.0, Vector3::zeros());
        let mut expected = Matrix4::identity();
        expected[(3, 2)] = 0.25;
        assert!((matrix - expected).norm() < 1e-6);
    }

    #[test]
    fn test_toward_corner_matches_axis_lookup() {
        let direct = Perspective::toward_corner(Corner::TopLeft, 1.5, 30.0, 0.5);
        let composed = Perspective::transform(1.5, 30.0, tilt_axis(Corner::TopLeft, 0.5));
        assert!((direct - composed).norm() < 1e-6);
    }
}
