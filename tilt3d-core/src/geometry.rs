/// Corner-to-rotation-axis mapping
use nalgebra::Vector3;

use crate::corner::Corner;

/// Rotation axis for a tilt toward `corner`.
///
/// The eight axes form a diamond in the x/y plane: the edge-midpoint
/// corners sit at magnitude `2 * step` on a single axis, the diagonal
/// corners at `step` on both axes. Walking the ring clockwise advances
/// the axis direction by 45 degrees per stop, which is what makes an
/// animated cycle sweep with equal visual weight through all eight.
pub fn tilt_axis(corner: Corner, step: f32) -> Vector3<f32> {
    let (x, y) = match corner {
        Corner::TopMedium => (2.0 * step, 0.0),
        Corner::TopRight => (step, step),
        Corner::MediumRight => (0.0, 2.0 * step),
        Corner::BottomRight => (-step, step),
        Corner::BottomMedium => (-2.0 * step, 0.0),
        Corner::BottomLeft => (-step, -step),
        Corner::MediumLeft => (0.0, -2.0 * step),
        Corner::TopLeft => (step, -step),
    };
    Vector3::new(x, y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::Direction;

    #[test]
    fn test_axis_components_follow_diamond_table() {
        let step = 0.25;
        let expected = [
            (Corner::TopMedium, (0.5, 0.0)),
            (Corner::TopRight, (0.25, 0.25)),
            (Corner::MediumRight, (0.0, 0.5)),
            (Corner::BottomRight, (-0.25, 0.25)),
            (Corner::BottomMedium, (-0.5, 0.0)),
            (Corner::BottomLeft, (-0.25, -0.25)),
            (Corner::MediumLeft, (0.0, -0.5)),
            (Corner::TopLeft, (0.25, -0.25)),
        ];
        for (corner, (x, y)) in expected {
            let axis = tilt_axis(corner, step);
            assert_eq!(axis.x, x);
            assert_eq!(axis.y, y);
            assert_eq!(axis.z, 0.0);
        }
    }

    #[test]
    fn test_axis_scales_linearly_with_step() {
        for index in 0..8 {
            let corner = Corner::from_index(index);
            let unit = tilt_axis(corner, 1.0);
            let scaled = tilt_axis(corner, 3.5);
            assert!((scaled - unit * 3.5).norm() < 1e-6);
        }
    }

    #[test]
    fn test_axis_direction_advances_45_degrees_per_ring_stop() {
        let ring = Corner::TopMedium.ring_from(Direction::Clockwise);
        for step in 0..8 {
            let a = tilt_axis(ring[step], 1.0).normalize();
            let b = tilt_axis(ring[(step + 1) % 8], 1.0).normalize();
            let angle = a.dot(&b).clamp(-1.0, 1.0).acos();
            assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
        }
    }
}
