/// Keyframe track generation for animated corner cycles
use nalgebra::Matrix4;

use crate::config::AnimatedCycle;
use crate::shadow::{self, ShadowOffset};
use crate::transform::Perspective;

/// Evenly spaced key times over `[0, 1]` for `count` keyframes:
/// `i / (count - 1)`. A single-entry track gets `[0.0]`.
pub fn key_times(count: usize) -> Vec<f32> {
    if count <= 1 {
        return vec![0.0; count];
    }
    (0..count)
        .map(|i| i as f32 / (count - 1) as f32)
        .collect()
}

/// Parallel keyframe arrays for one full tour of the corner ring.
///
/// The corner sequence is closed (the starting corner appears at both
/// ends), so a repeating animation loops seamlessly.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltKeyframes {
    pub transforms: Vec<Matrix4<f32>>,
    /// Present only when the cycle carries a shadow style.
    pub shadow_offsets: Option<Vec<ShadowOffset>>,
    pub key_times: Vec<f32>,
    pub duration_seconds: f32,
}

impl TiltKeyframes {
    /// Maps every corner of the closed ring through the tilt geometry.
    pub fn from_cycle(cycle: &AnimatedCycle) -> Self {
        let corners = cycle.from_corner.closed_ring_from(cycle.direction);

        let transforms = corners
            .iter()
            .map(|&corner| {
                Perspective::toward_corner(
                    corner,
                    cycle.distortion,
                    cycle.angle_degrees,
                    cycle.step,
                )
            })
            .collect();

        let shadow_offsets = cycle.shadow_style.as_ref().map(|style| {
            corners
                .iter()
                .map(|&corner| shadow::offset_for(corner, style))
                .collect()
        });

        Self {
            transforms,
            shadow_offsets,
            key_times: key_times(corners.len()),
            duration_seconds: cycle.duration_seconds,
        }
    }
}
