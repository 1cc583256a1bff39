/// Tilt3D Surface - boundary layer between the tilt engine and a host
/// rendering layer
///
/// The core computes plain matrices, offsets and keyframe tracks; this
/// crate owns the contract for pushing them onto whatever actually
/// renders. Hosts implement `TiltSurface` for their layer type and hand
/// it to `apply` / `reset`.

use nalgebra::Matrix4;
use tilt3d_core::{Color, ShadowOffset};

pub mod applier;

pub use applier::{apply, reset, SHADOW_ANIMATION_KEY, TRANSFORM_ANIMATION_KEY};

/// A repeating keyframe track handed to the host rendering layer.
///
/// Values interpolate linearly between consecutive keyframes. The track
/// repeats for as long as it stays registered, and the host holds the
/// last keyframe visually once playback stops (forward fill).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeAnimation<T> {
    pub values: Vec<T>,
    /// Normalized key times over `[0, 1]`, one per value.
    pub key_times: Vec<f32>,
    pub duration_seconds: f32,
    pub repeats_forever: bool,
    pub fills_forward: bool,
}

/// Host rendering-layer contract driven by the applier.
///
/// Implementations own the persistent layer properties and the registry
/// of running animations, keyed by the shared animation key constants.
/// Application must stay serialized per surface (UI-thread style); the
/// applier mutates through `&mut self` and never blocks.
pub trait TiltSurface {
    fn set_transform(&mut self, transform: Matrix4<f32>);
    fn set_shadow_offset(&mut self, offset: ShadowOffset);
    fn set_shadow_appearance(&mut self, blur_radius: f32, opacity: f32, color: Color);
    fn add_transform_animation(
        &mut self,
        key: &'static str,
        animation: KeyframeAnimation<Matrix4<f32>>,
    );
    fn add_shadow_animation(
        &mut self,
        key: &'static str,
        animation: KeyframeAnimation<ShadowOffset>,
    );
    fn remove_animation(&mut self, key: &'static str);
}
