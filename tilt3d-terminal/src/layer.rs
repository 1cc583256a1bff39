/// Card layer implementing the host-surface contract
use nalgebra::Matrix4;
use tilt3d_core::{Color, ShadowOffset};
use tilt3d_surface::{KeyframeAnimation, TiltSurface, SHADOW_ANIMATION_KEY, TRANSFORM_ANIMATION_KEY};

/// The terminal's stand-in for a rendering layer: persistent transform
/// and shadow properties plus the registered tilt animations, sampled at
/// render time.
pub struct CardLayer {
    transform: Matrix4<f32>,
    shadow_offset: ShadowOffset,
    shadow_blur: f32,
    shadow_opacity: f32,
    shadow_color: Color,
    transform_animation: Option<KeyframeAnimation<Matrix4<f32>>>,
    shadow_animation: Option<KeyframeAnimation<ShadowOffset>>,
}

impl CardLayer {
    pub fn new() -> Self {
        Self {
            transform: Matrix4::identity(),
            shadow_offset: ShadowOffset::ZERO,
            shadow_blur: 0.0,
            shadow_opacity: 0.0,
            shadow_color: Color::TRANSPARENT,
            transform_animation: None,
            shadow_animation: None,
        }
    }

    /// Transform in effect `elapsed_seconds` into playback: the sampled
    /// animation when one is registered, the persistent property otherwise.
    pub fn transform_at(&self, elapsed_seconds: f32) -> Matrix4<f32> {
        match &self.transform_animation {
            Some(animation) => sample(animation, elapsed_seconds, |a, b, t| {
                a * (1.0 - t) + b * t
            })
            .unwrap_or(self.transform),
            None => self.transform,
        }
    }

    /// Shadow offset in effect `elapsed_seconds` into playback.
    pub fn shadow_offset_at(&self, elapsed_seconds: f32) -> ShadowOffset {
        match &self.shadow_animation {
            Some(animation) => sample(animation, elapsed_seconds, |a, b, t| {
                ShadowOffset::new(a.dx + (b.dx - a.dx) * t, a.dy + (b.dy - a.dy) * t)
            })
            .unwrap_or(self.shadow_offset),
            None => self.shadow_offset,
        }
    }

    pub fn shadow_opacity(&self) -> f32 {
        self.shadow_opacity
    }

    pub fn shadow_blur(&self) -> f32 {
        self.shadow_blur
    }

    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }
}

impl Default for CardLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltSurface for CardLayer {
    fn set_transform(&mut self, transform: Matrix4<f32>) {
        self.transform = transform;
    }

    fn set_shadow_offset(&mut self, offset: ShadowOffset) {
        self.shadow_offset = offset;
    }

    fn set_shadow_appearance(&mut self, blur_radius: f32, opacity: f32, color: Color) {
        self.shadow_blur = blur_radius;
        self.shadow_opacity = opacity;
        self.shadow_color = color;
    }

    fn add_transform_animation(
        &mut self,
        key: &'static str,
        animation: KeyframeAnimation<Matrix4<f32>>,
    ) {
        if key == TRANSFORM_ANIMATION_KEY {
            self.transform_animation = Some(animation);
        }
    }

    fn add_shadow_animation(
        &mut self,
        key: &'static str,
        animation: KeyframeAnimation<ShadowOffset>,
    ) {
        if key == SHADOW_ANIMATION_KEY {
            self.shadow_animation = Some(animation);
        }
    }

    fn remove_animation(&mut self, key: &'static str) {
        if key == TRANSFORM_ANIMATION_KEY {
            self.transform_animation = None;
        }
        if key == SHADOW_ANIMATION_KEY {
            self.shadow_animation = None;
        }
    }
}

/// Samples a keyframe track at an absolute playback time with linear
/// blending between the two surrounding keyframes.
fn sample<T: Copy>(
    animation: &KeyframeAnimation<T>,
    elapsed_seconds: f32,
    blend: impl Fn(T, T, f32) -> T,
) -> Option<T> {
    let first = *animation.values.first()?;
    if animation.values.len() != animation.key_times.len() || animation.duration_seconds <= 0.0 {
        return Some(first);
    }

    let cycles = elapsed_seconds / animation.duration_seconds;
    let phase = if animation.repeats_forever {
        cycles - cycles.floor()
    } else if cycles >= 1.0 && animation.fills_forward {
        1.0
    } else {
        cycles.clamp(0.0, 1.0)
    };

    for segment in 0..animation.values.len() - 1 {
        let start = animation.key_times[segment];
        let end = animation.key_times[segment + 1];
        if phase <= end {
            let span = end - start;
            let local = if span > 0.0 { (phase - start) / span } else { 0.0 };
            return Some(blend(
                animation.values[segment],
                animation.values[segment + 1],
                local,
            ));
        }
    }
    animation.values.last().copied()
}
