/// Reset-then-apply driver for tilt configurations
use nalgebra::Matrix4;
use tilt3d_core::{
    offset_for, AnimatedCycle, Color, ConfigError, Perspective, ShadowOffset, StaticPose,
    TiltConfig, TiltKeyframes,
};

use crate::{KeyframeAnimation, TiltSurface};

/// Animation keys shared by apply and reset, so a new configuration can
/// find and replace whatever a previous one registered on the surface.
pub const TRANSFORM_ANIMATION_KEY: &str = "tilt.transform";
pub const SHADOW_ANIMATION_KEY: &str = "tilt.shadow-offset";

/// Validates `config`, clears all prior tilt state on the surface, then
/// applies the new configuration. Configurations are never additive; an
/// invalid config leaves the surface untouched.
pub fn apply<S: TiltSurface>(surface: &mut S, config: &TiltConfig) -> Result<(), ConfigError> {
    config.validate()?;
    reset(surface);
    match config {
        TiltConfig::Static(pose) => apply_static(surface, pose),
        TiltConfig::Animated(cycle) => apply_animated(surface, cycle),
    }
    Ok(())
}

/// Returns the surface to its untilted state: identity transform, no
/// shadow, no registered tilt animations. Safe to call any number of
/// times in a row.
pub fn reset<S: TiltSurface>(surface: &mut S) {
    surface.remove_animation(TRANSFORM_ANIMATION_KEY);
    surface.remove_animation(SHADOW_ANIMATION_KEY);
    surface.set_transform(Matrix4::identity());
    surface.set_shadow_offset(ShadowOffset::ZERO);
    surface.set_shadow_appearance(0.0, 0.0, Color::TRANSPARENT);
}

fn apply_static<S: TiltSurface>(surface: &mut S, pose: &StaticPose) {
    log::debug!("static tilt toward {:?}", pose.corner);
    surface.set_transform(Perspective::toward_corner(
        pose.corner,
        pose.distortion,
        pose.angle_degrees,
        pose.step,
    ));
    if let Some(style) = &pose.shadow_style {
        surface.set_shadow_offset(offset_for(pose.corner, style));
        surface.set_shadow_appearance(style.blur_radius, style.opacity, style.color);
    }
}

fn apply_animated<S: TiltSurface>(surface: &mut S, cycle: &AnimatedCycle) {
    log::debug!(
        "animated tilt cycle from {:?}, {:?}, {} s",
        cycle.from_corner,
        cycle.direction,
        cycle.duration_seconds
    );
    let frames = TiltKeyframes::from_cycle(cycle);

    surface.add_transform_animation(
        TRANSFORM_ANIMATION_KEY,
        KeyframeAnimation {
            values: frames.transforms,
            key_times: frames.key_times.clone(),
            duration_seconds: frames.duration_seconds,
            repeats_forever: true,
            fills_forward: true,
        },
    );

    if let (Some(offsets), Some(style)) = (frames.shadow_offsets, &cycle.shadow_style) {
        surface.add_shadow_animation(
            SHADOW_ANIMATION_KEY,
            KeyframeAnimation {
                values: offsets,
                key_times: frames.key_times,
                duration_seconds: frames.duration_seconds,
                repeats_forever: true,
                fills_forward: true,
            },
        );
        // Blur, opacity and color do not vary per corner.
        surface.set_shadow_appearance(style.blur_radius, style.opacity, style.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt3d_core::{Corner, Direction, ShadowStyle};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct MockSurface {
        transform: Option<Matrix4<f32>>,
        shadow_offset: Option<ShadowOffset>,
        shadow_appearance: Option<(f32, f32, Color)>,
        transform_animations: Vec<(&'static str, KeyframeAnimation<Matrix4<f32>>)>,
        shadow_animations: Vec<(&'static str, KeyframeAnimation<ShadowOffset>)>,
    }

    impl TiltSurface for MockSurface {
        fn set_transform(&mut self, transform: Matrix4<f32>) {
            self.transform = Some(transform);
        }

        fn set_shadow_offset(&mut self, offset: ShadowOffset) {
            self.shadow_offset = Some(offset);
        }

        fn set_shadow_appearance(&mut self, blur_radius: f32, opacity: f32, color: Color) {
            self.shadow_appearance = Some((blur_radius, opacity, color));
        }

        fn add_transform_animation(
            &mut self,
            key: &'static str,
            animation: KeyframeAnimation<Matrix4<f32>>,
        ) {
            self.transform_animations.push((key, animation));
        }

        fn add_shadow_animation(
            &mut self,
            key: &'static str,
            animation: KeyframeAnimation<ShadowOffset>,
        ) {
            self.shadow_animations.push((key, animation));
        }

        fn remove_animation(&mut self, key: &'static str) {
            self.transform_animations.retain(|(k, _)| *k != key);
            self.shadow_animations.retain(|(k, _)| *k != key);
        }
    }

    fn pose(shadow_style: Option<ShadowStyle>) -> StaticPose {
        StaticPose {
            corner: Corner::MediumLeft,
            distortion: 500.0,
            angle_degrees: 14.0,
            step: 1.0,
            shadow_style,
        }
    }

    fn cycle(shadow_style: Option<ShadowStyle>) -> AnimatedCycle {
        AnimatedCycle {
            from_corner: Corner::TopMedium,
            direction: Direction::Clockwise,
            distortion: 500.0,
            angle_degrees: 14.0,
            step: 1.0,
            duration_seconds: 8.0,
            shadow_style,
        }
    }

    #[test]
    fn test_static_apply_sets_transform_and_shadow() {
        let mut surface = MockSurface::default();
        let style = ShadowStyle::default();
        apply(&mut surface, &TiltConfig::Static(pose(Some(style)))).unwrap();

        let expected = Perspective::toward_corner(Corner::MediumLeft, 500.0, 14.0, 1.0);
        assert_eq!(surface.transform, Some(expected));
        assert_eq!(
            surface.shadow_offset,
            Some(offset_for(Corner::MediumLeft, &style))
        );
        assert_eq!(
            surface.shadow_appearance,
            Some((style.blur_radius, style.opacity, style.color))
        );
        assert!(surface.transform_animations.is_empty());
        assert!(surface.shadow_animations.is_empty());
    }

    #[test]
    fn test_static_apply_without_style_skips_shadow() {
        let mut surface = MockSurface::default();
        apply(&mut surface, &TiltConfig::Static(pose(None))).unwrap();

        assert_eq!(surface.shadow_offset, Some(ShadowOffset::ZERO));
        assert_eq!(
            surface.shadow_appearance,
            Some((0.0, 0.0, Color::TRANSPARENT))
        );
    }

    #[test]
    fn test_animated_apply_registers_closed_tracks() {
        let mut surface = MockSurface::default();
        let config = TiltConfig::Animated(cycle(Some(ShadowStyle::default())));
        apply(&mut surface, &config).unwrap();

        assert_eq!(surface.transform_animations.len(), 1);
        let (key, animation) = &surface.transform_animations[0];
        assert_eq!(*key, TRANSFORM_ANIMATION_KEY);
        assert_eq!(animation.values.len(), 9);
        assert_eq!(animation.key_times.len(), 9);
        assert_eq!(animation.key_times[0], 0.0);
        assert!((animation.key_times[1] - 0.125).abs() < 1e-6);
        assert_eq!(animation.key_times[8], 1.0);
        assert_eq!(animation.duration_seconds, 8.0);
        assert!(animation.repeats_forever);
        assert!(animation.fills_forward);

        assert_eq!(surface.shadow_animations.len(), 1);
        assert_eq!(surface.shadow_animations[0].0, SHADOW_ANIMATION_KEY);
    }

    #[test]
    fn test_animated_apply_without_style_has_no_shadow_track() {
        let mut surface = MockSurface::default();
        apply(&mut surface, &TiltConfig::Animated(cycle(None))).unwrap();

        assert_eq!(surface.transform_animations.len(), 1);
        assert!(surface.shadow_animations.is_empty());
    }

    #[test]
    fn test_reapply_replaces_previous_animations() {
        let mut surface = MockSurface::default();
        let config = TiltConfig::Animated(cycle(Some(ShadowStyle::default())));
        apply(&mut surface, &config).unwrap();
        apply(&mut surface, &config).unwrap();

        assert_eq!(surface.transform_animations.len(), 1);
        assert_eq!(surface.shadow_animations.len(), 1);
    }

    #[test]
    fn test_switching_to_static_clears_animations() {
        let mut surface = MockSurface::default();
        let animated = TiltConfig::Animated(cycle(Some(ShadowStyle::default())));
        apply(&mut surface, &animated).unwrap();
        apply(&mut surface, &TiltConfig::Static(pose(None))).unwrap();

        assert!(surface.transform_animations.is_empty());
        assert!(surface.shadow_animations.is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut surface = MockSurface::default();
        let config = TiltConfig::Animated(cycle(Some(ShadowStyle::default())));
        apply(&mut surface, &config).unwrap();

        reset(&mut surface);
        let once = surface.clone();
        reset(&mut surface);
        assert_eq!(surface, once);
        assert_eq!(surface.transform, Some(Matrix4::identity()));
    }

    #[test]
    fn test_invalid_config_leaves_surface_untouched() {
        let mut surface = MockSurface::default();
        let bad = TiltConfig::Static(StaticPose {
            distortion: 0.0,
            ..pose(None)
        });

        assert_eq!(
            apply(&mut surface, &bad),
            Err(ConfigError::NonPositiveDistortion(0.0))
        );
        assert_eq!(surface, MockSurface::default());
    }
}
