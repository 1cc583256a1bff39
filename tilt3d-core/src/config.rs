/// Static and animated tilt configurations
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corner::{Corner, Direction};
use crate::shadow::ShadowStyle;

/// Configuration values rejected before any surface mutation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("distortion must be positive, got {0}")]
    NonPositiveDistortion(f32),
    #[error("animation duration must be positive, got {0} s")]
    NonPositiveDuration(f32),
}

/// One fixed tilt pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticPose {
    pub corner: Corner,
    pub distortion: f32,
    pub angle_degrees: f32,
    pub step: f32,
    /// Absent means no shadow output at all.
    pub shadow_style: Option<ShadowStyle>,
}

impl StaticPose {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distortion <= 0.0 {
            return Err(ConfigError::NonPositiveDistortion(self.distortion));
        }
        Ok(())
    }
}

/// A repeating tour of all eight corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedCycle {
    pub from_corner: Corner,
    pub direction: Direction,
    pub distortion: f32,
    pub angle_degrees: f32,
    pub step: f32,
    pub duration_seconds: f32,
    /// Absent means no shadow track is generated.
    pub shadow_style: Option<ShadowStyle>,
}

impl AnimatedCycle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.distortion <= 0.0 {
            return Err(ConfigError::NonPositiveDistortion(self.distortion));
        }
        if self.duration_seconds <= 0.0 {
            return Err(ConfigError::NonPositiveDuration(self.duration_seconds));
        }
        Ok(())
    }
}

/// A complete tilt configuration. Every variant is matched explicitly at
/// the boundary; there is no fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltConfig {
    Static(StaticPose),
    Animated(AnimatedCycle),
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            TiltConfig::Static(pose) => pose.validate(),
            TiltConfig::Animated(cycle) => cycle.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> StaticPose {
        StaticPose {
            corner: Corner::TopRight,
            distortion: 600.0,
            angle_degrees: 12.0,
            step: 1.0,
            shadow_style: None,
        }
    }

    fn cycle() -> AnimatedCycle {
        AnimatedCycle {
            from_corner: Corner::TopMedium,
            direction: Direction::Clockwise,
            distortion: 600.0,
            angle_degrees: 12.0,
            step: 1.0,
            duration_seconds: 4.0,
            shadow_style: Some(ShadowStyle::default()),
        }
    }

    #[test]
    fn test_valid_configs_pass() {
        assert_eq!(TiltConfig::Static(pose()).validate(), Ok(()));
        assert_eq!(TiltConfig::Animated(cycle()).validate(), Ok(()));
    }

    #[test]
    fn test_non_positive_distortion_is_rejected() {
        let bad = StaticPose {
            distortion: 0.0,
            ..pose()
        };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::NonPositiveDistortion(0.0))
        );
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let bad = AnimatedCycle {
            duration_seconds: -1.0,
            ..cycle()
        };
        assert_eq!(bad.validate(), Err(ConfigError::NonPositiveDuration(-1.0)));
    }
}
