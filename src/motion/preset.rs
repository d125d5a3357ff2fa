//! Animation presets
//!
//! Enter/exit animation styles expressed as pairs of motion targets plus a
//! transition. Components sample these with the progress GPUI hands to an
//! animation closure.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use crate::constants::ENTER_DURATION_MS;

/// Visual properties an animation drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl MotionTarget {
    /// Fully visible, untransformed
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, untransformed
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Linear interpolation between two targets. `t` is not clamped so
    /// overshooting curves carry through.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

impl Default for MotionTarget {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Timing for one animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Wall time from start to settle, delay included
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased progress after `elapsed` since the animation was triggered
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return if self.duration.is_zero() && elapsed >= self.delay {
                1.0
            } else {
                0.0
            };
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(t)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(ENTER_DURATION_MS), Easing::EaseOut)
    }
}

/// Entry animation styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    /// No animation
    None,
    /// Opacity only
    #[default]
    Fade,
    /// Rises into place from below
    SlideUp,
    /// Drops into place from above
    SlideDown,
    /// Enters from the right edge moving left
    SlideLeft,
    /// Enters from the left edge moving right
    SlideRight,
    /// Grows from slightly smaller
    Scale,
    /// Falls in and bounces
    Bounce,
}

impl AnimationStyle {
    /// Where the element starts
    pub fn initial(self) -> MotionTarget {
        match self {
            Self::None => MotionTarget::IDENTITY,
            Self::Fade => MotionTarget::HIDDEN,
            Self::SlideUp => MotionTarget::HIDDEN.with_offset(0.0, 16.0),
            Self::SlideDown => MotionTarget::HIDDEN.with_offset(0.0, -16.0),
            Self::SlideLeft => MotionTarget::HIDDEN.with_offset(24.0, 0.0),
            Self::SlideRight => MotionTarget::HIDDEN.with_offset(-24.0, 0.0),
            Self::Scale => MotionTarget::HIDDEN.with_scale(0.92),
            Self::Bounce => MotionTarget::HIDDEN.with_offset(0.0, -24.0),
        }
    }

    /// Where the element settles
    pub fn animate(self) -> MotionTarget {
        MotionTarget::IDENTITY
    }

    pub fn transition(self) -> Transition {
        match self {
            Self::None => Transition::new(Duration::ZERO, Easing::Linear),
            Self::Bounce => Transition::new(Duration::from_millis(480), Easing::BounceOut),
            Self::Scale => Transition::new(Duration::from_millis(ENTER_DURATION_MS), Easing::BackOut),
            _ => Transition::default(),
        }
    }

    /// Target at raw animation progress `t` (already eased by the caller)
    pub fn sample(self, t: f32) -> MotionTarget {
        self.initial().lerp(&self.animate(), t)
    }

    /// Target after `elapsed` using this style's own transition
    pub fn at(self, elapsed: Duration) -> MotionTarget {
        self.sample(self.transition().progress(elapsed))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Fade => "Fade",
            Self::SlideUp => "Slide up",
            Self::SlideDown => "Slide down",
            Self::SlideLeft => "Slide left",
            Self::SlideRight => "Slide right",
            Self::Scale => "Scale",
            Self::Bounce => "Bounce",
        }
    }

    pub fn all() -> &'static [AnimationStyle] {
        &[
            Self::None,
            Self::Fade,
            Self::SlideUp,
            Self::SlideDown,
            Self::SlideLeft,
            Self::SlideRight,
            Self::Scale,
            Self::Bounce,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_settles_at_identity() {
        for style in AnimationStyle::all() {
            let settled = style.at(style.transition().total() + Duration::from_millis(1));
            assert_eq!(settled, MotionTarget::IDENTITY, "{style:?}");
        }
    }

    #[test]
    fn test_slide_up_starts_below_and_hidden() {
        let start = AnimationStyle::SlideUp.at(Duration::ZERO);
        assert_eq!(start.opacity, 0.0);
        assert!(start.offset_y > 0.0);
    }

    #[test]
    fn test_none_style_is_immediate() {
        assert_eq!(AnimationStyle::None.at(Duration::ZERO), MotionTarget::IDENTITY);
    }

    #[test]
    fn test_transition_respects_delay() {
        let transition = Transition::new(Duration::from_millis(100), Easing::Linear)
            .with_delay(Duration::from_millis(50));
        assert_eq!(transition.progress(Duration::from_millis(40)), 0.0);
        let mid = transition.progress(Duration::from_millis(100));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(transition.progress(Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn test_lerp_clamps_opacity_only() {
        let from = MotionTarget::HIDDEN.with_offset(0.0, 10.0);
        let over = from.lerp(&MotionTarget::IDENTITY, 1.2);
        assert_eq!(over.opacity, 1.0);
        assert!(over.offset_y < 0.0);
    }

    #[test]
    fn test_style_parses_from_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            style: AnimationStyle,
        }
        let holder: Holder = toml::from_str("style = \"slide_left\"").expect("parse");
        assert_eq!(holder.style, AnimationStyle::SlideLeft);
    }
}
