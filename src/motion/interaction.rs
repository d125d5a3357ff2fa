//! Interaction mappings
//!
//! Hover, press and open flags mapped to motion targets per component kind.

use super::preset::MotionTarget;
use crate::constants::HOVER_LIFT_PX;

/// Pointer and visibility flags of one widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub pressed: bool,
    pub open: bool,
}

impl Interaction {
    pub fn hovered() -> Self {
        Self {
            hovered: true,
            open: true,
            ..Default::default()
        }
    }

    pub fn pressed() -> Self {
        Self {
            hovered: true,
            pressed: true,
            open: true,
        }
    }

    pub fn rest() -> Self {
        Self {
            open: true,
            ..Default::default()
        }
    }
}

/// Per-component table of how interactions move the element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionPreset {
    pub hover_lift: f32,
    pub hover_scale: f32,
    pub press_scale: f32,
    pub press_opacity: f32,
    pub closed_opacity: f32,
}

impl InteractionPreset {
    pub const BUTTON: Self = Self {
        hover_lift: 1.0,
        hover_scale: 1.03,
        press_scale: 0.97,
        press_opacity: 0.85,
        closed_opacity: 0.0,
    };

    pub const CARD: Self = Self {
        hover_lift: HOVER_LIFT_PX * 2.0,
        hover_scale: 1.0,
        press_scale: 0.99,
        press_opacity: 0.95,
        closed_opacity: 0.0,
    };

    pub const TOAST: Self = Self {
        hover_lift: 0.0,
        hover_scale: 1.0,
        press_scale: 1.0,
        press_opacity: 1.0,
        closed_opacity: 0.0,
    };

    /// Resolve the target for the given flags. Closed wins over everything,
    /// press wins over hover.
    pub fn target(&self, interaction: Interaction) -> MotionTarget {
        if !interaction.open {
            return MotionTarget {
                opacity: self.closed_opacity,
                ..MotionTarget::IDENTITY
            };
        }
        if interaction.pressed {
            return MotionTarget {
                opacity: self.press_opacity,
                ..MotionTarget::IDENTITY
            }
            .with_scale(self.press_scale);
        }
        if interaction.hovered {
            return MotionTarget::IDENTITY
                .with_offset(0.0, -self.hover_lift)
                .with_scale(self.hover_scale);
        }
        MotionTarget::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_is_identity() {
        assert_eq!(
            InteractionPreset::BUTTON.target(Interaction::rest()),
            MotionTarget::IDENTITY
        );
    }

    #[test]
    fn test_hover_lifts_card() {
        let target = InteractionPreset::CARD.target(Interaction::hovered());
        assert!(target.offset_y < 0.0);
    }

    #[test]
    fn test_press_overrides_hover() {
        let target = InteractionPreset::BUTTON.target(Interaction::pressed());
        assert_eq!(target.scale, InteractionPreset::BUTTON.press_scale);
        assert_eq!(target.offset_y, 0.0);
    }

    #[test]
    fn test_closed_hides() {
        let target = InteractionPreset::BUTTON.target(Interaction::default());
        assert_eq!(target.opacity, 0.0);
    }
}
