//! Motion - Animation Parameter Tables
//!
//! Pure easing curves, enter presets and interaction mappings, plus the two
//! small bridges that turn them into GPUI animations and styles.
//!
//! ```text
//! AnimationStyle ──► Transition ──► gpui::Animation (eased delta)
//!       │                                   │
//!       └──────► sample(delta) ──► MotionTarget ──► apply_motion(element)
//! ```

pub mod easing;
pub mod interaction;
pub mod preset;

use std::time::Duration;

use gpui::{Animation, Styled, px};

pub use easing::Easing;
pub use interaction::{Interaction, InteractionPreset};
pub use preset::{AnimationStyle, MotionTarget, Transition};

/// Build a GPUI animation whose delta is already eased by `transition`.
///
/// GPUI has no notion of delay, so the delay is folded into the total
/// duration and the first part of the timeline holds at zero.
pub fn gpui_animation(transition: Transition) -> Animation {
    let total = transition.total().max(Duration::from_millis(1));
    Animation::new(total).with_easing(move |t| transition.progress(total.mul_f32(t)))
}

/// Apply opacity and offset of a motion target. Scale is left to callers
/// that know their own size.
pub fn apply_motion<E: Styled>(element: E, target: MotionTarget) -> E {
    element
        .relative()
        .left(px(target.offset_x))
        .top(px(target.offset_y))
        .opacity(target.opacity)
}
