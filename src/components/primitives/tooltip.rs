//! Tooltip Component
//!
//! Text tooltip view for GPUI's `.tooltip(...)` hook. GPUI positions the
//! tooltip near the pointer; the placement decides which side it slides in from.

use std::time::Duration;

use gpui::{
    AnimationExt, AnyView, App, AppContext, Context, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, px,
};

use crate::constants::TOOLTIP_FADE_MS;
use crate::motion::{Easing, MotionTarget, Transition, apply_motion, gpui_animation};
use crate::theme::{Theme, Typography};

/// Preferred side of the trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPlacement {
    /// Starting offset, a few pixels back toward the trigger
    fn initial(self) -> MotionTarget {
        let (x, y) = match self {
            Self::Top => (0.0, 4.0),
            Self::Bottom => (0.0, -4.0),
            Self::Left => (4.0, 0.0),
            Self::Right => (-4.0, 0.0),
        };
        MotionTarget::HIDDEN.with_offset(x, y)
    }
}

/// Tooltip view
pub struct Tooltip {
    text: SharedString,
    placement: TooltipPlacement,
}

impl Tooltip {
    /// Build a tooltip view for `.tooltip(move |window, cx| Tooltip::text(..., cx))`
    pub fn text(text: impl Into<SharedString>, cx: &mut App) -> AnyView {
        Self::with_placement(text, TooltipPlacement::default(), cx)
    }

    pub fn with_placement(
        text: impl Into<SharedString>,
        placement: TooltipPlacement,
        cx: &mut App,
    ) -> AnyView {
        let text = text.into();
        cx.new(|_| Self { text, placement }).into()
    }
}

impl Render for Tooltip {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let initial = self.placement.initial();
        let transition = Transition::new(Duration::from_millis(TOOLTIP_FADE_MS), Easing::EaseOut);

        div()
            .px_2()
            .py_1()
            .rounded_md()
            .shadow_md()
            .bg(palette.tooltip_bg)
            .text_color(palette.tooltip_text)
            .text_size(px(Typography::TEXT_XS))
            .child(self.text.clone())
            .with_animation(
                "tooltip-fade",
                gpui_animation(transition),
                move |el, delta| apply_motion(el, initial.lerp(&MotionTarget::IDENTITY, delta)),
            )
    }
}
