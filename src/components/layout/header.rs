//! Header Component
//!
//! Page header with title, optional subtitle, right-aligned actions and a
//! light/dark toggle.

use gpui::{
    AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};

use crate::constants::HEADER_HEIGHT;
use crate::motion::{Interaction, InteractionPreset, apply_motion};
use crate::theme::{Palette, Theme, Typography};

/// Header background variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    Solid,
    /// No background, inherits the surface below
    Transparent,
}

impl HeaderVariant {
    fn colors(self, palette: &Palette) -> (Option<gpui::Rgba>, gpui::Rgba, gpui::Rgba) {
        match self {
            Self::Solid => (
                Some(palette.header_bg),
                palette.header_text,
                palette.header_text,
            ),
            Self::Transparent => (None, palette.text_primary, palette.text_secondary),
        }
    }
}

/// Header component
#[derive(IntoElement)]
pub struct Header {
    id: ElementId,
    title: SharedString,
    subtitle: Option<SharedString>,
    variant: HeaderVariant,
    actions: Vec<AnyElement>,
    theme_toggle: bool,
    badge: Option<usize>,
}

impl Header {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            variant: HeaderVariant::default(),
            actions: Vec::new(),
            theme_toggle: false,
            badge: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn variant(mut self, variant: HeaderVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Append a right-aligned action
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }

    /// Show the light/dark switch
    pub fn theme_toggle(mut self) -> Self {
        self.theme_toggle = true;
        self
    }

    /// Counter pill next to the title; hidden at zero
    pub fn badge(mut self, count: usize) -> Self {
        self.badge = Some(count);
        self
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let (bg, title_color, subtitle_color) = self.variant.colors(&palette);
        let dark = cx
            .try_global::<Theme>()
            .is_some_and(|theme| theme.mode().is_dark());
        let hovered = InteractionPreset::BUTTON.target(Interaction::hovered());

        div()
            .id(self.id.clone())
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            .when_some(bg, |el, bg| el.bg(bg))
            .when(self.variant == HeaderVariant::Transparent, |el| {
                el.border_b_1().border_color(palette.border)
            })
            // Left side: title block
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_color(title_color)
                                    .text_size(px(Typography::TEXT_XL))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(self.title),
                            )
                            .when_some(self.subtitle, |el, subtitle| {
                                el.child(
                                    div()
                                        .text_color(subtitle_color)
                                        .text_size(px(Typography::TEXT_SM))
                                        .opacity(0.8)
                                        .child(subtitle),
                                )
                            }),
                    )
                    .when_some(self.badge.filter(|count| *count > 0), |el, count| {
                        el.child(
                            div()
                                .px_2()
                                .rounded_full()
                                .bg(palette.accent)
                                .text_color(palette.accent_text)
                                .text_size(px(Typography::TEXT_XS))
                                .font_weight(FontWeight::BOLD)
                                .child(count.to_string()),
                        )
                    }),
            )
            // Right side: actions and theme switch
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(self.actions)
                    .when(self.theme_toggle, |el| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("{}-theme", self.id)))
                                .px_3()
                                .py_1()
                                .rounded_md()
                                .border_1()
                                .border_color(title_color)
                                .text_color(title_color)
                                .text_size(px(Typography::TEXT_SM))
                                .cursor_pointer()
                                .hover(move |s| apply_motion(s, hovered))
                                .on_click(|_: &ClickEvent, window, cx| Theme::toggle(window, cx))
                                .child(if dark { "☀ Light" } else { "☾ Dark" }),
                        )
                    }),
            )
    }
}
