//! Button Component

use gpui::{
    AnimationExt, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
    px,
};

use crate::motion::{
    AnimationStyle, Interaction, InteractionPreset, apply_motion, gpui_animation,
};
use crate::theme::{Palette, Theme};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (accent fill)
    #[default]
    Primary,
    /// Secondary button (neutral fill)
    Secondary,
    /// Danger button (red fill)
    Danger,
    /// Ghost button (transparent)
    Ghost,
    /// Outline button (transparent with border)
    Outline,
}

impl ButtonVariant {
    /// Background, text, hover background and border colors
    fn colors(self, palette: &Palette) -> (Rgba, Rgba, Rgba, Option<Rgba>) {
        let clear = gpui::rgba(0x00000000);
        match self {
            Self::Primary => (palette.accent, palette.accent_text, palette.accent_hover, None),
            Self::Secondary => (
                palette.secondary,
                palette.text_primary,
                palette.secondary_hover,
                None,
            ),
            Self::Danger => (palette.danger, palette.text_inverse, palette.danger_hover, None),
            Self::Ghost => (clear, palette.text_primary, palette.surface_hover, None),
            Self::Outline => (
                clear,
                palette.accent,
                palette.surface_hover,
                Some(palette.accent),
            ),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    entry: AnimationStyle,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            full_width: false,
            entry: AnimationStyle::None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Animate the button in when first rendered
    pub fn entry(mut self, style: AnimationStyle) -> Self {
        self.entry = style;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let (bg_color, text_color, hover_bg, border) = self.variant.colors(&palette);

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
        };

        let inactive = self.disabled || self.loading;
        let preset = InteractionPreset::BUTTON;
        let hovered = preset.target(Interaction::hovered());
        let pressed = preset.target(Interaction::pressed());

        let label = if self.loading {
            "Loading...".into()
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id.clone())
            .relative()
            .flex()
            .items_center()
            .justify_center()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .opacity(if inactive { 0.5 } else { 1.0 })
            .when(self.full_width, |el| el.w_full())
            .when_some(border, |el, color| el.border_1().border_color(color))
            .child(label);

        if !inactive {
            element = element
                .cursor_pointer()
                .hover(move |s| apply_motion(s.bg(hover_bg), hovered))
                .active(move |s| apply_motion(s, pressed));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        let entry = self.entry;
        if entry == AnimationStyle::None {
            return element.into_any_element();
        }
        element
            .with_animation(
                SharedString::from(format!("{}-entry", self.id)),
                gpui_animation(entry.transition()),
                move |el, delta| apply_motion(el, entry.sample(delta)),
            )
            .into_any_element()
    }
}
