//! Card Component
//!
//! A surface for grouping content, with optional title, subtitle and footer.

use gpui::{
    AnimationExt, AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, div, prelude::*, px,
};

use crate::motion::{
    AnimationStyle, Interaction, InteractionPreset, apply_motion, gpui_animation,
};
use crate::theme::{Theme, Typography};

/// Card variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Surface with a drop shadow
    #[default]
    Elevated,
    /// Surface with a border and no shadow
    Outlined,
    /// Tinted surface
    Filled,
}

/// Card component
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    variant: CardVariant,
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    footer: Option<AnyElement>,
    children: Vec<AnyElement>,
    hoverable: bool,
    entry: AnimationStyle,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Card {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: CardVariant::default(),
            title: None,
            subtitle: None,
            footer: None,
            children: Vec::new(),
            hoverable: false,
            entry: AnimationStyle::None,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Lift on hover
    pub fn hoverable(mut self) -> Self {
        self.hoverable = true;
        self
    }

    /// Animate the card in when first rendered
    pub fn entry(mut self, style: AnimationStyle) -> Self {
        self.entry = style;
        self
    }

    /// Make the whole card clickable
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let preset = InteractionPreset::CARD;
        let hovered = preset.target(Interaction::hovered());
        let pressed = preset.target(Interaction::pressed());
        let clickable = self.on_click.is_some();
        let has_heading = self.title.is_some() || self.subtitle.is_some();

        let mut card = div()
            .id(self.id.clone())
            .relative()
            .flex()
            .flex_col()
            .rounded_lg()
            .overflow_hidden();

        card = match self.variant {
            CardVariant::Elevated => card.bg(palette.surface).shadow_md(),
            CardVariant::Outlined => card
                .bg(palette.surface)
                .border_1()
                .border_color(palette.border),
            CardVariant::Filled => card.bg(palette.surface_alt),
        };

        card = card
            .when(self.hoverable, |card| {
                card.hover(move |s| apply_motion(s.shadow_lg(), hovered))
            })
            .when(clickable, |card| {
                card.cursor_pointer()
                    .active(move |s| apply_motion(s, pressed))
            })
            .when(has_heading, |card| {
                card.child(
                    div()
                        .px_5()
                        .pt_4()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .when_some(self.title, |el, title| {
                            el.child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(palette.text_primary)
                                    .child(title),
                            )
                        })
                        .when_some(self.subtitle, |el, subtitle| {
                            el.child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_secondary)
                                    .child(subtitle),
                            )
                        }),
                )
            })
            .child(
                div()
                    .px_5()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(self.children),
            )
            .when_some(self.footer, |card, footer| {
                card.child(
                    div()
                        .px_5()
                        .py_3()
                        .border_t_1()
                        .border_color(palette.border)
                        .child(footer),
                )
            });

        if let Some(handler) = self.on_click {
            card = card.on_click(handler);
        }

        let entry = self.entry;
        if entry == AnimationStyle::None {
            return card.into_any_element();
        }
        card.with_animation(
            SharedString::from(format!("{}-entry", self.id)),
            gpui_animation(entry.transition()),
            move |el, delta| apply_motion(el, entry.sample(delta)),
        )
        .into_any_element()
    }
}
