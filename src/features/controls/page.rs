//! Controls Page
//!
//! Every button variant and size, card variants with entry animations,
//! tooltips, progress bars and both header variants.

use gpui::{
    App, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::composite::card::{Card, CardVariant};
use crate::components::layout::header::{Header, HeaderVariant};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::progress_bar::ProgressBar;
use crate::components::primitives::tooltip::{Tooltip, TooltipPlacement};
use crate::motion::AnimationStyle;
use crate::theme::{Palette, Theme, Typography};

const VARIANTS: [(ButtonVariant, &str); 5] = [
    (ButtonVariant::Primary, "Primary"),
    (ButtonVariant::Secondary, "Secondary"),
    (ButtonVariant::Danger, "Danger"),
    (ButtonVariant::Ghost, "Ghost"),
    (ButtonVariant::Outline, "Outline"),
];

/// Controls showcase page
pub struct ControlsPage {
    clicks: usize,
    loading: bool,
    progress: f32,
    /// Bumped to replay entry animations
    replay: usize,
}

impl ControlsPage {
    pub fn new() -> Self {
        Self {
            clicks: 0,
            loading: false,
            progress: 35.0,
            replay: 0,
        }
    }

    fn heading(text: &'static str, palette: &Palette) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_LG))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(palette.text_primary)
            .child(text)
    }

    fn render_buttons(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let sizes = [
            (ButtonSize::Small, "sm"),
            (ButtonSize::Medium, "md"),
            (ButtonSize::Large, "lg"),
        ];
        let rows = sizes.into_iter().map(|(size, size_label)| {
            div()
                .flex()
                .items_center()
                .gap_2()
                .children(VARIANTS.iter().map(|(variant, label)| {
                    Button::new(
                        SharedString::from(format!("btn-{label}-{size_label}")),
                        *label,
                    )
                    .variant(*variant)
                    .size(size)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.clicks += 1;
                        cx.notify();
                    }))
                }))
        });

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Self::heading("Buttons", palette))
            .children(rows)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Button::primary("btn-disabled", "Disabled").disabled(true))
                    .child(
                        Button::secondary("btn-loading", "Save")
                            .loading(self.loading)
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.loading = !this.loading;
                                cx.notify();
                            })),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_muted)
                            .child(format!("{} clicks", self.clicks)),
                    ),
            )
    }

    fn render_cards(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let cards = [
            (CardVariant::Elevated, "Elevated", AnimationStyle::Fade),
            (CardVariant::Outlined, "Outlined", AnimationStyle::SlideUp),
            (CardVariant::Filled, "Filled", AnimationStyle::Scale),
        ];
        let replay = self.replay;

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::heading("Cards", palette))
                    .child(
                        Button::ghost("cards-replay", "Replay entry")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.replay += 1;
                                cx.notify();
                            })),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .children(cards.into_iter().map(|(variant, label, entry)| {
                        Card::new(SharedString::from(format!("card-{label}-{replay}")))
                            .variant(variant)
                            .title(label)
                            .subtitle(format!("{} entry", entry.label()))
                            .hoverable()
                            .entry(entry)
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.clicks += 1;
                                cx.notify();
                            }))
                            .child(
                                div()
                                    .w(px(200.0))
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_secondary)
                                    .child("Hover to lift, click to count."),
                            )
                    })),
            )
    }

    fn render_tooltips(&self, palette: &Palette) -> impl IntoElement {
        let placements = [
            (TooltipPlacement::Top, "Top"),
            (TooltipPlacement::Bottom, "Bottom"),
            (TooltipPlacement::Left, "Left"),
            (TooltipPlacement::Right, "Right"),
        ];
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Self::heading("Tooltips", palette))
            .child(
                div().flex().gap_2().children(placements.into_iter().map(
                    |(placement, label)| {
                        div()
                            .id(SharedString::from(format!("tip-{label}")))
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(palette.border)
                            .text_color(palette.text_primary)
                            .text_size(px(Typography::TEXT_SM))
                            .child(label)
                            .tooltip(move |_window, cx: &mut App| {
                                Tooltip::with_placement(
                                    format!("Slides in from the {}", label.to_lowercase()),
                                    placement,
                                    cx,
                                )
                            })
                    },
                )),
            )
    }

    fn render_progress(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Self::heading("Progress", palette))
            .child(
                div()
                    .w(px(320.0))
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(ProgressBar::new(self.progress).height(6.0))
                    .child(
                        ProgressBar::new(100.0 - self.progress)
                            .height(6.0)
                            .color(palette.success),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(
                        Button::outline("progress-down", "−10")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.progress = (this.progress - 10.0).max(0.0);
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::outline("progress-up", "+10")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.progress = (this.progress + 10.0).min(100.0);
                                cx.notify();
                            })),
                    ),
            )
    }

    fn render_headers(&self, palette: &Palette) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Self::heading("Headers", palette))
            .child(
                div()
                    .rounded_md()
                    .overflow_hidden()
                    .child(
                        Header::new("demo-header-solid", "Solid header")
                            .subtitle("With a right-aligned action")
                            .action(Button::ghost("demo-header-action", "Action").size(ButtonSize::Small)),
                    ),
            )
            .child(
                Header::new("demo-header-transparent", "Transparent header")
                    .variant(HeaderVariant::Transparent)
                    .badge(3),
            )
    }
}

impl Render for ControlsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);

        div()
            .id("controls-page")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .gap_8()
            .child(self.render_buttons(&palette, cx))
            .child(self.render_cards(&palette, cx))
            .child(self.render_tooltips(&palette))
            .child(self.render_progress(&palette, cx))
            .child(self.render_headers(&palette))
    }
}
