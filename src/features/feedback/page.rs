//! Feedback Page
//!
//! Toast playground, inline notifications and a modal dialog.

use gpui::{
    App, ClickEvent, Context, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};

use super::controller::FeedbackController;
use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::composite::modal::{Modal, ModalSize};
use crate::components::composite::notification::Notification;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::motion::AnimationStyle;
use crate::state::{Toast, ToastPosition, ToastSeverity, show_toast};
use crate::theme::{Palette, Theme, Typography};

const SEVERITIES: [ToastSeverity; 4] = [
    ToastSeverity::Info,
    ToastSeverity::Success,
    ToastSeverity::Warning,
    ToastSeverity::Error,
];

/// Inline notification shown on the page
#[derive(Debug, Clone)]
struct InlineNote {
    id: usize,
    severity: ToastSeverity,
    message: SharedString,
}

/// Feedback showcase page
pub struct FeedbackPage {
    entities: AppEntities,
    controller: FeedbackController,
    notes: Vec<InlineNote>,
    next_note: usize,
    modal_open: bool,
    modal_size: ModalSize,
}

impl FeedbackPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Refresh the live counter
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();

        let notes = SEVERITIES
            .iter()
            .enumerate()
            .map(|(id, severity)| InlineNote {
                id,
                severity: *severity,
                message: format!("{} notifications stay in the page flow.", severity.label())
                    .into(),
            })
            .collect::<Vec<_>>();

        Self {
            controller: FeedbackController::new(entities.clone()),
            entities,
            next_note: notes.len(),
            notes,
            modal_open: false,
            modal_size: ModalSize::Medium,
        }
    }

    fn chip(
        id: impl Into<ElementId>,
        label: &'static str,
        selected: bool,
        palette: &Palette,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_full()
            .border_1()
            .cursor_pointer()
            .text_size(px(Typography::TEXT_SM))
            .when(selected, |el| {
                el.bg(palette.accent)
                    .border_color(palette.accent)
                    .text_color(palette.accent_text)
            })
            .when(!selected, |el| {
                el.border_color(palette.border)
                    .text_color(palette.text_secondary)
                    .hover(|s| s.bg(palette.surface_hover))
            })
            .child(label)
    }

    fn label(text: &'static str, palette: &Palette) -> impl IntoElement {
        div()
            .w(px(90.0))
            .flex_none()
            .text_size(px(Typography::TEXT_SM))
            .font_weight(FontWeight::MEDIUM)
            .text_color(palette.text_secondary)
            .child(text)
    }

    fn render_toast_playground(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let draft = &self.controller.draft;
        let active = self.entities.toasts.read(cx).len();

        let severities = SEVERITIES.iter().map(|&severity| {
            Self::chip(
                SharedString::from(format!("sev-{}", severity.label())),
                severity.label(),
                draft.severity == severity,
                palette,
            )
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.controller.draft.severity = severity;
                cx.notify();
            }))
        });

        let positions = ToastPosition::all().iter().map(|&position| {
            Self::chip(
                SharedString::from(format!("pos-{}", position.label())),
                position.label(),
                draft.position == position,
                palette,
            )
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.controller.draft.position = position;
                cx.notify();
            }))
        });

        let natural = Self::chip("anim-natural", "Natural", draft.animation.is_none(), palette)
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.controller.draft.animation = None;
                cx.notify();
            }));
        let animations = AnimationStyle::all().iter().map(|&style| {
            Self::chip(
                SharedString::from(format!("anim-{}", style.label())),
                style.label(),
                draft.animation == Some(style),
                palette,
            )
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.controller.draft.animation = Some(style);
                cx.notify();
            }))
        });

        let sticky = Self::chip("opt-sticky", "Sticky", draft.sticky, palette).on_click(
            cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.controller.draft.sticky = !this.controller.draft.sticky;
                cx.notify();
            }),
        );
        let pause = Self::chip("opt-pause", "Pause on hover", draft.pause_on_hover, palette)
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.controller.draft.pause_on_hover = !this.controller.draft.pause_on_hover;
                cx.notify();
            }));

        let row = |label: &'static str| div().flex().items_center().gap_2().child(Self::label(label, palette));

        Card::new("toast-playground")
            .title("Toasts")
            .subtitle(format!(
                "{active} on screen, at most {}",
                self.entities.config.toast.max_visible
            ))
            .child(row("Severity").flex_wrap().children(severities))
            .child(row("Position").flex_wrap().children(positions))
            .child(row("Animation").flex_wrap().child(natural).children(animations))
            .child(row("Options").child(sticky).child(pause))
            .footer(
                div()
                    .flex()
                    .gap_2()
                    .child(
                        Button::primary("toast-show", "Show toast").on_click(cx.listener(
                            |this, _: &ClickEvent, _window, cx| {
                                this.controller.show(cx);
                            },
                        )),
                    )
                    .child(
                        Button::secondary("toast-burst", "One per anchor").on_click(cx.listener(
                            |this, _: &ClickEvent, _window, cx| {
                                this.controller.show_burst(cx);
                            },
                        )),
                    )
                    .child(
                        Button::ghost("toast-clear", "Clear all").on_click(cx.listener(
                            |this, _: &ClickEvent, _window, cx| {
                                this.controller.clear(cx);
                            },
                        )),
                    ),
            )
    }

    fn render_notifications(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let notes = self.notes.iter().map(|note| {
            let id = note.id;
            let toasts = self.entities.toasts.clone();
            let severity = note.severity;
            let weak = cx.entity().downgrade();
            Notification::new(SharedString::from(format!("note-{id}")), note.message.clone())
                .severity(severity)
                .title(severity.label())
                .action("Show as toast", {
                    let message = note.message.clone();
                    move |_window, cx: &mut App| {
                        show_toast(
                            &toasts,
                            Toast::new(message.to_string()).severity(severity),
                            cx,
                        );
                    }
                })
                .on_close(move |_window, cx: &mut App| {
                    let _ = weak.update(cx, |this, cx| {
                        this.notes.retain(|note| note.id != id);
                        cx.notify();
                    });
                })
        });

        Card::new("notifications")
            .title("Notifications")
            .subtitle("Inline, dismissible, with an optional action")
            .children(notes)
            .footer(
                Button::outline("note-add", "Add notification")
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        let id = this.next_note;
                        this.next_note += 1;
                        let severity = SEVERITIES[id % SEVERITIES.len()];
                        this.notes.push(InlineNote {
                            id,
                            severity,
                            message: format!("Notification #{id}").into(),
                        });
                        cx.notify();
                    })),
            )
    }

    fn render_modal_trigger(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let sizes = [
            ("modal-small", "Small", ModalSize::Small),
            ("modal-medium", "Medium", ModalSize::Medium),
            ("modal-large", "Large", ModalSize::Large),
        ];
        Card::new("modal-demo")
            .title("Modal")
            .subtitle("Fades and scales in over a dimmed backdrop")
            .child(div().flex().gap_2().children(sizes.into_iter().map(
                |(id, label, size)| {
                    Button::outline(id, label).on_click(cx.listener(
                        move |this, _: &ClickEvent, _window, cx| {
                            this.modal_size = size;
                            this.modal_open = true;
                            cx.notify();
                        },
                    ))
                },
            )))
    }

    fn render_modal(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let weak = cx.entity().downgrade();
        let close = move |_window: &mut Window, cx: &mut App| {
            let _ = weak.update(cx, |this, cx| {
                this.modal_open = false;
                cx.notify();
            });
        };
        let confirm_toasts = self.entities.toasts.clone();

        Modal::new("demo-modal", "Discard changes?")
            .open(self.modal_open)
            .size(self.modal_size)
            .on_close(close.clone())
            .child(
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(palette.text_secondary)
                    .child("Unsaved edits to this report will be lost."),
            )
            .footer(
                div()
                    .flex()
                    .gap_2()
                    .child(Button::ghost("modal-cancel", "Cancel").on_click({
                        let close = close.clone();
                        move |_: &ClickEvent, window, cx| close(window, cx)
                    }))
                    .child(Button::danger("modal-confirm", "Discard").on_click(
                        move |_: &ClickEvent, window, cx| {
                            show_toast(
                                &confirm_toasts,
                                Toast::warning("Changes discarded"),
                                cx,
                            );
                            close(window, cx);
                        },
                    )),
            )
    }
}

impl Render for FeedbackPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);

        div()
            .size_full()
            .relative()
            .child(
                div()
                    .id("feedback-page")
                    .size_full()
                    .overflow_y_scroll()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(self.render_toast_playground(&palette, cx))
                    .child(self.render_notifications(cx))
                    .child(self.render_modal_trigger(cx)),
            )
            .child(self.render_modal(&palette, cx))
    }
}
