//! ToastContainer - Overlay Rendering the Toast Store
//!
//! Observes the store, renders one stack per screen anchor and owns the
//! tick task that expires toasts and refreshes their progress bars.
//!
//! ```text
//! store changed ──► ensure_ticking ──► every 50ms: tick(now) + redraw
//!                                            │
//!                     no scheduled toast ◄───┘ (task finishes)
//! ```

use std::time::{Duration, Instant};

use gpui::{
    AnimationExt, ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Task, Window, div,
    prelude::*, px,
};
use tracing::debug;

use super::notification::{severity_badge, severity_color};
use crate::components::primitives::progress_bar::ProgressBar;
use crate::constants::{TOAST_TICK_MS, TOAST_WIDTH};
use crate::motion::{Interaction, InteractionPreset, apply_motion, gpui_animation};
use crate::state::{ToastId, ToastItem, ToastPosition, ToastStore, dismiss_toast};
use crate::theme::{Palette, Theme, Typography};

/// Toast overlay view
pub struct ToastContainer {
    store: Entity<ToastStore>,
    tick_task: Option<Task<()>>,
    ticking: bool,
}

impl ToastContainer {
    pub fn new(store: Entity<ToastStore>, cx: &mut Context<Self>) -> Self {
        cx.observe(&store, |this, _, cx| {
            this.ensure_ticking(cx);
            cx.notify();
        })
        .detach();

        let mut container = Self {
            store,
            tick_task: None,
            ticking: false,
        };
        container.ensure_ticking(cx);
        container
    }

    /// Start the tick loop if a toast is counting down and none is running
    fn ensure_ticking(&mut self, cx: &mut Context<Self>) {
        if self.ticking || !self.store.read(cx).needs_tick() {
            return;
        }
        self.ticking = true;
        debug!("Toast tick started");
        self.tick_task = Some(cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(TOAST_TICK_MS))
                    .await;
                let keep_going = this
                    .update(cx, |this, cx| this.tick(Instant::now(), cx))
                    .unwrap_or(false);
                if !keep_going {
                    break;
                }
            }
        }));
    }

    /// One tick: drop expired toasts and redraw progress. Returns whether to keep ticking.
    fn tick(&mut self, now: Instant, cx: &mut Context<Self>) -> bool {
        let expired = self.store.update(cx, |store, cx| {
            let expired = store.tick(now);
            if !expired.is_empty() {
                cx.notify();
            }
            expired
        });
        if !expired.is_empty() {
            debug!(count = expired.len(), "Toasts expired");
        }
        cx.notify();

        let keep_going = self.store.read(cx).needs_tick();
        if !keep_going {
            self.ticking = false;
            debug!("Toast tick stopped");
        }
        keep_going
    }

    fn set_hovered(&mut self, item_id: ToastId, hovered: bool, cx: &mut Context<Self>) {
        self.store.update(cx, |store, cx| {
            if store.set_hovered(item_id, hovered, Instant::now()) {
                cx.notify();
            }
        });
    }

    fn render_toast(
        &self,
        item: &ToastItem,
        show_progress: bool,
        now: Instant,
        palette: &Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let id = item.id;
        let accent = severity_color(item.severity, palette);
        let style = item.animation;
        let store = self.store.clone();
        let hovered_target = InteractionPreset::TOAST.target(Interaction::hovered());

        let card = div()
            .id(SharedString::from(format!("toast-{id}")))
            .w(px(TOAST_WIDTH))
            .flex()
            .flex_col()
            .rounded_md()
            .overflow_hidden()
            .shadow_lg()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .hover(move |s| apply_motion(s, hovered_target))
            .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
                this.set_hovered(id, *hovered, cx);
            }))
            .child(
                div()
                    .flex()
                    .items_start()
                    .gap_3()
                    .px_4()
                    .py_3()
                    .child(severity_badge(item.severity, palette))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .when_some(item.title.clone(), |el, title| {
                                el.child(
                                    div()
                                        .text_size(px(Typography::TEXT_BASE))
                                        .font_weight(FontWeight::SEMIBOLD)
                                        .text_color(palette.text_primary)
                                        .child(SharedString::from(title.to_string())),
                                )
                            })
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_secondary)
                                    .child(SharedString::from(item.message.to_string())),
                            ),
                    )
                    .child(
                        div()
                            .id(SharedString::from(format!("toast-close-{id}")))
                            .text_color(palette.text_muted)
                            .cursor_pointer()
                            .child("×")
                            .on_click(move |_: &ClickEvent, _window, cx| {
                                dismiss_toast(&store, id, cx);
                            }),
                    ),
            )
            .when(show_progress && !item.timer.is_sticky(), |card| {
                card.child(ProgressBar::new(item.progress_percent(now)).color(accent))
            });

        card.with_animation(
            SharedString::from(format!("toast-enter-{id}")),
            gpui_animation(style.transition()),
            move |el, delta| apply_motion(el, style.sample(delta)),
        )
    }

    fn render_stack(
        &self,
        position: ToastPosition,
        items: &[&ToastItem],
        show_progress: bool,
        now: Instant,
        palette: &Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let toasts: Vec<_> = items
            .iter()
            .map(|item| self.render_toast(item, show_progress, now, palette, cx))
            .collect();

        let stack = div().absolute().flex().gap_2().p_4();
        let stack = if position.is_top() {
            stack.top_0().flex_col()
        } else {
            stack.bottom_0().flex_col_reverse()
        };
        let stack = match position {
            ToastPosition::TopLeft | ToastPosition::BottomLeft => stack.left_0().items_start(),
            ToastPosition::TopRight | ToastPosition::BottomRight => stack.right_0().items_end(),
            ToastPosition::TopCenter | ToastPosition::BottomCenter => {
                stack.left_0().right_0().items_center()
            }
        };
        stack.children(toasts)
    }
}

impl Render for ToastContainer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let now = Instant::now();
        let store = self.store.clone();
        let store = store.read(cx);
        let show_progress = store.config().show_progress;

        let grouped: Vec<(ToastPosition, Vec<ToastItem>)> = ToastPosition::all()
            .iter()
            .map(|&position| {
                let items: Vec<ToastItem> =
                    store.at_position(position).into_iter().cloned().collect();
                (position, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect();

        let stacks: Vec<_> = grouped
            .iter()
            .map(|(position, items)| {
                let refs: Vec<&ToastItem> = items.iter().collect();
                self.render_stack(*position, &refs, show_progress, now, &palette, cx)
            })
            .collect();

        div().absolute().inset_0().children(stacks)
    }
}
