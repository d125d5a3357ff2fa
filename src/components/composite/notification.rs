//! Notification Component
//!
//! Inline, in-flow message with severity styling. Shares its look with the
//! toast cards rendered by the toast container.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
    px,
};

use crate::state::ToastSeverity;
use crate::theme::{Palette, Theme, Typography};

type Handler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Accent color for a severity
pub fn severity_color(severity: ToastSeverity, palette: &Palette) -> Rgba {
    match severity {
        ToastSeverity::Info => palette.info,
        ToastSeverity::Success => palette.success,
        ToastSeverity::Warning => palette.warning,
        ToastSeverity::Error => palette.danger,
    }
}

/// Round severity badge
pub fn severity_badge(severity: ToastSeverity, palette: &Palette) -> impl IntoElement {
    div()
        .size(px(20.0))
        .flex_none()
        .rounded_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(severity_color(severity, palette))
        .text_color(palette.text_inverse)
        .text_size(px(Typography::TEXT_XS))
        .font_weight(FontWeight::BOLD)
        .child(severity.glyph())
}

/// Inline notification
#[derive(IntoElement)]
pub struct Notification {
    id: ElementId,
    severity: ToastSeverity,
    title: Option<SharedString>,
    message: SharedString,
    action: Option<(SharedString, Handler)>,
    on_close: Option<Handler>,
}

impl Notification {
    pub fn new(id: impl Into<ElementId>, message: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            severity: ToastSeverity::Info,
            title: None,
            message: message.into(),
            action: None,
            on_close: None,
        }
    }

    pub fn severity(mut self, severity: ToastSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add an action link
    pub fn action(
        mut self,
        label: impl Into<SharedString>,
        handler: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.action = Some((label.into(), Rc::new(handler)));
        self
    }

    /// Show a close button
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Notification {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let accent = severity_color(self.severity, &palette);

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .items_start()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_md()
            .bg(palette.surface)
            .shadow_sm()
            .border_l_4()
            .border_color(accent)
            .child(severity_badge(self.severity, &palette))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .when_some(self.title, |el, title| {
                        el.child(
                            div()
                                .text_size(px(Typography::TEXT_BASE))
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(palette.text_primary)
                                .child(title),
                        )
                    })
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_secondary)
                            .child(self.message),
                    )
                    .when_some(self.action, |el, (label, handler)| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("{}-action", self.id)))
                                .text_size(px(Typography::TEXT_SM))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(accent)
                                .cursor_pointer()
                                .child(label)
                                .on_click(move |_: &ClickEvent, window, cx| handler(window, cx)),
                        )
                    }),
            )
            .when_some(self.on_close, |el, handler| {
                el.child(
                    div()
                        .id(SharedString::from(format!("{}-close", self.id)))
                        .text_color(palette.text_muted)
                        .cursor_pointer()
                        .hover(move |s| s.text_color(palette.text_primary))
                        .child("×")
                        .on_click(move |_: &ClickEvent, window, cx| handler(window, cx)),
                )
            })
    }
}
