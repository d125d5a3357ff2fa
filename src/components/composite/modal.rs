//! Modal Component
//!
//! A modal dialog over a dimmed backdrop. Opens with a fade and scale-in.

use std::rc::Rc;

use gpui::{
    AnimationExt, AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, div, prelude::*, px,
};

use crate::motion::{AnimationStyle, apply_motion, gpui_animation};
use crate::theme::{Theme, Typography};

/// Dialog width preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    pub fn width(self) -> f32 {
        match self {
            Self::Small => 360.0,
            Self::Medium => 480.0,
            Self::Large => 720.0,
        }
    }
}

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    id: ElementId,
    open: bool,
    title: SharedString,
    size: ModalSize,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    on_close: Option<CloseHandler>,
    show_close_button: bool,
    close_on_backdrop: bool,
}

impl Modal {
    /// Create a new modal
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            open: true,
            title: title.into(),
            size: ModalSize::default(),
            children: Vec::new(),
            footer: None,
            on_close: None,
            show_close_button: true,
            close_on_backdrop: true,
        }
    }

    /// A closed modal renders nothing
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Hide the close button
    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }

    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }
}

impl ParentElement for Modal {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        if !self.open {
            return div().into_any_element();
        }
        let palette = Theme::palette_of(cx);
        let width = self.size.width();
        let style = AnimationStyle::Scale;
        let backdrop_close = self.on_close.clone().filter(|_| self.close_on_backdrop);
        let button_close = self.on_close.clone();

        let dialog = div()
            .id(SharedString::from(format!("{}-dialog", self.id)))
            .bg(palette.surface)
            .rounded_lg()
            .shadow_lg()
            .max_w(px(width))
            .flex()
            .flex_col()
            // Clicks inside the dialog never reach the backdrop
            .on_click(|_: &ClickEvent, _window, cx| cx.stop_propagation())
            // Header
            .child(
                div()
                    .px_6()
                    .py_4()
                    .border_b_1()
                    .border_color(palette.border)
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(palette.text_primary)
                            .child(self.title),
                    )
                    .when(self.show_close_button, |el| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("{}-close", self.id)))
                                .size(px(24.0))
                                .rounded_sm()
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(palette.text_muted)
                                .text_size(px(Typography::TEXT_LG))
                                .cursor_pointer()
                                .hover(move |s| s.bg(palette.surface_hover))
                                .when_some(button_close, |el, handler| {
                                    el.on_click(move |_: &ClickEvent, window, cx| {
                                        handler(window, cx);
                                    })
                                })
                                .child("×"),
                        )
                    }),
            )
            // Content
            .child(
                div()
                    .px_6()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .children(self.children),
            )
            .when_some(self.footer, |el, footer| {
                el.child(
                    div()
                        .px_6()
                        .py_3()
                        .border_t_1()
                        .border_color(palette.border)
                        .flex()
                        .justify_end()
                        .gap_2()
                        .child(footer),
                )
            })
            .with_animation(
                SharedString::from(format!("{}-open", self.id)),
                gpui_animation(style.transition()),
                move |el, delta| {
                    let target = style.sample(delta);
                    apply_motion(el.w(px(width * target.scale)), target)
                },
            );

        // Backdrop
        div()
            .id(self.id)
            .absolute()
            .inset_0()
            .occlude()
            .bg(palette.backdrop)
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(dialog)
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_increase() {
        assert!(ModalSize::Small.width() < ModalSize::Medium.width());
        assert!(ModalSize::Medium.width() < ModalSize::Large.width());
    }
}
