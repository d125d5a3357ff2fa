//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::navigation::{GalleryPage, NavigationState};
use crate::theme::{Palette, Theme, Typography};

/// Sidebar component
pub struct Sidebar {
    navigation: Entity<NavigationState>,
}

impl Sidebar {
    pub fn new(navigation: Entity<NavigationState>, cx: &mut Context<Self>) -> Self {
        cx.observe(&navigation, |_this, _, cx| cx.notify()).detach();
        Self { navigation }
    }

    fn render_nav_item(
        &self,
        page: GalleryPage,
        active_page: GalleryPage,
        palette: &Palette,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let navigation = self.navigation.clone();
        let hover_bg = palette.surface_hover;

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .border_l_2()
            .text_size(px(Typography::TEXT_SM))
            .cursor_pointer()
            .when(is_active, |el| {
                el.bg(palette.surface_hover)
                    .border_color(palette.accent)
                    .text_color(palette.accent)
            })
            .when(!is_active, |el| {
                el.border_color(gpui::transparent_black())
                    .text_color(palette.text_secondary)
            })
            .hover(move |s| s.bg(hover_bg))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                navigation.update(cx, |nav, cx| {
                    if nav.set_active_page(page) {
                        cx.notify();
                    }
                });
            })
            .child(page.title())
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let active_page = self.navigation.read(cx).active_page;

        div()
            .w(px(180.0))
            .h_full()
            .flex_none()
            .bg(palette.surface)
            .border_r_1()
            .border_color(palette.border)
            .flex()
            .flex_col()
            .pt_4()
            .children(
                GalleryPage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page, &palette)),
            )
    }
}
