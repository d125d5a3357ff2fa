//! Workspace - Gallery Shell
//!
//! The workspace holds the header, sidebar and the active page, with the
//! toast overlay drawn above everything.

use gpui::{
    AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
    div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::GalleryPage;
use crate::components::composite::toast_container::ToastContainer;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::features::controls::page::ControlsPage;
use crate::features::feedback::page::FeedbackPage;
use crate::features::grid::page::GridPage;
use crate::theme::Theme;

/// Main workspace containing the gallery layout
pub struct Workspace {
    entities: AppEntities,
    sidebar: Entity<Sidebar>,
    toasts: Entity<ToastContainer>,
    // Page views, created on first visit
    controls_page: Option<Entity<ControlsPage>>,
    feedback_page: Option<Entity<FeedbackPage>>,
    grid_page: Option<Entity<GridPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let sidebar = cx.new(|cx| Sidebar::new(entities.navigation.clone(), cx));
        let toasts = cx.new(|cx| ToastContainer::new(entities.toasts.clone(), cx));

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            sidebar,
            toasts,
            controls_page: None,
            feedback_page: None,
            grid_page: None,
        }
    }

    /// Get or create the view for a page
    fn page_view(
        &mut self,
        page: GalleryPage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match page {
            GalleryPage::Controls => self
                .controls_page
                .get_or_insert_with(|| cx.new(|_| ControlsPage::new()))
                .clone()
                .into_any_element(),
            GalleryPage::Feedback => {
                let entities = self.entities.clone();
                self.feedback_page
                    .get_or_insert_with(|| cx.new(|cx| FeedbackPage::new(entities, cx)))
                    .clone()
                    .into_any_element()
            }
            GalleryPage::Grid => {
                let entities = self.entities.clone();
                self.grid_page
                    .get_or_insert_with(|| cx.new(|cx| GridPage::new(entities, window, cx)))
                    .clone()
                    .into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let (active_page, can_go_back) = {
            let nav = self.entities.navigation.read(cx);
            (nav.active_page, nav.can_go_back())
        };
        let toast_count = self.entities.toasts.read(cx).len();
        let content = self.page_view(active_page, window, cx);
        let navigation = self.entities.navigation.clone();

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(palette.app_bg)
            .text_color(palette.text_primary)
            .child(
                Header::new("gallery-header", active_page.title())
                    .subtitle(active_page.description())
                    .badge(toast_count)
                    .when(can_go_back, |header| {
                        header.action(
                            Button::ghost("nav-back", "← Back")
                                .size(ButtonSize::Small)
                                .on_click(move |_: &ClickEvent, _window, cx| {
                                    navigation.update(cx, |nav, cx| {
                                        if nav.back().is_some() {
                                            cx.notify();
                                        }
                                    });
                                }),
                        )
                    })
                    .theme_toggle(),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .child(content),
                    ),
            )
            .child(self.toasts.clone())
    }
}
