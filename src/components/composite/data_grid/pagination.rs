//! Pagination
//!
//! Page state for the DataGrid and the page navigation bar that renders it.

use std::ops::Range;
use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
};
use tracing::warn;

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::theme::Theme;

/// Current page (1-based) and page size
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
    options: Vec<usize>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE).with_options(DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl PaginationState {
    /// A page size of zero is raised to one
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            options: Vec::new(),
        }
    }

    /// Page sizes offered by the bar. Zeros are dropped.
    pub fn with_options(mut self, mut options: Vec<usize>) -> Self {
        options.retain(|size| *size > 0);
        options.sort_unstable();
        options.dedup();
        self.options = options;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    /// Request a page. Zero becomes page 1; the upper bound is clamped
    /// against the row count with [`clamp`](Self::clamp).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size and go back to page 1. Zero is rejected.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            warn!("Ignoring page size of zero");
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// `ceil(total / page_size)`, at least 1
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Pull the page back into `[1, total_pages]`
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.total_pages(total));
    }

    /// Index range of the current page within `total` rows
    pub fn range(&self, total: usize) -> Range<usize> {
        let page = self.page.clamp(1, self.total_pages(total));
        let start = ((page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App)>;

/// Pagination bar
#[derive(IntoElement)]
pub struct Pagination {
    id: ElementId,
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    items_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_page_size_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a pagination bar for `total_items` rows
    pub fn new(id: impl Into<ElementId>, state: &PaginationState, total_items: usize) -> Self {
        let total_pages = state.total_pages(total_items);
        Self {
            id: id.into(),
            current_page: state.page().clamp(1, total_pages),
            total_pages,
            total_items,
            page_size: state.page_size(),
            page_size_options: state.options().to_vec(),
            items_label: "items".into(),
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the page size change handler
    pub fn on_page_size_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_size_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        &self,
        suffix: &'static str,
        label: &'static str,
        target: Option<usize>,
        cx: &App,
    ) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let enabled = target.is_some();
        let handler = self.on_page_change.clone();

        div()
            .id(SharedString::from(format!("{}-{suffix}", self.id)))
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                palette.text_primary
            } else {
                palette.text_muted
            })
            .child(label)
            .when(enabled, |btn| {
                btn.cursor_pointer()
                    .hover(move |s| s.bg(palette.surface_hover))
            })
            .when_some(target.zip(handler), |btn, (page, handler)| {
                btn.on_click(move |_: &ClickEvent, window, cx| handler(page, window, cx))
            })
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        let current = self.current_page;
        let total = self.total_pages;
        let prev = (current > 1).then(|| current - 1);
        let next = (current < total).then(|| current + 1);

        let size_options = self.page_size_options.iter().map(|&size| {
            let selected = size == self.page_size;
            let handler = self.on_page_size_change.clone();
            div()
                .id(SharedString::from(format!("{}-size-{size}", self.id)))
                .px_2()
                .py_0p5()
                .rounded_sm()
                .text_xs()
                .cursor_pointer()
                .when(selected, |chip| {
                    chip.bg(palette.accent).text_color(palette.accent_text)
                })
                .when(!selected, |chip| {
                    chip.text_color(palette.text_secondary)
                        .hover(move |s| s.bg(palette.surface_hover))
                })
                .child(size.to_string())
                .when_some(handler.filter(|_| !selected), |chip, handler| {
                    chip.on_click(move |_: &ClickEvent, window, cx| handler(size, window, cx))
                })
        });

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(palette.border)
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(palette.text_secondary)
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page size
            .when(!self.page_size_options.is_empty(), |bar| {
                bar.child(
                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .child(
                            div()
                                .text_xs()
                                .text_color(palette.text_muted)
                                .child("Rows per page"),
                        )
                        .children(size_options),
                )
            })
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.nav_button("prev", "←", prev, cx))
                    .child(
                        div()
                            .text_sm()
                            .text_color(palette.text_primary)
                            .child(format!("{} / {}", current, total)),
                    )
                    .child(self.nav_button("next", "→", next, cx)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        let state = PaginationState::new(10);
        assert_eq!(state.total_pages(0), 1);
        assert_eq!(state.total_pages(10), 1);
        assert_eq!(state.total_pages(11), 2);
    }

    #[test]
    fn test_range_slices_current_page() {
        let mut state = PaginationState::new(10);
        state.set_page(3);
        assert_eq!(state.range(25), 20..25);
        state.set_page(2);
        assert_eq!(state.range(25), 10..20);
    }

    #[test]
    fn test_page_beyond_range_clamps() {
        let mut state = PaginationState::new(10);
        state.set_page(9);
        assert_eq!(state.range(25), 20..25);
        state.clamp(25);
        assert_eq!(state.page(), 3);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = PaginationState::new(10);
        state.set_page(3);
        assert!(state.set_page_size(25));
        assert_eq!(state.page(), 1);
        assert!(!state.set_page_size(0));
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn test_zero_page_size_raised() {
        let state = PaginationState::new(0).with_options(vec![0, 25, 5, 25]);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.options(), &[5, 25]);
    }
}
