//! DataGrid Component
//!
//! Sortable, filterable, paginated grid. Local mode runs the pipeline over
//! an in-memory row set on every render; remote mode forwards the query to a
//! [`DataSource`] and renders the page it returns.

use std::sync::Arc;
use std::time::Duration;

use gpui::{
    AnimationExt, AnyElement, ClickEvent, Context, Entity, EventEmitter, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Task, Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};
use tracing::{debug, error, warn};

use super::column::{Column, ColumnWidth, FilterKind};
use super::data_source::{DataSource, FetchPage};
use super::filter::{ColumnFilter, FilterOperator};
use super::pagination::{Pagination, PaginationState};
use super::pipeline::{GridQuery, filter_rows, run_pipeline};
use super::sort::{SortDirection, SortKey};
use crate::constants::{GRID_HEADER_HEIGHT, GRID_ROW_HEIGHT};
use crate::domain::GridConfig;
use crate::error::Result;
use crate::motion::{AnimationStyle, apply_motion, gpui_animation};
use crate::theme::{Palette, Theme};

/// Row stagger for the entry animation
const ROW_STAGGER_MS: u64 = 18;

/// Where rows come from
pub enum GridSource<R> {
    /// Full row set; filtered, sorted and paged locally
    Local(Arc<Vec<R>>),
    /// Server-side paging
    Remote(Arc<dyn DataSource<R>>),
}

impl<R> Clone for GridSource<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Local(rows) => Self::Local(rows.clone()),
            Self::Remote(source) => Self::Remote(source.clone()),
        }
    }
}

/// Notifications for the owner of a grid
#[derive(Debug, Clone, PartialEq)]
pub enum DataGridEvent {
    SortChanged(Vec<SortKey>),
    FiltersChanged,
    PageChanged { page: usize, page_size: usize },
    Loaded { total: usize },
    FetchFailed(SharedString),
}

/// Last page returned by a remote source
struct RemotePage<R> {
    rows: Vec<R>,
    total: usize,
    loading: bool,
    /// Incremented per request; responses with an older number are dropped
    seq: u64,
}

/// What a fetch response did to the remote page
#[derive(Debug, Clone, PartialEq)]
enum FetchOutcome {
    /// Superseded by a newer request
    Stale,
    Loaded { total: usize },
    /// Previous rows are kept
    Failed(SharedString),
    /// The requested page no longer exists; pagination was clamped
    Refetch,
}

impl<R> RemotePage<R> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loading: false,
            seq: 0,
        }
    }

    /// Start a request and return its sequence number
    fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    fn apply(
        &mut self,
        seq: u64,
        result: Result<FetchPage<R>>,
        pagination: &mut PaginationState,
    ) -> FetchOutcome {
        if seq != self.seq {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                if page.rows.is_empty() && pagination.page() > pagination.total_pages(page.total) {
                    pagination.clamp(page.total);
                    self.total = page.total;
                    return FetchOutcome::Refetch;
                }
                self.rows = page.rows;
                self.total = page.total;
                FetchOutcome::Loaded { total: page.total }
            }
            Err(e) => FetchOutcome::Failed(e.to_string().into()),
        }
    }
}

/// DataGrid component
pub struct DataGrid<R: Clone + Send + Sync + 'static> {
    id: SharedString,
    columns: Arc<Vec<Column<R>>>,
    source: GridSource<R>,
    query: GridQuery,
    remote: RemotePage<R>,
    fetch_task: Option<Task<()>>,
    search: Entity<InputState>,
    column_inputs: Vec<(SharedString, Entity<InputState>)>,
    row_height: f32,
    header_height: f32,
    empty_message: SharedString,
    entry_animation: AnimationStyle,
    /// Bumped whenever the visible page changes so rows animate in again
    generation: usize,
    _subscriptions: Vec<Subscription>,
}

impl<R: Clone + Send + Sync + 'static> EventEmitter<DataGridEvent> for DataGrid<R> {}

impl<R: Clone + Send + Sync + 'static> DataGrid<R> {
    /// Create a new data grid. Remote grids fetch their first page right away.
    pub fn new(
        id: impl Into<SharedString>,
        columns: Vec<Column<R>>,
        source: GridSource<R>,
        config: &GridConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let id = id.into();
        let mut subscriptions = Vec::new();

        let search = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder("Search all columns")
        });
        subscriptions.push(cx.subscribe(&search, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let text = state.read(cx).value().to_string();
                this.set_global_filter(text, cx);
            }
        }));

        let mut column_inputs = Vec::new();
        for column in columns.iter().filter(|c| c.visible) {
            let placeholder = match column.filter_kind {
                FilterKind::Text => "Filter",
                FilterKind::Number => "=, >, <, a..b",
                FilterKind::Date => "YYYY-MM-DD",
                FilterKind::Select(_) | FilterKind::Custom => continue,
            };
            let input = cx.new(|cx| {
                InputState::new(window, cx)
                    .clean_on_escape()
                    .placeholder(placeholder)
            });
            let column_id = column.id.clone();
            let kind = column.filter_kind.clone();
            subscriptions.push(cx.subscribe(&input, move |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let text = state.read(cx).value().to_string();
                    this.set_filter(ColumnFilter::from_input(column_id.clone(), &kind, &text), cx);
                }
            }));
            column_inputs.push((column.id.clone(), input));
        }

        let mut grid = Self {
            id,
            columns: Arc::new(columns),
            source,
            query: GridQuery::new(config.pagination(), config.multi_sort),
            remote: RemotePage::new(),
            fetch_task: None,
            search,
            column_inputs,
            row_height: GRID_ROW_HEIGHT,
            header_height: GRID_HEADER_HEIGHT,
            empty_message: "No data".into(),
            entry_animation: AnimationStyle::Fade,
            generation: 0,
            _subscriptions: subscriptions,
        };
        grid.refresh(cx);
        grid
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    pub fn set_entry_animation(&mut self, style: AnimationStyle, cx: &mut Context<Self>) {
        self.entry_animation = style;
        cx.notify();
    }

    pub fn query(&self) -> &GridQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.remote.loading
    }

    /// Replace the local row set; the page is clamped to the new length
    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.source = GridSource::Local(Arc::new(rows));
        self.generation += 1;
        cx.notify();
    }

    /// Swap the row source and start over on page 1
    pub fn set_source(&mut self, source: GridSource<R>, cx: &mut Context<Self>) {
        self.source = source;
        self.query.pagination.reset();
        self.refresh(cx);
    }

    pub fn set_multi_sort(&mut self, multi: bool, cx: &mut Context<Self>) {
        self.query.sort.set_multi(multi);
        self.changed(DataGridEvent::SortChanged(self.query.sort.keys().to_vec()), cx);
    }

    /// Header click on a column
    pub fn toggle_sort(&mut self, column_id: &str, cx: &mut Context<Self>) {
        let Some(column) = self.columns.iter().find(|c| c.id.as_str() == column_id) else {
            warn!(column = column_id, "Sort requested for unknown column");
            return;
        };
        if let Some(direction) = self.query.toggle_sort(column) {
            debug!(column = column_id, ?direction, "Grid sort changed");
            self.changed(DataGridEvent::SortChanged(self.query.sort.keys().to_vec()), cx);
        }
    }

    pub fn set_filter(&mut self, filter: ColumnFilter, cx: &mut Context<Self>) {
        if self.query.filters.get(&filter.column_id) == Some(&filter) {
            return;
        }
        if !filter.is_active() && self.query.filters.get(&filter.column_id).is_none() {
            return;
        }
        self.query.set_filter(filter);
        self.changed(DataGridEvent::FiltersChanged, cx);
    }

    pub fn remove_filter(&mut self, column_id: &str, cx: &mut Context<Self>) {
        if self.query.remove_filter(column_id) {
            self.changed(DataGridEvent::FiltersChanged, cx);
        }
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>, cx: &mut Context<Self>) {
        let text = text.into();
        if self.query.filters.global() == Some(text.trim())
            || (self.query.filters.global().is_none() && text.trim().is_empty())
        {
            return;
        }
        self.query.set_global_filter(text);
        self.changed(DataGridEvent::FiltersChanged, cx);
    }

    pub fn clear_filters(&mut self, cx: &mut Context<Self>) {
        self.query.clear_filters();
        self.changed(DataGridEvent::FiltersChanged, cx);
    }

    /// Go to a page, clamped to the pages that currently exist
    pub fn set_page(&mut self, page: usize, cx: &mut Context<Self>) {
        let page = self.query.go_to_page(page, self.total_rows());
        let page_size = self.query.pagination.page_size();
        self.changed(DataGridEvent::PageChanged { page, page_size }, cx);
    }

    /// Rows matching the current filters, or the last total a remote source reported
    fn total_rows(&self) -> usize {
        match &self.source {
            GridSource::Local(rows) => filter_rows(rows, &self.columns, &self.query.filters).len(),
            GridSource::Remote(_) => self.remote.total,
        }
    }

    pub fn set_page_size(&mut self, page_size: usize, cx: &mut Context<Self>) {
        if self.query.set_page_size(page_size) {
            self.changed(DataGridEvent::PageChanged { page: 1, page_size }, cx);
        }
    }

    fn changed(&mut self, event: DataGridEvent, cx: &mut Context<Self>) {
        self.generation += 1;
        cx.emit(event);
        self.refresh(cx);
    }

    /// Re-fetch the current page from a remote source; local grids just redraw
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        let GridSource::Remote(source) = &self.source else {
            cx.notify();
            return;
        };
        let request = self.query.to_request();
        let seq = self.remote.begin();
        debug!(grid = %self.id, seq, request = %request.summary(), "Grid fetch");

        let fetch = source.fetch(request);
        // Replacing the task drops the previous in-flight fetch
        self.fetch_task = Some(cx.spawn(async move |this, cx| {
            let result = fetch.await;
            let _ = this.update(cx, |this, cx| this.apply_fetch(seq, result, cx));
        }));
        cx.notify();
    }

    fn apply_fetch(&mut self, seq: u64, result: Result<FetchPage<R>>, cx: &mut Context<Self>) {
        match self.remote.apply(seq, result, &mut self.query.pagination) {
            FetchOutcome::Stale => {
                debug!(grid = %self.id, seq, latest = self.remote.seq, "Dropping stale grid response");
                return;
            }
            FetchOutcome::Refetch => {
                debug!(
                    grid = %self.id,
                    page = self.query.pagination.page(),
                    "Requested page past the end, clamping"
                );
                self.refresh(cx);
                return;
            }
            FetchOutcome::Loaded { total } => {
                self.generation += 1;
                cx.emit(DataGridEvent::Loaded { total });
            }
            FetchOutcome::Failed(message) => {
                error!(grid = %self.id, error = %message, "Grid fetch failed");
                cx.emit(DataGridEvent::FetchFailed(message));
            }
        }
        cx.notify();
    }

    /// Get column width style
    fn column_width(width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min, .. } => min.unwrap_or(120.0),
            ColumnWidth::Percent(p) => 8.0 * p,
        }
    }

    fn cell(width: &ColumnWidth) -> gpui::Div {
        let cell = div().px_3().overflow_hidden();
        match width {
            ColumnWidth::Flex { min, max } => cell
                .flex_1()
                .min_w(px(min.unwrap_or(80.0)))
                .when_some(*max, |cell, max| cell.max_w(px(max))),
            other => cell.w(px(Self::column_width(other))).flex_none(),
        }
    }

    /// Render the header row
    fn render_header(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let multi = self.query.sort.is_multi();
        let headers: Vec<AnyElement> = self
            .columns
            .iter()
            .filter(|col| col.visible)
            .map(|col| {
                let direction = self.query.sort.direction_of(&col.id);
                let priority = self
                    .query
                    .sort
                    .priority_of(&col.id)
                    .filter(|_| multi && self.query.sort.keys().len() > 1);
                let column_id = col.id.clone();

                Self::cell(&col.width)
                    .id(SharedString::from(format!("{}-head-{}", self.id, col.id)))
                    .h_full()
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(palette.text_primary)
                    .child(col.label.clone())
                    .when(direction != SortDirection::None, |cell| {
                        cell.child(
                            div()
                                .text_xs()
                                .text_color(palette.accent)
                                .child(direction.indicator()),
                        )
                    })
                    .when_some(priority, |cell, priority| {
                        cell.child(
                            div()
                                .text_xs()
                                .text_color(palette.text_muted)
                                .child(priority.to_string()),
                        )
                    })
                    .when(col.sortable, |cell| {
                        let hover = palette.surface_hover;
                        cell.cursor_pointer()
                            .hover(move |s| s.bg(hover))
                            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                                this.toggle_sort(&column_id, cx);
                            }))
                    })
                    .into_any_element()
            })
            .collect();

        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(palette.surface_alt)
            .border_b_1()
            .border_color(palette.border)
            .children(headers)
    }

    /// Per-column filter inputs and select chips
    fn render_filter_row(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let cells: Vec<AnyElement> = self
            .columns
            .iter()
            .filter(|col| col.visible)
            .map(|col| {
                let cell = Self::cell(&col.width).py_1();
                if let Some((_, input)) = self.column_inputs.iter().find(|(id, _)| *id == col.id) {
                    return cell.child(Input::new(input).w_full()).into_any_element();
                }
                let FilterKind::Select(options) = &col.filter_kind else {
                    return cell.into_any_element();
                };
                let active = self
                    .query
                    .filters
                    .get(&col.id)
                    .map(|filter| filter.value.display());
                cell.flex()
                    .flex_wrap()
                    .gap_1()
                    .children(options.iter().map(|option| {
                        let selected = active.as_deref() == Some(&**option);
                        let column_id = col.id.clone();
                        let value = option.clone();
                        div()
                            .id(SharedString::from(format!("{}-opt-{}-{}", self.id, col.id, option)))
                            .px_2()
                            .rounded_sm()
                            .text_xs()
                            .cursor_pointer()
                            .border_1()
                            .border_color(palette.border)
                            .when(selected, |chip| {
                                chip.bg(palette.accent).text_color(palette.accent_text)
                            })
                            .when(!selected, |chip| chip.text_color(palette.text_secondary))
                            .child(option.clone())
                            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                                if selected {
                                    this.remove_filter(&column_id, cx);
                                } else {
                                    this.set_filter(
                                        ColumnFilter::new(
                                            column_id.clone(),
                                            FilterOperator::Equals,
                                            value.to_string(),
                                        ),
                                        cx,
                                    );
                                }
                            }))
                    }))
                    .into_any_element()
            })
            .collect();

        div()
            .w_full()
            .flex()
            .items_center()
            .border_b_1()
            .border_color(palette.border)
            .children(cells)
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize, palette: &Palette) -> AnyElement {
        let bg = if index % 2 == 0 {
            palette.surface
        } else {
            palette.surface_alt
        };
        let hover = palette.surface_hover;

        let element = div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(move |s| s.bg(hover))
            .border_b_1()
            .border_color(palette.border)
            .children(self.columns.iter().filter(|col| col.visible).map(|col| {
                Self::cell(&col.width)
                    .text_sm()
                    .text_color(palette.text_primary)
                    .child(col.render_cell(row))
            }));

        let style = self.entry_animation;
        if style == AnimationStyle::None {
            return element.into_any_element();
        }
        let transition = style
            .transition()
            .with_delay(Duration::from_millis(ROW_STAGGER_MS * index as u64));
        element
            .with_animation(
                SharedString::from(format!("{}-row-{}-{index}", self.id, self.generation)),
                gpui_animation(transition),
                move |el, delta| apply_motion(el, style.sample(delta)),
            )
            .into_any_element()
    }

    /// Chips for the active filters, each removable
    fn render_active_filters(&self, palette: &Palette, cx: &mut Context<Self>) -> impl IntoElement {
        let chips: Vec<AnyElement> = self
            .query
            .filters
            .filters()
            .map(|filter| {
                let label = self
                    .columns
                    .iter()
                    .find(|c| c.id == filter.column_id)
                    .map(|c| c.label.to_string())
                    .unwrap_or_else(|| filter.column_id.to_string());
                let column_id = filter.column_id.clone();
                div()
                    .id(SharedString::from(format!("{}-chip-{}", self.id, filter.column_id)))
                    .px_2()
                    .py_0p5()
                    .rounded_md()
                    .text_xs()
                    .bg(palette.surface_alt)
                    .border_1()
                    .border_color(palette.border)
                    .text_color(palette.text_secondary)
                    .cursor_pointer()
                    .child(format!("{}  ✕", filter.describe(&label)))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.remove_filter(&column_id, cx);
                    }))
                    .into_any_element()
            })
            .collect();

        div()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_1()
            .children(chips)
    }

    /// Render empty state
    fn render_empty(&self, palette: &Palette) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_6()
            .text_color(palette.text_muted)
            .child(self.empty_message.clone())
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataGrid<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Theme::palette_of(cx);

        let (rows, total): (Vec<AnyElement>, usize) = match &self.source {
            GridSource::Local(all) => {
                let all = all.clone();
                let page = run_pipeline(&all, &self.columns, &self.query);
                let rows = page
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| self.render_row(row, i, &palette))
                    .collect();
                (rows, page.total)
            }
            GridSource::Remote(_) => (
                self.remote
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| self.render_row(row, i, &palette))
                    .collect(),
                self.remote.total,
            ),
        };
        let loading = self.remote.loading;
        let has_filters = !self.query.filters.is_empty();

        let weak = cx.entity().downgrade();
        let weak_size = weak.clone();
        let pager = Pagination::new(
            SharedString::from(format!("{}-pager", self.id)),
            &self.query.pagination,
            total,
        )
        .items_label("rows")
        .on_page_change(move |page, _window, cx| {
            let _ = weak.update(cx, |grid, cx| grid.set_page(page, cx));
        })
        .on_page_size_change(move |size, _window, cx| {
            let _ = weak_size.update(cx, |grid, cx| grid.set_page_size(size, cx));
        });

        let toolbar = div()
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .items_center()
            .gap_3()
            .child(div().w(px(260.0)).child(Input::new(&self.search).w_full()))
            .child(self.render_active_filters(&palette, cx))
            .child(div().flex_1())
            .when(loading, |bar| {
                bar.child(
                    div()
                        .text_xs()
                        .text_color(palette.text_muted)
                        .child("Loading..."),
                )
            })
            .when(has_filters, |bar| {
                bar.child(
                    div()
                        .id(SharedString::from(format!("{}-clear", self.id)))
                        .text_xs()
                        .text_color(palette.accent)
                        .cursor_pointer()
                        .child("Clear filters")
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                            this.clear_filters(cx);
                        })),
                )
            });

        let body = if rows.is_empty() && !loading {
            self.render_empty(&palette).into_any_element()
        } else {
            div()
                .id(SharedString::from(format!("{}-rows", self.id)))
                .flex_1()
                .overflow_y_scroll()
                .when(loading, |body| body.opacity(0.6))
                .children(rows)
                .into_any_element()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .rounded_md()
            .overflow_hidden()
            .child(toolbar)
            .child(self.render_header(&palette, cx))
            .child(self.render_filter_row(&palette, cx))
            .child(body)
            .child(pager)
    }
}

/// Helper to create a DataGrid entity
pub fn data_grid<R: Clone + Send + Sync + 'static>(
    id: impl Into<SharedString>,
    columns: Vec<Column<R>>,
    source: GridSource<R>,
    config: &GridConfig,
    window: &mut Window,
    cx: &mut gpui::App,
) -> Entity<DataGrid<R>> {
    cx.new(|cx| DataGrid::new(id, columns, source, config, window, cx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn page(rows: Vec<i64>, total: usize) -> Result<FetchPage<i64>> {
        Ok(FetchPage { rows, total })
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut remote = RemotePage::new();
        let mut pagination = PaginationState::new(10);
        let first = remote.begin();
        let second = remote.begin();

        let outcome = remote.apply(first, page(vec![1, 2], 2), &mut pagination);
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(remote.loading);
        assert!(remote.rows.is_empty());

        let outcome = remote.apply(second, page(vec![3], 1), &mut pagination);
        assert_eq!(outcome, FetchOutcome::Loaded { total: 1 });
        assert!(!remote.loading);
        assert_eq!(remote.rows, vec![3]);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut remote = RemotePage::new();
        let mut pagination = PaginationState::new(10);
        let seq = remote.begin();
        remote.apply(seq, page(vec![1, 2, 3], 3), &mut pagination);

        let seq = remote.begin();
        let outcome = remote.apply(seq, Err(Error::fetch("timeout")), &mut pagination);
        assert!(matches!(outcome, FetchOutcome::Failed(message) if message.contains("timeout")));
        assert!(!remote.loading);
        assert_eq!(remote.rows, vec![1, 2, 3]);
        assert_eq!(remote.total, 3);
    }

    #[test]
    fn test_empty_page_past_end_clamps_and_refetches() {
        let mut remote = RemotePage::new();
        let mut pagination = PaginationState::new(10);
        pagination.set_page(5);
        let seq = remote.begin();

        let outcome = remote.apply(seq, page(Vec::new(), 23), &mut pagination);
        assert_eq!(outcome, FetchOutcome::Refetch);
        assert_eq!(pagination.page(), 3);
        assert!(!remote.loading);
    }

    #[test]
    fn test_empty_result_on_first_page_is_loaded() {
        let mut remote = RemotePage::new();
        let mut pagination = PaginationState::new(10);
        let seq = remote.begin();

        let outcome = remote.apply(seq, page(Vec::new(), 0), &mut pagination);
        assert_eq!(outcome, FetchOutcome::Loaded { total: 0 });
        assert_eq!(pagination.page(), 1);
    }
}
