//! Grid Page
//!
//! A local-mode grid over sample employees and a server-mode grid over a
//! simulated remote inventory.

use std::sync::Arc;
use std::time::Duration;

use gpui::{
    App, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement, Render, Styled, Window,
    div, prelude::*, px,
};
use tracing::info;

use super::data::{
    Employee, SimulatedServer, employee_columns, employees, inventory, inventory_columns,
};
use crate::app::entities::AppEntities;
use crate::components::composite::data_grid::{
    ColumnFilter, DataGrid, DataGridEvent, FilterOperator, GridSource, LocalSource, data_grid,
};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::state::{Toast, show_toast};
use crate::theme::{Theme, Typography};

const SERVER_LATENCY: Duration = Duration::from_millis(450);
const SERVER_FAIL_EVERY: u32 = 6;

/// Grid showcase page
pub struct GridPage {
    local: Entity<DataGrid<Employee>>,
    remote: Entity<DataGrid<serde_json::Value>>,
    multi_sort: bool,
    veterans_only: bool,
}

impl GridPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let grid_config = entities.config.grid.clone();

        let local = data_grid(
            "employees",
            employee_columns(),
            GridSource::Local(Arc::new(employees(64))),
            &grid_config,
            window,
            cx,
        );
        local.update(cx, |grid, _| grid.set_empty_message("No employees match"));

        let server = SimulatedServer::new(
            LocalSource::new(inventory(240), inventory_columns()),
            SERVER_LATENCY,
        )
        .fail_every(SERVER_FAIL_EVERY);
        let remote = data_grid(
            "inventory",
            inventory_columns(),
            GridSource::Remote(Arc::new(server)),
            &grid_config,
            window,
            cx,
        );

        // Surface rejected fetches as toasts
        let toasts = entities.toasts.clone();
        cx.subscribe(&remote, move |_this, _grid, event: &DataGridEvent, cx| {
            match event {
                DataGridEvent::FetchFailed(message) => {
                    show_toast(
                        &toasts,
                        Toast::error(message.to_string()).title("Inventory unavailable"),
                        cx,
                    );
                }
                DataGridEvent::Loaded { total } => {
                    info!(total, "Inventory page loaded");
                }
                _ => {}
            }
        })
        .detach();

        Self {
            local,
            remote,
            multi_sort: grid_config.multi_sort,
            veterans_only: false,
        }
    }

    fn toggle_multi_sort(&mut self, cx: &mut Context<Self>) {
        self.multi_sort = !self.multi_sort;
        let multi = self.multi_sort;
        self.local.update(cx, |grid, cx| grid.set_multi_sort(multi, cx));
        self.remote.update(cx, |grid, cx| grid.set_multi_sort(multi, cx));
        cx.notify();
    }

    fn toggle_veterans(&mut self, cx: &mut Context<Self>) {
        self.veterans_only = !self.veterans_only;
        let veterans_only = self.veterans_only;
        self.local.update(cx, |grid, cx| {
            if veterans_only {
                grid.set_filter(ColumnFilter::new("veteran", FilterOperator::Equals, true), cx);
            } else {
                grid.remove_filter("veteran", cx);
            }
        });
        cx.notify();
    }

    fn section_title(title: &'static str, subtitle: &'static str, cx: &App) -> impl IntoElement {
        let palette = Theme::palette_of(cx);
        div()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(palette.text_primary)
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(palette.text_muted)
                    .child(subtitle),
            )
    }
}

impl Render for GridPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let multi_label = if self.multi_sort {
            "Multi-sort: on"
        } else {
            "Multi-sort: off"
        };
        let veterans_label = if self.veterans_only {
            "All employees"
        } else {
            "Hired before 2016"
        };

        div()
            .id("grid-page")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .items_end()
                    .justify_between()
                    .child(Self::section_title(
                        "Employees",
                        "Local mode: filter, sort and paginate in memory",
                        cx,
                    ))
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .child(
                                Button::outline("grid-veterans", veterans_label)
                                    .size(ButtonSize::Small)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                        this.toggle_veterans(cx);
                                    })),
                            )
                            .child(
                                Button::secondary("grid-multi-sort", multi_label)
                                    .size(ButtonSize::Small)
                                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                        this.toggle_multi_sort(cx);
                                    })),
                            ),
                    ),
            )
            .child(div().h(px(420.0)).child(self.local.clone()))
            .child(Self::section_title(
                "Inventory",
                "Server mode: every query goes to a slow, flaky simulated backend",
                cx,
            ))
            .child(div().h(px(420.0)).child(self.remote.clone()))
    }
}
