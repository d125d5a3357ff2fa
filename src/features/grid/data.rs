//! Demo Rows and Simulated Server
//!
//! Sample employees for the local grid, a JSON inventory for the remote
//! grid, and a data source that answers with latency and occasional outages.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use futures::FutureExt;
use futures::future::BoxFuture;
use gpui::{IntoElement, ParentElement, SharedString, Styled, div};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::components::composite::data_grid::{
    Column, DataSource, FetchPage, FetchRequest, FilterKind, LocalSource,
};
use crate::error::{Error, Result};
use crate::services::run_in_tokio;

const DEPARTMENTS: [&str; 4] = ["Engineering", "Design", "Sales", "Support"];
const FIRST_NAMES: [&str; 12] = [
    "ada", "Grace", "linus", "Barbara", "Ken", "margaret", "Dennis", "Frances", "Edsger",
    "Radia", "John", "Sophie",
];
const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson", "Wilson"];

/// Row of the local grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub age: Option<u32>,
    pub salary: f64,
    pub hired: NaiveDate,
}

/// Deterministic sample employees; every seventh has no recorded age
pub fn employees(count: u32) -> Vec<Employee> {
    (1..=count)
        .map(|id| {
            let i = id as usize;
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / 3) % LAST_NAMES.len()];
            let hired = NaiveDate::from_ymd_opt(2012 + (id % 13) as i32, 1 + id % 12, 1 + id % 28)
                .unwrap_or_default();
            Employee {
                id,
                name: format!("{first} {last}"),
                department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                age: (id % 7 != 0).then_some(22 + (id * 17) % 41),
                salary: 42_000.0 + f64::from((id * 7_919) % 90_000),
                hired,
            }
        })
        .collect()
}

pub fn employee_columns() -> Vec<Column<Employee>> {
    let departments = DEPARTMENTS.iter().map(|d| SharedString::from(*d)).collect();
    vec![
        Column::new("id", "ID", |e: &Employee| e.id.into())
            .fixed_width(64.0)
            .sortable()
            .filter(FilterKind::Number),
        Column::new("name", "Name", |e: &Employee| e.name.as_str().into())
            .flex_width(Some(160.0), None)
            .sortable(),
        Column::new("department", "Department", |e: &Employee| {
            e.department.as_str().into()
        })
        .fixed_width(260.0)
        .sortable()
        .filter(FilterKind::Select(departments)),
        Column::new("age", "Age", |e: &Employee| e.age.into())
            .fixed_width(90.0)
            .sortable()
            .filter(FilterKind::Number),
        Column::new("salary", "Salary", |e: &Employee| e.salary.into())
            .fixed_width(120.0)
            .sortable()
            .filter(FilterKind::Number)
            .render(|_, value| {
                let text = value
                    .as_f64()
                    .map(|salary| format!("${:.0}k", salary / 1000.0))
                    .unwrap_or_default();
                div().child(text).into_any_element()
            }),
        Column::new("hired", "Hired", |e: &Employee| e.hired.into())
            .fixed_width(130.0)
            .sortable()
            .filter(FilterKind::Date),
        Column::new("veteran", "Veteran", |e: &Employee| e.hired.into())
            .hidden()
            .custom_filter(|value, _| value.as_date().is_some_and(|hired| hired.year() < 2016)),
    ]
}

/// JSON inventory records for the server-mode grid
pub fn inventory(count: u32) -> Vec<serde_json::Value> {
    const PRODUCTS: [&str; 5] = ["Bolt", "Gear", "Spring", "Valve", "Bearing"];
    (1..=count)
        .map(|n| {
            let product = PRODUCTS[n as usize % PRODUCTS.len()];
            let stock = if n % 9 == 0 {
                serde_json::Value::Null
            } else {
                json!((n * 37) % 500)
            };
            json!({
                "sku": format!("SKU-{n:04}"),
                "product": format!("{product} {}", n % 40),
                "stock": stock,
                "price": f64::from(n % 97) + 0.99,
                "restocked": format!("2025-{:02}-{:02}", 1 + n % 12, 1 + n % 28),
            })
        })
        .collect()
}

pub fn inventory_columns() -> Vec<Column<serde_json::Value>> {
    vec![
        Column::keyed("sku", "SKU").fixed_width(110.0).sortable(),
        Column::keyed("product", "Product")
            .flex_width(Some(140.0), None)
            .sortable(),
        Column::keyed("stock", "Stock")
            .fixed_width(90.0)
            .sortable()
            .filter(FilterKind::Number),
        Column::keyed("price", "Price")
            .fixed_width(90.0)
            .sortable()
            .filter(FilterKind::Number),
        Column::keyed("restocked", "Restocked")
            .fixed_width(130.0)
            .sortable()
            .filter(FilterKind::Date),
    ]
}

/// Remote-style source: answers through the tokio runtime after a delay and
/// fails every `fail_every`-th request.
pub struct SimulatedServer<R> {
    backend: LocalSource<R>,
    latency: Duration,
    fail_every: u32,
    requests: Arc<AtomicU32>,
}

impl<R: Clone + Send + Sync + 'static> SimulatedServer<R> {
    pub fn new(backend: LocalSource<R>, latency: Duration) -> Self {
        Self {
            backend,
            latency,
            fail_every: 0,
            requests: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Reject every n-th request; 0 never fails
    pub fn fail_every(mut self, n: u32) -> Self {
        self.fail_every = n;
        self
    }

    fn should_fail(&self) -> bool {
        let count = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        self.fail_every > 0 && count % self.fail_every == 0
    }
}

impl<R: Clone + Send + Sync + 'static> DataSource<R> for SimulatedServer<R> {
    fn fetch(&self, request: FetchRequest) -> BoxFuture<'static, Result<FetchPage<R>>> {
        let fail = self.should_fail();
        let backend = self.backend.clone();
        let latency = self.latency;
        async move {
            debug!(request = %request.summary(), "Simulated server request");
            run_in_tokio(tokio::time::sleep(latency)).await?;
            if fail {
                warn!("Simulated server outage");
                return Err(Error::fetch("simulated server outage"));
            }
            Ok(backend.query(&request))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_grid::{
        CellValue, ColumnFilter, FilterOperator, GridQuery, PaginationState, SortDirection, SortKey,
        run_pipeline,
    };

    fn field(record: &serde_json::Value, key: &str) -> CellValue {
        record.get(key).map(CellValue::from_json).unwrap_or_default()
    }

    fn request() -> FetchRequest {
        FetchRequest {
            page: 1,
            page_size: 5,
            sort: vec![SortKey::new("stock", SortDirection::Asc)],
            filters: vec![],
            global_filter: None,
        }
    }

    #[test]
    fn test_employees_have_missing_ages() {
        let rows = employees(30);
        assert_eq!(rows.len(), 30);
        assert!(rows.iter().any(|e| e.age.is_none()));
        assert!(rows.iter().all(|e| DEPARTMENTS.contains(&e.department.as_str())));
    }

    #[test]
    fn test_veteran_column_uses_custom_predicate() {
        let rows = employees(40);
        let columns = employee_columns();
        let mut query = GridQuery::new(PaginationState::new(100), false);
        query.set_filter(ColumnFilter::new("veteran", FilterOperator::Equals, true));
        let page = run_pipeline(&rows, &columns, &query);
        assert!(page.total > 0);
        assert!(page.rows.iter().all(|e| e.hired.year() < 2016));
    }

    #[test]
    fn test_server_sorts_nulls_last() {
        let server = SimulatedServer::new(
            LocalSource::new(inventory(27), inventory_columns()),
            Duration::from_millis(1),
        );
        let page = futures::executor::block_on(server.fetch(request())).unwrap();
        assert_eq!(page.total, 27);
        assert_eq!(page.rows.len(), 5);

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let full = FetchRequest {
                page_size: 27,
                sort: vec![SortKey::new("stock", direction)],
                ..request()
            };
            let page = futures::executor::block_on(server.fetch(full)).unwrap();
            let stock: Vec<CellValue> = page.rows.iter().map(|r| field(r, "stock")).collect();
            let first_null = stock.iter().position(CellValue::is_null).unwrap();
            assert_eq!(first_null, 24, "{direction:?}");
            assert!(stock[first_null..].iter().all(CellValue::is_null));
            assert!(stock[..first_null].windows(2).all(|pair| {
                let order = pair[0].compare(&pair[1]);
                match direction {
                    SortDirection::Asc => order.is_le(),
                    _ => order.is_ge(),
                }
            }));
        }
    }

    #[test]
    fn test_server_fails_every_nth_request() {
        let server = SimulatedServer::new(
            LocalSource::new(inventory(5), inventory_columns()),
            Duration::ZERO,
        )
        .fail_every(2);
        assert!(futures::executor::block_on(server.fetch(request())).is_ok());
        assert!(futures::executor::block_on(server.fetch(request())).is_err());
        assert!(futures::executor::block_on(server.fetch(request())).is_ok());
    }
}
