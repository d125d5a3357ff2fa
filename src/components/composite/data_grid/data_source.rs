//! DataSource Trait
//!
//! Server-side rows: the grid sends its query and renders whatever page
//! comes back, without filtering or sorting it again.

use std::sync::Arc;

use futures::future::BoxFuture;
use gpui::SharedString;

use super::column::Column;
use super::filter::ColumnFilter;
use super::pipeline::{GridQuery, run_pipeline};
use super::sort::SortKey;
use crate::error::Result;

/// Query sent to a data source
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// 1-based page
    pub page: usize,
    pub page_size: usize,
    /// Highest priority first
    pub sort: Vec<SortKey>,
    pub filters: Vec<ColumnFilter>,
    pub global_filter: Option<String>,
}

impl FetchRequest {
    /// Short form for logs
    pub fn summary(&self) -> SharedString {
        format!(
            "page={} size={} sort={} filters={} global={}",
            self.page,
            self.page_size,
            self.sort.len(),
            self.filters.len(),
            self.global_filter.is_some()
        )
        .into()
    }
}

/// One page of rows and the total across all pages
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPage<R> {
    pub rows: Vec<R>,
    pub total: usize,
}

/// Trait for fetching rows page by page
pub trait DataSource<R>: Send + Sync + 'static {
    fn fetch(&self, request: FetchRequest) -> BoxFuture<'static, Result<FetchPage<R>>>;
}

/// In-memory source answering requests with the local pipeline
pub struct LocalSource<R> {
    rows: Arc<Vec<R>>,
    columns: Arc<Vec<Column<R>>>,
}

impl<R> Clone for LocalSource<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl<R: Clone + Send + Sync + 'static> LocalSource<R> {
    /// Create a new LocalSource
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>) -> Self {
        Self::from_arc(Arc::new(rows), Arc::new(columns))
    }

    /// Create from shared references
    pub fn from_arc(rows: Arc<Vec<R>>, columns: Arc<Vec<Column<R>>>) -> Self {
        Self { rows, columns }
    }

    /// Get all rows
    pub fn all(&self) -> &[R] {
        &self.rows
    }

    /// Answer a request synchronously
    pub fn query(&self, request: &FetchRequest) -> FetchPage<R> {
        let query = GridQuery::from_request(request);
        let page = run_pipeline(&self.rows, &self.columns, &query);
        FetchPage {
            rows: page.rows.into_iter().cloned().collect(),
            total: page.total,
        }
    }
}

impl<R: Clone + Send + Sync + 'static> DataSource<R> for LocalSource<R> {
    fn fetch(&self, request: FetchRequest) -> BoxFuture<'static, Result<FetchPage<R>>> {
        let page = self.query(&request);
        Box::pin(async move { Ok(page) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_grid::filter::FilterOperator;
    use crate::components::composite::data_grid::sort::SortDirection;
    use crate::components::composite::data_grid::value::CellValue;

    fn source() -> LocalSource<i64> {
        let columns = vec![Column::new("v", "V", |v: &i64| CellValue::Int(*v)).sortable()];
        LocalSource::new((1..=12).collect(), columns)
    }

    fn request(page: usize) -> FetchRequest {
        FetchRequest {
            page,
            page_size: 5,
            sort: vec![SortKey::new("v", SortDirection::Desc)],
            filters: vec![ColumnFilter::new("v", FilterOperator::GreaterThan, 2_i64)],
            global_filter: None,
        }
    }

    #[test]
    fn test_local_source_answers_requests() {
        let page = futures::executor::block_on(source().fetch(request(2))).expect("fetch");
        assert_eq!(page.total, 10);
        assert_eq!(page.rows, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_page_beyond_range_returns_last_page() {
        let page = source().query(&request(9));
        assert_eq!(page.rows, vec![7, 6, 5, 4, 3]);
    }
}
