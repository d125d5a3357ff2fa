//! DataGrid Component
//!
//! Sortable, filterable, paginated grid over local rows or a server-side
//! data source.

pub mod column;
pub mod data_grid;
pub mod data_source;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod sort;
pub mod value;

pub use column::{Column, ColumnWidth, FilterKind, RowFields};
pub use data_grid::{DataGrid, DataGridEvent, GridSource, data_grid};
pub use data_source::{DataSource, FetchPage, FetchRequest, LocalSource};
pub use filter::{ColumnFilter, FilterOperator, FilterState};
pub use pagination::{Pagination, PaginationState};
pub use pipeline::{GridQuery, PageResult, filter_rows, run_pipeline, sort_rows};
pub use sort::{SortDirection, SortKey, SortState};
pub use value::CellValue;
