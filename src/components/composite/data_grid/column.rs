//! Column Definition
//!
//! Defines grid columns: how a cell value is derived from a row, how it
//! filters, and how it renders.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::{AnyElement, IntoElement, ParentElement, SharedString, div};

use super::filter::ColumnFilter;
use super::value::CellValue;

/// Derives a cell value from a row
pub type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;
/// Custom cell renderer; receives the row and its derived value
pub type CellRenderer<R> = Arc<dyn Fn(&R, &CellValue) -> AnyElement + Send + Sync>;
/// Custom filter predicate for [`FilterKind::Custom`] columns
pub type FilterPredicate = Arc<dyn Fn(&CellValue, &ColumnFilter) -> bool + Send + Sync>;

/// Rows that expose named fields, for key-addressed columns
pub trait RowFields {
    fn field(&self, key: &str) -> Option<CellValue>;
}

impl RowFields for serde_json::Value {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.as_object()?.get(key).map(CellValue::from_json)
    }
}

impl RowFields for HashMap<String, CellValue> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).cloned()
    }
}

/// How a column is filtered from the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterKind {
    #[default]
    Text,
    Number,
    Date,
    /// Fixed choices shown as chips
    Select(Vec<SharedString>),
    /// Evaluated by the column's predicate
    Custom,
}

/// Column width specification
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex {
            min: None,
            max: None,
        }
    }
}

/// Column definition for the DataGrid
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    pub width: ColumnWidth,
    pub sortable: bool,
    pub filter_kind: FilterKind,
    /// Hidden columns are skipped by rendering and the global filter
    pub visible: bool,
    accessor: Accessor<R>,
    predicate: Option<FilterPredicate>,
    render: Option<CellRenderer<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            width: self.width,
            sortable: self.sortable,
            filter_kind: self.filter_kind.clone(),
            visible: self.visible,
            accessor: self.accessor.clone(),
            predicate: self.predicate.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filter_kind", &self.filter_kind)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl<R: 'static> Column<R> {
    /// Create a column with an accessor function
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            filter_kind: FilterKind::default(),
            visible: true,
            accessor: Arc::new(accessor),
            predicate: None,
            render: None,
        }
    }

    /// Create a column that reads the row field named by its id.
    /// A missing field reads as null.
    pub fn keyed(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self
    where
        R: RowFields,
    {
        let id = id.into();
        let key = id.clone();
        Self::new(id, label, move |row: &R| row.field(&key).unwrap_or_default())
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter_kind = kind;
        self
    }

    /// Filter with a custom predicate instead of the operator
    pub fn custom_filter(
        mut self,
        predicate: impl Fn(&CellValue, &ColumnFilter) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter_kind = FilterKind::Custom;
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Render cells with a custom element
    pub fn render(
        mut self,
        render: impl Fn(&R, &CellValue) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Derived value for a row
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Whether a row's value passes a filter on this column. Null fails.
    pub fn accepts(&self, value: &CellValue, filter: &ColumnFilter) -> bool {
        if value.is_null() {
            return false;
        }
        match (&self.filter_kind, &self.predicate) {
            (FilterKind::Custom, Some(predicate)) => predicate(value, filter),
            _ => filter.matches(value),
        }
    }

    /// Render a cell, defaulting to the value's string form
    pub fn render_cell(&self, row: &R) -> AnyElement {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(row, &value),
            None => div().child(value.display()).into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_grid::filter::FilterOperator;

    #[test]
    fn test_keyed_column_reads_json_field() {
        let column: Column<serde_json::Value> = Column::keyed("age", "Age");
        let row = serde_json::json!({"age": 31});
        assert_eq!(column.value(&row), CellValue::Int(31));
        assert!(column.value(&serde_json::json!({})).is_null());
    }

    #[test]
    fn test_keyed_column_reads_map_field() {
        let column: Column<HashMap<String, CellValue>> = Column::keyed("name", "Name");
        let mut row = HashMap::new();
        row.insert("name".to_string(), CellValue::from("Ada"));
        assert_eq!(column.value(&row), CellValue::from("Ada"));
    }

    #[test]
    fn test_custom_predicate_decides() {
        let column: Column<i64> =
            Column::new("n", "N", |n: &i64| CellValue::Int(*n)).custom_filter(|value, _| {
                value.as_f64().is_some_and(|n| n as i64 % 2 == 0)
            });
        let filter = ColumnFilter::new("n", FilterOperator::Equals, 1_i64);
        assert!(column.accepts(&column.value(&4), &filter));
        assert!(!column.accepts(&column.value(&3), &filter));
    }

    #[test]
    fn test_null_fails_every_filter() {
        let column: Column<Option<i64>> = Column::new("n", "N", |n: &Option<i64>| (*n).into());
        let filter = ColumnFilter::new("n", FilterOperator::LessThan, 100_i64);
        assert!(!column.accepts(&column.value(&None), &filter));
        assert!(column.accepts(&column.value(&Some(5)), &filter));
    }
}
