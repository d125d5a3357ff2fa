//! Filter, sort and paginate
//!
//! ```text
//! rows ──filter (AND + global)──► matches ──stable sort──► ordered ──slice──► page
//! ```
//!
//! Everything here is pure: the same rows and query always give the same page.

use ahash::AHashMap;
use tracing::warn;

use super::column::Column;
use super::data_source::FetchRequest;
use super::filter::{ColumnFilter, FilterState};
use super::pagination::PaginationState;
use super::sort::{SortDirection, SortKey, SortState, compare_keys};
use super::value::CellValue;

/// Sort, filter and page state for one grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridQuery {
    pub sort: SortState,
    pub filters: FilterState,
    pub pagination: PaginationState,
}

impl GridQuery {
    pub fn new(pagination: PaginationState, multi_sort: bool) -> Self {
        Self {
            sort: SortState::new(multi_sort),
            filters: FilterState::new(),
            pagination,
        }
    }

    /// Header click. Unsortable columns are ignored and return `None`.
    pub fn toggle_sort<R: 'static>(&mut self, column: &Column<R>) -> Option<SortDirection> {
        if !column.sortable {
            return None;
        }
        let direction = self.sort.toggle(column.id.clone());
        self.pagination.reset();
        Some(direction)
    }

    pub fn set_filter(&mut self, filter: ColumnFilter) {
        self.filters.set(filter);
        self.pagination.reset();
    }

    pub fn remove_filter(&mut self, column_id: &str) -> bool {
        let removed = self.filters.remove(column_id);
        if removed {
            self.pagination.reset();
        }
        removed
    }

    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.filters.set_global(text);
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Go to a page within `total` rows and return the page actually kept
    pub fn go_to_page(&mut self, page: usize, total: usize) -> usize {
        self.pagination.set_page(page);
        self.pagination.clamp(total);
        self.pagination.page()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        self.pagination.set_page_size(page_size)
    }

    /// Request for a server-side source
    pub fn to_request(&self) -> FetchRequest {
        FetchRequest {
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            sort: self.sort.keys().to_vec(),
            filters: self.filters.filters().cloned().collect(),
            global_filter: self.filters.global().map(str::to_string),
        }
    }

    /// Rebuild a query from a request, the inverse of [`to_request`](Self::to_request)
    pub fn from_request(request: &FetchRequest) -> Self {
        let mut query = Self::new(PaginationState::new(request.page_size), true);
        query.sort.set_keys(request.sort.clone());
        for filter in &request.filters {
            query.filters.set(filter.clone());
        }
        if let Some(global) = &request.global_filter {
            query.filters.set_global(global.clone());
        }
        query.pagination.set_page(request.page);
        query
    }
}

/// One rendered page plus the totals the pager needs
#[derive(Debug)]
pub struct PageResult<'a, R> {
    pub rows: Vec<&'a R>,
    /// Rows matching the filters, across all pages
    pub total: usize,
    /// Page actually shown after clamping
    pub page: usize,
    pub total_pages: usize,
}

/// Column lookup by id
struct ColumnIndex<'c, R> {
    by_id: AHashMap<&'c str, &'c Column<R>>,
}

impl<'c, R: 'static> ColumnIndex<'c, R> {
    fn new(columns: &'c [Column<R>]) -> Self {
        Self {
            by_id: columns.iter().map(|c| (c.id.as_str(), c)).collect(),
        }
    }

    /// Value for a column id; an unknown column reads as null
    fn value(&self, column_id: &str, row: &R) -> CellValue {
        self.by_id
            .get(column_id)
            .map(|column| column.value(row))
            .unwrap_or_default()
    }

    fn accepts(&self, filter: &ColumnFilter, row: &R) -> bool {
        match self.by_id.get(filter.column_id.as_str()) {
            Some(column) => column.accepts(&column.value(row), filter),
            None => false,
        }
    }
}

/// Rows passing every column filter and the global filter, in input order
pub fn filter_rows<'a, R: 'static>(
    rows: &'a [R],
    columns: &[Column<R>],
    filters: &FilterState,
) -> Vec<&'a R> {
    if filters.is_empty() {
        return rows.iter().collect();
    }
    let index = ColumnIndex::new(columns);
    for filter in filters.filters() {
        if !index.by_id.contains_key(filter.column_id.as_str()) {
            warn!(column = %filter.column_id, "Filter on unknown column matches nothing");
        }
    }
    let global = filters.global().map(str::to_lowercase);

    rows.iter()
        .filter(|row| filters.filters().all(|filter| index.accepts(filter, row)))
        .filter(|row| match &global {
            Some(needle) => columns
                .iter()
                .filter(|column| column.visible)
                .any(|column| column.value(row).display().to_lowercase().contains(needle)),
            None => true,
        })
        .collect()
}

/// Stable sort by the active keys. Values are extracted once per row.
pub fn sort_rows<R: 'static>(rows: &mut Vec<&R>, columns: &[Column<R>], sort: &SortState) {
    let keys: Vec<&SortKey> = sort
        .keys()
        .iter()
        .filter(|key| key.direction != SortDirection::None)
        .collect();
    if keys.is_empty() || rows.len() < 2 {
        return;
    }
    let index = ColumnIndex::new(columns);
    let owned_keys: Vec<SortKey> = keys.into_iter().cloned().collect();

    let mut decorated: Vec<(Vec<CellValue>, &R)> = rows
        .drain(..)
        .map(|row| {
            let values = owned_keys
                .iter()
                .map(|key| index.value(&key.column_id, row))
                .collect();
            (values, row)
        })
        .collect();
    decorated.sort_by(|(a, _), (b, _)| compare_keys(a, b, &owned_keys));
    rows.extend(decorated.into_iter().map(|(_, row)| row));
}

/// Filter, sort and slice out the current page
pub fn run_pipeline<'a, R: 'static>(
    rows: &'a [R],
    columns: &[Column<R>],
    query: &GridQuery,
) -> PageResult<'a, R> {
    let mut matched = filter_rows(rows, columns, &query.filters);
    sort_rows(&mut matched, columns, &query.sort);

    let total = matched.len();
    let total_pages = query.pagination.total_pages(total);
    let page = query.pagination.page().clamp(1, total_pages);
    let range = query.pagination.range(total);
    let rows = matched.drain(range).collect();

    PageResult {
        rows,
        total,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_grid::filter::FilterOperator;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: Option<i64>,
        team: &'static str,
    }

    fn person(name: &'static str, age: Option<i64>, team: &'static str) -> Person {
        Person { name, age, team }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name", |p: &Person| p.name.into()).sortable(),
            Column::new("age", "Age", |p: &Person| p.age.into()).sortable(),
            Column::new("team", "Team", |p: &Person| p.team.into()).hidden(),
        ]
    }

    fn people() -> Vec<Person> {
        vec![
            person("carol", Some(41), "red"),
            person("Alice", Some(30), "blue"),
            person("bob", None, "red"),
            person("dave", Some(30), "blue"),
            person("Erin", Some(25), "red"),
        ]
    }

    fn names(rows: &[&Person]) -> Vec<&'static str> {
        rows.iter().map(|p| p.name).collect()
    }

    fn query(page_size: usize) -> GridQuery {
        GridQuery::new(PaginationState::new(page_size), false)
    }

    #[test]
    fn test_numbers_sort_ascending() {
        let rows = [3_i64, 1, 2];
        let columns = vec![Column::new("v", "V", |v: &i64| CellValue::Int(*v)).sortable()];
        let mut q = query(10);
        q.toggle_sort(&columns[0]);
        let page = run_pipeline(&rows, &columns, &q);
        assert_eq!(page.rows, vec![&1, &2, &3]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let rows = people();
        let mut q = query(10);
        q.toggle_sort(&columns()[0]);
        let page = run_pipeline(&rows, &columns(), &q);
        assert_eq!(names(&page.rows), vec!["Alice", "bob", "carol", "dave", "Erin"]);
    }

    #[test]
    fn test_descending_reverses_distinct_values() {
        let rows = people();
        let cols = columns();
        let mut q = query(10);
        q.toggle_sort(&cols[0]);
        let asc = names(&run_pipeline(&rows, &cols, &q).rows);
        q.toggle_sort(&cols[0]);
        let mut desc = names(&run_pipeline(&rows, &cols, &q).rows);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_and_nulls_last() {
        let rows = people();
        let cols = columns();
        let mut q = query(10);
        q.toggle_sort(&cols[1]);
        assert_eq!(
            names(&run_pipeline(&rows, &cols, &q).rows),
            vec!["Erin", "Alice", "dave", "carol", "bob"]
        );
        q.toggle_sort(&cols[1]);
        assert_eq!(
            names(&run_pipeline(&rows, &cols, &q).rows),
            vec!["carol", "Alice", "dave", "Erin", "bob"]
        );
    }

    #[test]
    fn test_unsortable_column_is_noop() {
        let cols = columns();
        let mut q = query(10);
        assert_eq!(q.toggle_sort(&cols[2]), None);
        assert!(q.sort.is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let rows = people();
        let cols = columns();
        let mut q = query(10);
        q.set_filter(ColumnFilter::new("age", FilterOperator::GreaterThan, 26_i64));
        q.set_filter(ColumnFilter::new("name", FilterOperator::Contains, "a"));
        let page = run_pipeline(&rows, &cols, &q);
        assert_eq!(names(&page.rows), vec!["carol", "Alice", "dave"]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let rows = people();
        let cols = columns();
        let mut filters = FilterState::new();
        filters.set(ColumnFilter::new("name", FilterOperator::StartsWith, "d"));
        let once: Vec<Person> = filter_rows(&rows, &cols, &filters)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_rows(&once, &cols, &filters);
        assert_eq!(names(&twice), vec!["dave"]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_global_filter_skips_hidden_columns() {
        let rows = people();
        let cols = columns();
        let mut filters = FilterState::new();
        filters.set_global("RED");
        assert!(filter_rows(&rows, &cols, &filters).is_empty());
        filters.set_global("ER");
        assert_eq!(names(&filter_rows(&rows, &cols, &filters)), vec!["Erin"]);
    }

    #[test]
    fn test_filter_on_unknown_column_matches_nothing() {
        let rows = people();
        let mut filters = FilterState::new();
        filters.set(ColumnFilter::new("missing", FilterOperator::Equals, "x"));
        assert!(filter_rows(&rows, &columns(), &filters).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_full_result() {
        let rows: Vec<i64> = (0..23).collect();
        let cols = vec![Column::new("v", "V", |v: &i64| CellValue::Int(*v)).sortable()];
        let mut q = query(5);
        q.toggle_sort(&cols[0]);
        q.toggle_sort(&cols[0]);

        let total_pages = run_pipeline(&rows, &cols, &q).total_pages;
        assert_eq!(total_pages, 5);
        let mut all = Vec::new();
        for page in 1..=total_pages {
            q.set_page(page);
            all.extend(run_pipeline(&rows, &cols, &q).rows.into_iter().copied());
        }
        let expected: Vec<i64> = (0..23).rev().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_changes_reset_to_first_page() {
        let cols = columns();
        let mut q = query(2);
        q.set_page(3);
        q.set_filter(ColumnFilter::new("name", FilterOperator::Contains, "a"));
        assert_eq!(q.pagination.page(), 1);

        q.set_page(2);
        q.set_global_filter("x");
        assert_eq!(q.pagination.page(), 1);

        q.set_page(2);
        q.toggle_sort(&cols[0]);
        assert_eq!(q.pagination.page(), 1);

        q.set_page(2);
        q.set_page_size(5);
        assert_eq!(q.pagination.page(), 1);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let rows: Vec<Person> = Vec::new();
        let mut q = query(10);
        q.set_page(4);
        let page = run_pipeline(&rows, &columns(), &q);
        assert!(page.rows.is_empty());
        assert_eq!((page.page, page.total_pages, page.total), (1, 1, 0));
    }

    #[test]
    fn test_request_round_trips_query() {
        let cols = columns();
        let mut q = GridQuery::new(PaginationState::new(5), true);
        q.toggle_sort(&cols[0]);
        q.toggle_sort(&cols[1]);
        q.set_filter(ColumnFilter::between("age", 20_i64, 40_i64));
        q.set_global_filter("a");
        q.set_page(2);
        assert_eq!(GridQuery::from_request(&q.to_request()).to_request(), q.to_request());
    }

    #[test]
    fn test_go_to_page_reports_clamped_page() {
        let mut q = query(2);
        assert_eq!(q.go_to_page(9, 5), 3);
        assert_eq!(q.pagination.page(), 3);
        assert_eq!(q.go_to_page(0, 5), 1);
        assert_eq!(q.go_to_page(2, 0), 1);
    }
}
