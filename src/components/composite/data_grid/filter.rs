//! Filter types for the data grid
//!
//! Column filters combine with AND. The global filter matches a
//! case-insensitive substring across every visible column.

use std::str::FromStr;

use gpui::SharedString;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::column::FilterKind;
use super::value::CellValue;

/// Comparison applied by a column filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    #[default]
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    /// Inclusive range
    Between,
}

impl FilterOperator {
    /// Get the display label for the operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Contains => "contains",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Between => "between",
        }
    }

    /// Returns true if this operator requires two values
    pub fn requires_two_values(&self) -> bool {
        matches!(self, Self::Between)
    }

    /// Get all available operators in display order
    pub fn all() -> &'static [FilterOperator] {
        &[
            Self::Equals,
            Self::Contains,
            Self::StartsWith,
            Self::EndsWith,
            Self::GreaterThan,
            Self::LessThan,
            Self::Between,
        ]
    }

    /// Parse an operator name, falling back to equals with a warning
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(operator = name, "Unknown filter operator, using equals");
            Self::Equals
        })
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "equals" | "eq" | "=" | "==" => Ok(Self::Equals),
            "contains" => Ok(Self::Contains),
            "startswith" => Ok(Self::StartsWith),
            "endswith" => Ok(Self::EndsWith),
            "greaterthan" | "gt" | ">" => Ok(Self::GreaterThan),
            "lessthan" | "lt" | "<" => Ok(Self::LessThan),
            "between" => Ok(Self::Between),
            _ => Err(()),
        }
    }
}

/// One active filter on a column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column_id: SharedString,
    pub operator: FilterOperator,
    pub value: CellValue,
    /// Upper bound for [`FilterOperator::Between`]. Either bound may be
    /// null for an open-ended range.
    pub value_to: Option<CellValue>,
}

impl ColumnFilter {
    pub fn new(
        column_id: impl Into<SharedString>,
        operator: FilterOperator,
        value: impl Into<CellValue>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            operator,
            value: value.into(),
            value_to: None,
        }
    }

    pub fn between(
        column_id: impl Into<SharedString>,
        low: impl Into<CellValue>,
        high: impl Into<CellValue>,
    ) -> Self {
        Self {
            value_to: Some(high.into()),
            ..Self::new(column_id, FilterOperator::Between, low)
        }
    }

    /// Parse filter box text. Number and date columns accept `>v`, `<v`,
    /// `a..b` and `=v`; text columns default to contains and accept `=v`,
    /// `^v` (starts with) and `v$` (ends with).
    pub fn from_input(column_id: impl Into<SharedString>, kind: &FilterKind, text: &str) -> Self {
        let column_id = column_id.into();
        let text = text.trim();
        let value = |raw: &str| coerce(kind, raw.trim());

        match kind {
            FilterKind::Number | FilterKind::Date => {
                if let Some(rest) = text.strip_prefix('>') {
                    Self::new(column_id, FilterOperator::GreaterThan, value(rest))
                } else if let Some(rest) = text.strip_prefix('<') {
                    Self::new(column_id, FilterOperator::LessThan, value(rest))
                } else if let Some((low, high)) = text.split_once("..") {
                    let bound = |raw: &str| {
                        let raw = raw.trim();
                        if raw.is_empty() {
                            CellValue::Null
                        } else {
                            value(raw)
                        }
                    };
                    Self::between(column_id, bound(low), bound(high))
                } else {
                    let rest = text.strip_prefix('=').unwrap_or(text);
                    Self::new(column_id, FilterOperator::Equals, value(rest))
                }
            }
            _ => {
                if let Some(rest) = text.strip_prefix('=') {
                    Self::new(column_id, FilterOperator::Equals, value(rest))
                } else if let Some(rest) = text.strip_prefix('^') {
                    Self::new(column_id, FilterOperator::StartsWith, value(rest))
                } else if let Some(rest) = text.strip_suffix('$') {
                    Self::new(column_id, FilterOperator::EndsWith, value(rest))
                } else {
                    Self::new(column_id, FilterOperator::Contains, value(text))
                }
            }
        }
    }

    /// An empty value means "no filter". A range is active while either
    /// bound is set.
    pub fn is_active(&self) -> bool {
        !self.value.is_empty() || self.upper_bound().is_some()
    }

    fn lower_bound(&self) -> Option<&CellValue> {
        Some(&self.value).filter(|value| !value.is_empty())
    }

    fn upper_bound(&self) -> Option<&CellValue> {
        match self.operator {
            FilterOperator::Between => self.value_to.as_ref().filter(|value| !value.is_empty()),
            _ => None,
        }
    }

    /// Evaluate against a cell value. Null cells never match.
    pub fn matches(&self, cell: &CellValue) -> bool {
        use std::cmp::Ordering;

        if cell.is_null() {
            return false;
        }
        let text = || cell.display().to_lowercase();
        let needle = || self.value.display().to_lowercase();
        match self.operator {
            FilterOperator::Equals => cell.compare_loose(&self.value) == Ordering::Equal,
            FilterOperator::Contains => text().contains(&needle()),
            FilterOperator::StartsWith => text().starts_with(&needle()),
            FilterOperator::EndsWith => text().ends_with(&needle()),
            FilterOperator::GreaterThan => cell.compare_loose(&self.value) == Ordering::Greater,
            FilterOperator::LessThan => cell.compare_loose(&self.value) == Ordering::Less,
            FilterOperator::Between => {
                let (mut low, mut high) = (self.lower_bound(), self.upper_bound());
                if let (Some(a), Some(b)) = (low, high) {
                    if a.compare_loose(b) == Ordering::Greater {
                        (low, high) = (Some(b), Some(a));
                    }
                }
                low.is_none_or(|low| cell.compare_loose(low) != Ordering::Less)
                    && high.is_none_or(|high| cell.compare_loose(high) != Ordering::Greater)
            }
        }
    }

    /// Short chip text, e.g. `age > 30`
    pub fn describe(&self, column_label: &str) -> String {
        match (&self.operator, &self.value_to) {
            (FilterOperator::Between, Some(high)) => format!(
                "{column_label} {} {}..{}",
                self.operator.label(),
                self.value.display(),
                high.display()
            ),
            _ => format!(
                "{column_label} {} {}",
                self.operator.label(),
                self.value.display()
            ),
        }
    }
}

/// Typed value for a column's filter kind; unparsable input stays text
fn coerce(kind: &FilterKind, raw: &str) -> CellValue {
    let text = CellValue::from(raw);
    match kind {
        FilterKind::Number => text.as_f64().map(CellValue::Float).unwrap_or(text),
        FilterKind::Date => text.as_date().map(CellValue::Date).unwrap_or(text),
        _ => text,
    }
}

/// Active column filters in insertion order plus the global search text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    filters: LinkedHashMap<SharedString, ColumnFilter>,
    global: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the filter for a column. An empty value removes it.
    pub fn set(&mut self, filter: ColumnFilter) {
        if filter.is_active() {
            self.filters.replace(filter.column_id.clone(), filter);
        } else {
            self.filters.remove(&filter.column_id);
        }
    }

    pub fn remove(&mut self, column_id: &str) -> bool {
        self.filters.remove(column_id).is_some()
    }

    pub fn get(&self, column_id: &str) -> Option<&ColumnFilter> {
        self.filters.get(column_id)
    }

    /// Column filters in the order they were first set
    pub fn filters(&self) -> impl Iterator<Item = &ColumnFilter> {
        self.filters.values()
    }

    /// Blank text clears the global filter
    pub fn set_global(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        self.global = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
        self.global = None;
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.global.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operator_names() {
        assert_eq!(FilterOperator::parse_lenient("startsWith"), FilterOperator::StartsWith);
        assert_eq!(FilterOperator::parse_lenient("greater_than"), FilterOperator::GreaterThan);
        assert_eq!(FilterOperator::parse_lenient("Between"), FilterOperator::Between);
        assert_eq!(FilterOperator::parse_lenient("bogus"), FilterOperator::Equals);
    }

    #[test]
    fn test_text_operators_ignore_case() {
        let cell = CellValue::from("Grace Hopper");
        assert!(ColumnFilter::new("n", FilterOperator::Contains, "HOP").matches(&cell));
        assert!(ColumnFilter::new("n", FilterOperator::StartsWith, "grace").matches(&cell));
        assert!(ColumnFilter::new("n", FilterOperator::EndsWith, "PER").matches(&cell));
        assert!(ColumnFilter::new("n", FilterOperator::Equals, "grace hopper").matches(&cell));
        assert!(!ColumnFilter::new("n", FilterOperator::EndsWith, "grace").matches(&cell));
    }

    #[test]
    fn test_numeric_comparisons_coerce_text() {
        let cell = CellValue::Int(42);
        assert!(ColumnFilter::new("n", FilterOperator::GreaterThan, "9").matches(&cell));
        assert!(ColumnFilter::new("n", FilterOperator::LessThan, 42.5).matches(&cell));
        assert!(ColumnFilter::new("n", FilterOperator::Equals, "42").matches(&cell));
    }

    #[test]
    fn test_between_is_inclusive() {
        let filter = ColumnFilter::between("n", 10_i64, 20_i64);
        assert!(filter.matches(&CellValue::Int(10)));
        assert!(filter.matches(&CellValue::Int(20)));
        assert!(!filter.matches(&CellValue::Int(21)));
        // Reversed bounds are swapped
        assert!(ColumnFilter::between("n", 20_i64, 10_i64).matches(&CellValue::Int(15)));
    }

    #[test]
    fn test_open_ended_ranges() {
        let from = ColumnFilter::from_input("age", &FilterKind::Number, "20..");
        assert!(from.is_active());
        assert!(from.matches(&CellValue::Int(30)));
        assert!(from.matches(&CellValue::Int(20)));
        assert!(!from.matches(&CellValue::Int(10)));

        let upto = ColumnFilter::from_input("age", &FilterKind::Number, "..40");
        assert!(upto.is_active());
        assert!(upto.matches(&CellValue::Int(30)));
        assert!(!upto.matches(&CellValue::Int(50)));

        let mut state = FilterState::new();
        state.set(upto);
        assert!(state.get("age").is_some());

        state.set(ColumnFilter::from_input("age", &FilterKind::Number, " .. "));
        assert!(state.get("age").is_none());
    }

    #[test]
    fn test_null_never_matches() {
        let filter = ColumnFilter::new("n", FilterOperator::Contains, "");
        assert!(!filter.matches(&CellValue::Null));
    }

    #[test]
    fn test_number_input_syntax() {
        let gt = ColumnFilter::from_input("age", &FilterKind::Number, "> 30");
        assert_eq!(gt.operator, FilterOperator::GreaterThan);
        assert_eq!(gt.value, CellValue::Float(30.0));

        let range = ColumnFilter::from_input("age", &FilterKind::Number, "20..40");
        assert_eq!(range.operator, FilterOperator::Between);
        assert_eq!(range.value_to, Some(CellValue::Float(40.0)));

        let eq = ColumnFilter::from_input("age", &FilterKind::Number, "7");
        assert_eq!(eq.operator, FilterOperator::Equals);
    }

    #[test]
    fn test_text_input_syntax() {
        let kind = FilterKind::Text;
        assert_eq!(
            ColumnFilter::from_input("n", &kind, "^gr").operator,
            FilterOperator::StartsWith
        );
        assert_eq!(
            ColumnFilter::from_input("n", &kind, "per$").operator,
            FilterOperator::EndsWith
        );
        let contains = ColumnFilter::from_input("n", &kind, " hop ");
        assert_eq!(contains.operator, FilterOperator::Contains);
        assert_eq!(contains.value, CellValue::from("hop"));
        assert!(!ColumnFilter::from_input("n", &kind, "   ").is_active());
    }

    #[test]
    fn test_date_input_parses() {
        let filter = ColumnFilter::from_input("joined", &FilterKind::Date, ">2024-01-31");
        assert!(matches!(filter.value, CellValue::Date(_)));
    }

    #[test]
    fn test_empty_value_removes_filter() {
        let mut state = FilterState::new();
        state.set(ColumnFilter::new("name", FilterOperator::Contains, "a"));
        state.set(ColumnFilter::new("age", FilterOperator::GreaterThan, 3_i64));
        assert_eq!(state.len(), 2);

        state.set(ColumnFilter::new("name", FilterOperator::Contains, "  "));
        assert_eq!(state.len(), 1);
        assert!(state.get("name").is_none());
    }

    #[test]
    fn test_filters_keep_insertion_order() {
        let mut state = FilterState::new();
        state.set(ColumnFilter::new("b", FilterOperator::Equals, 1_i64));
        state.set(ColumnFilter::new("a", FilterOperator::Equals, 1_i64));
        state.set(ColumnFilter::new("b", FilterOperator::Equals, 2_i64));
        let ids: Vec<_> = state.filters().map(|f| f.column_id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_blank_global_clears() {
        let mut state = FilterState::new();
        state.set_global("  ada ");
        assert_eq!(state.global(), Some("ada"));
        state.set_global("");
        assert!(state.is_empty());
    }
}
