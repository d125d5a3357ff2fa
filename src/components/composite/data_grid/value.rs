//! Cell Values
//!
//! The dynamically typed value a column derives from a row. Filtering,
//! sorting and the default cell renderer all work on this.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Value of one cell
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Missing or undefined; fails every filter and sorts last
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Comparison class of a cell; classes order number < date < bool < text
enum ValueClass<'a> {
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
    Text(&'a str),
    Null,
}

impl ValueClass<'_> {
    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Bool(_) => 2,
            Self::Text(_) => 3,
            Self::Null => 4,
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Blank text counts as empty as well as null
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Numeric view. Text parses if it looks like a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            _ => None,
        }
    }

    /// Date view. Text parses if it is `YYYY-MM-DD`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// String form used by the default renderer and the global filter
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Date(date) => date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Ordering for sorting two non-null values. Text uses [`collate`].
    pub fn compare(&self, other: &Self) -> Ordering {
        self.compare_with(other, collate)
    }

    /// Ordering for filter operators: like [`compare`](Self::compare) but
    /// text ignores case entirely.
    pub fn compare_loose(&self, other: &Self) -> Ordering {
        self.compare_with(other, |a, b| a.to_lowercase().cmp(&b.to_lowercase()))
    }

    /// Text that parses as a number or date joins that class, so every value
    /// lands in exactly one class and the ordering stays total on mixed columns.
    fn class(&self) -> ValueClass<'_> {
        match self {
            Self::Null => ValueClass::Null,
            Self::Bool(value) => ValueClass::Bool(*value),
            Self::Int(value) => ValueClass::Number(*value as f64),
            Self::Float(value) => ValueClass::Number(*value),
            Self::Date(date) => ValueClass::Date(*date),
            Self::Text(text) => self
                .as_f64()
                .map(ValueClass::Number)
                .or_else(|| self.as_date().map(ValueClass::Date))
                .unwrap_or(ValueClass::Text(text)),
        }
    }

    fn compare_with(&self, other: &Self, text_cmp: impl Fn(&str, &str) -> Ordering) -> Ordering {
        match (self.class(), other.class()) {
            (ValueClass::Number(a), ValueClass::Number(b)) => a.total_cmp(&b),
            (ValueClass::Date(a), ValueClass::Date(b)) => a.cmp(&b),
            (ValueClass::Bool(a), ValueClass::Bool(b)) => a.cmp(&b),
            (ValueClass::Text(a), ValueClass::Text(b)) => text_cmp(a, b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    /// Convert a JSON scalar. Arrays and objects become their JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Locale-style text ordering: case-insensitive first, then lowercase
/// before uppercase for words that differ only in case.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    a.chars()
        .zip(b.chars())
        .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            _ => None,
        })
        .unwrap_or(Ordering::Equal)
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_types() {
        assert_eq!(CellValue::Int(3).compare(&CellValue::Float(2.5)), Ordering::Greater);
        assert_eq!(
            CellValue::Int(10).compare(&CellValue::Text("9".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn test_mixed_column_order_is_consistent() {
        let values = vec![
            CellValue::Int(10),
            CellValue::from("10a"),
            CellValue::from("9"),
            CellValue::Bool(true),
            CellValue::from("2024-01-02"),
        ];
        let mut forward = values.clone();
        forward.sort_by(CellValue::compare);
        let mut reversed: Vec<_> = values.into_iter().rev().collect();
        reversed.sort_by(CellValue::compare);

        assert_eq!(forward, reversed);
        assert_eq!(
            forward,
            vec![
                CellValue::from("9"),
                CellValue::Int(10),
                CellValue::from("2024-01-02"),
                CellValue::Bool(true),
                CellValue::from("10a"),
            ]
        );
    }

    #[test]
    fn test_word_nan_stays_text() {
        assert_eq!(CellValue::from("Nan").as_f64(), None);
        assert_eq!(
            CellValue::from("Nan").compare(&CellValue::from("Ada")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_collate_folds_case() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zed", "alpha"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_loose_compare_ignores_case() {
        let a = CellValue::from("Alice");
        assert_eq!(a.compare_loose(&CellValue::from("alice")), Ordering::Equal);
        assert_ne!(a.compare(&CellValue::from("alice")), Ordering::Equal);
    }

    #[test]
    fn test_dates_parse_from_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let cell = CellValue::Date(date);
        assert_eq!(cell.compare(&CellValue::from("2024-02-28")), Ordering::Greater);
        assert_eq!(cell.display(), "2024-03-01");
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"n": 4, "f": 1.5, "s": "x", "z": null});
        assert_eq!(CellValue::from_json(&json["n"]), CellValue::Int(4));
        assert_eq!(CellValue::from_json(&json["f"]), CellValue::Float(1.5));
        assert_eq!(CellValue::from_json(&json["s"]), CellValue::from("x"));
        assert_eq!(CellValue::from_json(&json["z"]), CellValue::Null);
    }

    #[test]
    fn test_option_into_null() {
        let none: Option<i64> = None;
        assert!(CellValue::from(none).is_null());
        assert_eq!(CellValue::from(Some(2_i64)), CellValue::Int(2));
    }
}
