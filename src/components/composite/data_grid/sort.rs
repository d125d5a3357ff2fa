//! Sort State
//!
//! Header clicks cycle a column through none, ascending, descending.
//! Single mode keeps one key; multi mode keeps keys in click order, the
//! first key taking priority.

use std::cmp::Ordering;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// Direction of a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// Next state in the header click cycle
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::None,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// One column in the sort order
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub column_id: SharedString,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(column_id: impl Into<SharedString>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

/// Active sort keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    keys: Vec<SortKey>,
    multi: bool,
}

impl SortState {
    pub fn new(multi: bool) -> Self {
        Self {
            keys: Vec::new(),
            multi,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    /// Leaving multi mode keeps only the primary key
    pub fn set_multi(&mut self, multi: bool) {
        self.multi = multi;
        if !multi {
            self.keys.truncate(1);
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn direction_of(&self, column_id: &str) -> SortDirection {
        self.keys
            .iter()
            .find(|key| key.column_id.as_str() == column_id)
            .map(|key| key.direction)
            .unwrap_or_default()
    }

    /// 1-based priority of a column among the keys
    pub fn priority_of(&self, column_id: &str) -> Option<usize> {
        self.keys
            .iter()
            .position(|key| key.column_id.as_str() == column_id)
            .map(|index| index + 1)
    }

    /// Advance a column through the click cycle and return its new direction
    pub fn toggle(&mut self, column_id: impl Into<SharedString>) -> SortDirection {
        let column_id = column_id.into();
        let next = self.direction_of(&column_id).next();
        self.set(column_id, next);
        next
    }

    /// Set a column's direction directly. `None` removes the key.
    pub fn set(&mut self, column_id: impl Into<SharedString>, direction: SortDirection) {
        let column_id = column_id.into();
        if !self.multi {
            self.keys.clear();
        }
        let existing = self.keys.iter().position(|key| key.column_id == column_id);
        match (existing, direction) {
            (Some(index), SortDirection::None) => {
                self.keys.remove(index);
            }
            (Some(index), direction) => self.keys[index].direction = direction,
            (None, SortDirection::None) => {}
            (None, direction) => self.keys.push(SortKey::new(column_id, direction)),
        }
    }

    /// Replace every key, keeping only the first in single mode
    pub fn set_keys(&mut self, keys: Vec<SortKey>) {
        self.keys = keys
            .into_iter()
            .filter(|key| key.direction != SortDirection::None)
            .collect();
        if !self.multi {
            self.keys.truncate(1);
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Compare two cell values for one key. Nulls sort last in either direction.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
            SortDirection::None => Ordering::Equal,
        },
    }
}

/// Compare two rows' pre-extracted key values, first key first
pub fn compare_keys(a: &[CellValue], b: &[CellValue], keys: &[SortKey]) -> Ordering {
    keys.iter()
        .zip(a.iter().zip(b.iter()))
        .map(|(key, (a, b))| compare_cells(a, b, key.direction))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_cycles_and_replaces() {
        let mut sort = SortState::new(false);
        assert_eq!(sort.toggle("name"), SortDirection::Asc);
        assert_eq!(sort.toggle("name"), SortDirection::Desc);
        assert_eq!(sort.toggle("age"), SortDirection::Asc);
        assert_eq!(sort.keys(), &[SortKey::new("age", SortDirection::Asc)]);
        sort.toggle("age");
        assert_eq!(sort.toggle("age"), SortDirection::None);
        assert!(sort.is_empty());
    }

    #[test]
    fn test_multi_mode_appends_and_cycles_in_place() {
        let mut sort = SortState::new(true);
        sort.toggle("name");
        sort.toggle("age");
        sort.toggle("name");
        assert_eq!(
            sort.keys(),
            &[
                SortKey::new("name", SortDirection::Desc),
                SortKey::new("age", SortDirection::Asc),
            ]
        );
        assert_eq!(sort.priority_of("age"), Some(2));

        sort.toggle("name");
        assert_eq!(sort.keys(), &[SortKey::new("age", SortDirection::Asc)]);
    }

    #[test]
    fn test_leaving_multi_keeps_primary() {
        let mut sort = SortState::new(true);
        sort.toggle("a");
        sort.toggle("b");
        sort.set_multi(false);
        assert_eq!(sort.keys(), &[SortKey::new("a", SortDirection::Asc)]);
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let null = CellValue::Null;
        let one = CellValue::Int(1);
        assert_eq!(compare_cells(&null, &one, SortDirection::Asc), Ordering::Greater);
        assert_eq!(compare_cells(&null, &one, SortDirection::Desc), Ordering::Greater);
        assert_eq!(compare_cells(&one, &null, SortDirection::Desc), Ordering::Less);
    }

    #[test]
    fn test_later_keys_break_ties() {
        let keys = [
            SortKey::new("team", SortDirection::Asc),
            SortKey::new("score", SortDirection::Desc),
        ];
        let a = [CellValue::from("red"), CellValue::Int(3)];
        let b = [CellValue::from("red"), CellValue::Int(9)];
        assert_eq!(compare_keys(&a, &b, &keys), Ordering::Greater);
    }
}
