//! Schema-less rows and datasets.
//!
//! A [`Dataset`] is a finite sequence of rows with no enforced schema; the
//! column inventory is carried explicitly so that "first column of a given
//! type" fallbacks are stable regardless of how the rows were ingested.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel column name meaning "aggregate by row count, not a column".
pub const COUNT_COLUMN: &str = "_count_";

/// Number of rows sampled when sniffing a column's value type.
const TYPE_SAMPLE_ROWS: usize = 20;

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
    /// Null / undefined / absent.
    Missing,
}

impl Value {
    /// Coerces the value to a finite number.
    ///
    /// Numbers pass through, numeric-looking text parses, everything else
    /// (including NaN and infinities) is `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) | Value::Missing => None,
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Renders the value as text for distinct-count comparisons.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Missing => None,
        }
    }

    /// True for null/undefined cells.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::Text(raw.to_string())
    }
}

impl From<f64> for Value {
    fn from(raw: f64) -> Self {
        Value::Number(raw)
    }
}

/// One record: named scalar values. Cells absent from the map are missing.
pub type Row = BTreeMap<String, Value>;

/// A finite sequence of rows sharing a discovered (not enforced) column set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// The rows. Individual rows may lack any column.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset with an explicit column order.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Creates a dataset discovering columns from the first row.
    ///
    /// Row maps do not retain source ordering, so the discovered inventory
    /// is alphabetical. Callers that know the real column order should use
    /// [`Dataset::new`].
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when `name` is part of the column inventory.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Iterates the values of one column across all rows.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&Value::Missing))
    }

    /// Type-sniffs a column: true when a sample of its non-missing values
    /// all coerce to finite numbers (and at least one value exists).
    #[must_use]
    pub fn is_numeric_column(&self, name: &str) -> bool {
        let mut seen = false;
        for value in self.column_values(name).take(TYPE_SAMPLE_ROWS) {
            if value.is_missing() {
                continue;
            }
            if value.as_number().is_none() {
                return false;
            }
            seen = true;
        }
        seen
    }

    /// True when the sampled column holds at least one non-missing value
    /// that does not coerce to a number.
    #[must_use]
    pub fn is_text_column(&self, name: &str) -> bool {
        self.column_values(name)
            .take(TYPE_SAMPLE_ROWS)
            .any(|value| !value.is_missing() && value.as_number().is_none())
    }

    /// First column (in inventory order) whose sampled values are numeric.
    #[must_use]
    pub fn first_numeric_column(&self) -> Option<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .find(|name| self.is_numeric_column(name))
    }

    /// First column (in inventory order) whose sampled values are textual.
    #[must_use]
    pub fn first_text_column(&self) -> Option<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .find(|name| self.is_text_column(name))
    }
}
