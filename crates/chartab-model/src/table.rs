#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::Scalar;

/// One decoded source row, exactly as the boundary produced it.
///
/// Cells keep their source order so the first row of a table can define
/// column order. Values pass through untouched; coercion belongs to the
/// consumers that need numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub cells: Vec<(String, Scalar)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: Scalar) {
        self.cells.push((column.into(), value));
    }
}

impl FromIterator<(String, Scalar)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, Scalar)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// A normalized row: an order-irrelevant column-to-value mapping,
/// immutable once the dataset is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub cells: BTreeMap<String, Scalar>,
}

impl Record {
    /// Reads the value at `column`, resolving an absent column to the
    /// missing sentinel rather than failing.
    pub fn value(&self, column: &str) -> &Scalar {
        self.cells.get(column).unwrap_or(&Scalar::Missing)
    }
}

/// The normalized dataset shared read-only by every tabulation consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names in the insertion order of the first source row.
    /// Empty when the dataset has no records.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_column_resolves_to_missing() {
        let record = Record::default();
        assert!(record.value("Color").is_missing());
    }

    #[test]
    fn present_column_resolves_to_its_value() {
        let mut record = Record::default();
        record
            .cells
            .insert("Color".to_string(), Scalar::Text("Red".to_string()));
        assert_eq!(record.value("Color"), &Scalar::Text("Red".to_string()));
    }
}
