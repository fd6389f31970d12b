#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::Scalar;

/// Distinct-value histogram for one column.
pub type ValueCounts = BTreeMap<Scalar, u64>;

/// Per-column frequency distributions plus the ordered column list.
///
/// Wire form matches the charting layer's contract:
/// `{"categoryCounts": {<column>: {<value>: <count>}}, "columns": [...]}`,
/// with grouped values stringified as JSON object keys.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FrequencyTable {
    #[serde(rename = "categoryCounts")]
    pub counts: BTreeMap<String, ValueCounts>,
    pub columns: Vec<String>,
}

impl FrequencyTable {
    /// Histogram for one column, if the column was tabulated.
    pub fn column(&self, column: &str) -> Option<&ValueCounts> {
        self.counts.get(column)
    }
}

/// Two-level grouping of a summed numeric metric:
/// primary value -> secondary value -> sum.
///
/// A (primary, secondary) pair is present iff at least one record
/// contributed a coercible metric value for it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct PairwiseAggregation {
    pub groups: BTreeMap<Scalar, BTreeMap<Scalar, f64>>,
}

impl PairwiseAggregation {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Accumulated sum for one (primary, secondary) pair.
    pub fn sum(&self, primary: &Scalar, secondary: &Scalar) -> Option<f64> {
        self.groups.get(primary).and_then(|inner| inner.get(secondary)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_table_serializes_to_wire_contract() {
        let mut counts = BTreeMap::new();
        let mut color = ValueCounts::new();
        color.insert(Scalar::Text("Red".to_string()), 2);
        color.insert(Scalar::Missing, 1);
        counts.insert("Color".to_string(), color);
        let table = FrequencyTable {
            counts,
            columns: vec!["Color".to_string()],
        };

        let json = serde_json::to_value(&table).expect("serialize table");
        assert_eq!(json["categoryCounts"]["Color"]["Red"], 2);
        assert_eq!(json["categoryCounts"]["Color"]["(missing)"], 1);
        assert_eq!(json["columns"][0], "Color");
    }

    #[test]
    fn aggregation_serializes_as_nested_object() {
        let mut inner = BTreeMap::new();
        inner.insert(Scalar::Text("East".to_string()), 150.0);
        let mut groups = BTreeMap::new();
        groups.insert(Scalar::Text("Widget A".to_string()), inner);
        let agg = PairwiseAggregation { groups };

        let json = serde_json::to_value(&agg).expect("serialize aggregation");
        assert_eq!(json["Widget A"]["East"], 150.0);
    }
}
