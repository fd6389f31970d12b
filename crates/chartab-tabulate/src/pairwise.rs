#![deny(unsafe_code)]

use std::collections::BTreeMap;

use tracing::debug;

use chartab_model::{Dataset, PairwiseAggregation, Scalar};

use crate::error::{Result, TabulateError};

/// Sums a numeric metric column under two grouping columns.
///
/// Records whose metric value fails numeric coercion are skipped outright:
/// they neither count nor create an empty bucket, keeping the operation
/// total over arbitrary real-world data. A grouping column absent from a
/// record resolves to the missing sentinel and groups like any other
/// value. Overlapping column names (even all three equal) proceed
/// mechanically with no special-casing.
///
/// # Errors
///
/// `EmptyColumnName` when any of the three column-name arguments is empty;
/// that is the caller's contract violation, never a data fault.
pub fn aggregate(
    dataset: &Dataset,
    primary: &str,
    secondary: &str,
    metric: &str,
) -> Result<PairwiseAggregation> {
    require_column_name("primary", primary)?;
    require_column_name("secondary", secondary)?;
    require_column_name("metric", metric)?;

    let mut groups: BTreeMap<Scalar, BTreeMap<Scalar, f64>> = BTreeMap::new();
    let mut skipped = 0usize;
    for record in &dataset.records {
        let Some(value) = record.value(metric).to_metric() else {
            skipped += 1;
            continue;
        };
        let sum = groups
            .entry(record.value(primary).clone())
            .or_default()
            .entry(record.value(secondary).clone())
            .or_insert(0.0);
        *sum += value;
    }
    debug!(
        records = dataset.len(),
        skipped, primary, secondary, metric, "aggregated pairwise sums"
    );
    Ok(PairwiseAggregation { groups })
}

fn require_column_name(role: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TabulateError::EmptyColumnName { role });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use chartab_model::RawRow;

    fn sale(product: &str, region: &str, total: &str) -> RawRow {
        let mut row = RawRow::new();
        row.push("Product", Scalar::Text(product.to_string()));
        row.push("Region", Scalar::Text(region.to_string()));
        row.push("TotalSales", Scalar::Text(total.to_string()));
        row
    }

    fn text(value: &str) -> Scalar {
        Scalar::Text(value.to_string())
    }

    #[test]
    fn sums_in_record_order_and_drops_uncoercible_rows() {
        let dataset = normalize(vec![
            sale("Widget A", "East", "100"),
            sale("Widget A", "East", "50"),
            sale("Widget B", "West", "abc"),
        ]);
        let agg =
            aggregate(&dataset, "Product", "Region", "TotalSales").expect("valid column names");

        assert_eq!(agg.sum(&text("Widget A"), &text("East")), Some(150.0));
        assert!(agg.groups.get(&text("Widget B")).is_none());
        assert_eq!(agg.groups.len(), 1);
    }

    #[test]
    fn empty_metric_creates_no_zero_bucket() {
        let dataset = normalize(vec![sale("Widget A", "East", "")]);
        let agg =
            aggregate(&dataset, "Product", "Region", "TotalSales").expect("valid column names");
        assert!(agg.is_empty());
    }

    #[test]
    fn absent_grouping_column_groups_under_missing() {
        let mut row = RawRow::new();
        row.push("TotalSales", Scalar::Number(25.0));
        let dataset = normalize(vec![row]);
        let agg =
            aggregate(&dataset, "Product", "Region", "TotalSales").expect("valid column names");
        assert_eq!(agg.sum(&Scalar::Missing, &Scalar::Missing), Some(25.0));
    }

    #[test]
    fn overlapping_columns_proceed_mechanically() {
        let mut row = RawRow::new();
        row.push("n", Scalar::Number(3.0));
        let dataset = normalize(vec![row.clone(), row]);
        let agg = aggregate(&dataset, "n", "n", "n").expect("valid column names");
        assert_eq!(agg.sum(&Scalar::Number(3.0), &Scalar::Number(3.0)), Some(6.0));
    }

    #[test]
    fn empty_column_name_is_a_parameter_fault() {
        let dataset = Dataset::default();
        let err = aggregate(&dataset, "", "Region", "TotalSales").unwrap_err();
        assert_eq!(err, TabulateError::EmptyColumnName { role: "primary" });
        let err = aggregate(&dataset, "Product", "Region", "").unwrap_err();
        assert_eq!(err, TabulateError::EmptyColumnName { role: "metric" });
    }

    #[test]
    fn empty_dataset_yields_empty_aggregation() {
        let agg = aggregate(&Dataset::default(), "a", "b", "c").expect("valid column names");
        assert!(agg.is_empty());
    }
}
