//! Snapshot tests for the JSON bodies the CLI prints.

use chartab_ingest::read_csv_rows;
use chartab_tabulate::{aggregate, normalize, tabulate};

fn dataset_from_csv(contents: &str) -> chartab_model::Dataset {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("table.csv");
    std::fs::write(&path, contents).expect("write csv fixture");
    normalize(read_csv_rows(&path).expect("read csv"))
}

#[test]
fn tabulate_body() {
    let dataset = dataset_from_csv("Color\nRed\nBlue\nRed\n");
    let table = tabulate(&dataset);
    let body = serde_json::to_string_pretty(&table).expect("serialize table");
    insta::assert_snapshot!(body, @r#"
    {
      "categoryCounts": {
        "Color": {
          "Blue": 1,
          "Red": 2
        }
      },
      "columns": [
        "Color"
      ]
    }
    "#);
}

#[test]
fn aggregate_body() {
    let dataset = dataset_from_csv(
        "Product,Region,TotalSales\n\
         Widget A,East,100\n\
         Widget A,East,50\n\
         Widget B,West,abc\n",
    );
    let aggregation =
        aggregate(&dataset, "Product", "Region", "TotalSales").expect("valid column names");
    let body = serde_json::to_string_pretty(&aggregation).expect("serialize aggregation");
    insta::assert_snapshot!(body, @r#"
    {
      "Widget A": {
        "East": 150.0
      }
    }
    "#);
}

#[test]
fn missing_cells_group_under_the_sentinel_key() {
    let dataset = dataset_from_csv("Color,Size\nRed,\nBlue,L\n");
    let table = tabulate(&dataset);
    let body = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(body["categoryCounts"]["Size"]["(missing)"], 1);
    assert_eq!(body["categoryCounts"]["Size"]["L"], 1);
}
