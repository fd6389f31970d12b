use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chartab_ingest::{read_csv_rows, read_json_rows};
use chartab_model::Dataset;
use chartab_tabulate::{aggregate, normalize, tabulate};

use crate::cli::{AggregateArgs, TabulateArgs};
use crate::summary::print_summary;

pub fn run_tabulate(args: &TabulateArgs) -> Result<()> {
    let span = info_span!("tabulate", file = %args.file.display());
    let _guard = span.enter();

    let dataset = load_dataset(&args.file)?;
    let table = tabulate(&dataset);
    info!(
        records = dataset.len(),
        columns = table.columns.len(),
        "tabulated dataset"
    );
    if args.summary {
        print_summary(&table, dataset.len());
    } else {
        print_body(&table, args.pretty)?;
    }
    Ok(())
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<()> {
    let span = info_span!("aggregate", file = %args.file.display());
    let _guard = span.enter();

    let dataset = load_dataset(&args.file)?;
    let aggregation = aggregate(&dataset, &args.column1, &args.column2, &args.metric)?;
    info!(
        records = dataset.len(),
        groups = aggregation.groups.len(),
        "aggregated dataset"
    );
    print_body(&aggregation, args.pretty)
}

/// Decodes the source table (CSV by extension, JSON array otherwise) and
/// normalizes it into the dataset both operations consume.
fn load_dataset(path: &Path) -> Result<Dataset> {
    let rows = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => read_csv_rows(path)
            .with_context(|| format!("read csv table: {}", path.display()))?,
        _ => {
            let file =
                File::open(path).with_context(|| format!("open table: {}", path.display()))?;
            read_json_rows(BufReader::new(file))
                .with_context(|| format!("decode json table: {}", path.display()))?
        }
    };
    Ok(normalize(rows))
}

fn print_body<T: serde::Serialize>(body: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)?
    } else {
        serde_json::to_string(body)?
    };
    println!("{rendered}");
    Ok(())
}
