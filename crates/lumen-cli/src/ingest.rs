//! CSV ingestion into a schema-less [`Dataset`].

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::info;

use lumen_model::{Dataset, Row, Value};

/// Loads a CSV file, detecting numeric cells by value.
///
/// Empty cells become [`Value::Missing`]; cells that parse as finite
/// numbers become [`Value::Number`]; everything else stays text.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(name, cell)| (name.clone(), parse_cell(cell)))
            .collect();
        rows.push(row);
    }

    info!(
        rows = rows.len(),
        columns = columns.len(),
        path = %path.display(),
        "dataset loaded"
    );
    Ok(Dataset::new(columns, rows))
}

fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Missing;
    }
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => Value::Number(number),
        _ => Value::Text(raw.to_string()),
    }
}
