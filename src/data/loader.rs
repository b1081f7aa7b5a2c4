use std::io::Read;
use std::path::Path;

use super::model::{CellValue, Table};
use super::schema::DatasetSchema;
use crate::error::{DashboardError, Result};

/// Cell texts read as missing values; the default NA set of pandas' `read_csv`.
const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset from a CSV file on disk.
pub fn load_csv(path: &Path, schema: &DatasetSchema) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    let table = load_from_reader(file, schema)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Parse CSV text into a [`Table`]:
/// 1. project onto `schema.columns` (every one must exist),
/// 2. drop rows whose exclusion column equals the sentinel,
/// 3. infer one type per column.
pub fn load_from_reader<R: Read>(reader: R, schema: &DatasetSchema) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut missing = Vec::new();
    let projection: Vec<usize> = schema
        .columns
        .iter()
        .filter_map(|col| {
            let idx = headers.iter().position(|h| h == col);
            if idx.is_none() {
                missing.push(col.clone());
            }
            idx
        })
        .collect();
    if !missing.is_empty() {
        return Err(DashboardError::Schema { missing });
    }

    let exclude_idx = schema
        .columns
        .iter()
        .position(|c| *c == schema.exclude_column)
        .ok_or_else(|| DashboardError::Schema {
            missing: vec![schema.exclude_column.clone()],
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    let mut excluded = 0usize;
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = projection
            .iter()
            .map(|&i| record.get(i).unwrap_or("").to_string())
            .collect();
        if row[exclude_idx] == schema.exclude_value {
            excluded += 1;
            continue;
        }
        raw_rows.push(row);
    }
    log::debug!(
        "Excluded {excluded} row(s) where {} == {:?}",
        schema.exclude_column,
        schema.exclude_value
    );

    let kinds: Vec<ColumnKind> = (0..projection.len())
        .map(|col| ColumnKind::infer(raw_rows.iter().map(|r| r[col].as_str())))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(&kinds)
                .map(|(text, kind)| kind.parse(text))
                .collect()
        })
        .collect();

    Ok(Table::new(schema.columns.clone(), rows))
}

// ---------------------------------------------------------------------------
// Column type inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    String,
}

/// A missing cell: a null marker, or any text that parses to a NaN float.
fn is_missing(s: &str) -> bool {
    let t = s.trim();
    NULL_MARKERS.contains(&t) || t.parse::<f64>().is_ok_and(f64::is_nan)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl ColumnKind {
    /// Narrowest kind every non-null cell fits in.
    fn infer<'s>(cells: impl Iterator<Item = &'s str>) -> Self {
        let (mut int, mut float, mut boolean) = (true, true, true);
        for cell in cells.filter(|c| !is_missing(c)) {
            let t = cell.trim();
            int &= t.parse::<i64>().is_ok();
            float &= t.parse::<f64>().is_ok();
            boolean &= parse_bool(t).is_some();
            if !(int || float || boolean) {
                return ColumnKind::String;
            }
        }
        if int {
            ColumnKind::Integer
        } else if float {
            ColumnKind::Float
        } else if boolean {
            ColumnKind::Bool
        } else {
            ColumnKind::String
        }
    }

    fn parse(self, text: &str) -> CellValue {
        if is_missing(text) {
            return CellValue::Null;
        }
        let t = text.trim();
        let parsed = match self {
            ColumnKind::Integer => t.parse().ok().map(CellValue::Integer),
            ColumnKind::Float => t.parse().ok().map(CellValue::Float),
            ColumnKind::Bool => parse_bool(t).map(CellValue::Bool),
            ColumnKind::String => None,
        };
        parsed.unwrap_or_else(|| CellValue::String(text.to_string()))
    }
}
