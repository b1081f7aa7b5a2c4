use std::collections::HashSet;
use std::fmt;

use super::model::{CellValue, Table};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Choice – what a filter dropdown currently shows
// ---------------------------------------------------------------------------

/// A dropdown choice: the synthetic "All" entry or one observed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Choice {
    #[default]
    All,
    Value(CellValue),
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "All"),
            Choice::Value(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterOptions – distinct values per filterable column
// ---------------------------------------------------------------------------

/// Options offered by each filter dropdown, computed once from the full
/// table. Values keep their first-occurrence order.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    columns: Vec<(String, Vec<CellValue>)>,
}

impl FilterOptions {
    pub fn build(table: &Table, columns: &[String]) -> Result<Self> {
        let missing: Vec<String> = columns
            .iter()
            .filter(|c| table.column_index(c).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::Schema { missing });
        }

        let columns = columns
            .iter()
            .map(|name| {
                let idx = table.column_index(name).unwrap_or_default();
                let mut seen = HashSet::new();
                let values: Vec<CellValue> = table
                    .full_view()
                    .rows()
                    .map(|row| &row[idx])
                    .filter(|v| seen.insert(*v))
                    .cloned()
                    .collect();
                log::debug!("{name}: {} distinct value(s)", values.len());
                (name.clone(), values)
            })
            .collect();

        Ok(FilterOptions { columns })
    }

    /// Filterable column names, in panel order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(c, _)| c.as_str())
    }

    /// Distinct values for `column` (without the "All" entry).
    pub fn values(&self, column: &str) -> Option<&[CellValue]> {
        self.columns
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_slice())
    }

    /// Dropdown entries for `column`: "All" first, then every value.
    pub fn choices(&self, column: &str) -> Vec<Choice> {
        std::iter::once(Choice::All)
            .chain(
                self.values(column)
                    .unwrap_or_default()
                    .iter()
                    .cloned()
                    .map(Choice::Value),
            )
            .collect()
    }
}
