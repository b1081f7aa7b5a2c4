use std::fmt;

use super::model::{CellValue, Table, View};
use super::options::Choice;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Selection: which choice each filter dropdown holds
// ---------------------------------------------------------------------------

/// Per-column selection state. Every filterable column is present, in
/// panel order, and starts at [`Choice::All`].
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    choices: Vec<(String, Choice)>,
}

impl Selection {
    /// All columns set to "All".
    pub fn new(columns: &[String]) -> Self {
        Selection {
            choices: columns.iter().map(|c| (c.clone(), Choice::All)).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Choice> {
        self.choices.iter().find(|(c, _)| c == column).map(|(_, ch)| ch)
    }

    /// Change one column's choice. Unknown columns are rejected.
    pub fn set(&mut self, column: &str, choice: Choice) -> Result<()> {
        let slot = self
            .choices
            .iter_mut()
            .find(|(c, _)| c == column)
            .ok_or_else(|| DashboardError::filter(column, "not a filterable column"))?;
        slot.1 = choice;
        Ok(())
    }

    pub fn reset(&mut self) {
        for (_, choice) in &mut self.choices {
            *choice = Choice::All;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Choice)> {
        self.choices.iter().map(|(c, ch)| (c.as_str(), ch))
    }
}

// ---------------------------------------------------------------------------
// Predicate: typed conjunction of equality constraints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Constraint {
    column: String,
    index: usize,
    expected: CellValue,
}

/// Row-matching rule built from a [`Selection`]. A row matches when every
/// constrained column holds the expected value; no constraints match all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    constraints: Vec<Constraint>,
}

impl Predicate {
    /// Resolve every non-"All" choice against the table's columns.
    pub fn build(table: &Table, selection: &Selection) -> Result<Self> {
        let mut constraints = Vec::new();
        for (column, choice) in selection.iter() {
            let Choice::Value(expected) = choice else {
                continue;
            };
            let index = table
                .column_index(column)
                .ok_or_else(|| DashboardError::filter(column, "column is not in the table"))?;
            if matches!(expected, CellValue::Float(f) if f.is_nan()) {
                return Err(DashboardError::filter(column, "NaN never compares equal"));
            }
            constraints.push(Constraint {
                column: column.to_string(),
                index,
                expected: expected.clone(),
            });
        }
        Ok(Predicate { constraints })
    }

    pub fn matches(&self, row: &[CellValue]) -> bool {
        self.constraints
            .iter()
            .all(|c| row.get(c.index).is_some_and(|v| v.loosely_eq(&c.expected)))
    }

    /// Keep the rows of `view` that match, preserving order.
    pub fn apply<'a>(&self, view: &View<'a>) -> View<'a> {
        let table = view.table();
        let indices = view
            .indices()
            .iter()
            .copied()
            .filter(|&i| self.matches(table.row(i)))
            .collect();
        View::new(table, indices)
    }
}

/// Textual form for display, e.g. `Cell == "HeLa" & MM == 2`.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            match &c.expected {
                CellValue::String(s) => write!(f, "{} == {s:?}", c.column)?,
                CellValue::Null => write!(f, "{} is null", c.column)?,
                other => write!(f, "{} == {other}", c.column)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_table;
    use crate::data::options::FilterOptions;
    use crate::data::schema::DatasetSchema;

    fn selection() -> Selection {
        Selection::new(&DatasetSchema::default().filter_columns)
    }

    fn cell(value: &str) -> Choice {
        Choice::Value(CellValue::String(value.into()))
    }

    #[test]
    fn all_selects_every_row() {
        let table = sample_table();
        let pred = Predicate::build(&table, &selection()).unwrap();
        assert_eq!(pred, Predicate::default());
        let view = pred.apply(&table.full_view());
        assert_eq!(view.indices(), table.full_view().indices());
        assert_eq!(view.len(), 5);
        assert_eq!(pred.to_string(), "");
    }

    #[test]
    fn single_column_selection() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("Cell", cell("HeLa")).unwrap();
        let pred = Predicate::build(&table, &sel).unwrap();
        let view = pred.apply(&table.full_view());
        assert_eq!(view.len(), 2);
        let idx = table.column_index("Cell").unwrap();
        assert!(view.rows().all(|r| r[idx] == CellValue::String("HeLa".into())));
    }

    #[test]
    fn every_offered_value_selects_matching_rows() {
        let table = sample_table();
        let schema = DatasetSchema::default();
        let options = FilterOptions::build(&table, &schema.filter_columns).unwrap();
        for column in &schema.filter_columns {
            let idx = table.column_index(column).unwrap();
            for value in options.values(column).unwrap() {
                let mut sel = selection();
                sel.set(column, Choice::Value(value.clone())).unwrap();
                let view = Predicate::build(&table, &sel).unwrap().apply(&table.full_view());
                assert_ne!(view.len(), 0, "{column} == {value} selected nothing");
                assert!(view.rows().all(|r| r[idx].loosely_eq(value)));
            }
        }
    }

    #[test]
    fn constraints_combine_with_and() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("Cell", cell("HeLa")).unwrap();
        sel.set("Buffer", cell("PBS")).unwrap();
        let pred = Predicate::build(&table, &sel).unwrap();
        assert_eq!(pred.apply(&table.full_view()).indices(), &[2]);
        assert_eq!(pred.to_string(), r#"Cell == "HeLa" & Buffer == "PBS""#);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("Enzyme", cell("ProtK")).unwrap();
        let pred = Predicate::build(&table, &sel).unwrap();
        let once = pred.apply(&table.full_view());
        let twice = pred.apply(&once);
        assert_eq!(once.indices(), twice.indices());
    }

    #[test]
    fn numeric_choice_matches_across_types() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("MM", Choice::Value(CellValue::String("2".into()))).unwrap();
        let view = Predicate::build(&table, &sel).unwrap().apply(&table.full_view());
        assert_eq!(view.len(), 3);

        sel.set("MM", Choice::Value(CellValue::Float(1.0))).unwrap();
        let view = Predicate::build(&table, &sel).unwrap().apply(&table.full_view());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn quotes_in_values_are_plain_data() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("Cell", cell(r#"HeLa" | Cell == "HEK293"#)).unwrap();
        let pred = Predicate::build(&table, &sel).unwrap();
        assert_eq!(pred.apply(&table.full_view()).len(), 0);
        assert_eq!(pred.to_string(), r#"Cell == "HeLa\" | Cell == \"HEK293""#);
    }

    #[test]
    fn unknown_column_is_filter_error() {
        let mut sel = selection();
        let err = sel.set("Species", cell("mouse")).unwrap_err();
        assert!(matches!(err, DashboardError::Filter { .. }));

        let table = crate::data::model::Table::new(vec!["LOD".into()], vec![]);
        let mut sel = selection();
        sel.set("Cell", cell("HeLa")).unwrap();
        let err = Predicate::build(&table, &sel).unwrap_err();
        assert!(matches!(err, DashboardError::Filter { ref column, .. } if column == "Cell"));
    }

    #[test]
    fn nan_choice_is_filter_error() {
        let table = sample_table();
        let mut sel = selection();
        sel.set("Concentration", Choice::Value(CellValue::Float(f64::NAN))).unwrap();
        assert!(Predicate::build(&table, &sel).is_err());
    }

    #[test]
    fn reset_restores_all() {
        let mut sel = selection();
        sel.set("Cell", cell("HeLa")).unwrap();
        sel.reset();
        assert!(sel.iter().all(|(_, c)| *c == Choice::All));
    }
}
