use serde_json::{Map, Value as JsonValue};

use super::filter::Predicate;
use super::model::{CellValue, View};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Scatter plot specification
// ---------------------------------------------------------------------------

/// How x values map onto the plot's horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub enum XAxis {
    Numeric,
    /// Category labels in first-occurrence order; point x is the position.
    Categorical(Vec<String>),
}

/// One point per filtered row. A point with a null coordinate is kept but
/// cannot be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Table row the point came from, for hover metadata.
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x_column: String,
    pub y_column: String,
    pub x_axis: XAxis,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// Plot `y_column` against `x_column` for every row of `view`, in order.
    pub fn render(view: &View<'_>, x_column: &str, y_column: &str) -> Result<Self> {
        let table = view.table();
        let column_index = |name: &str| {
            table.column_index(name).ok_or_else(|| DashboardError::Render {
                column: name.to_string(),
            })
        };
        let xi = column_index(x_column)?;
        let yi = column_index(y_column)?;

        let numeric = view
            .rows()
            .map(|r| &r[xi])
            .all(|v| v.is_null() || v.as_f64().is_some());

        let mut categories: Vec<String> = Vec::new();
        let mut points = Vec::with_capacity(view.len());
        for &row in view.indices() {
            let xv = table.value(row, xi);
            let x = if numeric || xv.is_null() {
                xv.as_f64()
            } else {
                let label = xv.to_string();
                let pos = match categories.iter().position(|c| *c == label) {
                    Some(pos) => pos,
                    None => {
                        categories.push(label);
                        categories.len() - 1
                    }
                };
                Some(pos as f64)
            };
            points.push(ScatterPoint {
                x,
                y: table.value(row, yi).as_f64(),
                row,
            });
        }

        let x_axis = if numeric {
            XAxis::Numeric
        } else {
            XAxis::Categorical(categories)
        };

        Ok(ScatterSpec {
            title: format!("Scatter Plot of {y_column} vs {x_column}"),
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            x_axis,
            points,
        })
    }

    /// Points with both coordinates present.
    pub fn drawable(&self) -> impl Iterator<Item = (&ScatterPoint, [f64; 2])> {
        self.points
            .iter()
            .filter_map(|p| Some((p, [p.x?, p.y?])))
    }
}

// ---------------------------------------------------------------------------
// Sorted table view
// ---------------------------------------------------------------------------

/// Rows ready for the table widget, sorted by the sort column with nulls
/// last, together with the textual form of the active predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub filter_query: String,
}

impl TableView {
    pub fn render(view: &View<'_>, predicate: &Predicate, sort_column: &str) -> Result<Self> {
        let table = view.table();
        let sort_idx = table
            .column_index(sort_column)
            .ok_or_else(|| DashboardError::Render {
                column: sort_column.to_string(),
            })?;
        let sorted = view.sorted_by(sort_idx);
        Ok(TableView {
            columns: table.columns().to_vec(),
            rows: sorted.rows().map(|r| r.to_vec()).collect(),
            filter_query: predicate.to_string(),
        })
    }

    /// Rows as JSON objects keyed by column name, in column order.
    pub fn records(&self) -> Vec<JsonValue> {
        self.rows
            .iter()
            .map(|row| {
                let object: Map<String, JsonValue> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.clone(), serde_json::to_value(v).unwrap_or(JsonValue::Null)))
                    .collect();
                JsonValue::Object(object)
            })
            .collect()
    }

    pub fn records_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::fixtures::sample_table;
    use crate::data::model::Table;
    use crate::data::options::Choice;
    use crate::data::schema::DatasetSchema;

    #[test]
    fn one_point_per_row() {
        let table = sample_table();
        let spec = ScatterSpec::render(&table.full_view(), "CT", "LOD").unwrap();
        assert_eq!(spec.points.len(), table.len());
        assert_eq!(spec.title, "Scatter Plot of LOD vs CT");
        assert_eq!(spec.x_axis, XAxis::Numeric);
        assert_eq!(spec.points[0].x, Some(25.1));
        assert_eq!(spec.points[0].y, Some(3.0));
        // LOD is NA on the second row
        assert_eq!(spec.points[1].y, None);
        assert_eq!(spec.drawable().count(), 4);
    }

    #[test]
    fn text_column_becomes_categorical() {
        let table = sample_table();
        let spec = ScatterSpec::render(&table.full_view(), "Cell", "LOD").unwrap();
        assert_eq!(
            spec.x_axis,
            XAxis::Categorical(vec!["HeLa".into(), "HEK293".into(), "Jurkat".into()])
        );
        let xs: Vec<_> = spec.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![Some(0.0), Some(1.0), Some(0.0), Some(2.0), Some(1.0)]);
    }

    #[test]
    fn point_count_follows_filter() {
        let table = sample_table();
        let mut sel = Selection::new(&DatasetSchema::default().filter_columns);
        sel.set("Cell", Choice::Value(CellValue::String("HeLa".into()))).unwrap();
        let view = Predicate::build(&table, &sel).unwrap().apply(&table.full_view());
        let spec = ScatterSpec::render(&view, "LysisTemp", "LOD").unwrap();
        assert_eq!(spec.points.len(), view.len());
        assert_eq!(spec.points.iter().map(|p| p.row).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn unknown_axis_is_render_error() {
        let table = sample_table();
        let err = ScatterSpec::render(&table.full_view(), "Species", "LOD").unwrap_err();
        assert!(matches!(err, DashboardError::Render { column } if column == "Species"));
    }

    #[test]
    fn table_sorted_by_lod_nulls_last() {
        let table = sample_table();
        let view = TableView::render(&table.full_view(), &Predicate::default(), "LOD").unwrap();
        let lod: Vec<CellValue> = view.rows.iter().map(|r| r[0].clone()).collect();
        assert_eq!(
            lod,
            vec![
                CellValue::Float(1.0),
                CellValue::Float(2.5),
                CellValue::Float(3.0),
                CellValue::Float(4.0),
                CellValue::Null,
            ]
        );
        assert_eq!(view.filter_query, "");
    }

    #[test]
    fn sorted_rows_are_non_decreasing() {
        let table = sample_table();
        let view = TableView::render(&table.full_view(), &Predicate::default(), "CT").unwrap();
        let ct = table.column_index("CT").unwrap();
        let values: Vec<f64> = view.rows.iter().filter_map(|r| r[ct].as_f64()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn lod_example_from_three_rows() {
        let table = Table::new(
            vec!["LOD".into()],
            vec![
                vec![CellValue::Integer(3)],
                vec![CellValue::Null],
                vec![CellValue::Integer(1)],
            ],
        );
        let view = TableView::render(&table.full_view(), &Predicate::default(), "LOD").unwrap();
        assert_eq!(
            view.rows,
            vec![
                vec![CellValue::Integer(1)],
                vec![CellValue::Integer(3)],
                vec![CellValue::Null],
            ]
        );
    }

    #[test]
    fn records_keep_column_order() {
        let table = sample_table();
        let mut sel = Selection::new(&DatasetSchema::default().filter_columns);
        sel.set("Cell", Choice::Value(CellValue::String("Jurkat".into()))).unwrap();
        let pred = Predicate::build(&table, &sel).unwrap();
        let view = TableView::render(&pred.apply(&table.full_view()), &pred, "LOD").unwrap();
        assert_eq!(view.filter_query, r#"Cell == "Jurkat""#);

        let records = view.records();
        assert_eq!(records.len(), 1);
        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys[0], "LOD");
        assert_eq!(keys[17], "Notes");
        assert_eq!(records[0]["Cell"], "Jurkat");
        assert_eq!(records[0]["LOD"], 2.5);
        assert!(records[0]["Notes"].is_null());
    }
}
