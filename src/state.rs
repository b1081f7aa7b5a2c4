use crate::data::filter::{Predicate, Selection};
use crate::data::model::Table;
use crate::data::options::{Choice, FilterOptions};
use crate::data::schema::DatasetSchema;
use crate::data::view::{ScatterSpec, TableView};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Interactions and recomputation chains
// ---------------------------------------------------------------------------

/// A user action coming from the control panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// A filter dropdown changed. Refreshes the plot and the table.
    Filter { column: String, choice: Choice },
    /// The x-axis dropdown changed. Refreshes the plot only.
    XAxis(String),
    /// Every filter back to "All". Refreshes the plot and the table.
    ResetFilters,
}

/// Chain A: predicate → filter → scatter.
pub fn scatter_chain(
    table: &Table,
    schema: &DatasetSchema,
    selection: &Selection,
    x_column: &str,
) -> Result<ScatterSpec> {
    let predicate = Predicate::build(table, selection)?;
    let view = predicate.apply(&table.full_view());
    ScatterSpec::render(&view, x_column, &schema.y_column)
}

/// Chain B: predicate → filter → sort and emit.
pub fn table_chain(table: &Table, schema: &DatasetSchema, selection: &Selection) -> Result<TableView> {
    let predicate = Predicate::build(table, selection)?;
    let view = predicate.apply(&table.full_view());
    TableView::render(&view, &predicate, &schema.sort_column)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; never modified after startup.
    pub table: Table,
    pub schema: DatasetSchema,

    /// Dropdown entries, computed once from the full table.
    pub options: FilterOptions,

    /// Current filter choices.
    pub selection: Selection,

    /// Column on the scatter x axis.
    pub x_column: String,

    /// Last successful output of each chain.
    pub scatter: Option<ScatterSpec>,
    pub table_view: Option<TableView>,

    /// Error from the most recent run of each chain, if it failed.
    pub scatter_error: Option<String>,
    pub table_error: Option<String>,

    /// Show the debug window.
    pub debug: bool,
}

impl AppState {
    /// Build the option registry and run both chains once.
    pub fn new(table: Table, schema: DatasetSchema, debug: bool) -> Result<Self> {
        let options = FilterOptions::build(&table, &schema.filter_columns)?;
        let selection = Selection::new(&schema.filter_columns);
        let x_column = schema.default_x_column.clone();

        let mut state = Self {
            table,
            schema,
            options,
            selection,
            x_column,
            scatter: None,
            table_view: None,
            scatter_error: None,
            table_error: None,
            debug,
        };
        state.refresh_scatter();
        state.refresh_table();
        Ok(state)
    }

    /// Apply one interaction and rerun the chains it triggers.
    pub fn dispatch(&mut self, interaction: Interaction) {
        log::debug!("dispatch {interaction:?}");
        match interaction {
            Interaction::Filter { column, choice } => {
                if let Err(e) = self.selection.set(&column, choice) {
                    log::warn!("{e}");
                    self.scatter_error = Some(e.to_string());
                    self.table_error = Some(e.to_string());
                    return;
                }
                self.refresh_scatter();
                self.refresh_table();
            }
            Interaction::XAxis(column) => {
                self.x_column = column;
                self.refresh_scatter();
            }
            Interaction::ResetFilters => {
                self.selection.reset();
                self.refresh_scatter();
                self.refresh_table();
            }
        }
    }

    /// Column names offered by the x-axis dropdown.
    pub fn x_axis_choices(&self) -> &[String] {
        self.table.columns()
    }

    /// Predicate for the current selection, as text.
    pub fn filter_query(&self) -> String {
        match Predicate::build(&self.table, &self.selection) {
            Ok(p) => p.to_string(),
            Err(e) => format!("<{e}>"),
        }
    }

    fn refresh_scatter(&mut self) {
        match scatter_chain(&self.table, &self.schema, &self.selection, &self.x_column) {
            Ok(spec) => {
                log::debug!("scatter: {} point(s) vs {}", spec.points.len(), spec.x_column);
                self.scatter = Some(spec);
                self.scatter_error = None;
            }
            Err(e) => {
                log::warn!("scatter not updated: {e}");
                self.scatter_error = Some(e.to_string());
            }
        }
    }

    fn refresh_table(&mut self) {
        match table_chain(&self.table, &self.schema, &self.selection) {
            Ok(view) => {
                log::debug!("table: {} row(s), filter {:?}", view.rows.len(), view.filter_query);
                self.table_view = Some(view);
                self.table_error = None;
            }
            Err(e) => {
                log::warn!("table not updated: {e}");
                self.table_error = Some(e.to_string());
            }
        }
    }
}
