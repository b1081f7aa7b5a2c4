// ---------------------------------------------------------------------------
// DatasetSchema – which columns the dashboard reads and how it uses them
// ---------------------------------------------------------------------------

/// Column layout of `parsed_data.csv`, in display order.
pub const COLUMNS: [&str; 18] = [
    "LOD",
    "CT",
    "TargetLysisConcentration",
    "Format",
    "MM",
    "Cell",
    "Concentration",
    "Enzyme",
    "Buffer",
    "LysisTemp",
    "LysisTime",
    "InactTemp",
    "InactTime",
    "Added By",
    "Date added",
    "Data file name",
    "Data Reviewed by Jim",
    "Notes",
];

/// Columns offered as filter dropdowns, in panel order.
pub const FILTER_COLUMNS: [&str; 10] = [
    "Cell",
    "TargetLysisConcentration",
    "Enzyme",
    "Concentration",
    "Buffer",
    "LysisTemp",
    "LysisTime",
    "InactTemp",
    "InactTime",
    "MM",
];

/// Fixed description of the dataset the dashboard works on.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    /// Columns projected from the file, in this order.
    pub columns: Vec<String>,
    /// Columns that get a filter dropdown.
    pub filter_columns: Vec<String>,
    /// Rows whose `exclude_column` equals `exclude_value` are dropped on load.
    pub exclude_column: String,
    pub exclude_value: String,
    /// Scatter y axis.
    pub y_column: String,
    /// Scatter x axis until the user picks another one.
    pub default_x_column: String,
    /// Table sort key (ascending, nulls last).
    pub sort_column: String,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            filter_columns: FILTER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            exclude_column: "TargetLysisConcentration".to_string(),
            exclude_value: "RXN Input".to_string(),
            y_column: "LOD".to_string(),
            default_x_column: "CT".to_string(),
            sort_column: "LOD".to_string(),
        }
    }
}
