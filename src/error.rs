use thiserror::Error;

/// Errors raised while loading the dataset or recomputing a view.
///
/// `Schema`, `Io` and `Csv` only happen at startup and are fatal.
/// `Filter` and `Render` are scoped to the interaction that raised them.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Cannot filter on '{column}': {reason}")]
    Filter { column: String, reason: String },

    #[error("Cannot render column '{column}': not in the table")]
    Render { column: String },
}

impl DashboardError {
    pub fn filter(column: &str, reason: impl Into<String>) -> Self {
        DashboardError::Filter {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
