use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes a dataframe reader
/// would infer from a CSV column.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Hash so distinct values can be collected in a HashSet --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;
        match (self, other) {
            (String(a), String(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            // NaN equals itself so `Eq` stays reflexive
            (Float(a), Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Bool(a), Bool(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => {
                // 0.0 == -0.0 and every NaN is equal, so hash them alike
                let canonical = if *f == 0.0 {
                    0.0
                } else if f.is_nan() {
                    f64::NAN
                } else {
                    *f
                };
                canonical.to_bits().hash(state)
            }
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` (numeric variants only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Type-aware equality used by filter predicates.
    ///
    /// Integers and floats compare numerically, a string matches a number
    /// when it parses to the same number, and `Null` only matches `Null`.
    pub fn loosely_eq(&self, other: &CellValue) -> bool {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Null, _) | (_, Null) => false,
            (String(a), String(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (String(s), n) | (n, String(s)) => match (s.trim().parse::<f64>(), n.as_f64()) {
                (Ok(a), Some(b)) => a == b,
                _ => false,
            },
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Total order over non-null values: numbers numerically, then by a
    /// fixed variant rank. Nulls sort after everything.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Bool(_) => 0,
                Integer(_) | Float(_) => 1,
                String(_) => 2,
                Null => 3,
            }
        }
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (String(a), String(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (a, b) if rank(a) == 1 && rank(b) == 1 => {
                let (x, y) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
                x.total_cmp(&y)
            }
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset. Every row holds one value per column, in column
/// order. Never mutated after loading; filtering and sorting produce
/// [`View`]s.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table; rows shorter or longer than `columns` are padded
    /// with nulls or truncated so the shape invariant holds.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row(&self, index: usize) -> &[CellValue] {
        &self.rows[index]
    }

    pub fn value(&self, row: usize, column: usize) -> &CellValue {
        &self.rows[row][column]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A view over every row, in load order.
    pub fn full_view(&self) -> View<'_> {
        View {
            table: self,
            indices: (0..self.rows.len()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// View – an ordered subsequence of table rows
// ---------------------------------------------------------------------------

/// Row indices into a [`Table`]. Filtered and Sorted Views are both
/// `View`s; only the index list differs.
#[derive(Debug, Clone)]
pub struct View<'a> {
    table: &'a Table,
    indices: Vec<usize>,
}

impl<'a> View<'a> {
    pub fn new(table: &'a Table, indices: Vec<usize>) -> Self {
        View { table, indices }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Rows of the view, in view order.
    pub fn rows(&self) -> impl Iterator<Item = &'a [CellValue]> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| table.row(i))
    }

    /// Stable ascending sort on `column`, nulls after every non-null row.
    pub fn sorted_by(&self, column: usize) -> View<'a> {
        let table = self.table;
        let mut indices = self.indices.clone();
        indices.sort_by(|&a, &b| {
            let (va, vb) = (table.value(a, column), table.value(b, column));
            match (va.is_null(), vb.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => va.sort_cmp(vb),
            }
        });
        View { table, indices }
    }
}
