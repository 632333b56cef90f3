use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A row's width differs from the column count.
    ColumnsRowsMismatch {
        row_index: usize,
        expected: usize,
        found: usize,
    },
    /// The row count differs from the condition key count.
    RowsConditionKeysMismatch { rows: usize, condition_keys: usize },
    InvalidChunkSize(usize),
}

impl BuildError {
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::ColumnsRowsMismatch { .. } => "columns/rows",
            BuildError::RowsConditionKeysMismatch { .. } => "rows/conditionKeys",
            BuildError::InvalidChunkSize(_) => "chunk_size",
        }
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            BuildError::ColumnsRowsMismatch { .. } | BuildError::RowsConditionKeysMismatch { .. }
        )
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ColumnsRowsMismatch {
                row_index,
                expected,
                found,
            } => write!(
                f,
                "Columns and rows have inconsistent length: row {row_index} has {found} values, expected {expected}"
            ),
            BuildError::RowsConditionKeysMismatch {
                rows,
                condition_keys,
            } => write!(
                f,
                "Rows and condition keys have inconsistent length: {rows} rows, {condition_keys} condition keys"
            ),
            BuildError::InvalidChunkSize(value) => {
                write!(f, "Invalid chunk size: {value}, it must be > 0")
            }
        }
    }
}

impl std::error::Error for BuildError {}

pub type BuildResult<T> = Result<T, BuildError>;
