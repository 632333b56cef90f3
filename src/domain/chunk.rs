use std::num::NonZeroUsize;

use crate::domain::{
    condition::Condition,
    error::{BuildError, BuildResult},
    sql_value::SqlValue,
};

/// Upper bound on the number of values inside one `IN (...)` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    pub const DEFAULT: usize = 300;

    pub fn new(value: usize) -> BuildResult<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(BuildError::InvalidChunkSize(value))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Membership of `column` in `values`, split into consecutive `IN` lists of
/// at most `chunk_size` values joined with OR.
///
/// An empty `values` yields the constant false predicate, so the caller gets
/// no rows rather than an unrestricted query.
pub fn chunked_membership(column: &str, values: &[SqlValue], chunk_size: ChunkSize) -> Condition {
    if values.is_empty() {
        return Condition::always_false();
    }

    Condition::Or(
        values
            .chunks(chunk_size.get())
            .map(|chunk| Condition::is_in(column, chunk.to_vec()))
            .collect(),
    )
}
