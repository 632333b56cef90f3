use crate::{
    application::ports::ConditionQuery,
    domain::{
        batch_update::BatchUpdate,
        chunk::{ChunkSize, chunked_membership},
        date_range::DateRange,
        error::BuildResult,
        quoting::Quoter,
        sql_value::SqlValue,
    },
    infrastructure::raw_statement::RawStatement,
};

/// Statement builders bound to one quoting capability.
#[derive(Debug, Clone, Default)]
pub struct SqlHelper<Q> {
    quoter: Q,
}

impl<Q: Quoter> SqlHelper<Q> {
    pub fn new(quoter: Q) -> Self {
        Self { quoter }
    }

    pub fn quoter(&self) -> &Q {
        &self.quoter
    }

    /// Builds one `UPDATE ... CASE WHEN ... END` statement that sets
    /// `columns` for every row identified by `condition_keys`.
    ///
    /// Values are inlined by the quoter, so the returned statement carries
    /// no bound params.
    pub fn batch_update(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<SqlValue>],
        condition_keys: &[SqlValue],
        condition_column: &str,
    ) -> BuildResult<RawStatement> {
        let update = BatchUpdate::new(
            table,
            columns.iter().map(|column| column.to_string()).collect(),
            rows.to_vec(),
            condition_keys.to_vec(),
            condition_column,
        )?;
        Ok(self.render_batch_update(&update))
    }

    pub fn render_batch_update(&self, update: &BatchUpdate) -> RawStatement {
        tracing::debug!(
            table = update.table(),
            columns = update.column_count(),
            rows = update.row_count(),
            "rendering batch update"
        );
        RawStatement::new(update.render(&self.quoter))
    }
}

/// Restricts `query` to rows whose `column` is one of `values`, using
/// OR-combined `IN` lists of at most `chunk_size` values.
///
/// An empty `values` restricts the query to no rows at all.
pub fn where_in_chunk<'q, Q: ConditionQuery>(
    column: &str,
    values: &[SqlValue],
    query: &'q mut Q,
    chunk_size: ChunkSize,
) -> &'q mut Q {
    if values.is_empty() {
        tracing::warn!(column, "empty IN list, query will match no rows");
    } else {
        tracing::debug!(
            column,
            values = values.len(),
            chunks = values.len().div_ceil(chunk_size.get()),
            "building chunked IN condition"
        );
    }
    query.and_where(chunked_membership(column, values, chunk_size))
}

/// Restricts `query` to rows whose `[start_column, end_column]` range
/// intersects `[start, end]`. An `end_column` equal to
/// [`OPEN_END_DATE`](crate::domain::date_range::OPEN_END_DATE) counts as
/// unbounded.
pub fn time_intersect<'q, Q: ConditionQuery>(
    start_column: &str,
    end_column: &str,
    start: impl Into<SqlValue>,
    end: impl Into<SqlValue>,
    query: &'q mut Q,
) -> &'q mut Q {
    let range = DateRange::new(start_column, end_column, start, end);
    tracing::debug!(start_column, end_column, "merging date range overlap condition");
    query.and_where(range.overlap_condition())
}
