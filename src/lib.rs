//! Builders for multi-row `UPDATE ... CASE WHEN ... END` statements and for
//! WHERE conditions that stay safe with large `IN` lists or open-ended date
//! ranges.
//!
//! Quoting is never done here directly: every builder goes through an
//! injected [`Quoter`](domain::quoting::Quoter).

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ports::{ConditionQuery, StatementExecutor},
    sql_helper::{SqlHelper, time_intersect, where_in_chunk},
};
pub use domain::{
    batch_update::BatchUpdate,
    chunk::ChunkSize,
    condition::{CompareOp, Condition},
    date_range::{DateRange, OPEN_END_DATE},
    error::{BuildError, BuildResult},
    quoting::Quoter,
    sql_value::SqlValue,
};
pub use infrastructure::{
    filter_query::FilterQuery, mysql_quoter::MySqlQuoter, raw_statement::RawStatement,
};
