use std::collections::BTreeMap;

use crate::domain::{condition::Condition, sql_value::SqlValue};

/// Named parameters bound to a raw statement.
pub type BoundParams = BTreeMap<String, SqlValue>;

/// A query object that accepts composable conditions.
pub trait ConditionQuery {
    /// Narrows the query: the new condition is AND-combined with whatever
    /// the query already holds.
    fn and_where(&mut self, condition: Condition) -> &mut Self;
}

/// Connection layer that runs a rendered statement.
pub trait StatementExecutor {
    type Error;

    /// Returns the number of affected rows.
    fn execute(&mut self, sql: &str, params: &BoundParams) -> Result<u64, Self::Error>;
}
