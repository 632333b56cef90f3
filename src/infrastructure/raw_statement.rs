use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    application::ports::{BoundParams, StatementExecutor},
    domain::{quoting::Quoter, sql_value::SqlValue},
};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder pattern should be valid")
});

/// A raw SQL statement plus its named bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStatement {
    sql: String,
    params: BoundParams,
}

impl RawStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: BoundParams::new(),
        }
    }

    pub fn bind_value(mut self, name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        let name = name.into();
        let name = name.strip_prefix(':').map(str::to_string).unwrap_or(name);
        self.params.insert(name, value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &BoundParams {
        &self.params
    }

    /// The statement with every bound `:name` placeholder replaced by its
    /// quoted value. Unknown placeholders are left as written.
    pub fn raw_sql(&self, quoter: &dyn Quoter) -> String {
        if self.params.is_empty() {
            return self.sql.clone();
        }
        PLACEHOLDER
            .replace_all(&self.sql, |captures: &Captures<'_>| {
                match self.params.get(&captures[1]) {
                    Some(value) => quoter.quote_value(value),
                    None => captures[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Hands the statement to `executor`. Its error is returned untouched.
    pub fn execute<E: StatementExecutor>(&self, executor: &mut E) -> Result<u64, E::Error> {
        tracing::debug!(params = self.params.len(), "executing raw statement");
        executor.execute(&self.sql, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::ports::{BoundParams, StatementExecutor},
        domain::sql_value::SqlValue,
        infrastructure::mysql_quoter::MySqlQuoter,
    };

    use super::RawStatement;

    #[derive(Default)]
    struct RecordingExecutor {
        statements: Vec<String>,
        fail_with: Option<&'static str>,
    }

    impl StatementExecutor for RecordingExecutor {
        type Error = &'static str;

        fn execute(&mut self, sql: &str, params: &BoundParams) -> Result<u64, Self::Error> {
            if let Some(error) = self.fail_with {
                return Err(error);
            }
            self.statements.push(sql.to_string());
            Ok(params.len() as u64 + 1)
        }
    }

    #[test]
    fn raw_sql_inlines_bound_values() {
        let statement = RawStatement::new("SELECT * FROM `t` WHERE `a` = :a AND `b` = :missing")
            .bind_value(":a", "it's");

        assert_eq!(
            statement.raw_sql(&MySqlQuoter),
            r"SELECT * FROM `t` WHERE `a` = 'it\'s' AND `b` = :missing"
        );
        assert_eq!(statement.params().get("a"), Some(&SqlValue::from("it's")));
    }

    #[test]
    fn raw_sql_without_params_is_the_statement_itself() {
        let statement = RawStatement::new("UPDATE `t` SET `a` = '12:30';");
        assert_eq!(statement.raw_sql(&MySqlQuoter), statement.sql());
    }

    #[test]
    fn execute_delegates_and_passes_errors_through() {
        let statement = RawStatement::new("DELETE FROM `t`;");

        let mut executor = RecordingExecutor::default();
        assert_eq!(statement.execute(&mut executor), Ok(1));
        assert_eq!(executor.statements, vec!["DELETE FROM `t`;".to_string()]);

        let mut failing = RecordingExecutor {
            fail_with: Some("connection lost"),
            ..RecordingExecutor::default()
        };
        assert_eq!(statement.execute(&mut failing), Err("connection lost"));
    }
}
