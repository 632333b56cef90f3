use crate::domain::{quoting::Quoter, sql_value::SqlValue};

/// Minimal backtick/single-quote quoter for unit tests.
pub(crate) struct FakeQuoter;

impl Quoter for FakeQuoter {
    fn quote_identifier(&self, name: &str) -> String {
        format!("`{name}`")
    }

    fn quote_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
            other => other.to_string(),
        }
    }
}
