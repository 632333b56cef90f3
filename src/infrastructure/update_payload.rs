use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{batch_update::BatchUpdate, sql_value::SqlValue};

/// JSON document describing one batch update.
///
/// ```json
/// {
///   "table": "account",
///   "columns": ["c_name", "age"],
///   "rows": [["Mars", 35], ["Gunter", 24]],
///   "condition_keys": [1, 2],
///   "condition_column": "id"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BatchUpdatePayload {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
    #[serde(alias = "conditionKeys")]
    pub condition_keys: Vec<SqlValue>,
    #[serde(alias = "conditionColumn")]
    pub condition_column: String,
}

impl BatchUpdatePayload {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Unable to parse batch update JSON")
    }

    pub fn into_batch_update(self) -> Result<BatchUpdate> {
        Ok(BatchUpdate::new(
            self.table,
            self.columns,
            self.rows,
            self.condition_keys,
            self.condition_column,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::mysql_quoter::MySqlQuoter;

    use super::BatchUpdatePayload;

    #[test]
    fn parses_camel_case_aliases() {
        let payload = BatchUpdatePayload::from_json(
            r#"{
                "table": "account",
                "columns": ["c_name"],
                "rows": [["Mars"]],
                "conditionKeys": [1],
                "conditionColumn": "id"
            }"#,
        )
        .expect("payload should parse");

        let update = payload
            .into_batch_update()
            .expect("payload should be consistent");
        assert!(
            update
                .render(&MySqlQuoter)
                .starts_with("UPDATE `account` SET\n`c_name` = CASE `id`\nWHEN 1 THEN 'Mars'\n")
        );
    }

    #[test]
    fn shape_errors_surface_from_payload() {
        let payload = BatchUpdatePayload::from_json(
            r#"{"table":"t","columns":["a","b"],"rows":[[1]],"condition_keys":[1],"condition_column":"id"}"#,
        )
        .expect("payload should parse");

        let error = payload
            .into_batch_update()
            .expect_err("short row should be rejected");
        assert!(error.to_string().contains("inconsistent length"));
    }

    #[test]
    fn rejects_malformed_json() {
        let error = BatchUpdatePayload::from_json("{\"table\": 1}").expect_err("invalid payload");
        assert!(
            error
                .to_string()
                .contains("Unable to parse batch update JSON")
        );
    }
}
