use crate::domain::{
    error::{BuildError, BuildResult},
    quoting::Quoter,
    sql_value::SqlValue,
};

/// Validated input for a multi-row `UPDATE ... CASE WHEN ... END` statement.
///
/// `condition_keys[i]` identifies the row whose new values are `rows[i]`,
/// and `rows[i][j]` is the new value of `columns[j]`.
///
/// Only the two length checks are enforced. Empty `columns` or empty `rows`
/// still produce text, but not valid SQL; avoiding that is up to the caller.
#[derive(Debug, Clone)]
pub struct BatchUpdate {
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
    condition_keys: Vec<SqlValue>,
    condition_column: String,
}

impl BatchUpdate {
    pub fn new(
        table: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<SqlValue>>,
        condition_keys: Vec<SqlValue>,
        condition_column: impl Into<String>,
    ) -> BuildResult<Self> {
        let expected = columns.len();
        if let Some((row_index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(BuildError::ColumnsRowsMismatch {
                row_index,
                expected,
                found: row.len(),
            });
        }
        if rows.len() != condition_keys.len() {
            return Err(BuildError::RowsConditionKeysMismatch {
                rows: rows.len(),
                condition_keys: condition_keys.len(),
            });
        }

        Ok(Self {
            table: table.into(),
            columns,
            rows,
            condition_keys,
            condition_column: condition_column.into(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self, quoter: &dyn Quoter) -> String {
        let table = quoter.quote_identifier(&self.table);
        let condition_column = quoter.quote_identifier(&self.condition_column);
        let keys = self
            .condition_keys
            .iter()
            .map(|key| quoter.quote_value(key))
            .collect::<Vec<_>>();

        let mut sql = format!("UPDATE {table} SET\n");
        for (column_index, column) in self.columns.iter().enumerate() {
            sql.push_str(&format!(
                "{} = CASE {condition_column}\n",
                quoter.quote_identifier(column)
            ));
            for (key, row) in keys.iter().zip(&self.rows) {
                sql.push_str(&format!(
                    "WHEN {key} THEN {}\n",
                    quoter.quote_value(&row[column_index])
                ));
            }
            let separator = if column_index + 1 < self.columns.len() {
                ","
            } else {
                ""
            };
            sql.push_str(&format!("END{separator}\n"));
        }
        sql.push_str(&format!(
            "WHERE {condition_column} IN ({});",
            keys.join(",")
        ));
        sql
    }
}
