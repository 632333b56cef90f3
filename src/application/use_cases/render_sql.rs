use std::{
    fs::File,
    io::{BufWriter, Write},
};

use anyhow::{Context, Result};

use crate::{
    application::{
        commands::{RenderSqlCommand, RenderSqlResult, SqlRequest},
        sql_helper::{SqlHelper, time_intersect, where_in_chunk},
    },
    domain::{chunk::ChunkSize, quoting::Quoter},
    infrastructure::{filter_query::FilterQuery, update_payload::BatchUpdatePayload},
};

#[derive(Debug)]
pub struct RenderSqlUseCase<Q> {
    helper: SqlHelper<Q>,
}

impl<Q: Quoter> RenderSqlUseCase<Q> {
    pub fn new(quoter: Q) -> Self {
        Self {
            helper: SqlHelper::new(quoter),
        }
    }

    pub fn execute(&self, command: RenderSqlCommand) -> Result<RenderSqlResult> {
        let sql = self.render(command.request)?;

        if let Some(output_path) = &command.output_path {
            let output_file = File::create(output_path).with_context(|| {
                format!("Unable to create file: {}", output_path.display())
            })?;
            let mut output_writer = BufWriter::new(output_file);
            writeln!(output_writer, "{sql}")?;
            output_writer.flush()?;
        }

        Ok(RenderSqlResult {
            sql,
            output_path: command.output_path,
        })
    }

    fn render(&self, request: SqlRequest) -> Result<String> {
        let quoter = self.helper.quoter();
        match request {
            SqlRequest::BatchUpdate { payload_json } => {
                let update = BatchUpdatePayload::from_json(&payload_json)?.into_batch_update()?;
                let statement = self.helper.render_batch_update(&update);
                Ok(statement.raw_sql(quoter))
            }
            SqlRequest::WhereInChunk {
                table,
                column,
                values,
                chunk_size,
            } => {
                let chunk_size = ChunkSize::new(chunk_size)?;
                let mut query = FilterQuery::from_table(table);
                where_in_chunk(&column, &values, &mut query, chunk_size);
                Ok(query.to_select_sql(quoter))
            }
            SqlRequest::TimeIntersect {
                table,
                start_column,
                end_column,
                start_date,
                end_date,
            } => {
                let mut query = FilterQuery::from_table(table);
                time_intersect(&start_column, &end_column, start_date, end_date, &mut query);
                Ok(query.to_select_sql(quoter))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{SystemTime, UNIX_EPOCH},
    };

    use crate::{
        application::commands::{RenderSqlCommand, SqlRequest},
        domain::sql_value::SqlValue,
        infrastructure::mysql_quoter::MySqlQuoter,
    };

    use super::RenderSqlUseCase;

    #[test]
    fn renders_batch_update_from_json() {
        let result = RenderSqlUseCase::new(MySqlQuoter)
            .execute(RenderSqlCommand {
                request: SqlRequest::BatchUpdate {
                    payload_json: r#"{
                        "table": "account",
                        "columns": ["c_name", "age"],
                        "rows": [["Mars", 35], ["Gunter", 24], ["Molly", 25]],
                        "condition_keys": [1, 2, 3],
                        "condition_column": "id"
                    }"#
                    .to_string(),
                },
                output_path: None,
            })
            .expect("sql should be rendered");

        assert_eq!(result.sql.matches(" = CASE `id`").count(), 2);
        assert_eq!(result.sql.matches("WHEN ").count(), 6);
        assert!(result.sql.ends_with("WHERE `id` IN (1,2,3);"));
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let error = RenderSqlUseCase::new(MySqlQuoter)
            .execute(RenderSqlCommand {
                request: SqlRequest::WhereInChunk {
                    table: "t".to_string(),
                    column: "id".to_string(),
                    values: vec![SqlValue::Int(1)],
                    chunk_size: 0,
                },
                output_path: None,
            })
            .expect_err("zero chunk size should be rejected");

        assert!(error.to_string().contains("Invalid chunk size: 0"));
    }

    #[test]
    fn writes_overlap_query_to_output_file() {
        let unique_suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("sql_batch_helper_{unique_suffix}.sql"));

        let result = RenderSqlUseCase::new(MySqlQuoter)
            .execute(RenderSqlCommand {
                request: SqlRequest::TimeIntersect {
                    table: "contracts".to_string(),
                    start_column: "start_date".to_string(),
                    end_column: "end_date".to_string(),
                    start_date: "2024-01-01".to_string(),
                    end_date: "2024-01-31".to_string(),
                },
                output_path: Some(path.clone()),
            })
            .expect("sql should be rendered");

        let written = fs::read_to_string(&path).expect("output file should exist");
        assert_eq!(written, format!("{}\n", result.sql));
        assert!(written.contains("`end_date` <> '0000-00-00'"));

        fs::remove_file(path).expect("temp sql file should be removed");
    }
}
