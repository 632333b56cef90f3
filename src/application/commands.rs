use std::path::PathBuf;

use crate::domain::sql_value::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlRequest {
    BatchUpdate {
        payload_json: String,
    },
    WhereInChunk {
        table: String,
        column: String,
        values: Vec<SqlValue>,
        chunk_size: usize,
    },
    TimeIntersect {
        table: String,
        start_column: String,
        end_column: String,
        start_date: String,
        end_date: String,
    },
}

#[derive(Debug)]
pub struct RenderSqlCommand {
    pub request: SqlRequest,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RenderSqlResult {
    pub sql: String,
    pub output_path: Option<PathBuf>,
}
