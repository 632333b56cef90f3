pub mod filter_query;
pub mod mysql_quoter;
pub mod raw_statement;
pub mod update_payload;
