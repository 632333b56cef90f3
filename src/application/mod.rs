pub mod commands;
pub mod ports;
pub mod sql_helper;
pub mod use_cases;
