pub mod batch_update;
pub mod chunk;
pub mod condition;
pub mod date_range;
pub mod error;
pub mod quoting;
pub mod sql_value;

#[cfg(test)]
pub(crate) mod fake_quoter;
