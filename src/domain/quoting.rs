use crate::domain::sql_value::SqlValue;

/// Dialect quoting capability injected into every builder.
///
/// Builders never escape anything themselves; identifiers and literals go
/// through this trait before they are written into SQL text.
pub trait Quoter {
    /// Escapes and wraps a table or column name.
    fn quote_identifier(&self, name: &str) -> String;

    /// Escapes and wraps a scalar for direct inlining.
    fn quote_value(&self, value: &SqlValue) -> String;
}

impl<Q: Quoter + ?Sized> Quoter for &Q {
    fn quote_identifier(&self, name: &str) -> String {
        (**self).quote_identifier(name)
    }

    fn quote_value(&self, value: &SqlValue) -> String {
        (**self).quote_value(value)
    }
}
