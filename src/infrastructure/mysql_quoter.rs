use crate::domain::{quoting::Quoter, sql_value::SqlValue};

/// MySQL-family quoting: backtick identifiers and single-quoted literals
/// escaped the way `mysql_real_escape_string` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQuoter;

impl Quoter for MySqlQuoter {
    /// `table.column` is quoted part by part; a `*` part stays bare.
    fn quote_identifier(&self, name: &str) -> String {
        name.split('.')
            .map(|part| match part {
                "*" => part.to_string(),
                _ => format!("`{}`", part.replace('`', "``")),
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    fn quote_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(true) => "TRUE".to_string(),
            SqlValue::Bool(false) => "FALSE".to_string(),
            SqlValue::Int(number) => number.to_string(),
            SqlValue::Float(number) if number.is_finite() => number.to_string(),
            SqlValue::Float(_) => "NULL".to_string(),
            SqlValue::Text(text) => format!("'{}'", escape_string(text)),
        }
    }
}

fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    for character in text.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\x1a' => escaped.push_str("\\Z"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use sqlparser::{dialect::MySqlDialect, parser::Parser};

    use crate::domain::{quoting::Quoter, sql_value::SqlValue};

    use super::MySqlQuoter;

    #[test]
    fn quotes_identifiers_with_backticks() {
        assert_eq!(MySqlQuoter.quote_identifier("account"), "`account`");
        assert_eq!(MySqlQuoter.quote_identifier("u.id"), "`u`.`id`");
        assert_eq!(MySqlQuoter.quote_identifier("u.*"), "`u`.*");
        assert_eq!(MySqlQuoter.quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn quotes_scalars_per_kind() {
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::Int(35)), "35");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::Float(2.5)), "2.5");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::Float(f64::NAN)), "NULL");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::Null), "NULL");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::Bool(true)), "TRUE");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::from("Mars")), "'Mars'");
    }

    #[test]
    fn escapes_quotes_and_backslashes_in_text() {
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::from("O'Neil")), r"'O\'Neil'");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::from(r"a\b")), r"'a\\b'");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::from(r"a\'")), r"'a\\\''");
        assert_eq!(MySqlQuoter.quote_value(&SqlValue::from("two\nlines")), r"'two\nlines'");
    }

    #[test]
    fn quoted_text_stays_a_single_literal() {
        let value = MySqlQuoter.quote_value(&SqlValue::from("x'; DROP TABLE account; --"));
        let sql = format!("SELECT {value}");

        let statements = Parser::parse_sql(&MySqlDialect {}, &sql).expect("sql should parse");
        assert_eq!(statements.len(), 1);
    }
}
