use std::{cmp::Ordering, collections::BTreeMap, fmt};

use crate::domain::{quoting::Quoter, sql_value::SqlValue};

/// Constant predicate no row satisfies.
pub const ALWAYS_FALSE: &str = "1=0";
/// Constant predicate every row satisfies.
pub const ALWAYS_TRUE: &str = "1=1";

/// In-memory row used to evaluate a condition without a database.
pub type Row = BTreeMap<String, SqlValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    Gt,
    NotEq,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::NotEq => "<>",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::NotEq => ordering != Ordering::Equal,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composable boolean filter, rendered into a WHERE clause by a query object.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Literal SQL fragment, written verbatim.
    Raw(String),
    Compare {
        op: CompareOp,
        column: String,
        value: SqlValue,
    },
    In {
        column: String,
        values: Vec<SqlValue>,
    },
    And(Vec<Condition>),
    Or(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn always_false() -> Self {
        Condition::Raw(ALWAYS_FALSE.to_string())
    }

    pub fn compare(op: CompareOp, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Condition::Compare {
            op,
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn is_in(column: impl Into<String>, values: Vec<SqlValue>) -> Self {
        Condition::In {
            column: column.into(),
            values,
        }
    }

    pub fn negate(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    pub fn to_sql(&self, quoter: &dyn Quoter) -> String {
        match self {
            Condition::Raw(fragment) => fragment.clone(),
            Condition::Compare { op, column, value } => format!(
                "{} {op} {}",
                quoter.quote_identifier(column),
                quoter.quote_value(value)
            ),
            Condition::In { values, .. } if values.is_empty() => ALWAYS_FALSE.to_string(),
            Condition::In { column, values } => {
                let quoted = values
                    .iter()
                    .map(|value| quoter.quote_value(value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} IN ({quoted})", quoter.quote_identifier(column))
            }
            Condition::And(operands) if operands.is_empty() => ALWAYS_TRUE.to_string(),
            Condition::And(operands) => join_operands(operands, " AND ", quoter),
            Condition::Or(operands) if operands.is_empty() => ALWAYS_FALSE.to_string(),
            Condition::Or(operands) => join_operands(operands, " OR ", quoter),
            Condition::Not(inner) => format!("NOT ({})", inner.to_sql(quoter)),
        }
    }

    /// Evaluates the condition against `row` with SQL three-valued logic.
    ///
    /// `None` stands for UNKNOWN: a NULL or missing operand, incomparable
    /// kinds, or a raw fragment other than the two constant predicates.
    pub fn evaluate(&self, row: &Row) -> Option<bool> {
        match self {
            Condition::Raw(fragment) => {
                let compact = fragment
                    .chars()
                    .filter(|character| !character.is_whitespace())
                    .collect::<String>();
                match compact.as_str() {
                    ALWAYS_FALSE => Some(false),
                    ALWAYS_TRUE => Some(true),
                    _ => None,
                }
            }
            Condition::Compare { op, column, value } => {
                let ordering = row.get(column)?.compare(value)?;
                Some(op.holds(ordering))
            }
            Condition::In { column, values } => {
                let current = row.get(column)?;
                let mut unknown = current.is_null();
                for candidate in values {
                    match current.compare(candidate) {
                        Some(Ordering::Equal) => return Some(true),
                        Some(_) => {}
                        None => unknown = true,
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Condition::And(operands) => {
                let mut unknown = false;
                for operand in operands {
                    match operand.evaluate(row) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => unknown = true,
                    }
                }
                if unknown { None } else { Some(true) }
            }
            Condition::Or(operands) => {
                let mut unknown = false;
                for operand in operands {
                    match operand.evaluate(row) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => unknown = true,
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Condition::Not(inner) => inner.evaluate(row).map(|matched| !matched),
        }
    }
}

fn join_operands(operands: &[Condition], separator: &str, quoter: &dyn Quoter) -> String {
    operands
        .iter()
        .map(|operand| format!("({})", operand.to_sql(quoter)))
        .collect::<Vec<_>>()
        .join(separator)
}
