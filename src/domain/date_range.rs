use crate::domain::{
    condition::{CompareOp, Condition},
    sql_value::SqlValue,
};

/// End date stored for rows that have no end date.
pub const OPEN_END_DATE: &str = "0000-00-00";

/// A row range `[start_column, end_column]` tested against the literal
/// bounds `[start, end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start_column: String,
    pub end_column: String,
    pub start: SqlValue,
    pub end: SqlValue,
}

impl DateRange {
    pub fn new(
        start_column: impl Into<String>,
        end_column: impl Into<String>,
        start: impl Into<SqlValue>,
        end: impl Into<SqlValue>,
    ) -> Self {
        Self {
            start_column: start_column.into(),
            end_column: end_column.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// `NOT (start_col > end OR (end_col < start AND end_col <> OPEN_END_DATE))`
    ///
    /// A row whose end date is the open-end sentinel is only excluded when it
    /// starts after the bound's end.
    pub fn overlap_condition(&self) -> Condition {
        Condition::negate(Condition::Or(vec![
            Condition::compare(CompareOp::Gt, self.start_column.clone(), self.end.clone()),
            Condition::And(vec![
                Condition::compare(CompareOp::Lt, self.end_column.clone(), self.start.clone()),
                Condition::compare(CompareOp::NotEq, self.end_column.clone(), OPEN_END_DATE),
            ]),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{condition::Row, fake_quoter::FakeQuoter, sql_value::SqlValue};

    use super::{DateRange, OPEN_END_DATE};

    fn january() -> DateRange {
        DateRange::new("start_date", "end_date", "2024-01-01", "2024-01-31")
    }

    fn row(start: &str, end: &str) -> Row {
        Row::from([
            ("start_date".to_string(), SqlValue::from(start)),
            ("end_date".to_string(), SqlValue::from(end)),
        ])
    }

    #[test]
    fn renders_negated_overlap_predicate() {
        assert_eq!(
            january().overlap_condition().to_sql(&FakeQuoter),
            "NOT ((`start_date` > '2024-01-31') OR ((`end_date` < '2024-01-01') AND (`end_date` <> '0000-00-00')))"
        );
    }

    #[test]
    fn closed_ranges_overlap_only_when_they_intersect() {
        let condition = january().overlap_condition();

        assert_eq!(condition.evaluate(&row("2023-12-01", "2024-01-05")), Some(true));
        assert_eq!(condition.evaluate(&row("2024-01-31", "2024-03-01")), Some(true));
        assert_eq!(condition.evaluate(&row("2023-01-01", "2023-12-31")), Some(false));
        assert_eq!(condition.evaluate(&row("2024-02-01", "2024-02-10")), Some(false));
    }

    #[test]
    fn open_ended_rows_are_only_excluded_by_late_start() {
        let condition = january().overlap_condition();

        for start in ["1999-01-01", "2023-12-31", "2024-01-15", "2024-01-31"] {
            assert_eq!(
                condition.evaluate(&row(start, OPEN_END_DATE)),
                Some(true),
                "start {start}"
            );
        }
        assert_eq!(
            condition.evaluate(&row("2024-02-01", OPEN_END_DATE)),
            Some(false)
        );
    }
}
