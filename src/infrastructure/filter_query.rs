use crate::{
    application::ports::ConditionQuery,
    domain::{condition::Condition, quoting::Quoter},
};

/// A `SELECT * FROM <table>` query whose WHERE clause is built from
/// composable conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    table: Option<String>,
    condition: Option<Condition>,
}

impl FilterQuery {
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            condition: None,
        }
    }

    /// Replaces any condition the query already holds.
    pub fn where_condition(&mut self, condition: Condition) -> &mut Self {
        self.condition = Some(condition);
        self
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn where_clause(&self, quoter: &dyn Quoter) -> Option<String> {
        self.condition
            .as_ref()
            .map(|condition| format!("WHERE {}", condition.to_sql(quoter)))
    }

    pub fn to_select_sql(&self, quoter: &dyn Quoter) -> String {
        let mut sql = String::from("SELECT *");
        if let Some(table) = &self.table {
            sql.push_str(&format!(" FROM {}", quoter.quote_identifier(table)));
        }
        if let Some(where_clause) = self.where_clause(quoter) {
            sql.push(' ');
            sql.push_str(&where_clause);
        }
        sql.push(';');
        sql
    }
}

impl ConditionQuery for FilterQuery {
    fn and_where(&mut self, condition: Condition) -> &mut Self {
        self.condition = Some(match self.condition.take() {
            Some(Condition::And(mut operands)) => {
                operands.push(condition);
                Condition::And(operands)
            }
            Some(existing) => Condition::And(vec![existing, condition]),
            None => condition,
        });
        self
    }
}
