//! Row-selection predicates.
//!
//! A predicate is a conjunction of column equality tests. It compiles to a
//! parameterized SQL fragment; values are always bound, never interpolated.

use crate::row::Value;

/// A filter over the rows of one table.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every row.
    All,
    /// Column equals value.
    Eq(&'static str, Value),
    /// Every inner predicate matches.
    And(Vec<Predicate>),
}

impl Predicate {
    /// Match all rows.
    pub fn all() -> Self {
        Predicate::All
    }

    /// Column equals an integer.
    pub fn integer_eq(column: &'static str, value: i64) -> Self {
        Predicate::Eq(column, Value::Integer(value))
    }

    /// Column equals a text value.
    pub fn text_eq(column: &'static str, value: impl Into<String>) -> Self {
        Predicate::Eq(column, Value::Text(value.into()))
    }

    /// Conjunction with another predicate.
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::All => other,
            Predicate::And(mut tests) => {
                tests.push(other);
                Predicate::And(tests)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Flatten into the list of equality tests.
    fn tests(&self) -> Vec<(&'static str, &Value)> {
        match self {
            Predicate::All => Vec::new(),
            Predicate::Eq(column, value) => vec![(*column, value)],
            Predicate::And(inner) => inner.iter().flat_map(|p| p.tests()).collect(),
        }
    }

    /// Compile to a WHERE clause and its bound parameters.
    ///
    /// Returns `None` when the predicate matches all rows.
    pub(crate) fn where_clause(&self) -> Option<(String, Vec<Value>)> {
        let tests = self.tests();
        if tests.is_empty() {
            return None;
        }
        let fragment = tests
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");
        let params = tests.into_iter().map(|(_, v)| v.clone()).collect();
        Some((fragment, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_clause() {
        assert!(Predicate::all().where_clause().is_none());
    }

    #[test]
    fn test_single_test() {
        let (sql, params) = Predicate::integer_eq("id", 42).where_clause().unwrap();
        assert_eq!(sql, "id = ?1");
        assert_eq!(params, vec![Value::Integer(42)]);
    }

    #[test]
    fn test_conjunction() {
        let pred = Predicate::integer_eq("objType", 21).and(Predicate::text_eq("name", "PERSON"));
        let (sql, params) = pred.where_clause().unwrap();
        assert_eq!(sql, "objType = ?1 AND name = ?2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_and_on_all_collapses() {
        let pred = Predicate::all().and(Predicate::integer_eq("id", 1));
        let (sql, _) = pred.where_clause().unwrap();
        assert_eq!(sql, "id = ?1");
    }
}
