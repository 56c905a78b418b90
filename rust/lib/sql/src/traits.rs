use crate::error::SQLError;

/// A dynamically-typed SQL parameter value.
///
/// Covers only the column types this service's schemas use: integers
/// and text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
}

/// A row returned from a SQL query — column name to value.
#[derive(Debug, Clone)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text column value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer column value by name.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }
}

/// SQLStore provides a SQL execution interface backed by an embedded database.
pub trait SQLStore: Send + Sync {
    /// Execute a query and return rows.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError>;

    /// Execute a statement (UPDATE/DELETE) and return affected row count.
    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError>;

    /// Execute an INSERT and return the generated row id.
    ///
    /// The statement and the id read happen under the same connection
    /// lock, so the returned id always belongs to this insert.
    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, SQLError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_getters_are_typed() {
        let row = Row {
            columns: vec![
                ("id".into(), Value::Integer(3)),
                ("name".into(), Value::Text("Dutra".into())),
                ("note".into(), Value::Null),
            ],
        };
        assert_eq!(row.get_i64("id"), Some(3));
        assert_eq!(row.get_str("name"), Some("Dutra"));
        assert_eq!(row.get_str("id"), None);
        assert_eq!(row.get_i64("note"), None);
        assert!(row.get("missing").is_none());
    }
}
