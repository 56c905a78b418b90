use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::error::SQLError;
use crate::traits::{Row, SQLStore, Value};

/// SqliteStore is a SQLStore implementation backed by rusqlite (bundled SQLite).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path.
    pub fn open(path: &Path) -> Result<Self, SQLError> {
        let conn = Connection::open(path)
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        // Enable WAL mode for better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self, SQLError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SQLError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Convert our Value enum to rusqlite's ToSql.
fn bind_params(params: &[Value]) -> Vec<Box<dyn rusqlite::types::ToSql + '_>> {
    params
        .iter()
        .map(|v| -> Box<dyn rusqlite::types::ToSql + '_> {
            match v {
                Value::Null => Box::new(rusqlite::types::Null),
                Value::Integer(i) => Box::new(*i),
                Value::Text(s) => Box::new(s.as_str()),
            }
        })
        .collect()
}

impl SQLStore for SqliteStore {
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = stmt
            .query_map(param_refs.as_slice(), |row| {
                let mut columns = Vec::new();
                for (i, name) in column_names.iter().enumerate() {
                    let val = row_value_at(row, i);
                    columns.push((name.clone(), val));
                }
                Ok(Row { columns })
            })
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| SQLError::Query(e.to_string()))?);
        }
        Ok(result)
    }

    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let affected = conn
            .execute(sql, param_refs.as_slice())
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        Ok(affected as u64)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        conn.execute(sql, param_refs.as_slice())
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        Ok(conn.last_insert_rowid())
    }
}

/// Extract a Value from a rusqlite row at a given column index.
///
/// Real and blob columns do not occur in this service's schemas; they
/// decode as Null.
fn row_value_at(row: &rusqlite::Row, idx: usize) -> Value {
    match row.get_ref(idx) {
        Ok(rusqlite::types::ValueRef::Integer(i)) => Value::Integer(i),
        Ok(rusqlite::types::ValueRef::Text(t)) => {
            Value::Text(String::from_utf8_lossy(t).into_owned())
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec(
                "CREATE TABLE items (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, count INTEGER)",
                &[],
            )
            .unwrap();
        store
    }

    #[test]
    fn insert_returns_generated_rowid() {
        let store = scratch_store();
        let first = store
            .insert(
                "INSERT INTO items (name, count) VALUES (?1, ?2)",
                &[Value::Text("a".into()), Value::Integer(1)],
            )
            .unwrap();
        let second = store
            .insert(
                "INSERT INTO items (name, count) VALUES (?1, ?2)",
                &[Value::Text("b".into()), Value::Integer(2)],
            )
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn query_decodes_columns() {
        let store = scratch_store();
        store
            .insert(
                "INSERT INTO items (name, count) VALUES (?1, ?2)",
                &[Value::Text("a".into()), Value::Integer(7)],
            )
            .unwrap();
        let rows = store
            .query("SELECT id, name, count FROM items WHERE name = ?1", &[Value::Text("a".into())])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_i64("id"), Some(1));
        assert_eq!(rows[0].get_str("name"), Some("a"));
        assert_eq!(rows[0].get_i64("count"), Some(7));
    }

    #[test]
    fn exec_reports_affected_rows() {
        let store = scratch_store();
        for name in ["a", "b"] {
            store
                .insert(
                    "INSERT INTO items (name, count) VALUES (?1, 0)",
                    &[Value::Text(name.into())],
                )
                .unwrap();
        }
        let affected = store
            .exec("UPDATE items SET count = 5", &[])
            .unwrap();
        assert_eq!(affected, 2);
        let affected = store
            .exec("DELETE FROM items WHERE name = ?1", &[Value::Text("missing".into())])
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[test]
    fn on_disk_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .exec("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT)", &[])
                .unwrap();
            store
                .insert("INSERT INTO t (v) VALUES (?1)", &[Value::Text("kept".into())])
                .unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        let rows = store.query("SELECT v FROM t", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_str("v"), Some("kept"));
    }
}
