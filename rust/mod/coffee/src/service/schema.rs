use coffeestock_core::ServiceError;
use coffeestock_sql::SQLStore;

/// SQL DDL to initialize the coffee stock schema.
///
/// One column per record field. The UNIQUE constraint on `name` is a
/// storage-level backstop only: the service pre-checks uniqueness by
/// lookup and never interprets a constraint failure as a business
/// rejection.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS coffees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        brand TEXT NOT NULL,
        type TEXT NOT NULL,
        max INTEGER NOT NULL,
        quantity INTEGER NOT NULL
    )",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
