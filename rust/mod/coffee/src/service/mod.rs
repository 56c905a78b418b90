mod coffee;
pub mod schema;

use std::sync::Arc;

use coffeestock_core::ServiceError;
use coffeestock_sql::{Row, SQLStore, Value};

use crate::model::{Coffee, CoffeeType};

/// Column list selected whenever a coffee row is decoded.
pub(crate) const COFFEE_COLUMNS: &str = "id, name, brand, type, max, quantity";

/// Coffee service — holds the storage backend and enforces the business
/// rules: name uniqueness on create, existence on lookup/delete/increment,
/// and the stock ceiling on increment.
pub struct CoffeeService {
    pub(crate) sql: Arc<dyn SQLStore>,
}

impl CoffeeService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }

    /// Run a point query and decode at most one coffee record.
    pub(crate) fn query_one(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<Coffee>, ServiceError> {
        let rows = self
            .sql
            .query(sql, params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.first().map(coffee_from_row).transpose()
    }
}

/// Decode a `coffees` row into the stored entity.
pub(crate) fn coffee_from_row(row: &Row) -> Result<Coffee, ServiceError> {
    let label = require_str(row, "type")?;
    let coffee_type = CoffeeType::from_label(label).ok_or_else(|| {
        ServiceError::Storage(format!("unknown coffee type '{}' in storage", label))
    })?;

    Ok(Coffee {
        id: require_i64(row, "id")?,
        name: require_str(row, "name")?.to_string(),
        brand: require_str(row, "brand")?.to_string(),
        coffee_type,
        max: require_i64(row, "max")?,
        quantity: require_i64(row, "quantity")?,
    })
}

fn require_i64(row: &Row, col: &str) -> Result<i64, ServiceError> {
    row.get_i64(col)
        .ok_or_else(|| ServiceError::Storage(format!("missing integer column '{}'", col)))
}

fn require_str<'a>(row: &'a Row, col: &str) -> Result<&'a str, ServiceError> {
    row.get_str(col)
        .ok_or_else(|| ServiceError::Storage(format!("missing text column '{}'", col)))
}
