use coffeestock_core::ServiceError;
use coffeestock_sql::Value;
use tracing::debug;

use crate::dto::CoffeeDto;
use crate::mapper;
use crate::model::Coffee;
use super::{CoffeeService, COFFEE_COLUMNS};

impl CoffeeService {
    /// Register a new coffee. The name must not already be taken.
    ///
    /// Pre-check then insert: two concurrent creates with the same name
    /// can both pass the check. Inherited single-statement model; no
    /// locking here.
    pub fn create(&self, dto: CoffeeDto) -> Result<CoffeeDto, ServiceError> {
        if self.find_record_by_name(&dto.name)?.is_some() {
            return Err(ServiceError::AlreadyRegistered(format!(
                "coffee with name '{}' already registered",
                dto.name
            )));
        }

        let mut coffee = mapper::to_model(&dto);
        coffee.id = self
            .sql
            .insert(
                "INSERT INTO coffees (name, brand, type, max, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                &[
                    Value::Text(coffee.name.clone()),
                    Value::Text(coffee.brand.clone()),
                    Value::Text(coffee.coffee_type.label().to_string()),
                    Value::Integer(coffee.max),
                    Value::Integer(coffee.quantity),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        debug!(id = coffee.id, name = %coffee.name, "coffee registered");
        Ok(mapper::to_dto(&coffee))
    }

    /// Look up a coffee by exact name.
    pub fn find_by_name(&self, name: &str) -> Result<CoffeeDto, ServiceError> {
        let coffee = self.find_record_by_name(name)?.ok_or_else(|| {
            ServiceError::NotFound(format!("coffee with name '{}' not found", name))
        })?;
        Ok(mapper::to_dto(&coffee))
    }

    /// List every coffee in storage, in rowid order.
    pub fn list_all(&self) -> Result<Vec<CoffeeDto>, ServiceError> {
        let rows = self
            .sql
            .query(
                &format!("SELECT {} FROM coffees ORDER BY id", COFFEE_COLUMNS),
                &[],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        rows.iter()
            .map(|row| super::coffee_from_row(row).map(|c| mapper::to_dto(&c)))
            .collect()
    }

    /// Delete a coffee by id.
    pub fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let affected = self
            .sql
            .exec("DELETE FROM coffees WHERE id = ?1", &[Value::Integer(id)])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "coffee with id {} not found",
                id
            )));
        }
        debug!(id, "coffee deleted");
        Ok(())
    }

    /// Increment a coffee's stock, bounded by its ceiling.
    ///
    /// The ceiling check happens before the single UPDATE, so a rejected
    /// increment leaves the record untouched.
    pub fn increment(&self, id: i64, amount: i64) -> Result<CoffeeDto, ServiceError> {
        let mut coffee = self.find_record_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("coffee with id {} not found", id))
        })?;

        let after = coffee.quantity + amount;
        if after > coffee.max {
            return Err(ServiceError::StockExceeded(format!(
                "incrementing coffee {} by {} exceeds the max stock capacity of {}",
                id, amount, coffee.max
            )));
        }

        self.sql
            .exec(
                "UPDATE coffees SET quantity = ?1 WHERE id = ?2",
                &[Value::Integer(after), Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        coffee.quantity = after;
        debug!(id, quantity = after, "stock incremented");
        Ok(mapper::to_dto(&coffee))
    }

    fn find_record_by_name(&self, name: &str) -> Result<Option<Coffee>, ServiceError> {
        self.query_one(
            &format!("SELECT {} FROM coffees WHERE name = ?1", COFFEE_COLUMNS),
            &[Value::Text(name.to_string())],
        )
    }

    fn find_record_by_id(&self, id: i64) -> Result<Option<Coffee>, ServiceError> {
        self.query_one(
            &format!("SELECT {} FROM coffees WHERE id = ?1", COFFEE_COLUMNS),
            &[Value::Integer(id)],
        )
    }
}
