//! Request body validation, run before any business-rules call.
//!
//! Bodies arrive as raw JSON values; every violation is reported as a
//! `Validation` error (HTTP 400) and the service is never called.

use coffeestock_core::ServiceError;

use crate::dto::CoffeeDto;
use crate::model::CoffeeType;

/// Upper bound for both `max` and `quantity` fields.
pub const FIELD_BOUND: i64 = 99;

/// Validate a create body and build the transfer representation.
///
/// Any `id` in the body is ignored; ids are server-assigned.
pub fn create_body(body: &serde_json::Value) -> Result<CoffeeDto, ServiceError> {
    let name = require_string(body, "name")?;
    let brand = require_string(body, "brand")?;
    let coffee_type = require_type(body)?;
    let max = require_bounded_int(body, "max")?;
    let quantity = require_bounded_int(body, "quantity")?;

    if quantity > max {
        return Err(ServiceError::Validation(format!(
            "quantity {} exceeds max {}",
            quantity, max
        )));
    }

    Ok(CoffeeDto {
        id: 0,
        name,
        brand,
        coffee_type,
        max,
        quantity,
    })
}

/// Validate an increment body (`{"quantity": n}`).
pub fn quantity_body(body: &serde_json::Value) -> Result<i64, ServiceError> {
    require_bounded_int(body, "quantity")
}

fn require_string(body: &serde_json::Value, field: &str) -> Result<String, ServiceError> {
    match body.get(field) {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(serde_json::Value::String(_)) => Err(ServiceError::Validation(format!(
            "{} must not be empty",
            field
        ))),
        Some(_) => Err(ServiceError::Validation(format!(
            "{} must be a string",
            field
        ))),
        None => Err(ServiceError::Validation(format!("{} is required", field))),
    }
}

fn require_bounded_int(body: &serde_json::Value, field: &str) -> Result<i64, ServiceError> {
    let value = body
        .get(field)
        .ok_or_else(|| ServiceError::Validation(format!("{} is required", field)))?;
    let n = value.as_i64().ok_or_else(|| {
        ServiceError::Validation(format!("{} must be an integer", field))
    })?;
    if !(0..=FIELD_BOUND).contains(&n) {
        return Err(ServiceError::Validation(format!(
            "{} must be between 0 and {}",
            field, FIELD_BOUND
        )));
    }
    Ok(n)
}

fn require_type(body: &serde_json::Value) -> Result<CoffeeType, ServiceError> {
    let label = require_string(body, "type")?;
    CoffeeType::from_label(&label).ok_or_else(|| {
        let labels: Vec<&str> = CoffeeType::ALL.iter().map(|t| t.label()).collect();
        ServiceError::Validation(format!(
            "type must be one of {}",
            labels.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> serde_json::Value {
        json!({
            "name": "Melitta",
            "brand": "Fazenda Sta Monica",
            "max": 50,
            "quantity": 10,
            "type": "MELITTA",
        })
    }

    #[test]
    fn accepts_a_valid_body() {
        let dto = create_body(&valid_body()).unwrap();
        assert_eq!(dto.id, 0);
        assert_eq!(dto.name, "Melitta");
        assert_eq!(dto.coffee_type, crate::model::CoffeeType::Melitta);
    }

    #[test]
    fn supplied_id_is_ignored() {
        let mut body = valid_body();
        body["id"] = json!(77);
        let dto = create_body(&body).unwrap();
        assert_eq!(dto.id, 0);
    }

    #[test]
    fn rejects_missing_and_empty_strings() {
        for field in ["name", "brand"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);
            assert!(create_body(&body).is_err());

            let mut body = valid_body();
            body[field] = json!("   ");
            assert!(create_body(&body).is_err());

            let mut body = valid_body();
            body[field] = json!(5);
            assert!(create_body(&body).is_err());
        }
    }

    #[test]
    fn rejects_unknown_type_label() {
        let mut body = valid_body();
        body["type"] = json!("melitta");
        let err = create_body(&body).unwrap_err();
        assert!(err.to_string().contains("type must be one of"));
    }

    #[test]
    fn rejects_out_of_range_integers() {
        for field in ["max", "quantity"] {
            let mut body = valid_body();
            body[field] = json!(-1);
            assert!(create_body(&body).is_err());

            let mut body = valid_body();
            body[field] = json!(100);
            assert!(create_body(&body).is_err());

            let mut body = valid_body();
            body[field] = json!(1.5);
            assert!(create_body(&body).is_err());

            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);
            assert!(create_body(&body).is_err());
        }
    }

    #[test]
    fn rejects_quantity_above_max() {
        let mut body = valid_body();
        body["quantity"] = json!(60);
        let err = create_body(&body).unwrap_err();
        assert!(err.to_string().contains("exceeds max"));
    }

    #[test]
    fn quantity_body_checks_presence_and_bounds() {
        assert_eq!(quantity_body(&json!({"quantity": 10})).unwrap(), 10);
        assert!(quantity_body(&json!({})).is_err());
        assert!(quantity_body(&json!({"quantity": -1})).is_err());
        assert!(quantity_body(&json!({"quantity": 100})).is_err());
        assert!(quantity_body(&json!({"quantity": "ten"})).is_err());
    }
}
