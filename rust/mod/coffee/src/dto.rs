use serde::{Deserialize, Serialize};

use crate::model::CoffeeType;

/// CoffeeDto — the transfer representation of a coffee record.
///
/// Same fields as the stored [`crate::model::Coffee`]; the two shapes are
/// kept separate so the API surface and the storage schema can evolve
/// independently. `id` is server-assigned and read-only on input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoffeeDto {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub coffee_type: CoffeeType,
    pub max: i64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_json_roundtrip() {
        let dto = CoffeeDto {
            id: 1,
            name: "Melitta".into(),
            brand: "Fazenda Sta Monica".into(),
            coffee_type: CoffeeType::Melitta,
            max: 50,
            quantity: 10,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"type\":\"MELITTA\""));
        let back: CoffeeDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto, back);
    }

    #[test]
    fn id_defaults_to_zero_on_input() {
        let dto: CoffeeDto = serde_json::from_str(
            r#"{"name":"Dutra","brand":"Dutra Cafes","type":"DUTRA","max":30,"quantity":5}"#,
        )
        .unwrap();
        assert_eq!(dto.id, 0);
    }
}
