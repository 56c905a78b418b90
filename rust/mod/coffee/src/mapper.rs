//! Stateless conversion between the transfer and stored representations.

use crate::dto::CoffeeDto;
use crate::model::Coffee;

pub fn to_model(dto: &CoffeeDto) -> Coffee {
    Coffee {
        id: dto.id,
        name: dto.name.clone(),
        brand: dto.brand.clone(),
        coffee_type: dto.coffee_type,
        max: dto.max,
        quantity: dto.quantity,
    }
}

pub fn to_dto(coffee: &Coffee) -> CoffeeDto {
    CoffeeDto {
        id: coffee.id,
        name: coffee.name.clone(),
        brand: coffee.brand.clone(),
        coffee_type: coffee.coffee_type,
        max: coffee.max,
        quantity: coffee.quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CoffeeType;

    #[test]
    fn roundtrip_preserves_every_field() {
        let dto = CoffeeDto {
            id: 9,
            name: "SaoBraz".into(),
            brand: "Sao Braz".into(),
            coffee_type: CoffeeType::SaoBraz,
            max: 40,
            quantity: 12,
        };
        assert_eq!(to_dto(&to_model(&dto)), dto);
    }
}
