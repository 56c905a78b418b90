use serde::{Deserialize, Serialize};

/// The closed set of coffee brands the stock tracks.
///
/// Wire and storage format is the uppercase label (`"STAMONICA"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoffeeType {
    StaMonica,
    Baggio,
    Dutra,
    SaoBraz,
    StaClara,
    Melitta,
    TresCoracoes,
}

impl CoffeeType {
    pub const ALL: &'static [CoffeeType] = &[
        CoffeeType::StaMonica,
        CoffeeType::Baggio,
        CoffeeType::Dutra,
        CoffeeType::SaoBraz,
        CoffeeType::StaClara,
        CoffeeType::Melitta,
        CoffeeType::TresCoracoes,
    ];

    /// The label used on the wire and in the `type` storage column.
    pub fn label(&self) -> &'static str {
        match self {
            CoffeeType::StaMonica => "STAMONICA",
            CoffeeType::Baggio => "BAGGIO",
            CoffeeType::Dutra => "DUTRA",
            CoffeeType::SaoBraz => "SAOBRAZ",
            CoffeeType::StaClara => "STACLARA",
            CoffeeType::Melitta => "MELITTA",
            CoffeeType::TresCoracoes => "TRESCORACOES",
        }
    }

    /// Parse a label back into a type. Exact match only.
    pub fn from_label(label: &str) -> Option<CoffeeType> {
        CoffeeType::ALL.iter().copied().find(|t| t.label() == label)
    }
}

/// Coffee — a stored stock record.
///
/// `id` is assigned by storage on insert and immutable after creation.
/// `name` is unique across all records (case-sensitive).
/// The invariant `quantity <= max` holds after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub coffee_type: CoffeeType,
    pub max: i64,
    pub quantity: i64,
}
