use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping and pantry category for grouping household items.
///
/// The string form is the snake_case Dutch tag (`vlees_vis`, `droge_waren`)
/// used for storage and lookups; `label` carries the display string.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Fresh vegetables and herbs
    Groente,
    /// Fresh fruit
    Fruit,
    /// Dairy and eggs: milk, cheese, yogurt, butter
    Zuivel,
    /// Meat and fish, fresh or cured
    VleesVis,
    /// Dry goods: pasta, rice, flour, canned and shelf-stable food
    DrogeWaren,
    /// Refrigerated condiments and sauces
    Koelkast,
    /// Frozen products
    Vriezer,
    /// Anything that matches no other category
    #[default]
    Overig,
}

/// Display ordering for grouped lists and exported shopping documents.
pub const CATEGORY_ORDER: [IngredientCategory; 8] = [
    IngredientCategory::Groente,
    IngredientCategory::Fruit,
    IngredientCategory::Zuivel,
    IngredientCategory::VleesVis,
    IngredientCategory::DrogeWaren,
    IngredientCategory::Koelkast,
    IngredientCategory::Vriezer,
    IngredientCategory::Overig,
];

impl IngredientCategory {
    /// Human-readable label shown as the group heading.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Groente => "Groente",
            IngredientCategory::Fruit => "Fruit",
            IngredientCategory::Zuivel => "Zuivel",
            IngredientCategory::VleesVis => "Vlees & Vis",
            IngredientCategory::DrogeWaren => "Droge waren",
            IngredientCategory::Koelkast => "Koelkast",
            IngredientCategory::Vriezer => "Vriezer",
            IngredientCategory::Overig => "Overig",
        }
    }
}
