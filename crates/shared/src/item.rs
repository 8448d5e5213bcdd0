use serde::{Deserialize, Serialize};

use crate::category::IngredientCategory;

/// Structured form of a free-text ingredient line.
///
/// Produced fresh per parsed line; carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
}

/// A to-buy entry on the family shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
    pub collected: bool,
}

/// A tracked household stock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
}

/// Anything that belongs to a shopping/pantry category.
pub trait Categorized {
    fn category(&self) -> IngredientCategory;
}

impl Categorized for ShoppingItem {
    fn category(&self) -> IngredientCategory {
        self.category
    }
}

impl Categorized for PantryItem {
    fn category(&self) -> IngredientCategory {
        self.category
    }
}
