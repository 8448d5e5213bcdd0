pub mod category;
pub mod item;

pub use category::{CATEGORY_ORDER, IngredientCategory};
pub use item::{Categorized, PantryItem, ParsedIngredient, ShoppingItem};
