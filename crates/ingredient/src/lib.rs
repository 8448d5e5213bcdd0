pub mod categorization;
pub mod error;
pub mod grouping;
pub mod parse;
pub mod scaling;

// Re-export commonly used functions
pub use categorization::categorize_ingredient;
pub use error::ScaleError;
pub use grouping::group_by_category;
pub use parse::{PIECE_UNIT, format_quantity, parse_ingredient};
pub use scaling::{scale_ingredient, should_not_scale};
