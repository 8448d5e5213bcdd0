use std::sync::LazyLock;

use flowfam_shared::ParsedIngredient;
use regex::Regex;

/// Generic count unit used when an input line carries no unit of its own.
pub const PIECE_UNIT: &str = "st";

static RE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*([A-Za-z]+)?\s*(.*)$").unwrap());

/// Parse a free-text ingredient line into quantity, unit, and name.
///
/// The line is expected to optionally start with a numeric quantity (integer
/// or decimal, `.` or `,` as separator), optionally followed by an alphabetic
/// unit token, with the trimmed remainder as the item name:
///
/// - `"3 stuks appel"` → quantity 3, unit "stuks", name "appel"
/// - `"1,5 liter melk"` → quantity 1.5, unit "liter", name "melk"
/// - `"kipfilet"` → quantity 1, unit "st", name "kipfilet"
///
/// Total over arbitrary input: a line without a leading number falls back to
/// quantity 1 and the generic "st" unit with the whole line as the name. When
/// a number is followed by a single token and nothing else ("2 appel"), the
/// token is the name, not a unit.
pub fn parse_ingredient(text: &str) -> ParsedIngredient {
    let Some(caps) = RE_QUANTITY.captures(text) else {
        return ParsedIngredient {
            quantity: 1.0,
            unit: PIECE_UNIT.to_string(),
            name: text.trim().to_string(),
        };
    };

    let quantity = caps[1].replace(',', ".").parse::<f64>().unwrap_or(1.0);
    let unit = caps.get(2).map(|m| m.as_str().to_string());
    let name = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .unwrap_or_default()
        .to_string();

    match unit {
        Some(unit) if !name.is_empty() => ParsedIngredient {
            quantity,
            unit,
            name,
        },
        // Lone token after the number is the name ("2 appel"), not a unit.
        Some(token) => ParsedIngredient {
            quantity,
            unit: PIECE_UNIT.to_string(),
            name: token,
        },
        None => ParsedIngredient {
            quantity,
            unit: PIECE_UNIT.to_string(),
            name,
        },
    }
}

/// Format a quantity for rendered lists.
///
/// Whole numbers print without a decimal point; fractional values keep at
/// most two decimals with trailing zeros trimmed (1.5, not 1.50).
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        return format!("{}", quantity as i64);
    }

    let formatted = format!("{quantity:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
