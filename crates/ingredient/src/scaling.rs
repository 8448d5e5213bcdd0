use flowfam_shared::ParsedIngredient;

use crate::error::ScaleError;

/// Markers for qualitative amounts that cannot be scaled with the number of
/// servings ("een snufje zout", "peper naar smaak").
const NO_SCALE_MARKERS: &[&str] = &[
    "snufje",
    "beetje",
    "scheutje",
    "mespunt",
    "naar smaak",
    "optioneel",
];

/// Check whether an ingredient line describes a qualitative amount.
///
/// Case-insensitive substring test over the raw line; works before or after
/// parsing. Returns true for lines like "een snufje zout", false for numeric
/// quantities like "2 stuks appel".
pub fn should_not_scale(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();

    NO_SCALE_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
}

/// Scale an ingredient quantity for a different number of servings.
///
/// The factor must be finite and strictly positive. Callers are expected to
/// check [`should_not_scale`] on the raw line first and leave qualitative
/// amounts untouched.
pub fn scale_ingredient(
    ingredient: &ParsedIngredient,
    factor: f64,
) -> Result<ParsedIngredient, ScaleError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ScaleError::InvalidFactor(factor));
    }

    Ok(ParsedIngredient {
        quantity: ingredient.quantity * factor,
        unit: ingredient.unit.clone(),
        name: ingredient.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(quantity: f64, unit: &str, name: &str) -> ParsedIngredient {
        ParsedIngredient {
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_should_not_scale_qualitative_amounts() {
        assert!(should_not_scale("een snufje zout"));
        assert!(should_not_scale("scheutje olijfolie"));
        assert!(should_not_scale("peper naar smaak"));
        assert!(should_not_scale("koriander (optioneel)"));
    }

    #[test]
    fn test_should_not_scale_is_case_insensitive() {
        assert!(should_not_scale("Een Snufje Zout"));
        assert!(should_not_scale("NAAR SMAAK"));
    }

    #[test]
    fn test_numeric_amounts_scale() {
        assert!(!should_not_scale("2 stuks appel"));
        assert!(!should_not_scale("1,5 liter melk"));
        assert!(!should_not_scale("kipfilet"));
    }

    #[test]
    fn test_scale_multiplies_quantity() {
        let doubled = scale_ingredient(&ingredient(2.0, "stuks", "appel"), 2.0).unwrap();
        assert_eq!(doubled.quantity, 4.0);
        assert_eq!(doubled.unit, "stuks");
        assert_eq!(doubled.name, "appel");

        let halved = scale_ingredient(&ingredient(3.0, "el", "olijfolie"), 0.5).unwrap();
        assert_eq!(halved.quantity, 1.5);
    }

    #[test]
    fn test_scale_rejects_non_positive_factor() {
        let base = ingredient(2.0, "stuks", "appel");
        assert_eq!(
            scale_ingredient(&base, 0.0),
            Err(ScaleError::InvalidFactor(0.0))
        );
        assert_eq!(
            scale_ingredient(&base, -1.0),
            Err(ScaleError::InvalidFactor(-1.0))
        );
    }

    #[test]
    fn test_scale_rejects_non_finite_factor() {
        let base = ingredient(2.0, "stuks", "appel");
        assert!(scale_ingredient(&base, f64::NAN).is_err());
        assert!(scale_ingredient(&base, f64::INFINITY).is_err());
    }
}
