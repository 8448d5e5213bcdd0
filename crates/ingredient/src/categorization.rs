use flowfam_shared::IngredientCategory;

/// Keyword groups tested in a fixed priority order.
///
/// Matching is case-folded substring matching: the first group containing any
/// keyword that occurs in the name wins, regardless of where in the name the
/// keyword sits or which group keyword would also match later. Keyword order
/// within a group does not affect the result.
const KEYWORD_GROUPS: [(IngredientCategory, &[&str]); 7] = [
    (
        IngredientCategory::Groente,
        &[
            "tomaat",
            "tomaten",
            "komkommer",
            "paprika",
            "sla",
            "ui",
            "wortel",
            "courgette",
            "broccoli",
            "bloemkool",
            "spinazie",
            "champignon",
            "aardappel",
            "prei",
            "knoflook",
            "avocado",
            "sperziebonen",
            "boontjes",
            "pompoen",
            "venkel",
            "andijvie",
            "radijs",
            "selderij",
        ],
    ),
    (
        IngredientCategory::Fruit,
        &[
            "appel",
            "banaan",
            "peer",
            "druif",
            "druiven",
            "sinaasappel",
            "citroen",
            "limoen",
            "aardbei",
            "framboos",
            "bosbes",
            "blauwe bes",
            "mango",
            "kiwi",
            "meloen",
            "ananas",
            "perzik",
            "nectarine",
        ],
    ),
    (
        IngredientCategory::Zuivel,
        &[
            "melk", "kaas", "yoghurt", "boter", "room", "kwark", "ei", "eieren", "vla",
        ],
    ),
    (
        IngredientCategory::VleesVis,
        &[
            "kip",
            "gehakt",
            "rund",
            "varken",
            "worst",
            "spek",
            "ham",
            "biefstuk",
            "schnitzel",
            "kalkoen",
            "zalm",
            "tonijn",
            "vis",
            "garnalen",
            "makreel",
            "kabeljauw",
        ],
    ),
    (
        IngredientCategory::DrogeWaren,
        &[
            "pasta",
            "spaghetti",
            "macaroni",
            "rijst",
            "bloem",
            "meel",
            "suiker",
            "havermout",
            "muesli",
            "couscous",
            "bonen",
            "linzen",
            "noten",
            "crackers",
            "beschuit",
            "brood",
            "chocolade",
            "koek",
            "chips",
            "thee",
            "koffie",
            "olie",
            "zout",
            "peper",
        ],
    ),
    (
        IngredientCategory::Koelkast,
        &[
            "mayonaise",
            "ketchup",
            "mosterd",
            "saus",
            "hummus",
            "pesto",
            "tapenade",
            "sambal",
            "dressing",
        ],
    ),
    (
        IngredientCategory::Vriezer,
        &["diepvries", "bevroren", "ijs", "pizza", "friet"],
    ),
];

/// Categorize an ingredient name into a shopping/pantry category.
///
/// Total over arbitrary input: names matching no keyword group map to
/// [`IngredientCategory::Overig`]. Case-insensitive and deterministic; a name
/// containing keywords from two groups resolves to whichever group comes
/// first in the priority order.
pub fn categorize_ingredient(name: &str) -> IngredientCategory {
    let normalized = name.trim().to_lowercase();

    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return category;
        }
    }

    IngredientCategory::Overig
}
