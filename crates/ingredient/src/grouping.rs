use flowfam_shared::{CATEGORY_ORDER, Categorized, IngredientCategory};

/// Group items by category for list rendering and shopping-list export.
///
/// Returns non-empty groups in [`CATEGORY_ORDER`]; item order within a group
/// follows the input order.
pub fn group_by_category<T: Categorized>(items: &[T]) -> Vec<(IngredientCategory, Vec<&T>)> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|category| {
            let group: Vec<&T> = items
                .iter()
                .filter(|item| item.category() == *category)
                .collect();

            if group.is_empty() {
                None
            } else {
                Some((*category, group))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use flowfam_shared::ShoppingItem;

    use super::*;

    fn item(name: &str, category: IngredientCategory) -> ShoppingItem {
        ShoppingItem {
            name: name.to_string(),
            quantity: 1.0,
            unit: "st".to_string(),
            category,
            collected: false,
        }
    }

    #[test]
    fn test_groups_follow_display_order() {
        let items = vec![
            item("waspoeder", IngredientCategory::Overig),
            item("melk", IngredientCategory::Zuivel),
            item("tomaat", IngredientCategory::Groente),
        ];

        let groups = group_by_category(&items);
        let order: Vec<IngredientCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                IngredientCategory::Groente,
                IngredientCategory::Zuivel,
                IngredientCategory::Overig,
            ]
        );
    }

    #[test]
    fn test_empty_categories_are_dropped() {
        let items = vec![item("melk", IngredientCategory::Zuivel)];

        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, IngredientCategory::Zuivel);
    }

    #[test]
    fn test_items_keep_input_order_within_group() {
        let items = vec![
            item("melk", IngredientCategory::Zuivel),
            item("tomaat", IngredientCategory::Groente),
            item("kaas", IngredientCategory::Zuivel),
        ];

        let groups = group_by_category(&items);
        let zuivel = &groups[1].1;
        assert_eq!(zuivel[0].name, "melk");
        assert_eq!(zuivel[1].name, "kaas");
    }

    #[test]
    fn test_no_items_no_groups() {
        let items: Vec<ShoppingItem> = Vec::new();
        assert!(group_by_category(&items).is_empty());
    }
}
