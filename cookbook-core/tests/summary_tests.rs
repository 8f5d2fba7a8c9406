//! Tests for recipe summary resolution.

use cookbook_core::{
    summarize, Cookbook, Entry, Ingredient, IngredientTotal, Recipe, RequiredItem, SummaryError,
};

fn ingredient(name: &str, cook_time: u64) -> Entry {
    Entry::Ingredient(Ingredient {
        name: name.to_string(),
        cook_time,
    })
}

fn recipe(name: &str, items: &[(&str, u64)]) -> Entry {
    Entry::Recipe(Recipe {
        name: name.to_string(),
        required_items: items
            .iter()
            .map(|(item_name, quantity)| RequiredItem {
                name: item_name.to_string(),
                quantity: *quantity,
            })
            .collect(),
    })
}

fn cookbook_from(entries: Vec<Entry>) -> Cookbook {
    let mut cookbook = Cookbook::new();
    for entry in entries {
        cookbook.register(entry).unwrap();
    }
    cookbook
}

#[test]
fn single_level_recipe_sums_leaf_quantities() {
    let cookbook = cookbook_from(vec![
        recipe("Skibidi", &[("Bruh", 1)]),
        ingredient("Bruh", 2),
    ]);

    let summary = summarize(&cookbook, "Skibidi").unwrap();
    assert_eq!(summary.name, "Skibidi");
    assert_eq!(summary.cook_time, 2);
    assert_eq!(
        summary.ingredients,
        vec![IngredientTotal {
            name: "Bruh".to_string(),
            quantity: 1,
        }]
    );
}

#[test]
fn nested_recipes_multiply_quantities_along_the_path() {
    let cookbook = cookbook_from(vec![
        recipe("Outer", &[("Inner", 3)]),
        recipe("Inner", &[("Egg", 2)]),
        ingredient("Egg", 4),
    ]);

    let summary = summarize(&cookbook, "Outer").unwrap();
    assert_eq!(summary.cook_time, 24);
    assert_eq!(
        summary.ingredients,
        vec![IngredientTotal {
            name: "Egg".to_string(),
            quantity: 6,
        }]
    );
}

#[test]
fn deep_graph_resolves_to_exact_totals() {
    // Four recipes sharing sub-recipes across branches; totals are the sum
    // over all paths of the path-cumulative multiplier times leaf quantity.
    let cookbook = cookbook_from(vec![
        recipe(
            "Dish1",
            &[("Dish2", 3), ("Dish3", 2), ("Dish4", 2), ("Ing1", 1)],
        ),
        recipe("Dish2", &[("Dish3", 3), ("Dish4", 2), ("Ing2", 2)]),
        recipe("Dish3", &[("Dish4", 1), ("Ing3", 2)]),
        recipe("Dish4", &[("Ing1", 2), ("Ing2", 2)]),
        ingredient("Ing1", 5),
        ingredient("Ing2", 3),
        ingredient("Ing3", 0),
    ]);

    let summary = summarize(&cookbook, "Dish1").unwrap();
    assert_eq!(
        summary.ingredients,
        vec![
            IngredientTotal {
                name: "Ing1".to_string(),
                quantity: 39,
            },
            IngredientTotal {
                name: "Ing2".to_string(),
                quantity: 44,
            },
            IngredientTotal {
                name: "Ing3".to_string(),
                quantity: 22,
            },
        ]
    );
    // 39 * 5 + 44 * 3 + 22 * 0
    assert_eq!(summary.cook_time, 327);
}

#[test]
fn diamond_reuse_is_additive_not_cyclic() {
    // The same sub-recipe under two siblings is legal; its contributions add.
    let cookbook = cookbook_from(vec![
        recipe("Dish", &[("Left", 1), ("Right", 1)]),
        recipe("Left", &[("Base", 2)]),
        recipe("Right", &[("Base", 3)]),
        recipe("Base", &[("Flour", 2)]),
        ingredient("Flour", 1),
    ]);

    let summary = summarize(&cookbook, "Dish").unwrap();
    assert_eq!(
        summary.ingredients,
        vec![IngredientTotal {
            name: "Flour".to_string(),
            quantity: 10,
        }]
    );
    assert_eq!(summary.cook_time, 10);
}

#[test]
fn mutual_cycle_fails_from_either_root() {
    let cookbook = cookbook_from(vec![
        recipe("Abura Soba", &[("Soba", 1)]),
        recipe("Soba", &[("Abura Soba", 2)]),
    ]);

    assert!(matches!(
        summarize(&cookbook, "Abura Soba"),
        Err(SummaryError::CircularDependency(_))
    ));
    assert!(matches!(
        summarize(&cookbook, "Soba"),
        Err(SummaryError::CircularDependency(_))
    ));
}

#[test]
fn self_reference_fails() {
    let cookbook = cookbook_from(vec![recipe("Ouroboros", &[("Ouroboros", 1)])]);
    assert_eq!(
        summarize(&cookbook, "Ouroboros"),
        Err(SummaryError::CircularDependency("Ouroboros".to_string()))
    );
}

#[test]
fn missing_dependency_fails() {
    // Registration allowed the forward reference; resolution does not.
    let cookbook = cookbook_from(vec![recipe("Cheese", &[("Not Real", 1)])]);
    assert_eq!(
        summarize(&cookbook, "Cheese"),
        Err(SummaryError::MissingDependency("Not Real".to_string()))
    );
}

#[test]
fn missing_dependency_propagates_from_depth() {
    let cookbook = cookbook_from(vec![
        recipe("Top", &[("Middle", 1)]),
        recipe("Middle", &[("Bottom", 2)]),
        recipe("Bottom", &[("Ghost", 1)]),
    ]);
    assert_eq!(
        summarize(&cookbook, "Top"),
        Err(SummaryError::MissingDependency("Ghost".to_string()))
    );
}

#[test]
fn ingredient_root_fails() {
    let cookbook = cookbook_from(vec![ingredient("beef", 2)]);
    assert_eq!(
        summarize(&cookbook, "beef"),
        Err(SummaryError::NotARecipe("beef".to_string()))
    );
}

#[test]
fn unknown_root_fails() {
    let cookbook = Cookbook::new();
    assert_eq!(
        summarize(&cookbook, "nothing"),
        Err(SummaryError::NotFound("nothing".to_string()))
    );
}

#[test]
fn names_are_case_sensitive() {
    let cookbook = cookbook_from(vec![
        recipe("Stew", &[("beef", 1)]),
        ingredient("Beef", 5),
    ]);
    assert_eq!(
        summarize(&cookbook, "Stew"),
        Err(SummaryError::MissingDependency("beef".to_string()))
    );
}

#[test]
fn resolution_does_not_mutate_the_cookbook() {
    let cookbook = cookbook_from(vec![
        recipe("Skibidi", &[("Bruh", 1)]),
        ingredient("Bruh", 2),
    ]);
    summarize(&cookbook, "Skibidi").unwrap();
    summarize(&cookbook, "Skibidi").unwrap();
    assert_eq!(cookbook.len(), 2);
}
