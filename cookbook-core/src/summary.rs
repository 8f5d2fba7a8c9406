//! Recipe summary resolution.
//!
//! Expands a recipe's dependency graph into the total quantity of every base
//! ingredient it transitively requires, plus the aggregate cook time.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Cookbook;
use crate::entry::{Entry, Recipe};
use crate::error::SummaryError;

/// Total quantity of one base ingredient across the whole expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: u64,
}

/// The flattened cost of cooking a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientTotal>,
}

/// Resolve a recipe into its base-ingredient totals.
///
/// The root must name a recipe: summarizing an ingredient or an unknown name
/// fails. Any missing reference or cycle anywhere in the expansion aborts
/// the whole resolution; there are no partial results. The cookbook is never
/// mutated.
pub fn summarize(cookbook: &Cookbook, root: &str) -> Result<RecipeSummary, SummaryError> {
    let recipe = match cookbook.lookup(root) {
        None => return Err(SummaryError::NotFound(root.to_string())),
        Some(Entry::Ingredient(_)) => return Err(SummaryError::NotARecipe(root.to_string())),
        Some(Entry::Recipe(recipe)) => recipe,
    };

    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    let mut cook_time: u64 = 0;
    let mut path: HashSet<String> = HashSet::new();
    path.insert(recipe.name.clone());

    expand(cookbook, recipe, 1, &mut totals, &mut cook_time, &mut path)?;

    Ok(RecipeSummary {
        name: recipe.name.clone(),
        cook_time,
        ingredients: totals
            .into_iter()
            .map(|(name, quantity)| IngredientTotal { name, quantity })
            .collect(),
    })
}

/// Walk one recipe's required items, scaling each by the quantity multiplier
/// accumulated along the path from the root.
fn expand(
    cookbook: &Cookbook,
    recipe: &Recipe,
    multiplier: u64,
    totals: &mut BTreeMap<String, u64>,
    cook_time: &mut u64,
    path: &mut HashSet<String>,
) -> Result<(), SummaryError> {
    for item in &recipe.required_items {
        let scaled = item.quantity * multiplier;
        match cookbook.lookup(&item.name) {
            None => return Err(SummaryError::MissingDependency(item.name.clone())),
            Some(Entry::Ingredient(ingredient)) => {
                *totals.entry(ingredient.name.clone()).or_insert(0) += scaled;
                *cook_time += scaled * ingredient.cook_time;
            }
            Some(Entry::Recipe(sub)) => {
                // Only names on the live expansion path count as cycles; a
                // sub-recipe reused across sibling branches just adds up.
                if !path.insert(sub.name.clone()) {
                    return Err(SummaryError::CircularDependency(sub.name.clone()));
                }
                expand(cookbook, sub, scaled, totals, cook_time, path)?;
                path.remove(&sub.name);
            }
        }
    }
    Ok(())
}
