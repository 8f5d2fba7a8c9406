use serde::{Deserialize, Serialize};

/// A single item a recipe depends on, and how many of it are needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A validated cookbook entry. Ingredients and recipes share one namespace,
/// so the two kinds can never carry the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }
}

/// An unvalidated submission as it arrives off the wire.
///
/// Every field is optional so that malformed payloads reach the validator
/// and come back as a validation error, rather than failing inside the JSON
/// extractor with a different status code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    /// Either "ingredient" or "recipe"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub cook_time: Option<i64>,
    pub required_items: Option<Vec<RawRequiredItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequiredItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}
