//! Entry validation.
//!
//! Every shape and semantic rule for incoming submissions lives here; the
//! cookbook itself only enforces name uniqueness. References to other
//! entries are deliberately not checked — forward references are legal at
//! registration time and only resolved when a summary is requested.

use std::collections::HashSet;

use crate::catalog::Cookbook;
use crate::entry::{Entry, Ingredient, RawEntry, Recipe, RequiredItem};
use crate::error::EntryError;

/// Validate a raw submission into a cookbook entry.
///
/// The cookbook is consulted for the name-collision check only; nothing is
/// inserted here. Callers register the returned entry while still holding
/// whatever lock guards the cookbook, so the check and the insert stay one
/// atomic step.
pub fn validate(raw: RawEntry, cookbook: &Cookbook) -> Result<Entry, EntryError> {
    let name = match raw.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(EntryError::InvalidName),
    };

    if cookbook.contains(&name) {
        return Err(EntryError::AlreadyExists(name));
    }

    match raw.kind.as_deref() {
        Some("ingredient") => {
            if raw.required_items.is_some() {
                return Err(EntryError::UnexpectedRequiredItems);
            }
            let cook_time = match raw.cook_time {
                Some(t) if t >= 0 => t as u64,
                _ => return Err(EntryError::InvalidCookTime),
            };
            Ok(Entry::Ingredient(Ingredient { name, cook_time }))
        }
        Some("recipe") => {
            if raw.cook_time.is_some() {
                return Err(EntryError::UnexpectedCookTime);
            }
            let raw_items = match raw.required_items {
                Some(items) if !items.is_empty() => items,
                _ => return Err(EntryError::MissingRequiredItems),
            };

            let mut seen: HashSet<String> = HashSet::new();
            let mut required_items = Vec::with_capacity(raw_items.len());
            for item in raw_items {
                let item_name = match item.name {
                    Some(n) if !n.is_empty() => n,
                    _ => return Err(EntryError::InvalidItemName),
                };
                let quantity = match item.quantity {
                    Some(q) if q >= 1 => q as u64,
                    _ => return Err(EntryError::InvalidQuantity(item_name)),
                };
                if !seen.insert(item_name.clone()) {
                    return Err(EntryError::DuplicateRequiredItem(item_name));
                }
                required_items.push(RequiredItem {
                    name: item_name,
                    quantity,
                });
            }
            Ok(Entry::Recipe(Recipe {
                name,
                required_items,
            }))
        }
        _ => Err(EntryError::InvalidType),
    }
}
