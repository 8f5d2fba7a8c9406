pub mod catalog;
pub mod entry;
pub mod error;
pub mod name_parser;
pub mod summary;
pub mod validate;

pub use catalog::Cookbook;
pub use entry::{Entry, Ingredient, RawEntry, RawRequiredItem, Recipe, RequiredItem};
pub use error::{EntryError, ParseError, SummaryError};
pub use name_parser::parse_handwriting;
pub use summary::{summarize, IngredientTotal, RecipeSummary};
pub use validate::validate;
