use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Name contains no letters")]
    NoLetters,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntryError {
    #[error("Entry type must be \"ingredient\" or \"recipe\"")]
    InvalidType,

    #[error("Entry name must be a non-empty string")]
    InvalidName,

    #[error("Entry '{0}' already exists")]
    AlreadyExists(String),

    #[error("Cook time must be a non-negative integer")]
    InvalidCookTime,

    #[error("An ingredient cannot list required items")]
    UnexpectedRequiredItems,

    #[error("A recipe cannot have a cook time")]
    UnexpectedCookTime,

    #[error("A recipe must list at least one required item")]
    MissingRequiredItems,

    #[error("Every required item needs a non-empty name")]
    InvalidItemName,

    #[error("Quantity for '{0}' must be a positive integer")]
    InvalidQuantity(String),

    #[error("Required item '{0}' is listed more than once")]
    DuplicateRequiredItem(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SummaryError {
    #[error("No entry named '{0}'")]
    NotFound(String),

    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    #[error("Recipe requires '{0}', which is not in the cookbook")]
    MissingDependency(String),

    #[error("Recipe '{0}' transitively requires itself")]
    CircularDependency(String),
}
