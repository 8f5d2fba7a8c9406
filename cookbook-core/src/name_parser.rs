//! Handwritten-name parsing module.
//!
//! Cleans noisy recipe names (e.g. "Riz@z RISO00tto!") into title-cased
//! display names.

use crate::error::ParseError;

/// Parse a handwritten name into a clean display name.
///
/// Hyphens and underscores act as word separators; every other non-letter
/// character is dropped in place. Each surviving word is title-cased and the
/// words are joined with single spaces. Fails if no letters survive.
pub fn parse_handwriting(raw: &str) -> Result<String, ParseError> {
    // Step 1: Hyphens and underscores separate words.
    let spaced = raw.replace(['-', '_'], " ");

    // Step 2: Drop everything that is neither a letter nor a space.
    let cleaned: String = spaced
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    // Step 3: Title-case each word. Splitting on whitespace squashes runs
    // of separators down to a single space.
    let words: Vec<String> = cleaned.split_whitespace().map(title_case).collect();

    if words.is_empty() {
        return Err(ParseError::NoLetters);
    }

    Ok(words.join(" "))
}

/// Uppercase the first letter, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
