//! Text analysis for article titles and snippets.
//!
//! # Submodules
//!
//! - [`tokenizer`]: accent-insensitive tokenization with bilingual stop-words
//! - [`entities`]: substring tagging against a static geopolitical entity table
//! - [`filter`]: sports and entertainment exclusion
//!
//! All three are pure functions over compiled-in keyword tables.

pub mod entities;
pub mod filter;
pub mod tokenizer;

pub use entities::{EntitySet, extract_entities};
pub use filter::is_excluded;
pub use tokenizer::tokenize;

/// Lowercase `text`, turn punctuation other than hyphens into spaces and pad
/// both ends, so keywords written as `" otan "` only match whole words
/// ("l'OTAN" yes, "botany" no) while hyphenated aliases keep working.
pub(crate) fn keyword_haystack(text: &str) -> String {
    let mut haystack = String::with_capacity(text.len() + 2);
    haystack.push(' ');
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' {
            haystack.push(c);
        } else {
            haystack.push(' ');
        }
    }
    haystack.push(' ');
    haystack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_haystack() {
        assert_eq!(keyword_haystack("l'OTAN, Royaume-Uni!"), " l otan  royaume-uni  ");
        assert_eq!(keyword_haystack(""), "  ");
    }
}
