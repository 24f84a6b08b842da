//! Tokenization of article text into content words.
//!
//! The pipeline is: lowercase, NFD-decompose and drop combining marks (so
//! "Sécurité" and "securite" tokenize identically), replace every
//! non-alphanumeric run with a space, split, then drop short tokens and
//! French/English stop-words.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Tokens of this many characters or fewer are discarded.
const MIN_TOKEN_CHARS: usize = 2;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static regex is valid"));

/// Stop-words are stored accent-stripped, matching tokenizer output.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    FRENCH_STOP_WORDS
        .iter()
        .chain(ENGLISH_STOP_WORDS.iter())
        .copied()
        .collect()
});

const FRENCH_STOP_WORDS: &[&str] = &[
    "les", "des", "une", "est", "pour", "que", "qui", "dans", "par", "sur", "pas", "plus",
    "avec", "son", "ses", "aux", "ont", "ete", "etre", "mais", "ils", "elle", "elles", "leur",
    "leurs", "sont", "cette", "ces", "cet", "comme", "tout", "tous", "toute", "toutes", "fait",
    "faire", "sans", "entre", "apres", "avant", "selon", "depuis", "lors", "alors", "aussi",
    "encore", "deja", "tres", "bien", "peu", "dont", "quand", "nous", "vous", "notre", "votre",
    "nos", "vos", "lui", "meme", "autre", "autres", "avoir", "avait", "sera", "seront",
    "etait", "etaient", "ainsi", "contre", "sous", "vers", "chez", "car", "donc", "puis",
    "quel", "quelle", "quels", "quelles", "celui", "celle", "ceux", "celles", "ici",
    "jour", "ans", "annee", "fois", "doit", "peut", "pourrait", "veut", "dit",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "that", "with", "this", "from", "are", "was", "were", "has", "have",
    "had", "been", "will", "would", "could", "should", "its", "their", "they", "them", "his",
    "her", "she", "him", "who", "what", "which", "when", "where", "why", "how", "not", "but",
    "all", "any", "can", "more", "most", "other", "some", "such", "than", "then", "there",
    "these", "those", "into", "over", "after", "before", "about", "also", "just", "only",
    "our", "out", "said", "says", "new", "one", "two", "you", "your", "amid", "while",
    "being", "does", "did", "may", "might", "must", "per", "via", "yet", "upon",
];

/// Split `text` into normalized content words.
///
/// Deterministic and idempotent: re-tokenizing the space-joined output yields
/// the same sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    NON_ALPHANUMERIC
        .replace_all(&folded, " ")
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .filter(|token| !STOP_WORDS.contains(*token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_punctuation() {
        assert_eq!(
            tokenize("Sécurité: l'Élysée répond à Zelensky!"),
            vec!["securite", "elysee", "repond", "zelensky"]
        );
    }

    #[test]
    fn test_drops_short_tokens_and_stop_words() {
        assert_eq!(
            tokenize("The EU and the UN are in talks for a deal"),
            vec!["talks", "deal"]
        );
        assert_eq!(
            tokenize("Les ministres sont dans la salle"),
            vec!["ministres", "salle"]
        );
    }

    #[test]
    fn test_keeps_numbers() {
        assert_eq!(tokenize("Budget 2025: +300 millions"), vec!["budget", "2025", "300", "millions"]);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let text = "Guerre en Ukraine : Kyiv frappée par des drones, l’OTAN réagit.";
        let first = tokenize(text);
        assert_eq!(first, tokenize(text));
        assert_eq!(tokenize(&first.join(" ")), first);
    }

    #[test]
    fn test_all_stop_words_yields_nothing() {
        assert!(tokenize("the and for les des une").is_empty());
        assert!(tokenize("").is_empty());
    }
}
