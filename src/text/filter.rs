//! Sports and entertainment exclusion.
//!
//! A single hit never excludes an article: "league" in "Arab League" or a team
//! sharing its name with a country must not drop a geopolitical story. Letting
//! some off-topic content through is the preferred failure mode.

use super::keyword_haystack;
use tracing::trace;

/// Distinct keyword hits required before an article is excluded.
pub const MIN_EXCLUDED_MATCHES: usize = 2;

/// Keywords with surrounding spaces match whole words only; see
/// [`keyword_haystack`]. Everyday words that merely contain a sports term
/// ("concerted", "key player", "basket of goods", "mismatch", "colleague")
/// must never count.
pub(crate) const EXCLUDED_KEYWORDS: &[&str] = &[
    "football", "soccer", "basketball", "tennis", "rugby", "cyclisme", "formule 1",
    "formula 1", "olympi", "coupe du monde", "world cup", " ligue 1", " league ", " leagues ",
    "championnat", "championship", "tournoi", "tournament", " match ", " matches ",
    "joueur", "joueuse", "entraîneur", " coach ", " stade ", "stadium", " buteur",
    "cinéma", "cinema", "box-office", "box office", "hollywood", "netflix",
    "festival de cannes", "oscars", "grammy", " album ", "en concert", "chanteur",
    "chanteuse", "singer", "célébrité", "celebrity", "téléréalité", "reality show",
];

/// Count distinct excluded keywords occurring in `text`, case-insensitively.
pub fn excluded_matches(text: &str) -> usize {
    let haystack = keyword_haystack(text);
    EXCLUDED_KEYWORDS
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count()
}

/// Whether `text` reads as sports or entertainment coverage.
pub fn is_excluded(text: &str) -> bool {
    let matches = excluded_matches(text);
    if matches > 0 {
        trace!(matches, "Excluded keywords found");
    }
    matches >= MIN_EXCLUDED_MATCHES
}
