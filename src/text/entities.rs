//! Geopolitical entity tagging.
//!
//! Each canonical entity key owns a list of lowercase surface forms: country
//! names in French and English, capitals, leaders and common abbreviations.
//! Matching is substring search over the lowercased text so multi-word aliases
//! ("maison blanche") match without tokenization. Partial-word hits ("iran"
//! inside "iranien") are accepted. Short aliases that sit inside frequent words
//! ("russe" in "brussels", "nato" in "senator") carry surrounding spaces and
//! match whole words only.

use super::keyword_haystack;
use std::collections::BTreeSet;

/// Canonical entity keys found in one text.
pub type EntitySet = BTreeSet<&'static str>;

pub(crate) const ENTITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("ukraine", &["ukraine", "ukrainien", "ukrainian", "kyiv", "kiev", "zelensky", "zelenskyy", "donbass", "donbas"]),
    ("russia", &["russie", "russia", " russe", "russian", "moscou", "moscow", "kremlin", "poutine", "putin"]),
    ("usa", &["etats-unis", "états-unis", "united states", "washington", "maison blanche", "white house", " trump", "biden", "pentagon"]),
    ("china", &[" chine", "china", "chinois", "chinese", "pékin", "pekin", "beijing", "xi jinping"]),
    ("taiwan", &["taïwan", "taiwan", "taipei"]),
    ("israel", &["israël", "israel", "tel aviv", "jérusalem", "jerusalem", "netanyahou", "netanyahu", "tsahal"]),
    ("palestine", &["palestin", "gaza", "cisjordanie", "west bank", "hamas"]),
    ("lebanon", &["liban", "lebanon", "beyrouth", "beirut", "hezbollah"]),
    ("iran", &[" iran", "téhéran", "teheran", "tehran", "khamenei"]),
    ("syria", &["syrie", "syria", "damas", "damascus"]),
    ("turkey", &["turquie", "turkey", "türkiye", "ankara", "erdogan", "erdoğan"]),
    ("france", &["france", "français", "french", " paris", "élysée", "elysee", "macron", "matignon"]),
    ("germany", &["allemagne", "germany", "allemand", "german", "berlin", " merz ", "scholz", "bundestag"]),
    ("uk", &["royaume-uni", "united kingdom", "britain", "britannique", "british", "londres", "london", "starmer", "downing street"]),
    ("eu", &["union européenne", "union europeenne", "european union", "bruxelles", "brussels", "commission européenne", "european commission", "von der leyen"]),
    ("nato", &[" otan ", " nato "]),
    ("un", &[" onu ", "nations unies", "united nations", "conseil de sécurité", "security council", "guterres"]),
    ("india", &[" inde ", "india", "indien", "indian", "new delhi", " modi "]),
    ("pakistan", &["pakistan", "islamabad"]),
    ("north_korea", &["corée du nord", "coree du nord", "north korea", "pyongyang", "kim jong"]),
    ("japan", &["japon", "japan", "tokyo"]),
    ("venezuela", &["venezuela", "caracas", "maduro"]),
];

/// Collect every entity whose aliases appear in `text`.
pub fn extract_entities(text: &str) -> EntitySet {
    let haystack = keyword_haystack(text);
    ENTITY_KEYWORDS
        .iter()
        .filter(|(_, aliases)| aliases.iter().any(|alias| haystack.contains(alias)))
        .map(|(key, _)| *key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_maps_to_canonical_key() {
        let kyiv = extract_entities("Explosions reported in Kyiv overnight");
        let zelensky = extract_entities("Zelensky addresses parliament");
        assert_eq!(kyiv, EntitySet::from(["ukraine"]));
        assert_eq!(zelensky, EntitySet::from(["ukraine"]));
    }

    #[test]
    fn test_multiple_entities_and_multi_word_alias() {
        let found = extract_entities("La Maison Blanche et le Kremlin discutent de l'OTAN");
        assert_eq!(found, EntitySet::from(["nato", "russia", "usa"]));
    }

    #[test]
    fn test_case_insensitive_with_accents() {
        let found = extract_entities("TÉHÉRAN menace ISRAËL");
        assert!(found.contains("iran"));
        assert!(found.contains("israel"));
    }

    #[test]
    fn test_partial_word_match_is_accepted() {
        assert!(extract_entities("le gouvernement iranien").contains("iran"));
    }

    #[test]
    fn test_short_aliases_need_whole_words() {
        assert_eq!(
            extract_entities("EU leaders gather in Brussels for a budget summit"),
            EntitySet::from(["eu"])
        );
        assert!(extract_entities("Scotland independence referendum").is_empty());
        assert!(extract_entities("Bankers bonus cap lifted").is_empty());
        assert!(extract_entities("Lawmakers modify the comparison tables").is_empty());
        assert!(extract_entities("A senator praises machine tools at Commerzbank").is_empty());
    }

    #[test]
    fn test_whole_word_aliases_still_match() {
        assert_eq!(extract_entities("Modi's visit"), EntitySet::from(["india"]));
        assert_eq!(extract_entities("L'ONU condamne"), EntitySet::from(["un"]));
        assert_eq!(extract_entities("Les forces russes avancent"), EntitySet::from(["russia"]));
        assert_eq!(extract_entities("NATO summit"), EntitySet::from(["nato"]));
    }

    #[test]
    fn test_no_entities() {
        assert!(extract_entities("A quiet day for the local bakery").is_empty());
    }
}
