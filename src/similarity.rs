//! Document similarity: TF-IDF cosine blended with entity Jaccard.
//!
//! The blend weights are empirically tuned and kept as fixed constants.

use crate::text::EntitySet;
use crate::tfidf::TfIdfVector;

/// Entity Jaccard at or above which entity agreement may override text.
pub const ENTITY_OVERRIDE_THRESHOLD: f64 = 0.5;
pub const ENTITY_OVERRIDE_WEIGHT: f64 = 0.8;
pub const TEXT_WEIGHT: f64 = 0.6;
pub const ENTITY_WEIGHT: f64 = 0.4;

/// Cosine of the angle between two TF-IDF vectors.
///
/// Returns exactly `0.0` when either vector has zero norm, so documents left
/// without tokens never divide by zero.
pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .map(|(term, w)| w * large.weight(term))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Jaccard index of two entity sets; `0.0` if either is empty.
pub fn entity_similarity(a: &EntitySet, b: &EntitySet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Blend text and entity similarity.
///
/// Strong entity overlap can lift a weak lexical match up to
/// `0.8 × entity`; otherwise the two signals are mixed 60/40.
pub fn combine(text: f64, entity: f64) -> f64 {
    if entity >= ENTITY_OVERRIDE_THRESHOLD {
        text.max(ENTITY_OVERRIDE_WEIGHT * entity)
    } else {
        TEXT_WEIGHT * text + ENTITY_WEIGHT * entity
    }
}

/// Combined similarity of two documents.
pub fn combined_similarity(
    vector_a: &TfIdfVector,
    entities_a: &EntitySet,
    vector_b: &TfIdfVector,
    entities_b: &EntitySet,
) -> f64 {
    combine(
        cosine_similarity(vector_a, vector_b),
        entity_similarity(entities_a, entities_b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{extract_entities, tokenize};
    use crate::tfidf::vectorize;

    fn vectors(texts: &[&str]) -> Vec<TfIdfVector> {
        let corpus: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
        vectorize(&corpus)
    }

    #[test]
    fn test_cosine_self_is_one() {
        let v = vectors(&["drones strike power grid", "parliament passes budget"]);
        assert!((cosine_similarity(&v[0], &v[0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_bounds() {
        let v = vectors(&[
            "drones strike power grid overnight",
            "power grid repaired after drones",
            "parliament passes budget",
            "budget talks stall in parliament grid",
        ]);
        for a in &v {
            for b in &v {
                let s = cosine_similarity(a, b);
                assert!((0.0..=1.0).contains(&s), "out of range: {s}");
            }
        }
    }

    #[test]
    fn test_cosine_with_empty_vector_is_zero() {
        let v = vectors(&["the and for", "drones strike power grid"]);
        assert!(v[0].is_empty());
        assert_eq!(cosine_similarity(&v[0], &v[1]), 0.0);
        assert_eq!(cosine_similarity(&v[0], &v[0]), 0.0);
    }

    #[test]
    fn test_entity_similarity() {
        let a = EntitySet::from(["ukraine", "russia"]);
        let b = EntitySet::from(["ukraine"]);
        assert_eq!(entity_similarity(&a, &b), 0.5);
        assert_eq!(entity_similarity(&a, &EntitySet::new()), 0.0);
        assert_eq!(entity_similarity(&EntitySet::new(), &EntitySet::new()), 0.0);
    }

    #[test]
    fn test_combine_branches() {
        // strong entity overlap overrides a weak text match
        assert!((combine(0.1, 1.0) - 0.8).abs() < 1e-12);
        // but never lowers a stronger text match
        assert!((combine(0.9, 1.0) - 0.9).abs() < 1e-12);
        // weak entity overlap is blended
        assert!((combine(0.5, 0.25) - (0.3 + 0.1)).abs() < 1e-12);
        assert_eq!(combine(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_entity_override_without_shared_tokens() {
        let texts = [
            "Explosions rock Kyiv overnight",
            "Zelensky meets allies for talks",
            "Parliament passes farm budget",
        ];
        let v = vectors(&texts);
        let e: Vec<EntitySet> = texts.iter().map(|t| extract_entities(t)).collect();

        assert_eq!(cosine_similarity(&v[0], &v[1]), 0.0);
        let score = combined_similarity(&v[0], &e[0], &v[1], &e[1]);
        assert!(score >= 0.8 - 1e-12, "score was {score}");
    }
}
