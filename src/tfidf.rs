//! TF-IDF vectors over one in-memory corpus.
//!
//! Document frequency is computed from per-document term *sets*; weights are
//! `tf × ln(N / df)`. Nothing is persisted: every run builds its own
//! vocabulary, so a term present in every document always weighs zero.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse term weights for one document. Absent terms weigh zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    weights: BTreeMap<String, f64>,
}

impl TfIdfVector {
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, w)| (term.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// Build one vector per token sequence, in corpus order.
pub fn vectorize<S: AsRef<str>>(corpus: &[Vec<S>]) -> Vec<TfIdfVector> {
    let n = corpus.len() as f64;

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in corpus {
        let unique: BTreeSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
        for term in unique {
            *document_frequency.entry(term).or_default() += 1;
        }
    }

    corpus
        .iter()
        .map(|tokens| {
            let mut term_frequency: BTreeMap<&str, usize> = BTreeMap::new();
            for token in tokens {
                *term_frequency.entry(token.as_ref()).or_default() += 1;
            }
            let weights = term_frequency
                .into_iter()
                .map(|(term, tf)| {
                    let df = document_frequency[term] as f64;
                    (term.to_string(), tf as f64 * (n / df).ln())
                })
                .collect();
            TfIdfVector { weights }
        })
        .collect()
}
