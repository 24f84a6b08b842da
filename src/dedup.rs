//! Near-duplicate detection between clusters.
//!
//! A candidate is checked only against clusters already accepted into the
//! selection, so the visiting order decides which of two near-duplicates wins.

use crate::config::ClusterConfig;
use crate::models::ArticleCluster;
use crate::similarity::{cosine_similarity, entity_similarity};
use crate::text::{EntitySet, extract_entities, tokenize};
use crate::tfidf::vectorize;
use std::collections::BTreeSet;
use std::fmt;

/// Cluster-level features used by the duplicate checks.
#[derive(Debug, Clone)]
pub struct ClusterFingerprint {
    pub entities: EntitySet,
    pub urls: BTreeSet<String>,
    pub tokens: Vec<String>,
}

impl ClusterFingerprint {
    pub fn of(cluster: &ArticleCluster) -> Self {
        let text = cluster.combined_text();
        Self {
            entities: extract_entities(&text),
            urls: cluster.articles.iter().map(|a| a.url.clone()).collect(),
            tokens: tokenize(&text),
        }
    }
}

/// Why a candidate was judged a duplicate.
#[derive(Debug, Clone, PartialEq)]
pub enum DuplicateReason {
    SharedEntities(f64),
    SharedUrl(String),
    SimilarText(f64),
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateReason::SharedEntities(score) => write!(f, "entity overlap {score:.2}"),
            DuplicateReason::SharedUrl(url) => write!(f, "shared url {url}"),
            DuplicateReason::SimilarText(score) => write!(f, "text similarity {score:.2}"),
        }
    }
}

/// Compare a candidate against one accepted cluster.
///
/// The text check vectorizes just the two cluster texts against each other,
/// so terms common to both carry an idf of `ln(2/2) = 0`.
pub fn duplicate_reason(
    accepted: &ClusterFingerprint,
    candidate: &ClusterFingerprint,
    config: &ClusterConfig,
) -> Option<DuplicateReason> {
    let entity_score = entity_similarity(&accepted.entities, &candidate.entities);
    if entity_score >= config.duplicate_entity_threshold {
        return Some(DuplicateReason::SharedEntities(entity_score));
    }

    if let Some(url) = accepted.urls.intersection(&candidate.urls).next() {
        return Some(DuplicateReason::SharedUrl(url.clone()));
    }

    // Shared terms weigh ln(2/2) = 0 in a two-document corpus, so the cosine is
    // 0 and this branch only fires with a duplicate_text_threshold of 0.
    let pair = [accepted.tokens.clone(), candidate.tokens.clone()];
    let vectors = vectorize(&pair);
    let text_score = cosine_similarity(&vectors[0], &vectors[1]);
    if text_score >= config.duplicate_text_threshold {
        return Some(DuplicateReason::SimilarText(text_score));
    }

    None
}

/// First accepted cluster `candidate` duplicates, with the reason.
pub fn find_duplicate<'a>(
    accepted: impl IntoIterator<Item = (usize, &'a ClusterFingerprint)>,
    candidate: &ClusterFingerprint,
    config: &ClusterConfig,
) -> Option<(usize, DuplicateReason)> {
    accepted
        .into_iter()
        .find_map(|(idx, fp)| duplicate_reason(fp, candidate, config).map(|r| (idx, r)))
}
