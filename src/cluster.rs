//! Greedy, seed-only clustering and cluster importance.
//!
//! Documents are visited in corpus order. Each unassigned document seeds a new
//! cluster and absorbs every *later* unassigned document whose combined
//! similarity to the seed exceeds the threshold. Members are compared to the
//! seed only, never to each other, so two members of one cluster may be
//! dissimilar. Replacing this with transitive or agglomerative clustering
//! changes membership.
//!
//! The pass is O(n²) in the number of documents. Batches hold tens to low
//! hundreds of articles, which keeps that affordable; larger batches would need
//! a different approach with different results.

use crate::models::{ArticleCluster, RawArticle};
use crate::similarity::combined_similarity;
use crate::text::EntitySet;
use crate::tfidf::TfIdfVector;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument};

/// One filtered article with its derived features.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub article: &'a RawArticle,
    pub vector: TfIdfVector,
    pub entities: EntitySet,
}

pub const MIN_IMPORTANCE: u8 = 1;
pub const MAX_IMPORTANCE: u8 = 10;

/// Partition `documents` into clusters.
///
/// Every document ends up in exactly one cluster. Cluster ids run from 1 in
/// creation order.
#[instrument(level = "info", skip_all, fields(documents = documents.len(), threshold = threshold))]
pub fn build_clusters(
    documents: &[Document<'_>],
    threshold: f64,
    topic_max_chars: usize,
    now: DateTime<Utc>,
) -> Vec<ArticleCluster> {
    let mut assigned = vec![false; documents.len()];
    let mut clusters = Vec::new();

    for seed_idx in 0..documents.len() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        let seed = &documents[seed_idx];
        let mut members = vec![seed_idx];

        for other_idx in (seed_idx + 1)..documents.len() {
            if assigned[other_idx] {
                continue;
            }
            let other = &documents[other_idx];
            let score =
                combined_similarity(&seed.vector, &seed.entities, &other.vector, &other.entities);
            if score > threshold {
                debug!(seed = seed_idx, member = other_idx, score, "Absorbed into cluster");
                assigned[other_idx] = true;
                members.push(other_idx);
            }
        }

        let articles: Vec<RawArticle> = members
            .iter()
            .map(|&idx| documents[idx].article.clone())
            .collect();
        clusters.push(new_cluster(clusters.len() + 1, articles, topic_max_chars, now));
    }

    let largest = clusters.iter().map(|c| c.articles.len()).max().unwrap_or(0);
    info!(clusters = clusters.len(), largest, "Clustering complete");
    clusters
}

fn new_cluster(
    id: usize,
    articles: Vec<RawArticle>,
    topic_max_chars: usize,
    now: DateTime<Utc>,
) -> ArticleCluster {
    let seed = &articles[0];
    let topic = topic_label(&seed.title, topic_max_chars);
    let category = seed.category;

    let mut cluster = ArticleCluster {
        id,
        topic,
        category,
        importance: MIN_IMPORTANCE,
        articles,
    };

    let newest_age = cluster
        .articles
        .iter()
        .map(|a| a.published_at)
        .max()
        .map(|newest| now - newest);
    cluster.importance = importance(cluster.articles.len(), cluster.source_count(), newest_age);
    cluster
}

/// Importance on a 1–10 scale.
///
/// `1.5 × articles + 3 × sources`, plus 2 when the newest article is under six
/// hours old or 1 when under twelve, rounded and clamped.
pub fn importance(article_count: usize, source_count: usize, newest_age: Option<Duration>) -> u8 {
    let mut score = 1.5 * article_count as f64 + 3.0 * source_count as f64;
    match newest_age {
        Some(age) if age < Duration::hours(6) => score += 2.0,
        Some(age) if age < Duration::hours(12) => score += 1.0,
        _ => {}
    }
    score
        .round()
        .clamp(f64::from(MIN_IMPORTANCE), f64::from(MAX_IMPORTANCE)) as u8
}

/// First `max_chars` characters of `title`.
pub fn topic_label(title: &str, max_chars: usize) -> String {
    title.trim().chars().take(max_chars).collect()
}
