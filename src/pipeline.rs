//! One clustering run over an in-memory batch.
//!
//! Stages, in order: validate, collapse exact URL duplicates, drop excluded
//! content, tokenize and tag entities, vectorize, cluster, select. The run is
//! synchronous and rebuilds every vocabulary and vector from scratch.

use crate::cluster::{Document, build_clusters};
use crate::config::ClusterConfig;
use crate::error::ClusterError;
use crate::models::{ArticleBatch, ClusterReport, RawArticle};
use crate::select::select_clusters;
use crate::text::{extract_entities, is_excluded, tokenize};
use crate::tfidf::vectorize;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Cluster `batch` and select the clusters for downstream summarization.
///
/// `now` stamps the report and anchors the recency bonus of importance.
///
/// # Errors
///
/// Fails with [`ClusterError::InvalidArticle`] on the first article that does
/// not pass validation. An empty corpus, before or after filtering, yields an
/// empty report instead.
#[instrument(level = "info", skip_all, fields(articles = batch.articles.len()))]
pub fn run(
    batch: ArticleBatch,
    config: &ClusterConfig,
    now: DateTime<Utc>,
) -> Result<ClusterReport, ClusterError> {
    for (index, article) in batch.articles.iter().enumerate() {
        article
            .validate()
            .map_err(|reason| ClusterError::InvalidArticle { index, reason })?;
    }

    let received = batch.articles.len();
    let unique: Vec<RawArticle> = batch
        .articles
        .into_iter()
        .unique_by(|a| a.url.clone())
        .collect();
    let url_duplicates = received - unique.len();

    let kept: Vec<RawArticle> = unique
        .into_iter()
        .filter(|a| {
            let excluded = is_excluded(&a.text());
            if excluded {
                debug!(url = %a.url, title = %a.title, "Excluded by content filter");
            }
            !excluded
        })
        .collect();
    info!(
        received,
        url_duplicates,
        excluded = received - url_duplicates - kept.len(),
        kept = kept.len(),
        "Corpus prepared"
    );

    let corpus: Vec<Vec<String>> = kept.iter().map(|a| tokenize(&a.text())).collect();
    let degenerate = corpus.iter().filter(|tokens| tokens.is_empty()).count();
    if degenerate > 0 {
        debug!(degenerate, "Documents without content words");
    }

    let documents: Vec<Document<'_>> = vectorize(&corpus)
        .into_iter()
        .zip(&kept)
        .map(|(vector, article)| Document {
            article,
            vector,
            entities: extract_entities(&article.text()),
        })
        .collect();

    let clusters = build_clusters(
        &documents,
        config.similarity_threshold,
        config.topic_max_chars,
        now,
    );
    let selected = select_clusters(clusters, config);

    Ok(ClusterReport::new(now, selected))
}
