//! Data models for ingested articles, clusters and the cluster report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawArticle`]: An article as delivered by the ingestion collaborator
//! - [`ArticleBatch`]: The batch document consumed by a clustering run
//! - [`ArticleCluster`]: A group of articles believed to concern the same event
//! - [`ClusterReport`]: The document handed to the downstream summarizer
//!
//! All models serialize with camelCase field names to match the JSON contract
//! shared with the ingestion and summarization collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// The three content categories an article can belong to.
///
/// `World` is the primary topic; `Economy` and `Technology` are the two
/// secondary topics with smaller quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    World,
    Economy,
    Technology,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::World => "world",
            Category::Economy => "economy",
            Category::Technology => "technology",
        };
        f.write_str(s)
    }
}

/// A news item as produced by the feed ingestion step.
///
/// Immutable once created; the clustering engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Stable identifier derived from URL and publication date.
    /// Filled by [`RawArticle::ensure_id`] when the feed leaves it blank.
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Feed snippet; frequently truncated by the publisher.
    #[serde(default)]
    pub description: String,
    /// Canonical article URL, also the exact-duplicate key.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publisher name (e.g. "Le Monde", "Reuters").
    pub source: String,
    pub category: Category,
    pub published_at: DateTime<Utc>,
    pub fetched_at: DateTime<Utc>,
}

impl RawArticle {
    /// Derive the identifier used when the feed did not supply one.
    ///
    /// The id is the xxh3 hash of `url|published_at` rendered as 16 hex digits,
    /// so the same item fetched twice gets the same id.
    pub fn derive_id(url: &str, published_at: &DateTime<Utc>) -> String {
        let seed = format!("{}|{}", url, published_at.to_rfc3339());
        format!("{:016x}", xxh3_64(seed.as_bytes()))
    }

    /// Fill in `id` when it is blank.
    pub fn ensure_id(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Self::derive_id(&self.url, &self.published_at);
        }
    }

    /// The text that is tokenized, tagged and filtered: title and description
    /// joined by a single separator.
    pub fn text(&self) -> String {
        format!("{} . {}", self.title, self.description)
    }

    /// Check the fields the clustering core relies on.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the article is missing text, a
    /// usable URL or a publisher name.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() && self.description.trim().is_empty() {
            return Err("title and description are both empty".to_string());
        }
        if self.url.trim().is_empty() {
            return Err("url is empty".to_string());
        }
        if let Err(e) = url::Url::parse(&self.url) {
            return Err(format!("url {:?} is not absolute: {}", self.url, e));
        }
        if self.source.trim().is_empty() {
            return Err("source is empty".to_string());
        }
        Ok(())
    }
}

/// The batch document written by the ingestion collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBatch {
    pub generated_at: DateTime<Utc>,
    /// Count advertised by the producer; only cross-checked, never trusted.
    pub article_count: usize,
    pub articles: Vec<RawArticle>,
}

/// A group of articles believed to concern the same event or topic.
///
/// `articles` keeps discovery order: the seed first, then absorbed members in
/// corpus order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCluster {
    /// Sequential within a run, starting at 1.
    pub id: usize,
    /// Seed title, truncated.
    pub topic: String,
    /// Seed category; first seen wins.
    pub category: Category,
    /// Integer in `1..=10`.
    pub importance: u8,
    pub articles: Vec<RawArticle>,
}

impl ArticleCluster {
    /// Number of distinct publishers contributing to this cluster.
    pub fn source_count(&self) -> usize {
        let mut sources: Vec<&str> = self.articles.iter().map(|a| a.source.as_str()).collect();
        sources.sort_unstable();
        sources.dedup();
        sources.len()
    }

    /// Whether at least two publishers reported this story.
    pub fn is_multi_source(&self) -> bool {
        self.source_count() >= 2
    }

    /// All member texts joined, used for cluster-level duplicate checks.
    pub fn combined_text(&self) -> String {
        self.articles
            .iter()
            .map(RawArticle::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The document produced for the downstream summarization step.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterReport {
    pub generated_at: DateTime<Utc>,
    pub cluster_count: usize,
    pub clusters: Vec<ArticleCluster>,
}

impl ClusterReport {
    pub fn new(generated_at: DateTime<Utc>, clusters: Vec<ArticleCluster>) -> Self {
        Self {
            generated_at,
            cluster_count: clusters.len(),
            clusters,
        }
    }
}
