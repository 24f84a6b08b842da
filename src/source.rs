//! Ingestion seam: where article batches come from.
//!
//! Feed fetching lives in a separate collaborator; this crate only reads the
//! batch it produces. [`ArticleSource`] keeps that boundary swappable, and
//! [`JsonFileSource`] reads the batch document from disk.

use crate::error::ClusterError;
use crate::models::ArticleBatch;
use crate::utils::truncate_for_log;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Something that can hand over one batch of articles.
pub trait ArticleSource {
    /// Load the batch. A missing or unparsable batch is fatal for the run.
    async fn load(&self) -> Result<ArticleBatch, ClusterError>;
}

/// Reads an [`ArticleBatch`] JSON document from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for JsonFileSource {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    async fn load(&self) -> Result<ArticleBatch, ClusterError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|source| ClusterError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(bytes = raw.len(), preview = %truncate_for_log(&raw, 200), "Read article batch");

        let mut batch: ArticleBatch =
            serde_json::from_str(&raw).map_err(|source| ClusterError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if batch.article_count != batch.articles.len() {
            warn!(
                advertised = batch.article_count,
                actual = batch.articles.len(),
                "articleCount does not match the number of articles"
            );
        }
        for article in &mut batch.articles {
            article.ensure_id();
        }

        info!(
            articles = batch.articles.len(),
            generated_at = %batch.generated_at,
            "Loaded article batch"
        );
        Ok(batch)
    }
}
