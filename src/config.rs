//! Run configuration.
//!
//! The defaults are the tuned constants of the clustering engine. A YAML file
//! may override any subset of them; keyword tables are compiled in and live in
//! [`crate::text`].
//!
//! ```yaml
//! similarity_threshold: 0.2
//! target_total: 6
//! quotas:
//!   - { category: world, count: 4 }
//!   - { category: economy, count: 1 }
//!   - { category: technology, count: 1 }
//! ```

use crate::error::ClusterError;
use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Per-category slot count. Quotas are visited in list order, which decides
/// which of two near-duplicate clusters wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quota {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// A document joins a seed's cluster when combined similarity exceeds this.
    pub similarity_threshold: f64,
    /// Clusters handed downstream.
    pub target_total: usize,
    pub quotas: Vec<Quota>,
    /// Character limit of a cluster's topic label.
    pub topic_max_chars: usize,
    /// Entity Jaccard at or above which two clusters are duplicates.
    pub duplicate_entity_threshold: f64,
    /// Pairwise TF-IDF cosine at or above which two clusters are duplicates.
    pub duplicate_text_threshold: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.20,
            target_total: 6,
            quotas: vec![
                Quota { category: Category::World, count: 4 },
                Quota { category: Category::Economy, count: 1 },
                Quota { category: Category::Technology, count: 1 },
            ],
            topic_max_chars: 80,
            duplicate_entity_threshold: 0.5,
            duplicate_text_threshold: 0.25,
        }
    }
}

impl ClusterConfig {
    /// Parse a YAML document, falling back to defaults for missing fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ClusterError> {
        let config: ClusterConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the optional override file; `None` yields the defaults.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&Path>) -> Result<Self, ClusterError> {
        let Some(path) = path else {
            info!("No config file given; using built-in defaults");
            return Ok(Self::default());
        };
        let yaml = fs::read_to_string(path).await.map_err(|source| ClusterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            threshold = config.similarity_threshold,
            target_total = config.target_total,
            quotas = config.quotas.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        for (name, value) in [
            ("similarity_threshold", self.similarity_threshold),
            ("duplicate_entity_threshold", self.duplicate_entity_threshold),
            ("duplicate_text_threshold", self.duplicate_text_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ClusterError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.target_total == 0 {
            return Err(ClusterError::Config("target_total must be positive".to_string()));
        }
        if self.topic_max_chars == 0 {
            return Err(ClusterError::Config("topic_max_chars must be positive".to_string()));
        }
        for (i, quota) in self.quotas.iter().enumerate() {
            if self.quotas[..i].iter().any(|q| q.category == quota.category) {
                return Err(ClusterError::Config(format!(
                    "category {} appears twice in quotas",
                    quota.category
                )));
            }
        }
        Ok(())
    }
}
