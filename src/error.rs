//! Error type for a clustering run.
//!
//! Every variant is fatal for the run: the engine never clusters a partial or
//! unreadable corpus. An empty corpus after filtering is *not* an error and
//! yields a zero-cluster report instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid article batch: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize cluster report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("configuration file is not valid YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("article #{index} rejected: {reason}")]
    InvalidArticle { index: usize, reason: String },
}
