//! Command-line interface definitions for Awful News Clusters.
//!
//! The binary runs once per batch. All arguments can be provided via
//! command-line flags or environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for a clustering run.
///
/// # Examples
///
/// ```sh
/// # Cluster today's batch
/// awful_news_clusters -i ./articles.json -o ./clusters
///
/// # With a configuration override
/// awful_news_clusters -i ./articles.json -o ./clusters -c ./clusters.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article batch produced by the feed ingestion step
    #[arg(short, long, env = "ARTICLES_INPUT")]
    pub input: PathBuf,

    /// Output directory for the cluster report
    #[arg(short, long, env = "CLUSTERS_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Optional path to a YAML file overriding the clustering constants
    #[arg(short, long, env = "CLUSTERS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 3] = ["ARTICLES_INPUT", "CLUSTERS_OUTPUT_DIR", "CLUSTERS_CONFIG"];

    #[test]
    fn test_cli_parsing() {
        let cli = temp_env::with_vars_unset(ENV_VARS, || {
            Cli::parse_from([
                "awful_news_clusters",
                "--input",
                "./articles.json",
                "--output-dir",
                "./clusters",
            ])
        });

        assert_eq!(cli.input, PathBuf::from("./articles.json"));
        assert_eq!(cli.output_dir, PathBuf::from("./clusters"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = temp_env::with_vars_unset(ENV_VARS, || {
            Cli::parse_from([
                "awful_news_clusters",
                "-i",
                "/tmp/articles.json",
                "-o",
                "/tmp/clusters",
                "-c",
                "/tmp/clusters.yaml",
            ])
        });

        assert_eq!(cli.input, PathBuf::from("/tmp/articles.json"));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/clusters"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/clusters.yaml")));
    }

    #[test]
    fn test_cli_env_fallbacks() {
        let cli = temp_env::with_vars(
            [
                ("ARTICLES_INPUT", Some("/srv/feeds/articles.json")),
                ("CLUSTERS_OUTPUT_DIR", Some("/srv/clusters")),
                ("CLUSTERS_CONFIG", Some("/etc/clusters.yaml")),
            ],
            || Cli::parse_from(["awful_news_clusters"]),
        );

        assert_eq!(cli.input, PathBuf::from("/srv/feeds/articles.json"));
        assert_eq!(cli.output_dir, PathBuf::from("/srv/clusters"));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/clusters.yaml")));
    }

    #[test]
    fn test_cli_flags_override_env() {
        let cli = temp_env::with_vars(
            [
                ("ARTICLES_INPUT", Some("/srv/feeds/articles.json")),
                ("CLUSTERS_OUTPUT_DIR", Some("/srv/clusters")),
                ("CLUSTERS_CONFIG", None),
            ],
            || Cli::parse_from(["awful_news_clusters", "-i", "./today.json"]),
        );

        assert_eq!(cli.input, PathBuf::from("./today.json"));
        assert_eq!(cli.output_dir, PathBuf::from("/srv/clusters"));
        assert!(cli.config.is_none());
    }
}
