//! JSON output of the cluster report.
//!
//! Each run writes a dated file and refreshes `latest.json`, which is what the
//! summarization step reads. Articles are embedded in full, not by reference.
//!
//! ```text
//! output_dir/
//! ├── 2025-05-06/
//! │   └── clusters.json
//! └── latest.json
//! ```

use crate::error::ClusterError;
use crate::models::ClusterReport;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

pub const REPORT_FILENAME: &str = "clusters.json";
pub const LATEST_FILENAME: &str = "latest.json";

/// Write a [`ClusterReport`] under a date-based directory.
///
/// # Returns
///
/// The path of the dated report file.
///
/// # Output Path
///
/// The report is written to `{output_dir}/{YYYY-MM-DD}/clusters.json`, where
/// the date is taken from `generated_at` (UTC), and to
/// `{output_dir}/latest.json`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), clusters = report.cluster_count))]
pub async fn write_report(report: &ClusterReport, output_dir: &Path) -> Result<PathBuf, ClusterError> {
    let json = serde_json::to_string_pretty(report)?;

    let dated_dir = output_dir.join(report.generated_at.date_naive().to_string());
    info!(dir = %dated_dir.display(), "Ensuring report directory exists");
    if let Err(e) = fs::create_dir_all(&dated_dir).await {
        error!(dir = %dated_dir.display(), error = %e, "Failed to create report dir");
        return Err(ClusterError::Io {
            path: dated_dir,
            source: e,
        });
    }

    let report_path = dated_dir.join(REPORT_FILENAME);
    write_file(&report_path, &json).await?;
    info!(path = %report_path.display(), "Wrote cluster report");

    let latest_path = output_dir.join(LATEST_FILENAME);
    write_file(&latest_path, &json).await?;
    info!(path = %latest_path.display(), "Updated latest report");

    Ok(report_path)
}

async fn write_file(path: &Path, contents: &str) -> Result<(), ClusterError> {
    fs::write(path, contents).await.map_err(|source| ClusterError::Io {
        path: path.to_path_buf(),
        source,
    })
}
