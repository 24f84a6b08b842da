//! Output generation for the downstream summarization step.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`ClusterReport`](crate::models::ClusterReport) as JSON
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── 2025-05-06/
//! │   └── clusters.json
//! └── latest.json
//! ```

pub mod json;
