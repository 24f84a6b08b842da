//! Quota-driven selection of the clusters handed downstream.
//!
//! Candidates are ordered multi-source first, then single-source, each by
//! descending importance. Quotas are filled in configuration order, then any
//! remaining slots are backfilled from the whole candidate list. Every
//! acceptance is checked against what was already accepted, so the order of
//! the quota list decides which near-duplicate wins.

use crate::config::ClusterConfig;
use crate::dedup::{ClusterFingerprint, find_duplicate};
use crate::models::ArticleCluster;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Choose up to `config.target_total` mutually distinct clusters.
///
/// The result is ordered by descending importance. Under-supplied categories
/// leave their quota unfilled and backfill takes the slack from any category.
#[instrument(level = "info", skip_all, fields(candidates = clusters.len(), target = config.target_total))]
pub fn select_clusters(clusters: Vec<ArticleCluster>, config: &ClusterConfig) -> Vec<ArticleCluster> {
    let priority = priority_order(&clusters);
    let fingerprints: Vec<ClusterFingerprint> = clusters.iter().map(ClusterFingerprint::of).collect();
    let mut accepted: Vec<usize> = Vec::new();

    for quota in &config.quotas {
        let mut filled = 0;
        for &idx in priority.iter().filter(|&&idx| clusters[idx].category == quota.category) {
            if filled >= quota.count || accepted.len() >= config.target_total {
                break;
            }
            if try_accept(idx, &clusters, &fingerprints, &mut accepted, config) {
                filled += 1;
            }
        }
        if filled < quota.count {
            debug!(category = %quota.category, filled, quota = quota.count, "Quota not filled");
        }
    }

    let after_quotas = accepted.len();
    for &idx in &priority {
        if accepted.len() >= config.target_total {
            break;
        }
        try_accept(idx, &clusters, &fingerprints, &mut accepted, config);
    }
    info!(
        selected = accepted.len(),
        from_quotas = after_quotas,
        backfilled = accepted.len() - after_quotas,
        "Selection complete"
    );

    let mut slots: Vec<Option<ArticleCluster>> = clusters.into_iter().map(Some).collect();
    let mut selected: Vec<ArticleCluster> = accepted
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect();
    selected.sort_by_key(|c| Reverse(c.importance));
    selected
}

/// Indices of `clusters`: multi-source by importance, then single-source by
/// importance. Ties keep builder order.
fn priority_order(clusters: &[ArticleCluster]) -> Vec<usize> {
    let (mut multi, mut single): (Vec<usize>, Vec<usize>) =
        (0..clusters.len()).partition(|&idx| clusters[idx].is_multi_source());
    multi.sort_by_key(|&idx| Reverse(clusters[idx].importance));
    single.sort_by_key(|&idx| Reverse(clusters[idx].importance));
    multi.extend(single);
    multi
}

fn try_accept(
    idx: usize,
    clusters: &[ArticleCluster],
    fingerprints: &[ClusterFingerprint],
    accepted: &mut Vec<usize>,
    config: &ClusterConfig,
) -> bool {
    if accepted.contains(&idx) {
        return false;
    }
    let previous = accepted.iter().map(|&a| (a, &fingerprints[a]));
    if let Some((dup_of, reason)) = find_duplicate(previous, &fingerprints[idx], config) {
        debug!(
            cluster = clusters[idx].id,
            duplicate_of = clusters[dup_of].id,
            %reason,
            "Skipping duplicate cluster"
        );
        return false;
    }
    accepted.push(idx);
    true
}
