//! # Momentum Ranker
//! Builds a `RankedEntry` for every catalog leaf and orders them by
//! week-over-week delta, descending. Deltas closer than [`NEAR_TIE`] are
//! treated as tied and ordered by identifier, ascending.
//!
//! The near-tie comparator is not transitive for fractional deltas, so the
//! ordering uses an insertion sort that only ever compares neighbours. For
//! integer deltas (all synthesized series) the comparator is a total order
//! and the result does not depend on input order.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::SpotlightError;
use crate::synth::{self, ScoreSeries};

/// Deltas closer than this are considered tied.
pub const NEAR_TIE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub identifier: String,
    pub focus_code: String,
    pub focus_title: String,
    pub topic_code: String,
    pub topic_title: String,
    pub current_score: i32,
    pub series: ScoreSeries,
    pub week_over_week_delta: f64,
}

impl RankedEntry {
    /// Derive the entry for one catalog leaf.
    pub fn from_catalog_entry(entry: CatalogEntry<'_>) -> Result<Self, SpotlightError> {
        let identifier = entry.identifier();
        let series = synth::series(&identifier)?;
        Ok(Self {
            focus_code: entry.focus.code.clone(),
            focus_title: entry.focus.title.clone(),
            topic_code: entry.topic.code.clone(),
            topic_title: entry.topic.title.clone(),
            current_score: series.current(),
            week_over_week_delta: series.week_over_week_delta(),
            series,
            identifier,
        })
    }
}

/// Rank the whole catalog. Output length always equals `catalog.len()`.
pub fn rank(catalog: &Catalog) -> Result<Vec<RankedEntry>, SpotlightError> {
    catalog.validate()?;
    let entries = catalog
        .entries()
        .map(RankedEntry::from_catalog_entry)
        .collect::<Result<Vec<_>, _>>()?;
    let ranked = rank_entries(entries);

    if let Some(top) = ranked.first() {
        debug!(
            target: "spotlight",
            total = ranked.len(),
            top = %top.identifier,
            delta = top.week_over_week_delta,
            "ranking built"
        );
    }
    Ok(ranked)
}

/// Pairwise momentum order: delta descending, identifier ascending when the
/// deltas are within [`NEAR_TIE`].
pub fn momentum_cmp(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    if (a.week_over_week_delta - b.week_over_week_delta).abs() < NEAR_TIE {
        a.identifier.cmp(&b.identifier)
    } else {
        b.week_over_week_delta.total_cmp(&a.week_over_week_delta)
    }
}

/// Order arbitrary entries by momentum.
///
/// Stable insertion sort over [`momentum_cmp`]: every adjacent pair of the
/// output satisfies the comparator even when near-ties chain across more
/// than `NEAR_TIE`.
pub fn rank_entries(mut entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && momentum_cmp(&entries[j - 1], &entries[j]) == Ordering::Greater {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
    entries
}

/// Baseline score for every catalog identifier.
pub fn baseline_score_map(catalog: &Catalog) -> Result<BTreeMap<String, i32>, SpotlightError> {
    catalog
        .entries()
        .map(|e| {
            let id = e.identifier();
            synth::baseline_score(&id).map(|score| (id, score))
        })
        .collect()
}
