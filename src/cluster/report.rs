//! Labeling final clusters.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::util::{assign, median};
use crate::error::{Error, Result};
use crate::vectorize::Vector;

/// Summary of one final cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    /// Most frequent language among the cluster's points.
    pub dominant_language: String,
    /// Share of points in the dominant language, in percent.
    pub dominant_language_percent: f64,
    /// Number of points in the cluster.
    pub size: usize,
    /// Median answer score of the cluster's points.
    pub median_score: i32,
}

/// Summarize every non-empty cluster around `centers`.
///
/// Points go to their nearest center with the same tie-break as k-means. When
/// two languages are equally common the lower language index wins. Points
/// whose `x` maps to no tracked language still count toward a cluster's size;
/// a cluster made only of such points is skipped. Results are sorted by
/// ascending median score.
pub fn cluster_results(
    centers: &[Vector],
    points: &[Vector],
    languages: &[String],
    spread: i32,
) -> Result<Vec<ClusterSummary>> {
    if spread <= 0 {
        return Err(Error::InvalidParameter {
            name: "spread",
            message: "must be positive",
        });
    }

    let labels = assign(points, centers);
    let mut members: Vec<Vec<Vector>> = vec![Vec::new(); centers.len()];
    for (&label, &point) in labels.iter().zip(points) {
        members[label].push(point);
    }

    let mut summaries: Vec<ClusterSummary> = members
        .iter()
        .enumerate()
        .filter(|(_, group)| !group.is_empty())
        .filter_map(|(center, group)| {
            let summary = summarize(group, languages, spread);
            if summary.is_none() {
                warn!(center, size = group.len(), "cluster has no tracked language, skipping");
            }
            summary
        })
        .collect();

    // Stable: equal medians keep center order.
    summaries.sort_by_key(|s| s.median_score);
    Ok(summaries)
}

fn summarize(group: &[Vector], languages: &[String], spread: i32) -> Option<ClusterSummary> {
    let mut counts = vec![0usize; languages.len()];
    for p in group {
        if let Some(c) = p.language_index(spread).and_then(|idx| counts.get_mut(idx)) {
            *c += 1;
        }
    }

    let (dominant, count) = counts
        .iter()
        .enumerate()
        .fold((0, 0), |best, (idx, &n)| if n > best.1 { (idx, n) } else { best });
    if count == 0 {
        return None;
    }

    let scores: Vec<i32> = group.iter().map(|p| p.y).collect();

    Some(ClusterSummary {
        dominant_language: languages[dominant].clone(),
        dominant_language_percent: 100.0 * count as f64 / group.len() as f64,
        size: group.len(),
        median_score: median(&scores)?,
    })
}

/// Plain-text table of cluster summaries.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a [ClusterSummary]);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resulting clusters:")?;
        writeln!(f, "  Score  Dominant language (%percent)  Questions")?;
        writeln!(f, "================================================")?;
        for s in self.0 {
            writeln!(
                f,
                "{:>7}  {:<17} ({:.1}%)      {:>7}",
                s.median_score, s.dominant_language, s.dominant_language_percent, s.size
            )?;
        }
        Ok(())
    }
}
