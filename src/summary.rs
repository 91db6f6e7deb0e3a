//! Per-variant summary statistics and baseline speedups

use trueno::Vector;

use crate::series::SeriesTable;

/// Aggregate FPS statistics for one aligned series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub mean: f32,
    pub min: f32,
    pub max: f32,
    pub stddev: f32,
}

impl FpsStats {
    /// Compute statistics over a set of FPS readings.
    pub fn from_values(values: &[f32]) -> Self {
        let v = Vector::from_slice(values);
        let n = values.len();

        // trueno's variance divides by n; reports use the n-1 sample form.
        let stddev = if n > 1 {
            let variance = v.variance().unwrap_or(0.0);
            (variance * n as f32 / (n - 1) as f32).sqrt()
        } else {
            0.0
        };

        Self {
            mean: v.mean().unwrap_or(0.0),
            min: v.min().unwrap_or(0.0),
            max: v.max().unwrap_or(0.0),
            stddev,
        }
    }
}

/// One row of the comparison table
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub name: String,
    pub samples: usize,
    pub stats: FpsStats,
    /// Mean-FPS ratio against the baseline series; absent when no baseline
    /// is among the tables
    pub speedup: Option<f32>,
}

/// Summarize every table, preserving input order.
///
/// When `baseline` names one of the tables its own row gets speedup 1.0
/// exactly and every other row gets mean(other) / mean(baseline); otherwise
/// the speedup fields stay empty. A zero baseline mean keeps the other rows'
/// speedups empty rather than rendering infinities.
pub fn summarize(tables: &[SeriesTable], baseline: &str) -> Vec<SummaryRow> {
    let stats: Vec<FpsStats> = tables
        .iter()
        .map(|t| FpsStats::from_values(&t.fps_values()))
        .collect();

    let baseline_mean = tables
        .iter()
        .zip(&stats)
        .find(|(t, _)| t.name == baseline)
        .map(|(_, s)| s.mean);

    tables
        .iter()
        .zip(stats)
        .map(|(table, stats)| {
            let speedup = match baseline_mean {
                Some(_) if table.name == baseline => Some(1.0),
                Some(base) if base > 0.0 => Some(stats.mean / base),
                _ => None,
            };

            SummaryRow {
                name: table.name.clone(),
                samples: table.len(),
                stats,
                speedup,
            }
        })
        .collect()
}
