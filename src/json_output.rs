//! JSON output for external dashboard renderers
//!
//! Carries the aligned series points plus the computed summaries, so a chart
//! frontend needs no arithmetic of its own.

use serde::{Deserialize, Serialize};

use crate::series::SeriesTable;
use crate::summary::SummaryRow;
use crate::timing::TimingTable;

/// One aligned frame-rate point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSample {
    /// Seconds since the renderer started
    pub elapsed_s: f32,
    /// Frames per second observed at that point
    pub fps: f32,
}

/// A series with its summary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSeries {
    /// Implementation variant name
    pub name: String,
    /// Aligned samples, earliest first
    pub samples: Vec<JsonSample>,
    pub mean_fps: f32,
    pub min_fps: f32,
    pub max_fps: f32,
    pub stddev_fps: f32,
    /// Mean-FPS ratio against the baseline series (absent without baseline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speedup: Option<f32>,
}

/// One render-timing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTimingEntry {
    pub category: String,
    pub duration_s: f32,
    /// Duration ratio against the baseline category (absent without one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speedup: Option<f32>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Aligned series with statistics, in report order
    pub series: Vec<JsonSeries>,
    /// Render-timing entries (empty when the timing file was absent)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub timing: Vec<JsonTimingEntry>,
}

impl JsonOutput {
    /// Create a new JSON output structure
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "comparar-json-v1".to_string(),
            series: Vec::new(),
            timing: Vec::new(),
        }
    }

    /// Add one aligned series with its summary row.
    pub fn add_series(&mut self, table: &SeriesTable, row: &SummaryRow) {
        self.series.push(JsonSeries {
            name: row.name.clone(),
            samples: table
                .samples
                .iter()
                .map(|s| JsonSample {
                    elapsed_s: s.elapsed_s,
                    fps: s.fps,
                })
                .collect(),
            mean_fps: row.stats.mean,
            min_fps: row.stats.min,
            max_fps: row.stats.max,
            stddev_fps: row.stats.stddev,
            speedup: row.speedup,
        });
    }

    /// Set the render-timing entries.
    pub fn set_timing(&mut self, timing: &TimingTable, baseline: &str) {
        self.timing = timing
            .iter()
            .map(|(category, duration)| JsonTimingEntry {
                category: category.to_string(),
                duration_s: duration,
                speedup: timing.speedup_over(baseline, category),
            })
            .collect();
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
