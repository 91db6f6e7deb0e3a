//! Frame-rate series tables produced by interactive renderer runs
//!
//! One file per implementation variant. Each row is a sample taken while the
//! renderer was running: seconds since start plus the frame rate observed at
//! that moment.

use std::path::Path;

use crate::config::SeriesSpec;
use crate::table::{self, Result};

/// Required header column for the sample timestamp (seconds since start)
pub const ELAPSED_COLUMN: &str = "elapsed_time";
/// Required header column for the frames-per-second reading
pub const FPS_COLUMN: &str = "fps";

/// A single frame-rate measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Seconds since the renderer started
    pub elapsed_s: f32,
    /// Frames per second observed at that point
    pub fps: f32,
}

/// A named, ordered frame-rate log for one implementation variant
#[derive(Debug, Clone)]
pub struct SeriesTable {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl SeriesTable {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// FPS readings in sample order
    pub fn fps_values(&self) -> Vec<f32> {
        self.samples.iter().map(|s| s.fps).collect()
    }

    /// Keep only the earliest `len` samples.
    pub fn truncated(mut self, len: usize) -> Self {
        self.samples.truncate(len);
        self
    }
}

/// Load one frame-rate log.
///
/// The file must exist; [`load_all`] adds the skip-if-missing behavior.
pub fn load_series(name: &str, path: &Path) -> Result<SeriesTable> {
    let rows = table::read_columns(path, ELAPSED_COLUMN, FPS_COLUMN)?;

    let mut samples = Vec::with_capacity(rows.len());
    for (line, elapsed, fps) in &rows {
        samples.push(Sample {
            elapsed_s: table::parse_non_negative(path, *line, ELAPSED_COLUMN, elapsed)?,
            fps: table::parse_non_negative(path, *line, FPS_COLUMN, fps)?,
        });
    }

    // Producers append while running, so elapsed time only moves forward.
    if samples.windows(2).any(|w| w[1].elapsed_s < w[0].elapsed_s) {
        tracing::warn!(
            "{}: elapsed_time is not non-decreasing, keeping file order",
            path.display()
        );
    }

    Ok(SeriesTable {
        name: name.to_string(),
        samples,
    })
}

/// Load every configured series whose file exists, preserving the
/// configured order.
///
/// A missing file excludes that variant; a present but unreadable file is an
/// error.
pub fn load_all(specs: &[SeriesSpec]) -> Result<Vec<SeriesTable>> {
    let mut tables = Vec::new();

    for spec in specs {
        if !spec.path.exists() {
            tracing::debug!(
                "{}: not found, skipping '{}'",
                spec.path.display(),
                spec.name
            );
            continue;
        }
        tables.push(load_series(&spec.name, &spec.path)?);
    }

    Ok(tables)
}
