//! One-shot render timings for non-interactive image generation
//!
//! A single file records how long each implementation category took to
//! produce the image, one row per category.

use std::collections::BTreeMap;
use std::path::Path;

use crate::table::{self, LoadError, Result};

/// Required header column for the elapsed duration in seconds
pub const DURATION_COLUMN: &str = "duration";
/// Required header column for the implementation category label
pub const CATEGORY_COLUMN: &str = "category";

/// Durations per implementation category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingTable {
    durations: BTreeMap<String, f32>,
}

impl TimingTable {
    pub fn get(&self, category: &str) -> Option<f32> {
        self.durations.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Categories and durations in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.durations.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Duration ratio `baseline / category`.
    ///
    /// Returns None when either category is absent or the category's
    /// duration is zero.
    pub fn speedup_over(&self, baseline: &str, category: &str) -> Option<f32> {
        let base = self.get(baseline)?;
        let duration = self.get(category)?;
        if duration > 0.0 {
            Some(base / duration)
        } else {
            None
        }
    }
}

/// Load the render-timing table.
///
/// Errors if the file is absent or malformed; whether absence is fatal is
/// the caller's call. Duplicate categories keep the last occurrence.
pub fn load_timing(path: &Path) -> Result<TimingTable> {
    let rows = table::read_columns(path, DURATION_COLUMN, CATEGORY_COLUMN)?;

    let mut durations = BTreeMap::new();
    for (line, duration, category) in &rows {
        if category.is_empty() {
            return Err(LoadError::Malformed {
                path: path.display().to_string(),
                line: *line,
                message: "empty category label".to_string(),
            });
        }

        let duration = table::parse_non_negative(path, *line, DURATION_COLUMN, duration)?;
        if durations.insert(category.clone(), duration).is_some() {
            tracing::warn!(
                "{}:{}: duplicate category '{}', keeping the later row",
                path.display(),
                line,
                category
            );
        }
    }

    Ok(TimingTable { durations })
}
