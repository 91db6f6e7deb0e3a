//! Which measurement files a comparison run expects
//!
//! The renderer workflow drops one FPS log per implementation variant plus a
//! single render-timing file into one directory. That conventional layout is
//! the default; a TOML file or CLI overrides swap in a different one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::series::{ELAPSED_COLUMN, FPS_COLUMN};

/// A named series file: which variant, which log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Variant name shown in reports (e.g. "Sequential", "CUDA")
    pub name: String,
    /// Frame-rate log for that variant
    pub path: PathBuf,
}

impl SeriesSpec {
    /// Parse a `NAME=PATH` CLI override.
    pub fn parse(raw: &str) -> std::result::Result<Self, String> {
        match raw.split_once('=') {
            Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => Ok(Self {
                name: name.trim().to_string(),
                path: PathBuf::from(path.trim()),
            }),
            _ => Err(format!("expected NAME=PATH, got '{raw}'")),
        }
    }
}

/// Expected inputs for one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Series files, in report order
    pub series: Vec<SeriesSpec>,
    /// Series whose mean FPS anchors the speedup column
    pub baseline: String,
    /// One-shot render timing file
    pub timing_path: PathBuf,
    /// Category whose duration anchors the render-timing speedups
    pub timing_baseline: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            series: vec![
                SeriesSpec {
                    name: "Sequential".to_string(),
                    path: PathBuf::from("fps_seq.txt"),
                },
                SeriesSpec {
                    name: "OpenMP Static".to_string(),
                    path: PathBuf::from("fps_omp_static.txt"),
                },
                SeriesSpec {
                    name: "OpenMP Dynamic".to_string(),
                    path: PathBuf::from("fps_omp.txt"),
                },
                SeriesSpec {
                    name: "CUDA".to_string(),
                    path: PathBuf::from("fps_cuda.txt"),
                },
            ],
            baseline: "Sequential".to_string(),
            timing_path: PathBuf::from("time_raytracer.txt"),
            timing_baseline: "seq".to_string(),
        }
    }
}

impl CompareConfig {
    /// Load a TOML config file.
    ///
    /// Omitted keys fall back to the conventional layout.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config =
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Add a series, replacing an existing entry with the same name.
    pub fn upsert_series(&mut self, spec: SeriesSpec) {
        match self.series.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => existing.path = spec.path,
            None => self.series.push(spec),
        }
    }

    /// Resolve relative file paths against `dir`.
    pub fn rooted_at(mut self, dir: &Path) -> Self {
        for spec in &mut self.series {
            if spec.path.is_relative() {
                spec.path = dir.join(&spec.path);
            }
        }
        if self.timing_path.is_relative() {
            self.timing_path = dir.join(&self.timing_path);
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.series.is_empty() {
            return Err("no series configured".to_string());
        }
        if self.baseline.trim().is_empty() {
            return Err("baseline name is empty".to_string());
        }
        for (i, spec) in self.series.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(format!("series #{} has an empty name", i + 1));
            }
            if self.series[..i].iter().any(|s| s.name == spec.name) {
                return Err(format!("duplicate series name '{}'", spec.name));
            }
        }
        Ok(())
    }

    /// Remediation text for the nothing-to-compare case: every expected
    /// file with its variant name and the required header.
    pub fn expected_series_hint(&self) -> String {
        let mut hint = String::from("no frame-rate series found; expected any of:\n");
        for spec in &self.series {
            hint.push_str(&format!("  {} ({})\n", spec.path.display(), spec.name));
        }
        hint.push_str(&format!(
            "each a delimited file with header: {ELAPSED_COLUMN},{FPS_COLUMN}"
        ));
        hint
    }
}
