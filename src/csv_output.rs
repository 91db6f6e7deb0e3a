//! CSV output for the comparison summary
//!
//! One row per implementation variant, for spreadsheet analysis.

use crate::summary::SummaryRow;

/// CSV record for one implementation variant
#[derive(Debug, Clone)]
pub struct CsvSummaryRow {
    pub implementation: String,
    pub samples: usize,
    pub mean_fps: f32,
    pub min_fps: f32,
    pub max_fps: f32,
    pub stddev_fps: f32,
    pub speedup: Option<f32>,
}

/// CSV summary formatter
#[derive(Debug, Default)]
pub struct CsvSummaryOutput {
    rows: Vec<CsvSummaryRow>,
}

impl CsvSummaryOutput {
    /// Create a new CSV summary formatter
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build the formatter from computed summary rows.
    pub fn from_summary(rows: &[SummaryRow]) -> Self {
        let mut output = Self::new();
        for row in rows {
            output.add_row(CsvSummaryRow {
                implementation: row.name.clone(),
                samples: row.samples,
                mean_fps: row.stats.mean,
                min_fps: row.stats.min,
                max_fps: row.stats.max,
                stddev_fps: row.stats.stddev,
                speedup: row.speedup,
            });
        }
        output
    }

    /// Add a row
    pub fn add_row(&mut self, row: CsvSummaryRow) {
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str("implementation,samples,mean_fps,min_fps,max_fps,stddev_fps,speedup\n");

        for row in &self.rows {
            output.push_str(&Self::escape_field(&row.implementation));
            output.push_str(&format!(
                ",{},{:.2},{:.2},{:.2},{:.2},",
                row.samples, row.mean_fps, row.min_fps, row.max_fps, row.stddev_fps
            ));
            if let Some(speedup) = row.speedup {
                output.push_str(&format!("{speedup:.2}"));
            }
            output.push('\n');
        }

        output
    }
}
