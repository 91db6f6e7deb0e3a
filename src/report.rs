//! Plain-text comparison report
//!
//! The render-timing section comes first, then the frame-rate table, the
//! same order the measurement workflow presents them.

use crate::summary::SummaryRow;
use crate::timing::TimingTable;

/// Render the full report.
///
/// `timing` is optional; when absent the report is just the frame-rate
/// section.
pub fn render(
    rows: &[SummaryRow],
    aligned_len: usize,
    timing: Option<&TimingTable>,
    timing_baseline: &str,
) -> String {
    let mut out = String::new();

    if let Some(timing) = timing {
        render_timing(&mut out, timing, timing_baseline);
        out.push('\n');
    }

    render_series(&mut out, rows, aligned_len);
    out
}

fn render_timing(out: &mut String, timing: &TimingTable, baseline: &str) {
    out.push_str("=== Image Generation ===\n\n");

    for (category, duration) in timing.iter() {
        match timing.speedup_over(baseline, category) {
            Some(speedup) if category != baseline => {
                out.push_str(&format!(
                    "{category:<12} {duration:>9.3} s   {speedup:.2}x vs {baseline}\n"
                ));
            }
            _ => {
                out.push_str(&format!("{category:<12} {duration:>9.3} s\n"));
            }
        }
    }
}

fn render_series(out: &mut String, rows: &[SummaryRow], aligned_len: usize) {
    out.push_str(&format!(
        "=== Interactive Frame Rate ({aligned_len} samples per series) ===\n\n"
    ));

    out.push_str("  mean fps   min fps   max fps    stddev   speedup implementation\n");
    out.push_str("---------- --------- --------- --------- --------- ----------------\n");

    for row in rows {
        let speedup = match row.speedup {
            Some(speedup) => format!("{speedup:.2}x"),
            None => String::new(),
        };
        out.push_str(&format!(
            "{:>10.2} {:>9.2} {:>9.2} {:>9.2} {:>9} {}\n",
            row.stats.mean, row.stats.min, row.stats.max, row.stats.stddev, speedup, row.name
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Sample, SeriesTable};
    use crate::summary::{summarize, FpsStats};
    use crate::timing::load_timing;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn row(name: &str, mean: f32, speedup: Option<f32>) -> SummaryRow {
        SummaryRow {
            name: name.to_string(),
            samples: 2,
            stats: FpsStats {
                mean,
                min: mean,
                max: mean,
                stddev: 0.0,
            },
            speedup,
        }
    }

    fn timing_fixture(contents: &str) -> TimingTable {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        load_timing(file.path()).unwrap()
    }

    #[test]
    fn test_report_has_both_sections() {
        let timing = timing_fixture("duration,category\n2.0,seq\n0.7,omp\n");
        let report = render(&[row("Sequential", 10.0, Some(1.0))], 2, Some(&timing), "seq");

        assert!(report.contains("=== Image Generation ==="));
        assert!(report.contains("=== Interactive Frame Rate (2 samples per series) ==="));
    }

    #[test]
    fn test_timing_section_shows_speedup_against_baseline() {
        let timing = timing_fixture("duration,category\n2.0,seq\n0.7,omp\n");
        let report = render(&[], 0, Some(&timing), "seq");

        assert!(report.contains("2.86x vs seq"));
        // the baseline row carries no speedup annotation
        let seq_line = report.lines().find(|l| l.starts_with("seq")).unwrap();
        assert!(!seq_line.contains("vs"));
    }

    #[test]
    fn test_no_timing_no_section() {
        let report = render(&[row("Sequential", 10.0, None)], 1, None, "seq");
        assert!(!report.contains("Image Generation"));
        assert!(report.contains("Interactive Frame Rate"));
    }

    #[test]
    fn test_series_table_formats_speedups() {
        let rows = vec![
            row("Sequential", 10.0, Some(1.0)),
            row("CUDA", 60.0, Some(6.0)),
        ];
        let report = render(&rows, 2, None, "seq");

        assert!(report.contains("1.00x"));
        assert!(report.contains("6.00x"));
        assert!(report.contains("Sequential"));
        assert!(report.contains("CUDA"));
    }

    #[test]
    fn test_missing_speedup_renders_blank_cell() {
        let report = render(&[row("CUDA", 60.0, None)], 2, None, "seq");
        let line = report.lines().find(|l| l.contains("CUDA")).unwrap();
        assert!(!line.contains('x'));
    }

    #[test]
    fn test_report_end_to_end_from_summaries() {
        let tables = vec![
            SeriesTable {
                name: "Sequential".to_string(),
                samples: vec![
                    Sample { elapsed_s: 0.0, fps: 10.0 },
                    Sample { elapsed_s: 1.0, fps: 20.0 },
                ],
            },
            SeriesTable {
                name: "CUDA".to_string(),
                samples: vec![
                    Sample { elapsed_s: 0.0, fps: 45.0 },
                    Sample { elapsed_s: 1.0, fps: 45.0 },
                ],
            },
        ];
        let rows = summarize(&tables, "Sequential");
        let report = render(&rows, 2, None, "seq");

        assert!(report.contains("3.00x"));
        assert!(report.contains("45.00"));
    }
}
