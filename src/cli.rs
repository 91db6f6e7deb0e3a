//! CLI argument parsing for Comparar

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for comparison results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON document for dashboard/chart frontends
    Json,
    /// CSV summary table for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "comparar")]
#[command(version)]
#[command(about = "Compare ray tracer benchmark runs: FPS series and render timings", long_about = None)]
pub struct Cli {
    /// Directory containing the measurement files
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// TOML file describing the expected series and timing inputs
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Add or override a series entry as NAME=PATH (repeatable)
    #[arg(short = 's', long = "series", value_name = "NAME=PATH")]
    pub series: Vec<String>,

    /// Baseline series name for the FPS speedup column
    #[arg(short = 'b', long = "baseline", value_name = "NAME")]
    pub baseline: Option<String>,

    /// One-shot render timing file
    #[arg(short = 't', long = "timing", value_name = "FILE")]
    pub timing: Option<PathBuf>,

    /// Baseline category for render-timing speedups
    #[arg(long = "timing-baseline", value_name = "CATEGORY")]
    pub timing_baseline: Option<String>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["comparar"]);
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(cli.series.is_empty());
        assert!(cli.baseline.is_none());
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_data_dir() {
        let cli = Cli::parse_from(["comparar", "-d", "runs/2024-11-03"]);
        assert_eq!(cli.data_dir, PathBuf::from("runs/2024-11-03"));
    }

    #[test]
    fn test_cli_repeated_series() {
        let cli = Cli::parse_from([
            "comparar",
            "-s",
            "Sequential=fps_seq.txt",
            "-s",
            "CUDA=fps_cuda.txt",
        ]);
        assert_eq!(cli.series.len(), 2);
        assert_eq!(cli.series[1], "CUDA=fps_cuda.txt");
    }

    #[test]
    fn test_cli_baseline() {
        let cli = Cli::parse_from(["comparar", "-b", "CUDA"]);
        assert_eq!(cli.baseline.as_deref(), Some("CUDA"));
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["comparar", "--format", "json"]);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_cli_format_csv() {
        let cli = Cli::parse_from(["comparar", "--format", "csv"]);
        assert!(matches!(cli.format, OutputFormat::Csv));
    }

    #[test]
    fn test_cli_timing_overrides() {
        let cli = Cli::parse_from([
            "comparar",
            "-t",
            "timings.csv",
            "--timing-baseline",
            "omp",
        ]);
        assert_eq!(cli.timing, Some(PathBuf::from("timings.csv")));
        assert_eq!(cli.timing_baseline.as_deref(), Some("omp"));
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["comparar", "--debug"]);
        assert!(cli.debug);
    }
}
