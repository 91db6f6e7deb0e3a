use anyhow::{Context, Result};
use clap::Parser;
use comparar::align::align;
use comparar::cli::{Cli, OutputFormat};
use comparar::config::{CompareConfig, SeriesSpec};
use comparar::csv_output::CsvSummaryOutput;
use comparar::json_output::JsonOutput;
use comparar::timing::TimingTable;
use comparar::{report, series, summary, timing};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the config file and CLI overrides into the effective configuration
fn resolve_config(args: &Cli) -> Result<CompareConfig> {
    let mut config = match &args.config {
        Some(path) => CompareConfig::from_file(path)?,
        None => CompareConfig::default(),
    };

    for raw in &args.series {
        let spec = SeriesSpec::parse(raw).map_err(|e| anyhow::anyhow!(e))?;
        config.upsert_series(spec);
    }
    if let Some(baseline) = &args.baseline {
        config.baseline = baseline.clone();
    }
    if let Some(timing_path) = &args.timing {
        config.timing_path = timing_path.clone();
    }
    if let Some(timing_baseline) = &args.timing_baseline {
        config.timing_baseline = timing_baseline.clone();
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    Ok(config.rooted_at(&args.data_dir))
}

/// Read the render-timing table if its file is present and well-formed.
///
/// The timing section is optional: an absent file skips it, a malformed one
/// is reported and skipped, and the frame-rate section still renders.
fn load_timing_section(config: &CompareConfig) -> Option<TimingTable> {
    if !config.timing_path.exists() {
        tracing::debug!(
            "{}: not found, skipping render timings",
            config.timing_path.display()
        );
        return None;
    }

    match timing::load_timing(&config.timing_path) {
        Ok(table) => Some(table),
        Err(e) => {
            eprintln!("warning: render timings skipped: {e}");
            None
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = resolve_config(&args)?;

    let timing = load_timing_section(&config);

    let tables = series::load_all(&config.series)?;
    let aligned = align(tables).with_context(|| config.expected_series_hint())?;
    let rows = summary::summarize(&aligned, &config.baseline);
    let aligned_len = aligned.first().map_or(0, |t| t.len());

    match args.format {
        OutputFormat::Text => {
            print!(
                "{}",
                report::render(&rows, aligned_len, timing.as_ref(), &config.timing_baseline)
            );
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            for (table, row) in aligned.iter().zip(&rows) {
                output.add_series(table, row);
            }
            if let Some(timing) = &timing {
                output.set_timing(timing, &config.timing_baseline);
            }
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => {
            print!("{}", CsvSummaryOutput::from_summary(&rows).to_csv());
        }
    }

    Ok(())
}
