use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod error;
mod metrics;
mod models;
mod reader;
mod report;

use report::OutputFormat;

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Summarise workouts reported by a fitness tracker", long_about = None)]
struct Cli {
    /// Headerless CSV of packages (`CODE,v1,v2,...`); defaults to the built-in sample
    #[arg(long)]
    packages: Option<PathBuf>,
    /// Print one JSON object per workout instead of text
    #[arg(long)]
    json: bool,
}

// Falls back to `warn` only when no directives are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let cli = Cli::parse();
    let packages = match cli.packages.as_deref() {
        Some(path) => reader::load_packages(path)?,
        None => reader::sample_packages(),
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let report = report::build_report(packages, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.output.as_bytes())
        .context("failed to write report")?;

    if report.skipped > 0 {
        tracing::warn!(
            rendered = report.rendered,
            skipped = report.skipped,
            "some packages were skipped"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::prelude::*;

    fn enabled_under(directives: Option<&str>) -> (bool, bool) {
        let subscriber = tracing_subscriber::registry().with(log_filter(directives));
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(Level::DEBUG),
                tracing::enabled!(Level::WARN),
            )
        })
    }

    #[test]
    fn rust_log_directives_override_the_warn_default() {
        assert_eq!(enabled_under(Some("debug")), (true, true));
        assert_eq!(enabled_under(None), (false, true));
        assert_eq!(enabled_under(Some("")), (false, true));
    }

    #[test]
    fn target_directives_are_kept() {
        let filter = log_filter(Some("fitness_tracker=debug"));
        assert!(filter.to_string().contains("fitness_tracker=debug"));
    }
}
