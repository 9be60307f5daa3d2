//! Command-line runner for the hero rates scraper
//!
//! Runs the pipeline once and writes the JSON snapshot. Exit code is
//! non-zero when the fetch fails, when no heroes were classified, or when
//! the output cannot be written; zero only after a successful write.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info, LevelFilter};

use owrates_core::{PageQuery, RatesError, RatesScraper, RatesSnapshot, Result};

/// Default output file, overridable by the first positional argument
const DEFAULT_OUTPUT: &str = "hero_rates.json";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", LevelFilter::Warn)
        .init();

    let output = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match run(&output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(output: &Path) -> Result<()> {
    let scraper = RatesScraper::new()?;
    let snapshot = scraper.scrape(&PageQuery::default()).await?;

    ensure_nonempty(&snapshot)?;
    write_snapshot(&snapshot, output)?;
    info!(
        "wrote {} heroes to {} (column order {})",
        snapshot.total(),
        output.display(),
        if snapshot.column_order_verified {
            "verified"
        } else {
            "UNVERIFIED"
        },
    );

    Ok(())
}

/// A run that classified nothing is a run-level failure: the process must
/// exit non-zero without writing an empty, misleading file.
fn ensure_nonempty(snapshot: &RatesSnapshot) -> Result<()> {
    if snapshot.total() == 0 {
        return Err(RatesError::NoData(
            "extraction produced no classified heroes".to_string(),
        ));
    }
    Ok(())
}

/// Serialize the snapshot and write it atomically: the document lands in
/// a sibling temp file first and is renamed over the target, so a failed
/// run never leaves a partial file behind.
fn write_snapshot(snapshot: &RatesSnapshot, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;

    let mut tmp = output.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, output)?;

    Ok(())
}
