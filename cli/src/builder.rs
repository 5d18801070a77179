//! Build pipeline
//!
//! Sequentially walks the airline catalog: fetch PNG, encode to RGB565,
//! write `{ICAO}.bin`. One request at a time with a fixed delay between
//! requests; per-entry failures are collected and reported, never fatal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use lw_fetcher::LogoFetcher;

use crate::manifest::{Manifest, ManifestLogo};

/// Logos are fetched at this multiple of the target size and downsampled
/// locally, which gives noticeably cleaner edges than the CDN's own
/// small renders.
const FETCH_SCALE: u32 = 4;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub width: u32,
    pub height: u32,
    pub out_dir: PathBuf,
    pub skip_existing: bool,
    pub delay_ms: u64,
}

/// Outcome of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub ok: usize,
    pub skipped: usize,
    pub failed: usize,
    /// "ICAO/IATA Name" for each failed airline
    pub failed_entries: Vec<String>,
    /// Total bytes written across all blobs
    pub total_bytes: usize,
}

/// Run the full build pipeline.
///
/// The only fatal error is failing to create the output directory;
/// everything per-entry is recorded in the report and processing
/// continues.
pub async fn run_build(opts: &BuildOptions, fetcher: &LogoFetcher) -> anyhow::Result<BuildReport> {
    tokio::fs::create_dir_all(&opts.out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {:?}", opts.out_dir))?;

    let airlines = lw_catalog::all();
    let expected_bytes = lw_encoder::expected_len(opts.width, opts.height);

    info!(
        "Building {}x{} logo pack ({} bytes each, {} airlines) into {:?}",
        opts.width,
        opts.height,
        expected_bytes,
        airlines.len(),
        opts.out_dir
    );

    let mut report = BuildReport::default();
    let mut manifest = Manifest::new(opts.width, opts.height);

    for (idx, airline) in airlines.iter().enumerate() {
        let out_path = opts.out_dir.join(format!("{}.bin", airline.icao));
        let progress = format!("[{}/{}] {}", idx + 1, airlines.len(), airline.icao);

        if opts.skip_existing && out_path.exists() {
            info!("{} {} - skipped (exists)", progress, airline.name);
            report.skipped += 1;
            continue;
        }

        match build_one(opts, fetcher, airline, &out_path).await {
            Ok(blob_len) => {
                info!("{} {} - OK ({} bytes)", progress, airline.name, blob_len);
                report.ok += 1;
                report.total_bytes += blob_len;
                manifest.logos.push(ManifestLogo {
                    icao: airline.icao.to_string(),
                    bytes: blob_len,
                });
            }
            Err(e) => {
                warn!("{} {} - FAILED ({})", progress, airline.name, e);
                report.failed += 1;
                report
                    .failed_entries
                    .push(format!("{}/{} {}", airline.icao, airline.iata, airline.name));
            }
        }

        if opts.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(opts.delay_ms)).await;
        }
    }

    manifest.write(&opts.out_dir).await?;

    Ok(report)
}

/// Fetch, encode and write a single airline logo. Returns the blob length.
async fn build_one(
    opts: &BuildOptions,
    fetcher: &LogoFetcher,
    airline: &lw_catalog::AirlineEntry,
    out_path: &std::path::Path,
) -> anyhow::Result<usize> {
    let png_bytes = fetcher
        .fetch(
            airline.iata,
            opts.width * FETCH_SCALE,
            opts.height * FETCH_SCALE,
        )
        .await?;

    let img = lw_encoder::decode_image(&png_bytes)?;
    let blob = lw_encoder::encode(&img, opts.width, opts.height);

    tokio::fs::write(out_path, &blob)
        .await
        .with_context(|| format!("Failed to write {:?}", out_path))?;

    Ok(blob.len())
}

impl BuildReport {
    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        println!();
        println!(
            "Done.  {} OK  |  {} skipped  |  {} failed",
            self.ok, self.skipped, self.failed
        );
        if !self.failed_entries.is_empty() {
            println!("Failed airlines:");
            for entry in &self.failed_entries {
                println!("  {}", entry);
            }
        }
        println!(
            "Total logo data: {:.1} KB",
            self.total_bytes as f64 / 1024.0
        );
    }
}
