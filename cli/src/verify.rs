//! Logo pack validation
//!
//! Host-side version of the exact-length check the display firmware runs
//! when loading a blob from flash. Catches truncated or stale-dimension
//! packs before they are uploaded.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

/// Outcome of a verify run.
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub ok: usize,
    /// (path, reason) for each bad blob
    pub bad: Vec<(PathBuf, String)>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.bad.is_empty()
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        println!();
        println!("Verified {} blob(s), {} bad", self.ok, self.bad.len());
        for (path, reason) in &self.bad {
            println!("  {}: {}", path.display(), reason);
        }
    }
}

/// Check that every `*.bin` file in `dir` is a valid `width x height` blob.
pub async fn run_verify(dir: &Path, width: u32, height: u32) -> anyhow::Result<VerifyReport> {
    let mut report = VerifyReport::default();

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {:?}", dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("bin") {
            continue;
        }

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;

        match lw_encoder::validate_blob(&bytes, width, height) {
            Ok(_) => {
                info!("{:?}: OK ({} bytes)", path.file_name().unwrap_or_default(), bytes.len());
                report.ok += 1;
            }
            Err(e) => {
                warn!("{:?}: {}", path, e);
                report.bad.push((path, e.to_string()));
            }
        }
    }

    Ok(report)
}
