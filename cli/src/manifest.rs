//! Logo pack manifest
//!
//! Written next to the blobs so the device side can validate the pack
//! without hardcoding dimensions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Logo width in pixels
    pub width: u32,
    /// Logo height in pixels
    pub height: u32,
    /// When this pack was generated
    pub generated_at: DateTime<Utc>,
    /// One entry per written blob
    pub logos: Vec<ManifestLogo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestLogo {
    /// ICAO code, also the blob filename stem
    pub icao: String,
    /// Blob size in bytes (always width * height * 2)
    pub bytes: usize,
}

impl Manifest {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            generated_at: Utc::now(),
            logos: Vec::new(),
        }
    }

    /// Total pack size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.logos.iter().map(|l| l.bytes).sum()
    }

    /// Write the manifest as pretty JSON into `out_dir`.
    pub async fn write(&self, out_dir: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(out_dir.join(MANIFEST_FILE), json).await?;
        Ok(())
    }
}
