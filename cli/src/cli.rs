//! CLI argument parsing for the LogoWall build tool
//!
//! Two subcommands:
//! - `build`: fetch, convert and write the logo pack
//! - `verify`: validate an existing pack before upload

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LogoWall - Airline logo pack builder for LED matrix flight displays
#[derive(Parser, Debug)]
#[command(name = "logowall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download airline logos and convert them to RGB565 blobs
    ///
    /// Iterates the built-in airline catalog, fetches one PNG per airline
    /// from the logo CDN, converts it to a little-endian RGB565 blob and
    /// writes it to `{OUT}/{ICAO}.bin`. Airlines without a CDN logo are
    /// reported at the end; they are not an error.
    Build {
        /// Logo width in pixels
        #[arg(long, default_value_t = 32)]
        width: u32,

        /// Logo height in pixels
        #[arg(long, default_value_t = 32)]
        height: u32,

        /// Output directory for the .bin files and manifest.json
        #[arg(long, default_value = "data/logos")]
        out: PathBuf,

        /// Skip airlines whose .bin file already exists
        #[arg(long)]
        skip_existing: bool,

        /// Delay between CDN requests in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Logo CDN base URL (override for testing or a mirror)
        #[arg(long, default_value = lw_fetcher::DEFAULT_CDN_URL)]
        cdn_url: String,
    },

    /// Validate every blob in a logo pack directory
    ///
    /// Checks that each `*.bin` file contains exactly `width * height * 2`
    /// bytes, the same check the display firmware performs before drawing.
    /// Exits nonzero if any file fails.
    Verify {
        /// Expected logo width in pixels
        #[arg(long, default_value_t = 32)]
        width: u32,

        /// Expected logo height in pixels
        #[arg(long, default_value_t = 32)]
        height: u32,

        /// Directory containing the .bin files
        #[arg(long, default_value = "data/logos")]
        dir: PathBuf,
    },
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
