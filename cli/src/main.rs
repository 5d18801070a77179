use anyhow::bail;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logowall::builder::{run_build, BuildOptions};
use logowall::cli::{Cli, Command};
use logowall::verify::run_verify;
use lw_fetcher::LogoFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logowall=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        Command::Build {
            width,
            height,
            out,
            skip_existing,
            delay_ms,
            cdn_url,
        } => {
            let opts = BuildOptions {
                width,
                height,
                out_dir: out,
                skip_existing,
                delay_ms,
            };
            let fetcher = LogoFetcher::new(cdn_url);
            let report = run_build(&opts, &fetcher).await?;
            report.print_summary();
            // Per-entry failures are expected (not every airline has a CDN
            // logo); the run itself still succeeded.
            Ok(())
        }
        Command::Verify { width, height, dir } => {
            let report = run_verify(&dir, width, height).await?;
            report.print_summary();
            if !report.is_ok() {
                bail!("{} blob(s) failed validation", report.bad.len());
            }
            Ok(())
        }
    }
}
