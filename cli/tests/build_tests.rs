//! End-to-end build and verify tests against a mock CDN

use image::{DynamicImage, Rgba, RgbaImage};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use logowall::builder::{run_build, BuildOptions};
use logowall::manifest::{Manifest, MANIFEST_FILE};
use logowall::verify::run_verify;
use lw_fetcher::LogoFetcher;

/// A small opaque PNG the mock CDN serves for every airline.
fn sample_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 30, 30, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn options(out_dir: std::path::PathBuf) -> BuildOptions {
    BuildOptions {
        width: 32,
        height: 32,
        out_dir,
        skip_existing: false,
        delay_ms: 0,
    }
}

/// Mock CDN: 404 for American Airlines (IATA "AA"), a PNG for everyone else.
async fn start_mock_cdn() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/airlines_AA_128_128_r.png"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(sample_png()),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_build_writes_blobs_and_reports_failures() {
    let mock_server = start_mock_cdn().await;
    let out_dir = tempfile::tempdir().unwrap();

    let opts = options(out_dir.path().to_path_buf());
    let fetcher = LogoFetcher::new(mock_server.uri());
    let report = run_build(&opts, &fetcher).await.unwrap();

    let catalog_len = lw_catalog::len();
    assert_eq!(report.failed, 1);
    assert_eq!(report.ok, catalog_len - 1);
    assert_eq!(report.skipped, 0);
    assert!(report.failed_entries[0].starts_with("AAL/AA"));

    // Every successful airline has a blob of exactly W*H*2 bytes.
    let expected = lw_encoder::expected_len(32, 32);
    let dal = std::fs::read(out_dir.path().join("DAL.bin")).unwrap();
    assert_eq!(dal.len(), expected);
    assert!(!out_dir.path().join("AAL.bin").exists());

    // Manifest covers exactly the successful entries.
    let manifest_json = std::fs::read_to_string(out_dir.path().join(MANIFEST_FILE)).unwrap();
    let manifest: Manifest = serde_json::from_str(&manifest_json).unwrap();
    assert_eq!(manifest.width, 32);
    assert_eq!(manifest.height, 32);
    assert_eq!(manifest.logos.len(), catalog_len - 1);
    assert_eq!(manifest.total_bytes(), (catalog_len - 1) * expected);
    assert_eq!(report.total_bytes, manifest.total_bytes());
}

#[tokio::test]
async fn test_build_skip_existing() {
    let mock_server = start_mock_cdn().await;
    let out_dir = tempfile::tempdir().unwrap();

    // Pre-existing blob for Delta; should not be re-fetched.
    std::fs::write(out_dir.path().join("DAL.bin"), vec![0u8; 2048]).unwrap();

    let opts = BuildOptions {
        skip_existing: true,
        ..options(out_dir.path().to_path_buf())
    };
    let fetcher = LogoFetcher::new(mock_server.uri());
    let report = run_build(&opts, &fetcher).await.unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.ok, lw_catalog::len() - 2); // minus skipped, minus 404
    assert_eq!(report.failed, 1);
}

#[tokio::test]
async fn test_verify_built_pack_passes() {
    let mock_server = start_mock_cdn().await;
    let out_dir = tempfile::tempdir().unwrap();

    let opts = options(out_dir.path().to_path_buf());
    let fetcher = LogoFetcher::new(mock_server.uri());
    let report = run_build(&opts, &fetcher).await.unwrap();

    // manifest.json is ignored; only *.bin files are checked.
    let verify = run_verify(out_dir.path(), 32, 32).await.unwrap();
    assert!(verify.is_ok());
    assert_eq!(verify.ok, report.ok);
}

#[tokio::test]
async fn test_verify_flags_truncated_blob() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("DLH.bin"), vec![0u8; 2048]).unwrap();
    std::fs::write(dir.path().join("BAW.bin"), vec![0u8; 100]).unwrap();

    let report = run_verify(dir.path(), 32, 32).await.unwrap();
    assert_eq!(report.ok, 1);
    assert_eq!(report.bad.len(), 1);
    assert!(report.bad[0].0.ends_with("BAW.bin"));
    assert!(report.bad[0].1.contains("expected 2048"));
}

#[tokio::test]
async fn test_verify_wrong_dimensions_fail() {
    let dir = tempfile::tempdir().unwrap();
    // A 32x32 blob checked against 24x24 expectations.
    std::fs::write(dir.path().join("DLH.bin"), vec![0u8; 2048]).unwrap();

    let report = run_verify(dir.path(), 24, 24).await.unwrap();
    assert_eq!(report.ok, 0);
    assert_eq!(report.bad.len(), 1);
}
