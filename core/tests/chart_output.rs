//! The file that lands on disk: PNG, 512x512, RGB.

use campaign_core::{
    finalizer::finalize,
    pipeline,
    CampaignConfig,
};
use image::{GenericImageView, ImageFormat, Rgb, RgbImage};

fn fake_canvas() -> RgbImage {
    RgbImage::from_fn(800, 800, |x, y| {
        if (150..650).contains(&x) && (200..700).contains(&y) {
            Rgb([0x66, 0xc2, 0xa5])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

fn assert_png_512(path: &std::path::Path) {
    let bytes = std::fs::read(path).expect("chart written");
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    assert_eq!(img.color(), image::ColorType::Rgb8, "chart must not carry alpha");
}

#[test]
fn finalize_writes_512_square_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");

    let out = finalize(fake_canvas(), 512, 10, &path).unwrap();
    assert_eq!((out.width, out.height), (512, 512));
    assert_eq!(out.encoded_bytes as u64, std::fs::metadata(&path).unwrap().len());
    assert_png_512(&path);
}

#[test]
fn finalize_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");
    std::fs::write(&path, b"stale").unwrap();

    finalize(fake_canvas(), 512, 10, &path).unwrap();
    assert_png_512(&path);
}

#[test]
fn finalize_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("chart.png");
    assert!(finalize(fake_canvas(), 512, 10, &path).is_err());
}

#[test]
#[ignore = "needs a system sans-serif font for chart text"]
fn full_run_writes_chart_and_summary() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");

    let outcome = pipeline::run(&CampaignConfig::default_test(&path)).unwrap();
    assert_png_512(&path);
    assert_eq!(outcome.summary.total_campaigns, 120);
    assert_eq!(outcome.groups.len(), 4);
    assert!(outcome.summary.to_string().contains("Total Campaigns: 120"));
}
