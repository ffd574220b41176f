//! Post-processing of the rendered chart: tight crop, exact square resize,
//! PNG encode, write to disk.

use crate::error::CampaignResult;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder},
    imageops::{self, FilterType},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// What ended up on disk.
#[derive(Debug, Clone, Serialize)]
pub struct FinalImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub encoded_bytes: usize,
}

/// Crop the white border down to the content bounding box plus `pad`
/// pixels on each side, never past the original edges.
/// An all-white image comes back unchanged.
pub fn trim_margins(img: &RgbImage, pad: u32) -> RgbImage {
    let Some((min_x, min_y, max_x, max_y)) = content_bounds(img) else {
        return img.clone();
    };
    let left = min_x.saturating_sub(pad);
    let top = min_y.saturating_sub(pad);
    let right = (max_x + pad).min(img.width() - 1);
    let bottom = (max_y + pad).min(img.height() - 1);
    imageops::crop_imm(img, left, top, right - left + 1, bottom - top + 1).to_image()
}

/// Inclusive bounding box of every non-background pixel.
fn content_bounds(img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if *px == BACKGROUND {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

/// Exact resize to `side` x `side`, Lanczos3.
pub fn resize_square(img: &RgbImage, side: u32) -> RgbImage {
    imageops::resize(img, side, side, FilterType::Lanczos3)
}

/// RGB8 PNG, best compression.
pub fn encode_png(img: &RgbImage) -> CampaignResult<Vec<u8>> {
    let mut out = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)?;
    Ok(out)
}

/// Trim, resize, encode and write `raw` to `path`, replacing any existing
/// file. The raw canvas is consumed and every intermediate buffer is dropped
/// before returning, on success or error.
pub fn finalize(raw: RgbImage, side: u32, pad: u32, path: &Path) -> CampaignResult<FinalImage> {
    let (raw_w, raw_h) = raw.dimensions();
    let trimmed = trim_margins(&raw, pad);
    drop(raw);

    let resized = resize_square(&trimmed, side);
    log::debug!(
        "finalizer: {raw_w}x{raw_h} -> trimmed {}x{} -> {side}x{side}",
        trimmed.width(),
        trimmed.height()
    );
    drop(trimmed);

    let bytes = encode_png(&resized)?;
    std::fs::write(path, &bytes)?;

    log::info!(
        "finalizer: wrote {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(FinalImage {
        path: path.to_path_buf(),
        width: resized.width(),
        height: resized.height(),
        encoded_bytes: bytes.len(),
    })
}
