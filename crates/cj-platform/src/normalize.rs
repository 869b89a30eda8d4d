//! JPEG-compatible color normalization and encoding.

use std::path::Path;

use cj_core::CaptureError;
use image::{DynamicImage, ImageFormat, RgbImage};

/// Collapse any color mode (gray, alpha, 16-bit) into plain three-channel
/// RGB8. JPEG has no alpha or palette support.
pub fn to_rgb(image: &DynamicImage) -> RgbImage {
    image.to_rgb8()
}

/// Normalize `image` and write it as JPEG at `path`. Failures here are
/// save failures, distinct from acquisition failures.
pub fn save_jpeg(image: &DynamicImage, path: &Path) -> Result<(), CaptureError> {
    let rgb = to_rgb(image);
    rgb.save_with_format(path, ImageFormat::Jpeg)
        .map_err(|err| CaptureError::Save(err.to_string()))
}
