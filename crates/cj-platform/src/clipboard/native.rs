//! Native clipboard grab through the host clipboard library.

use image::DynamicImage;

use super::AcquisitionOutcome;

/// Grab an image via `arboard` (native paths on macOS and Windows, plus
/// some X11 configurations). Every fault is absorbed: a failure here only
/// means "try the next strategy", so nothing is logged above debug level.
pub fn acquire_native() -> AcquisitionOutcome {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(ctx) => ctx,
        Err(err) => {
            log::debug!("native clipboard unavailable: {}", err);
            return AcquisitionOutcome::NoResult;
        }
    };

    let grabbed = match clipboard.get_image() {
        Ok(data) => data,
        Err(err) => {
            log::debug!("native grab produced no image: {}", err);
            return AcquisitionOutcome::NoResult;
        }
    };

    let (width, height) = (grabbed.width as u32, grabbed.height as u32);
    match image::RgbaImage::from_raw(width, height, grabbed.bytes.into_owned()) {
        Some(buffer) => AcquisitionOutcome::Image(DynamicImage::ImageRgba8(buffer)),
        None => {
            log::debug!("native grab returned a malformed pixel buffer");
            AcquisitionOutcome::NoResult
        }
    }
}
