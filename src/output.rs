//! Image output persistence
//!
//! Validates generated image bytes and writes them with a temp-file rename
//! so a failed write never leaves a partial image behind.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::{Error, Result};

/// Decode `bytes` and write them to `path`, re-encoding to the format the
/// file extension implies (PNG when the extension is missing or unknown).
///
/// Undecodable bytes fail before anything touches the filesystem.
pub fn save_image(bytes: &[u8], path: &Path) -> Result<PathBuf> {
    let decoded = image::load_from_memory(bytes)?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);

    // JPEG cannot carry an alpha channel
    let decoded = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(decoded.to_rgb8())
    } else {
        decoded
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    decoded.write_to(&mut tmp, format)?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Saved image to {}", path.display());
    Ok(path.to_path_buf())
}

/// Default output filename for a restyled image, derived from the input
/// file's stem and the requested style.
pub fn default_output_name(image_path: &Path, style: &str) -> String {
    let stem = image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    format!("output_{}_{}.jpg", stem, style.replace(' ', "_"))
}
