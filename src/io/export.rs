//! Writing rendered artifacts to disk

use crate::io::error::{PatternError, Result, WithPath};
use image::RgbaImage;
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    Ok(())
}

/// Save a raster preview as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| PatternError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}

/// Save an SVG document
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_svg(document: &str, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, document).with_path(path, "write svg")
}
