//! Filesystem helpers shared by the manifest reader, extractor and composer.
//!
//! Every image passes through here as RGBA8, so callers never see the source
//! channel layout.

use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{AtlasError, AtlasResult};

/// Read a whole file, mapping a missing path to [`AtlasError::NotFound`].
pub fn read_bytes(path: &Path) -> AtlasResult<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AtlasError::not_found(path)),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("read '{}'", path.display()))
            .into()),
    }
}

/// Decode an image file and normalise it to RGBA8.
pub fn load_rgba(path: &Path) -> AtlasResult<RgbaImage> {
    if !path.is_file() {
        return Err(AtlasError::not_found(path));
    }
    let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img.into_rgba8())
}

/// Write `img` as a PNG at `path`, creating parent directories and overwriting any existing file.
pub fn save_png(img: &RgbaImage, path: &Path) -> AtlasResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| AtlasError::write(format!("write png '{}': {e}", path.display())))
}

/// Create `dir` and all of its missing ancestors.
pub fn ensure_dir(dir: &Path) -> AtlasResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AtlasError::write(format!(
            "failed to create directory '{}': {e}",
            dir.display()
        ))
    })
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> AtlasResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../tests/unit/io.rs"]
mod tests;
