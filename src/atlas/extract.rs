use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    foundation::core::FrameRecord,
    foundation::error::AtlasResult,
    io,
    manifest::{load::load_manifest, naming},
};

/// Outcome of [`extract_sprites`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Sprite files written, in manifest order.
    pub written: Vec<PathBuf>,
}

/// Slice the atlas at `atlas_path` into one PNG per frame of the manifest at
/// `manifest_path`, written below `output_dir`.
///
/// Existing files are overwritten. The first failure aborts the run; sprites
/// written before it are left in place.
#[tracing::instrument(skip_all, fields(atlas = %atlas_path.display(), out = %output_dir.display()))]
pub fn extract_sprites(
    atlas_path: &Path,
    manifest_path: &Path,
    output_dir: &Path,
) -> AtlasResult<ExtractReport> {
    let manifest = load_manifest(manifest_path)?;
    let atlas = io::load_rgba(atlas_path)?;
    extract_frames(&atlas, &manifest.frames, output_dir)
}

/// Write each of `frames` cropped from an already loaded `atlas`.
pub fn extract_frames(
    atlas: &RgbaImage,
    frames: &[FrameRecord],
    output_dir: &Path,
) -> AtlasResult<ExtractReport> {
    io::ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(frames.len());
    for frame in frames {
        let sprite_path = naming::sprite_path(output_dir, &frame.name)?;
        let sprite = crop_frame(atlas, frame)?;
        io::save_png(&sprite, &sprite_path)?;
        tracing::info!("extracted {} -> {}", frame.name, sprite_path.display());
        written.push(sprite_path);
    }
    Ok(ExtractReport { written })
}

/// Copy the frame's rectangle out of `atlas` into a new `w` x `h` image.
pub fn crop_frame(atlas: &RgbaImage, frame: &FrameRecord) -> AtlasResult<RgbaImage> {
    let (width, height) = atlas.dimensions();
    frame.rect.ensure_within(&frame.name, width, height)?;
    if frame.rotated {
        tracing::warn!(
            "frame {} is marked rotated; it is copied as stored in the atlas",
            frame.name
        );
    }
    let r = frame.rect;
    Ok(image::imageops::crop_imm(atlas, r.x, r.y, r.w, r.h).to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/extract.rs"]
mod tests;
