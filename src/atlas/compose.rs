use std::path::Path;

use image::{RgbaImage, imageops::FilterType};

use crate::{
    foundation::core::{CanvasSize, FrameRecord},
    foundation::error::{AtlasError, AtlasResult},
    io,
    manifest::{load::load_manifest, naming},
};

/// Options for [`apply_sprites`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeOpts {
    /// Fail on sprites whose size differs from their frame instead of resizing them.
    pub strict_size: bool,
}

/// Outcome of [`apply_sprites`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeReport {
    /// Output canvas width.
    pub width: u32,
    /// Output canvas height.
    pub height: u32,
    /// Number of sprites pasted.
    pub applied: usize,
    /// Number of sprites that had to be resized to their frame.
    pub resized: usize,
}

/// Rebuild an atlas from the sprites under `sprites_dir` and write it to
/// `output_path` as PNG.
///
/// Starts from `base_path` when given, otherwise from a transparent canvas of
/// the manifest's `meta.size`. A missing sprite aborts the run before the
/// output is written.
#[tracing::instrument(skip_all, fields(sprites = %sprites_dir.display(), out = %output_path.display()))]
pub fn apply_sprites(
    manifest_path: &Path,
    sprites_dir: &Path,
    output_path: &Path,
    base_path: Option<&Path>,
    opts: &ComposeOpts,
) -> AtlasResult<ComposeReport> {
    let manifest = load_manifest(manifest_path)?;

    let mut canvas = match base_path {
        Some(base) => io::load_rgba(base)?,
        None => blank_canvas(manifest.size)?,
    };

    let report = compose_frames(&mut canvas, &manifest.frames, sprites_dir, opts)?;

    io::save_png(&canvas, output_path)?;
    tracing::info!("rebuilt atlas saved to {}", output_path.display());
    Ok(report)
}

/// Fully transparent canvas of `size`.
pub fn blank_canvas(size: CanvasSize) -> AtlasResult<RgbaImage> {
    if size.is_empty() {
        return Err(AtlasError::validation(format!(
            "manifest declares canvas size {}x{} and no base image was given",
            size.width, size.height
        )));
    }
    Ok(RgbaImage::new(size.width, size.height))
}

/// Paste every frame's sprite from `sprites_dir` onto `canvas`, in order.
pub fn compose_frames(
    canvas: &mut RgbaImage,
    frames: &[FrameRecord],
    sprites_dir: &Path,
    opts: &ComposeOpts,
) -> AtlasResult<ComposeReport> {
    let (width, height) = canvas.dimensions();
    let mut report = ComposeReport {
        width,
        height,
        ..ComposeReport::default()
    };

    for frame in frames {
        let sprite_path = naming::sprite_path(sprites_dir, &frame.name)?;
        if !sprite_path.is_file() {
            return Err(AtlasError::MissingSprite { path: sprite_path });
        }
        frame.rect.ensure_within(&frame.name, width, height)?;
        if frame.rotated {
            tracing::warn!(
                "frame {} is marked rotated; sprite is pasted without rotation",
                frame.name
            );
        }

        let sprite = io::load_rgba(&sprite_path)?;
        let (sprite, resized) = fit_to_frame(sprite, frame, &sprite_path, opts)?;
        if resized {
            report.resized += 1;
        }

        let r = frame.rect;
        // Overwrites all four channels of the destination rectangle.
        image::imageops::replace(canvas, &sprite, i64::from(r.x), i64::from(r.y));
        report.applied += 1;
        tracing::info!("applied {} -> ({}, {})", sprite_path.display(), r.x, r.y);
    }

    Ok(report)
}

/// Nearest-neighbour resize of `sprite` to the frame size when they differ.
///
/// Returns the image to paste and whether it was resized.
pub(crate) fn fit_to_frame(
    sprite: RgbaImage,
    frame: &FrameRecord,
    sprite_path: &Path,
    opts: &ComposeOpts,
) -> AtlasResult<(RgbaImage, bool)> {
    let actual = sprite.dimensions();
    let expected = frame.rect.size();
    if actual == expected {
        return Ok((sprite, false));
    }
    if opts.strict_size {
        return Err(AtlasError::SizeMismatch {
            path: sprite_path.to_path_buf(),
            expected,
            actual,
        });
    }

    tracing::warn!(
        "sprite {} size {}x{} does not match frame {}x{}; resizing to fit",
        sprite_path.display(),
        actual.0,
        actual.1,
        expected.0,
        expected.1
    );
    let resized = image::imageops::resize(&sprite, expected.0, expected.1, FilterType::Nearest);
    Ok((resized, true))
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/compose.rs"]
mod tests;
