use std::path::Path;

use crate::{
    foundation::core::{CanvasSize, FrameRecord},
    foundation::error::{AtlasError, AtlasResult},
    io,
    manifest::model::{RawManifest, object_only},
};

/// Frame list and canvas metadata read from a sprite-atlas manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Frames in manifest order.
    pub frames: Vec<FrameRecord>,
    /// `meta.size`, or `0x0` when absent.
    pub size: CanvasSize,
    /// `meta.image`: atlas file name recorded by the packer, if any.
    pub image: Option<String>,
}

impl Manifest {
    /// Parse manifest JSON from memory.
    pub fn from_json_str(json: &str) -> AtlasResult<Self> {
        let raw = parse_raw(json.as_bytes()).map_err(AtlasError::parse)?;
        Ok(Self::from_raw(raw))
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> AtlasResult<Self> {
        let bytes = io::read_bytes(path)?;
        let raw = parse_raw(&bytes)
            .map_err(|e| AtlasError::parse(format!("'{}': {e}", path.display())))?;
        let manifest = Self::from_raw(raw);
        tracing::debug!(
            path = %path.display(),
            frames = manifest.frames.len(),
            width = manifest.size.width,
            height = manifest.size.height,
            "loaded manifest"
        );
        Ok(manifest)
    }

    fn from_raw(raw: RawManifest) -> Self {
        let frames = raw
            .frames
            .0
            .into_iter()
            .map(|f| FrameRecord {
                name: f.filename,
                rect: f.frame,
                rotated: f.rotated,
            })
            .collect();
        Self {
            frames,
            size: CanvasSize {
                width: raw.meta.size.w,
                height: raw.meta.size.h,
            },
            image: raw.meta.image.filter(|s| !s.is_empty()),
        }
    }
}

fn parse_raw(bytes: &[u8]) -> Result<RawManifest, String> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let raw = object_only(&mut de).map_err(|e| e.to_string())?;
    de.end().map_err(|e| e.to_string())?;
    Ok(raw)
}

/// Load the manifest at `path`.
pub fn load_manifest(path: impl AsRef<Path>) -> AtlasResult<Manifest> {
    Manifest::from_path(path.as_ref())
}

#[cfg(test)]
#[path = "../../tests/unit/manifest/load.rs"]
mod tests;
