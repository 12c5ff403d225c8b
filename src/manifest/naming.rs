use std::path::{Component, Path, PathBuf};

use crate::foundation::error::{AtlasError, AtlasResult};

/// Extension appended to frame names that do not carry one.
pub const DEFAULT_SPRITE_EXT: &str = "png";

/// Map a frame name to its sprite file under `root`.
///
/// Names whose last component already has an extension are used verbatim,
/// anything else gets `.png` appended. Pure function of its inputs, so the
/// extractor and the composer always agree on where a frame lives.
pub fn build_sprite_path(root: &Path, frame_name: &str) -> PathBuf {
    let rel = Path::new(frame_name);
    let has_ext = rel.extension().is_some_and(|ext| !ext.is_empty());
    if has_ext {
        root.join(rel)
    } else {
        root.join(format!("{frame_name}.{DEFAULT_SPRITE_EXT}"))
    }
}

/// Like [`build_sprite_path`], but rejects names that would escape `root`.
pub fn sprite_path(root: &Path, frame_name: &str) -> AtlasResult<PathBuf> {
    if frame_name.is_empty() {
        return Err(AtlasError::validation("frame has an empty name"));
    }
    for c in Path::new(frame_name).components() {
        match c {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AtlasError::validation(format!(
                    "frame name '{frame_name}' must be a relative path inside the sprites directory"
                )));
            }
        }
    }
    Ok(build_sprite_path(root, frame_name))
}

#[cfg(test)]
#[path = "../../tests/unit/manifest/naming.rs"]
mod tests;
