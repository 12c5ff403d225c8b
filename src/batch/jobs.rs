use std::path::{Path, PathBuf};

use crate::{
    atlas::compose::{ComposeOpts, ComposeReport, apply_sprites},
    atlas::extract::{ExtractReport, extract_frames},
    batch::template::{PathTemplate, characters_or_single},
    foundation::error::{AtlasError, AtlasResult},
    io,
    manifest::load::{Manifest, load_manifest},
};

/// Path arguments of an extract run before `{char}` expansion.
#[derive(Clone, Debug)]
pub struct ExtractTemplate {
    /// Atlas image. `None` falls back to the manifest's `meta.image`.
    pub atlas: Option<PathTemplate>,
    /// Manifest JSON.
    pub data: PathTemplate,
    /// Sprite output directory.
    pub out: PathTemplate,
}

/// Fully resolved inputs of one extract invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractJob {
    /// Character this job was expanded for.
    pub character: Option<String>,
    /// Atlas image, if given explicitly.
    pub atlas: Option<PathBuf>,
    /// Manifest JSON.
    pub data: PathBuf,
    /// Sprite output directory.
    pub out: PathBuf,
}

impl ExtractTemplate {
    /// Expand into one job per character (or a single job without characters).
    pub fn jobs(&self, characters: &[String]) -> AtlasResult<Vec<ExtractJob>> {
        let require = !characters.is_empty();
        characters_or_single(characters)
            .into_iter()
            .map(|character| -> AtlasResult<ExtractJob> {
                Ok(ExtractJob {
                    character: character.map(str::to_owned),
                    atlas: self
                        .atlas
                        .as_ref()
                        .map(|t| t.resolve(character, require))
                        .transpose()?,
                    data: self.data.resolve(character, require)?,
                    out: self.out.resolve(character, require)?,
                })
            })
            .collect()
    }
}

impl ExtractJob {
    /// Atlas path: the explicit one, or `meta.image` of `manifest` next to the manifest file.
    pub fn atlas_path(&self, manifest: &Manifest) -> AtlasResult<PathBuf> {
        if let Some(atlas) = &self.atlas {
            return Ok(atlas.clone());
        }
        let image = manifest.image.as_deref().ok_or_else(|| {
            AtlasError::validation(format!(
                "no atlas image given and manifest '{}' has no meta.image",
                self.data.display()
            ))
        })?;
        let dir = self.data.parent().unwrap_or_else(|| Path::new(""));
        Ok(dir.join(image))
    }

    /// Run the extraction, reading the manifest once.
    #[tracing::instrument(skip_all, fields(data = %self.data.display(), out = %self.out.display()))]
    pub fn run(&self) -> AtlasResult<ExtractReport> {
        let manifest = load_manifest(&self.data)?;
        let atlas_path = self.atlas_path(&manifest)?;
        let atlas = io::load_rgba(&atlas_path)?;
        extract_frames(&atlas, &manifest.frames, &self.out)
    }
}

/// Path arguments of an apply run before `{char}` expansion.
#[derive(Clone, Debug)]
pub struct ApplyTemplate {
    /// Manifest JSON.
    pub data: PathTemplate,
    /// Directory holding the edited sprites.
    pub sprites: PathTemplate,
    /// Rebuilt atlas destination.
    pub out: PathTemplate,
    /// Optional base atlas; the placeholder is never required here.
    pub base: Option<PathTemplate>,
}

/// Fully resolved inputs of one apply invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyJob {
    /// Character this job was expanded for.
    pub character: Option<String>,
    /// Manifest JSON.
    pub data: PathBuf,
    /// Directory holding the edited sprites.
    pub sprites: PathBuf,
    /// Rebuilt atlas destination.
    pub out: PathBuf,
    /// Optional base atlas.
    pub base: Option<PathBuf>,
}

impl ApplyTemplate {
    /// Expand into one job per character (or a single job without characters).
    pub fn jobs(&self, characters: &[String]) -> AtlasResult<Vec<ApplyJob>> {
        let require = !characters.is_empty();
        characters_or_single(characters)
            .into_iter()
            .map(|character| -> AtlasResult<ApplyJob> {
                Ok(ApplyJob {
                    character: character.map(str::to_owned),
                    data: self.data.resolve(character, require)?,
                    sprites: self.sprites.resolve(character, require)?,
                    out: self.out.resolve(character, require)?,
                    base: self
                        .base
                        .as_ref()
                        .map(|t| t.resolve(character, false))
                        .transpose()?,
                })
            })
            .collect()
    }
}

impl ApplyJob {
    /// Run the composition.
    pub fn run(&self, opts: &ComposeOpts) -> AtlasResult<ComposeReport> {
        apply_sprites(
            &self.data,
            &self.sprites,
            &self.out,
            self.base.as_deref(),
            opts,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/jobs.rs"]
mod tests;
