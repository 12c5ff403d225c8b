use std::path::PathBuf;

use crate::foundation::error::{AtlasError, AtlasResult};

/// Placeholder substituted with the character name in batch runs.
pub const CHAR_PLACEHOLDER: &str = "{char}";

/// A path argument that may contain [`CHAR_PLACEHOLDER`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    arg_name: &'static str,
    raw: String,
}

impl PathTemplate {
    /// `arg_name` is the flag name used in error messages, without dashes.
    pub fn new(arg_name: &'static str, raw: impl Into<String>) -> Self {
        Self {
            arg_name,
            raw: raw.into(),
        }
    }

    /// Template text as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the template contains [`CHAR_PLACEHOLDER`].
    pub fn has_placeholder(&self) -> bool {
        self.raw.contains(CHAR_PLACEHOLDER)
    }

    /// Resolve for one batch entry.
    ///
    /// Without a character the raw text is returned unchanged. With one, every
    /// placeholder is replaced; a template lacking the placeholder is an error
    /// when `require_placeholder` is set and passes through otherwise.
    pub fn resolve(
        &self,
        character: Option<&str>,
        require_placeholder: bool,
    ) -> AtlasResult<PathBuf> {
        let Some(character) = character else {
            return Ok(PathBuf::from(&self.raw));
        };
        if !self.has_placeholder() {
            if require_placeholder {
                return Err(AtlasError::validation(format!(
                    "argument --{} must include '{CHAR_PLACEHOLDER}' when using --characters",
                    self.arg_name
                )));
            }
            return Ok(PathBuf::from(&self.raw));
        }
        Ok(PathBuf::from(self.raw.replace(CHAR_PLACEHOLDER, character)))
    }
}

/// One batch entry per character, or a single un-templated entry when the list is empty.
pub fn characters_or_single(characters: &[String]) -> Vec<Option<&str>> {
    if characters.is_empty() {
        vec![None]
    } else {
        characters.iter().map(|c| Some(c.as_str())).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/template.rs"]
mod tests;
