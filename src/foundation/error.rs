use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Error taxonomy for manifest loading, extraction and composition.
#[derive(thiserror::Error, Debug)]
pub enum AtlasError {
    /// A manifest, atlas or base image path does not exist.
    #[error("not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// A sprite file referenced by the manifest is absent from the sprites directory.
    #[error("missing sprite file: '{}'", path.display())]
    MissingSprite {
        /// Expected sprite location.
        path: PathBuf,
    },

    /// Manifest content is not valid JSON or lacks the expected shape.
    #[error("manifest parse error: {0}")]
    Parse(String),

    /// Frame geometry or canvas setup that cannot be honoured.
    #[error("validation error: {0}")]
    Validation(String),

    /// Sprite dimensions differ from the frame while strict sizing is on.
    #[error(
        "sprite '{}' is {}x{} but frame expects {}x{}",
        path.display(),
        actual.0,
        actual.1,
        expected.0,
        expected.1
    )]
    SizeMismatch {
        /// Sprite file that was loaded.
        path: PathBuf,
        /// Size declared by the manifest frame.
        expected: (u32, u32),
        /// Size of the loaded sprite.
        actual: (u32, u32),
    },

    /// Output file or its parent directory could not be written.
    #[error("write error: {0}")]
    Write(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AtlasError {
    /// Build a [`AtlasError::NotFound`] value.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Build a [`AtlasError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`AtlasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AtlasError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
