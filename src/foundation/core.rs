use crate::foundation::error::{AtlasError, AtlasResult};

/// Pixel rectangle of one frame inside the atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl FrameRect {
    /// Construct a rectangle from its origin and size.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// `(w, h)` of the rectangle.
    pub fn size(self) -> (u32, u32) {
        (self.w, self.h)
    }

    /// Exclusive right edge, widened so `x + w` cannot overflow.
    pub fn right(self) -> u64 {
        u64::from(self.x) + u64::from(self.w)
    }

    /// Exclusive bottom edge, widened so `y + h` cannot overflow.
    pub fn bottom(self) -> u64 {
        u64::from(self.y) + u64::from(self.h)
    }

    /// Check that the rectangle is non-empty and lies within a `width` x `height` image.
    ///
    /// `label` names the frame in the error message.
    pub fn ensure_within(self, label: &str, width: u32, height: u32) -> AtlasResult<()> {
        if self.w == 0 || self.h == 0 {
            return Err(AtlasError::validation(format!(
                "frame '{label}' has empty size {}x{}",
                self.w, self.h
            )));
        }
        if self.right() > u64::from(width) || self.bottom() > u64::from(height) {
            return Err(AtlasError::validation(format!(
                "frame '{label}' ({}, {}, {}x{}) exceeds image bounds {width}x{height}",
                self.x, self.y, self.w, self.h
            )));
        }
        Ok(())
    }
}

/// Canvas dimensions declared by the manifest metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanvasSize {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// True when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One named frame read from the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRecord {
    /// Relative sprite path, possibly without extension.
    pub name: String,
    /// Location of the frame inside the atlas.
    pub rect: FrameRect,
    /// Packer stored the frame rotated by 90 degrees.
    pub rotated: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
