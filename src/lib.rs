//! Split a packed sprite atlas into per-frame images and rebuild it from them.
//!
//! The atlas layout comes from a TexturePacker-style JSON manifest
//! ([`Manifest`]). Two operations share it:
//!
//! 1. **Extract**: [`extract_sprites`] crops every frame rectangle out of the
//!    atlas and writes it as its own PNG below an output directory.
//! 2. **Apply**: [`apply_sprites`] pastes each sprite back at its recorded
//!    position, onto a base atlas or a transparent canvas of the manifest size,
//!    and writes the rebuilt atlas.
//!
//! Sprite locations are derived from frame names by [`build_sprite_path`], so
//! both directions agree on where a frame lives.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No packing**: frame placement always comes from the manifest.
//! - **Fail fast**: the first fatal error aborts a run; files already written stay.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod atlas;
mod batch;
mod foundation;
mod io;
mod manifest;

pub use atlas::compose::{
    ComposeOpts, ComposeReport, apply_sprites, blank_canvas, compose_frames,
};
pub use atlas::extract::{ExtractReport, crop_frame, extract_frames, extract_sprites};
pub use batch::jobs::{ApplyJob, ApplyTemplate, ExtractJob, ExtractTemplate};
pub use batch::template::{CHAR_PLACEHOLDER, PathTemplate, characters_or_single};
pub use foundation::core::{CanvasSize, FrameRecord, FrameRect};
pub use foundation::error::{AtlasError, AtlasResult};
pub use io::{ensure_dir, ensure_parent_dir, load_rgba, save_png};
pub use manifest::load::{Manifest, load_manifest};
pub use manifest::naming::{DEFAULT_SPRITE_EXT, build_sprite_path, sprite_path};
