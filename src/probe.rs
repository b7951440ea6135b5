//! File probing collaborators.
//!
//! The builder itself never touches the filesystem; everything it needs
//! from the backing image file goes through [`FileProbe`]. A probe failure
//! is never fatal — the builder logs it and treats the field as
//! unavailable.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;

/// What the builder may ask about the backing image file.
pub trait FileProbe {
    /// Pixel dimensions (width, height), read from the file itself.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32)>;

    /// MIME type guessed from the file name. `None` for unknown extensions.
    fn mime_type(&self, path: &Path) -> Option<String>;

    /// File modification timestamp.
    fn modified(&self, path: &Path) -> Result<NaiveDateTime>;
}

/// The standard filesystem-backed probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        image::image_dimensions(path)
            .with_context(|| format!("Failed to read image dimensions from {}", path.display()))
    }

    fn mime_type(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        let mime = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "tif" | "tiff" => "image/tiff",
            "bmp" => "image/bmp",
            "heic" => "image/heic",
            "heif" => "image/heif",
            "avif" => "image/avif",
            _ => return None,
        };
        Some(mime.to_string())
    }

    fn modified(&self, path: &Path) -> Result<NaiveDateTime> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let modified = metadata.modified().context("Failed to read mtime")?;
        let since_epoch = modified
            .duration_since(std::time::UNIX_EPOCH)
            .context("mtime predates the epoch")?;
        chrono::DateTime::from_timestamp(since_epoch.as_secs() as i64, 0)
            .map(|dt| dt.naive_utc())
            .context("mtime out of range")
    }
}

/// A probe that knows nothing. Useful when no backing file exists (e.g.
/// records rebuilt from a sidecar alone).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProbe;

impl FileProbe for NullProbe {
    fn dimensions(&self, _path: &Path) -> Result<(u32, u32)> {
        anyhow::bail!("no backing file")
    }

    fn mime_type(&self, _path: &Path) -> Option<String> {
        None
    }

    fn modified(&self, _path: &Path) -> Result<NaiveDateTime> {
        anyhow::bail!("no backing file")
    }
}
