//! Gallery manifest over a directory of positionally named images.
//!
//! The gallery is a fixed-size ordered set: slot `N` maps to `image-NN.png`
//! under the configured directory. Each slot is probed once at startup; a
//! slot whose file is absent or undecodable renders as a placeholder cell,
//! never as an error.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

/// Caption shown on placeholder cells.
pub const PLACEHOLDER_CAPTION: &str = "Image not found";

/// One slot of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// 1-based position; render order follows it.
    pub index: u32,
    pub path: PathBuf,
    pub caption: String,
    pub status: ImageStatus,
}

/// Probe result for a gallery slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// File exists and decodes; dimensions in pixels.
    Loaded { width: u32, height: u32 },
    /// File absent or unreadable; the slot renders the placeholder.
    Missing,
}

impl GalleryImage {
    pub fn is_missing(&self) -> bool {
        matches!(self.status, ImageStatus::Missing)
    }
}

/// File name for gallery slot `index`.
pub fn image_name(index: u32) -> String {
    format!("image-{index:02}.png")
}

/// Build the manifest for `count` slots under `dir`.
///
/// Probing reads only the image header, not the pixel data. Failures are
/// logged and downgraded to [`ImageStatus::Missing`].
pub fn load_manifest(dir: &Path, count: u32) -> Vec<GalleryImage> {
    (1..=count)
        .map(|index| {
            let path = dir.join(image_name(index));
            let status = match image::image_dimensions(&path) {
                Ok((width, height)) => ImageStatus::Loaded { width, height },
                Err(err) => {
                    debug!("gallery slot {index} unavailable at {}: {err}", path.display());
                    ImageStatus::Missing
                }
            };
            GalleryImage {
                index,
                path,
                caption: format!("Portfolio image {index}"),
                status,
            }
        })
        .collect()
}
