use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading the gallery directory.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The output directory is missing, not a directory, or unreadable.
    #[error("Output directory unavailable: {}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
