//! Startup configuration for the gallery.
//!
//! The output directory is the only value the gallery itself needs. It is
//! resolved and validated once, when the process starts, and then shared
//! read-only for the lifetime of the process.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::gallery::GalleryError;

/// Environment variable consulted when `--dir` is not given
pub const OUTPUT_DIR_ENV: &str = "GRAPHDEFANG_OUTPUT_DIR";

/// Environment variable consulted when `--port` is not given
pub const PORT_ENV: &str = "GRAPHDEFANG_PORT";

pub const DEFAULT_PORT: u16 = 8080;

/// Validated gallery configuration
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    output_dir: PathBuf,
}

impl GalleryConfig {
    /// Resolve `dir` to an absolute path and check that it is a readable directory.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path) -> Result<Self, GalleryError> {
        let unavailable = |source: std::io::Error| GalleryError::DirectoryUnavailable {
            path: dir.to_path_buf(),
            source,
        };

        let output_dir = dir.canonicalize().map_err(unavailable)?;

        let metadata = std::fs::metadata(&output_dir).map_err(unavailable)?;
        if !metadata.is_dir() {
            return Err(unavailable(std::io::Error::other("not a directory")));
        }

        // Probe readability now rather than on the first request
        std::fs::read_dir(&output_dir).map_err(unavailable)?;

        debug!(output_dir = %output_dir.display(), "output directory validated");
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Address the HTTP server listens on
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
