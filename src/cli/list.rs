use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::GalleryConfig;
use crate::gallery::{self, GalleryItem, View};

/// Options for the list command
#[derive(Debug, Default)]
pub struct ListOptions {
    pub view: Option<String>,
}

/// List the entries of `dir` that match the requested view
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn run_list(dir: &Path, options: ListOptions) -> Result<Vec<GalleryItem>> {
    let config = GalleryConfig::from_dir(dir)
        .with_context(|| format!("Cannot list {}", dir.display()))?;

    let view = View::resolve(options.view.as_deref());
    let items = gallery::load(&config, &view)?;
    info!(view = %view, count = items.len(), "listed gallery");

    Ok(items)
}
