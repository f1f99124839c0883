use std::path::Path;

use anyhow::{Context, Result};
use tracing::instrument;

use crate::config::GalleryConfig;
use crate::gallery::render::render_page;
use crate::gallery::{self, View};

/// Render the gallery page for `view` as a complete HTML document.
///
/// View links target `page`. The output is a snapshot of one view: following
/// its links needs a live page under that name (the `serve` command answers
/// `index.php`).
#[instrument(skip_all, fields(dir = %dir.display(), page = %page))]
pub fn run_render(dir: &Path, view: Option<&str>, page: &str) -> Result<String> {
    let config = GalleryConfig::from_dir(dir)
        .with_context(|| format!("Cannot render {}", dir.display()))?;

    let view = View::resolve(view);
    let items = gallery::load(&config, &view)?;

    Ok(render_page(page, &items).into_string())
}
