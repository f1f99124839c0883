//! Directory scan and view filtering for the graph gallery.
//!
//! The external grapher writes images whose names embed a view tag, e.g.
//! `spam_hourly_summary.png`. A request for view `hourly` lists every such
//! file, and each image links to the view formed by the text that follows the
//! tag (`_summary.png`), so clicking a graph narrows the gallery to its
//! siblings.

mod error;
pub mod render;

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::config::GalleryConfig;

pub use error::GalleryError;

/// View used when the request names none (or an empty one)
pub const DEFAULT_VIEW: &str = "hourly";

/// Views offered in the navigation bar
pub const NAV_VIEWS: [(&str, &str); 3] = [
    ("hourly", "Hourly"),
    ("daily", "Daily"),
    ("monthly", "Monthly"),
];

/// Name of the gallery page; links point back at it
pub const SCRIPT_NAME: &str = "index.php";

/// Editor swap file that tends to sit next to the page
pub const SWAP_FILE_NAME: &str = ".index.php.swp";

const EXCLUDED_NAMES: [&str; 4] = [".", "..", SCRIPT_NAME, SWAP_FILE_NAME];

/// Active view tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View(String);

impl View {
    /// Use `requested` verbatim when present and non-empty, otherwise the default.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some(view) if !view.is_empty() => Self(view.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text after the first occurrence of the view in `name`, or `None` when
    /// `name` does not contain it. Matching is literal and case-sensitive.
    pub fn suffix_of<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.split_once(self.0.as_str()).map(|(_, after)| after)
    }
}

impl Default for View {
    fn default() -> Self {
        Self(DEFAULT_VIEW.to_string())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A matching entry and the view its link leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub filename: String,
    pub suffix: String,
}

/// Whether `name` is one of the entries that are never listed
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.iter().any(|excluded| *excluded == name)
}

/// List the entry names in `dir`, sorted by name, minus the excluded ones.
///
/// Failing to open the directory itself is an error. Entries that cannot be
/// read, or whose names are not UTF-8, are skipped.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_entries(dir: &Path) -> Result<Vec<String>, GalleryError> {
    let mut entries = Vec::new();

    for result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(GalleryError::DirectoryUnavailable {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            debug!(name = ?entry.file_name(), "skipping non-UTF-8 entry");
            continue;
        };

        if is_excluded(name) {
            continue;
        }
        entries.push(name.to_string());
    }

    debug!(count = entries.len(), "scanned entries");
    Ok(entries)
}

/// Keep the entries that contain `view`, paired with their suffix.
pub fn select<I>(entries: I, view: &View) -> Vec<GalleryItem>
where
    I: IntoIterator<Item = String>,
{
    entries
        .into_iter()
        .filter_map(|filename| {
            let suffix = view.suffix_of(&filename)?.to_string();
            Some(GalleryItem { filename, suffix })
        })
        .collect()
}

/// Scan the configured directory and select the items for `view`.
pub fn load(config: &GalleryConfig, view: &View) -> Result<Vec<GalleryItem>, GalleryError> {
    let entries = scan_entries(config.output_dir())?;
    let items = select(entries, view);
    debug!(view = %view, matches = items.len(), "selected gallery items");
    Ok(items)
}
