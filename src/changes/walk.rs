use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

const VCS_DIR: &str = ".git";

/// Installed dependencies and tool caches; never part of a repository's own
/// content.
pub const DEPENDENCY_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "vendor",
    "__pycache__",
    "venv",
    ".venv",
    ".tox",
    ".cache",
    ".next",
];

/// Which directories a walk descends into and which files it keeps. The
/// `.git` directory and [`DEPENDENCY_DIRS`] are always skipped.
pub struct WalkFilter<'a> {
    pub excluded_dirs: &'a [&'a str],
    pub skip_hidden_dirs: bool,
    pub extensions: &'a [&'a str],
}

impl WalkFilter<'_> {
    fn enters(&self, name: &str) -> bool {
        if name == VCS_DIR
            || DEPENDENCY_DIRS.contains(&name)
            || self.excluded_dirs.contains(&name)
        {
            return false;
        }
        !(self.skip_hidden_dirs && name.starts_with('.'))
    }

    fn keeps(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Depth-first listing of matching files under `root`, in a stable
/// (name-sorted) order.
pub fn collect_files(root: &Path, filter: &WalkFilter<'_>) -> AppResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    visit(root, filter, &mut found)?;
    Ok(found)
}

fn visit(dir: &Path, filter: &WalkFilter<'_>, found: &mut Vec<PathBuf>) -> AppResult<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if filter.enters(&entry.file_name().to_string_lossy()) {
                visit(&path, filter, found)?;
            }
        } else if file_type.is_file() && filter.keeps(&path) {
            found.push(path);
        }
    }
    Ok(())
}
