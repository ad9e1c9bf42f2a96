use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};

const CLONES_DIR: &str = "repos";
const UNKNOWN_NAME: &str = "unknown";

/// One configured repository entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub local_path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub branch: BranchName,
}

impl RepositoryDescriptor {
    pub fn display_name(&self) -> String {
        if let Some(name) = non_empty(&self.name) {
            return name.to_string();
        }
        if let Some(name) = non_empty(&self.url).and_then(name_from_url) {
            return name;
        }
        if let Some(name) = non_empty(&self.local_path).and_then(|path| {
            Path::new(path)
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
        }) {
            return name;
        }
        UNKNOWN_NAME.to_string()
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    /// Working directory for this entry: the explicit local path (anchored at
    /// `base_dir` when relative), else `base_dir/repos/<name>` for URL-only
    /// entries.
    pub fn target_dir(&self, base_dir: &Path) -> AppResult<PathBuf> {
        if let Some(local) = non_empty(&self.local_path) {
            let local = Path::new(local);
            return Ok(if local.is_absolute() {
                local.to_path_buf()
            } else {
                base_dir.join(local)
            });
        }
        if self.url().is_some() {
            return Ok(base_dir.join(CLONES_DIR).join(self.display_name()));
        }
        Err(AppError::Repository("no valid path or URL".to_string()))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn name_from_url(url: &str) -> Option<String> {
    let last = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default();
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
