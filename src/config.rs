use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::repository::RepositoryDescriptor;
use crate::error::{AppError, AppResult};

const CONFIG_FILE_NAME: &str = "repos.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub repositories: Vec<RepositoryDescriptor>,
}

/// Per-invocation switches threaded into everything that may write.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
}

impl AppConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::Configuration(format!(
                    "config file not found at {}",
                    path.display()
                )));
            }
            Err(err) => return Err(AppError::Io(err)),
        };

        Self::parse(&contents).map_err(|err| match err {
            AppError::Configuration(message) => {
                AppError::Configuration(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    pub fn parse(contents: &str) -> AppResult<Self> {
        serde_json::from_str::<AppConfig>(contents)
            .map_err(|err| AppError::Configuration(format!("invalid config file: {err}")))
    }
}

/// Directory that relative local paths and fresh clones are anchored to.
pub fn base_directory() -> AppResult<PathBuf> {
    match env::var_os("NUDGE_HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Ok(env::current_dir()?),
    }
}

pub fn config_file_path(base_dir: &Path) -> PathBuf {
    match env::var_os("NUDGE_CONFIG") {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => base_dir.join(CONFIG_FILE_NAME),
    }
}
