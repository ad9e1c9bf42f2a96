use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Status(PathBuf),
    Pull(PathBuf),
    Clone { url: String, target: PathBuf },
    Checkout(PathBuf, String),
    Stage(PathBuf, PathBuf),
    Commit(PathBuf, String),
    Push(PathBuf, String),
}

/// In-memory git stand-in that records every call.
#[derive(Default)]
pub struct RecordingVersionControl {
    calls: Mutex<Vec<GitCall>>,
    status: HashMap<PathBuf, Vec<String>>,
    failing: HashSet<&'static str>,
}

impl RecordingVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, repo: &Path, lines: &[&str]) -> Self {
        self.status.insert(
            repo.to_path_buf(),
            lines.iter().map(|line| line.to_string()).collect(),
        );
        self
    }

    /// Makes every invocation of `operation` (e.g. `"push"`) fail.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, repo: &Path) -> Vec<GitCall> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                GitCall::Status(path)
                | GitCall::Pull(path)
                | GitCall::Checkout(path, _)
                | GitCall::Stage(path, _)
                | GitCall::Commit(path, _)
                | GitCall::Push(path, _) => path == repo,
                GitCall::Clone { target, .. } => target == repo,
            })
            .collect()
    }

    fn record(&self, operation: &'static str, call: GitCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(operation) {
            return Err(AppError::VersionControl(format!("git {operation} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControlService for RecordingVersionControl {
    async fn status(&self, repo: &Path) -> AppResult<Vec<String>> {
        self.record("status", GitCall::Status(repo.to_path_buf()))?;
        Ok(self.status.get(repo).cloned().unwrap_or_default())
    }

    async fn pull(&self, repo: &Path) -> AppResult<()> {
        self.record("pull", GitCall::Pull(repo.to_path_buf()))
    }

    async fn clone_repository(&self, url: &str, target: &Path) -> AppResult<()> {
        self.record(
            "clone",
            GitCall::Clone {
                url: url.to_string(),
                target: target.to_path_buf(),
            },
        )?;
        fs::create_dir_all(target.join(".git"))?;
        Ok(())
    }

    async fn checkout(&self, repo: &Path, branch: &BranchName) -> AppResult<()> {
        self.record(
            "checkout",
            GitCall::Checkout(repo.to_path_buf(), branch.as_str().to_string()),
        )
    }

    async fn stage(&self, repo: &Path, file: &Path) -> AppResult<()> {
        self.record("stage", GitCall::Stage(repo.to_path_buf(), file.to_path_buf()))
    }

    async fn commit(&self, repo: &Path, message: &str) -> AppResult<()> {
        self.record(
            "commit",
            GitCall::Commit(repo.to_path_buf(), message.to_string()),
        )
    }

    async fn push(&self, repo: &Path, branch: &BranchName) -> AppResult<()> {
        self.record(
            "push",
            GitCall::Push(repo.to_path_buf(), branch.as_str().to_string()),
        )
    }
}
