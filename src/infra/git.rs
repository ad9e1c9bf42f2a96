use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const DEFAULT_REMOTE: &str = "origin";

/// Drives the `git` binary found on `PATH`. Credentials come from the ambient
/// SSH agent or credential helper.
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    async fn run<I, S>(&self, cwd: Option<&Path>, args: I) -> AppResult<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let rendered = format!(
            "git {}",
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        debug!(command = %rendered, "running git");

        let mut command = Command::new("git");
        command.args(&args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|err| {
            AppError::VersionControl(format!("failed to run `{rendered}`: {err}"))
        })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr.into_owned()
        };
        Err(AppError::VersionControl(format!(
            "`{rendered}` failed with {}: {}",
            output.status,
            detail.trim()
        )))
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn status(&self, repo: &Path) -> AppResult<Vec<String>> {
        let stdout = self.run(Some(repo), ["status", "--porcelain"]).await?;
        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn pull(&self, repo: &Path) -> AppResult<()> {
        self.run(Some(repo), ["pull"]).await.map(|_| ())
    }

    async fn clone_repository(&self, url: &str, target: &Path) -> AppResult<()> {
        let args: Vec<OsString> = vec!["clone".into(), url.into(), target.as_os_str().to_owned()];
        self.run(None, args).await.map(|_| ())
    }

    async fn checkout(&self, repo: &Path, branch: &BranchName) -> AppResult<()> {
        self.run(Some(repo), ["checkout", branch.as_str()])
            .await
            .map(|_| ())
    }

    async fn stage(&self, repo: &Path, file: &Path) -> AppResult<()> {
        let args: Vec<OsString> = vec!["add".into(), "--".into(), file.as_os_str().to_owned()];
        self.run(Some(repo), args).await.map(|_| ())
    }

    async fn commit(&self, repo: &Path, message: &str) -> AppResult<()> {
        self.run(Some(repo), ["commit", "-m", message])
            .await
            .map(|_| ())
    }

    async fn push(&self, repo: &Path, branch: &BranchName) -> AppResult<()> {
        self.run(Some(repo), ["push", DEFAULT_REMOTE, branch.as_str()])
            .await
            .map(|_| ())
    }
}
