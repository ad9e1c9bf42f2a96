use std::path::Path;

use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Porcelain status lines for the working tree; empty when clean.
    async fn status(&self, repo: &Path) -> AppResult<Vec<String>>;
    async fn pull(&self, repo: &Path) -> AppResult<()>;
    async fn clone_repository(&self, url: &str, target: &Path) -> AppResult<()>;
    async fn checkout(&self, repo: &Path, branch: &BranchName) -> AppResult<()>;
    async fn stage(&self, repo: &Path, file: &Path) -> AppResult<()>;
    async fn commit(&self, repo: &Path, message: &str) -> AppResult<()>;
    async fn push(&self, repo: &Path, branch: &BranchName) -> AppResult<()>;
}
