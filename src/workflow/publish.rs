use std::path::Path;

use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::change::ChangeRecord;
use crate::error::AppResult;

/// True when the working tree has pending changes. A status failure counts
/// as clean.
pub async fn is_dirty(ctx: &AppContext, repo: &Path) -> bool {
    match ctx.version_control.status(repo).await {
        Ok(lines) => !lines.is_empty(),
        Err(err) => {
            warn!(path = %repo.display(), error = %err, "could not read status; assuming clean");
            false
        }
    }
}

/// Checks out `branch`, stages the single changed file, commits and pushes.
/// Stops at the first failing step without undoing earlier ones.
pub async fn commit_change(
    ctx: &AppContext,
    repo: &Path,
    change: &ChangeRecord,
    branch: &BranchName,
) -> AppResult<()> {
    if ctx.options.dry_run {
        info!(
            path = %repo.display(),
            file = %change.file.display(),
            branch = branch.as_str(),
            "dry run: would commit \"{}\"",
            change.message
        );
        return Ok(());
    }

    let git = &ctx.version_control;
    git.checkout(repo, branch).await?;
    git.stage(repo, &change.file).await?;
    git.commit(repo, &change.message).await?;
    git.push(repo, branch).await?;

    info!(
        path = %repo.display(),
        branch = branch.as_str(),
        "pushed \"{}\"",
        change.message
    );
    Ok(())
}
