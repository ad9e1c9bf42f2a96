use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::repository::RepositoryDescriptor;
use crate::error::{AppError, AppResult};

const VCS_DIR: &str = ".git";

fn is_checkout(dir: &Path) -> bool {
    dir.join(VCS_DIR).exists()
}

/// Makes sure a working copy for `descriptor` exists locally: an existing
/// checkout is refreshed (a failed pull is tolerated), a missing one is
/// cloned when a URL is configured.
pub async fn resolve_repository(
    ctx: &AppContext,
    descriptor: &RepositoryDescriptor,
) -> AppResult<PathBuf> {
    let name = descriptor.display_name();
    let target = descriptor.target_dir(&ctx.base_dir)?;

    if target.is_dir() && is_checkout(&target) {
        info!(repo = %name, path = %target.display(), "refreshing existing checkout");
        if let Err(err) = ctx.version_control.pull(&target).await {
            warn!(repo = %name, error = %err, "pull failed; continuing with local copy");
        }
        return Ok(target);
    }

    if let Some(url) = descriptor.url() {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        info!(repo = %name, url, path = %target.display(), "cloning");
        ctx.version_control.clone_repository(url, &target).await?;
        return Ok(target);
    }

    Err(AppError::Repository(format!(
        "{} is not a git repository and no URL is configured",
        target.display()
    )))
}
