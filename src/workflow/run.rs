use rand::Rng;
use tracing::{error, info};

use crate::changes::ChangeGenerator;
use crate::context::AppContext;
use crate::domain::repository::RepositoryDescriptor;
use crate::domain::summary::{RepoOutcome, RunSummary};
use crate::workflow::publish::{commit_change, is_dirty};
use crate::workflow::resolve::resolve_repository;

/// Processes every descriptor in order. A failing repository is counted and
/// the loop moves on.
pub async fn run_all<R: Rng>(
    ctx: &AppContext,
    repositories: &[RepositoryDescriptor],
    generator: &mut ChangeGenerator<R>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for descriptor in repositories {
        let outcome = process_repository(ctx, descriptor, generator).await;
        summary.record(outcome);
    }
    summary
}

async fn process_repository<R: Rng>(
    ctx: &AppContext,
    descriptor: &RepositoryDescriptor,
    generator: &mut ChangeGenerator<R>,
) -> RepoOutcome {
    let name = descriptor.display_name();
    info!(repo = %name, "processing repository");

    let path = match resolve_repository(ctx, descriptor).await {
        Ok(path) => path,
        Err(err) => {
            error!(repo = %name, error = %err, "could not prepare repository");
            return RepoOutcome::Failed;
        }
    };

    if is_dirty(ctx, &path).await {
        info!(repo = %name, "pending local changes; skipping");
        return RepoOutcome::Skipped;
    }

    let change = match generator.generate(&path) {
        Ok(Some(change)) => change,
        Ok(None) => {
            info!(repo = %name, "no applicable change; skipping");
            return RepoOutcome::Skipped;
        }
        Err(err) => {
            error!(repo = %name, error = %err, "could not generate change");
            return RepoOutcome::Failed;
        }
    };
    info!(
        repo = %name,
        kind = %change.kind,
        file = %change.file.display(),
        "generated change"
    );

    match commit_change(ctx, &path, &change, &descriptor.branch).await {
        Ok(()) => RepoOutcome::Committed,
        Err(err) => {
            error!(repo = %name, error = %err, "commit or push failed");
            RepoOutcome::Failed
        }
    }
}
