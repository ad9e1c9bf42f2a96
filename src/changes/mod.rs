//! Trivial single-file edits and the random choice between them.
//!
//! Every strategy takes the repository root and returns the edit it made (or
//! would make, under dry run), or `None` when it found nothing to do.

pub mod comment;
pub mod config_files;
pub mod docs;
pub mod manifest;
pub mod readme;
pub mod text;
pub mod walk;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::RunOptions;
use crate::domain::change::ChangeRecord;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    ReadmeTouch,
    CommentInsertion,
    ManifestCleanup,
    DocsCleanup,
    ConfigCleanup,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ReadmeTouch,
        Strategy::CommentInsertion,
        Strategy::ManifestCleanup,
        Strategy::DocsCleanup,
        Strategy::ConfigCleanup,
    ];

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn apply<R: Rng + ?Sized>(
        self,
        repo: &Path,
        today: NaiveDate,
        options: RunOptions,
        rng: &mut R,
    ) -> AppResult<Option<ChangeRecord>> {
        match self {
            Strategy::ReadmeTouch => readme::touch_readme(repo, today, options, rng),
            Strategy::CommentInsertion => comment::insert_comment(repo, options, rng),
            Strategy::ManifestCleanup => manifest::tidy_manifest(repo, options, rng),
            Strategy::DocsCleanup => docs::tidy_docs(repo, options, rng),
            Strategy::ConfigCleanup => config_files::tidy_config(repo, options, rng),
        }
    }
}

pub struct ChangeGenerator<R = StdRng> {
    rng: R,
    options: RunOptions,
    today: NaiveDate,
    strategy: Option<Strategy>,
}

impl ChangeGenerator<StdRng> {
    pub fn new(options: RunOptions) -> Self {
        Self::with_rng(StdRng::from_entropy(), options)
    }
}

impl<R: Rng> ChangeGenerator<R> {
    pub fn with_rng(rng: R, options: RunOptions) -> Self {
        Self {
            rng,
            options,
            today: Local::now().date_naive(),
            strategy: None,
        }
    }

    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Pins every generation to one strategy instead of a random pick.
    #[cfg(test)]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn generate(&mut self, repo: &Path) -> AppResult<Option<ChangeRecord>> {
        let strategy = match self.strategy {
            Some(strategy) => strategy,
            None => Strategy::pick(&mut self.rng),
        };
        debug!(?strategy, repo = %repo.display(), "generating change");
        strategy.apply(repo, self.today, self.options, &mut self.rng)
    }
}

/// Fills a `{file}` placeholder in a randomly chosen template.
pub(crate) fn pick_message<R: Rng + ?Sized>(
    rng: &mut R,
    templates: &[&str],
    file: &Path,
) -> String {
    let template = templates.choose(rng).copied().unwrap_or_default();
    template.replace("{file}", &display_path(file))
}

pub(crate) fn relative_to(repo: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(repo).unwrap_or(path).to_path_buf()
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
