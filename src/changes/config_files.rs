use std::path::Path;

use rand::Rng;

use crate::changes::{pick_message, text};
use crate::config::RunOptions;
use crate::domain::change::{ChangeKind, ChangeRecord};
use crate::error::AppResult;

const CANDIDATES: [&str; 5] = [
    ".gitignore",
    ".eslintrc",
    ".eslintrc.json",
    "tsconfig.json",
    "jsconfig.json",
];

const MESSAGES: &[&str] = &[
    "chore: normalize {file} formatting",
    "chore: clean up {file}",
    "style: trim whitespace in {file}",
];

/// Normalizes whitespace in the first conventional config file found at the
/// repository root.
pub fn tidy_config<R: Rng + ?Sized>(
    repo: &Path,
    options: RunOptions,
    rng: &mut R,
) -> AppResult<Option<ChangeRecord>> {
    let Some(name) = CANDIDATES.iter().find(|name| repo.join(name).is_file()) else {
        return Ok(None);
    };
    let path = repo.join(name);

    let Some(original) = text::read_text(&path)? else {
        return Ok(None);
    };
    let normalized = text::normalize(&original);
    if normalized == original {
        return Ok(None);
    }
    text::write_unless_dry_run(&path, &normalized, options)?;

    let file = Path::new(name).to_path_buf();
    Ok(Some(ChangeRecord {
        message: pick_message(rng, MESSAGES, &file),
        file,
        kind: ChangeKind::Config,
    }))
}
