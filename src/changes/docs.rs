use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::changes::walk::{self, WalkFilter};
use crate::changes::{pick_message, relative_to, text};
use crate::config::RunOptions;
use crate::domain::change::{ChangeKind, ChangeRecord};
use crate::error::AppResult;

const DOC_EXTENSIONS: &[&str] = &["md", "txt"];

const MESSAGES: &[&str] = &[
    "docs: clean up whitespace in {file}",
    "docs: tidy {file}",
    "style: remove trailing whitespace from {file}",
];

/// Normalizes whitespace in a random documentation file, reporting a change
/// only when the file actually needed it.
pub fn tidy_docs<R: Rng + ?Sized>(
    repo: &Path,
    options: RunOptions,
    rng: &mut R,
) -> AppResult<Option<ChangeRecord>> {
    let filter = WalkFilter {
        excluded_dirs: &[],
        skip_hidden_dirs: false,
        extensions: DOC_EXTENSIONS,
    };
    let files = walk::collect_files(repo, &filter)?;
    let Some(path) = files.choose(rng) else {
        return Ok(None);
    };

    let Some(original) = text::read_text(path)? else {
        return Ok(None);
    };
    let normalized = text::normalize(&original);
    if normalized == original {
        return Ok(None);
    }
    text::write_unless_dry_run(path, &normalized, options)?;

    let file = relative_to(repo, path);
    Ok(Some(ChangeRecord {
        message: pick_message(rng, MESSAGES, &file),
        file,
        kind: ChangeKind::Docs,
    }))
}
