use std::path::Path;

use rand::Rng;
use serde_json::Value;
use tracing::warn;

use crate::changes::{pick_message, text};
use crate::config::RunOptions;
use crate::domain::change::{ChangeKind, ChangeRecord};
use crate::error::{AppError, AppResult};

const MANIFEST: &str = "package.json";

const MESSAGES: &[&str] = &[
    "chore: tidy {file} formatting",
    "chore: normalize package manifest",
    "style: reformat {file}",
];

/// Reformats `package.json` canonically. Reports a change only when the
/// canonical form differs from what is on disk.
pub fn tidy_manifest<R: Rng + ?Sized>(
    repo: &Path,
    options: RunOptions,
    rng: &mut R,
) -> AppResult<Option<ChangeRecord>> {
    let path = repo.join(MANIFEST);
    if !path.is_file() {
        return Ok(None);
    }

    let Some(original) = text::read_text(&path)? else {
        return Ok(None);
    };
    let formatted = match canonical_manifest(&original) {
        Ok(formatted) => formatted,
        Err(err) => {
            warn!(file = %path.display(), error = %err, "skipping unreadable manifest");
            return Ok(None);
        }
    };
    if formatted == original {
        return Ok(None);
    }

    text::write_unless_dry_run(&path, &formatted, options)?;

    let file = Path::new(MANIFEST).to_path_buf();
    Ok(Some(ChangeRecord {
        message: pick_message(rng, MESSAGES, &file),
        file,
        kind: ChangeKind::Package,
    }))
}

/// Two-space indented JSON with a trailing newline, key order preserved and
/// the `description` field trimmed.
pub fn canonical_manifest(original: &str) -> AppResult<String> {
    let mut manifest: Value = serde_json::from_str(original)
        .map_err(|err| AppError::Manifest(format!("invalid {MANIFEST}: {err}")))?;

    if let Some(Value::String(description)) = manifest.get_mut("description") {
        let trimmed = description.trim().to_string();
        if trimmed.len() != description.len() {
            *description = trimmed;
        }
    }

    let mut formatted = serde_json::to_string_pretty(&manifest)
        .map_err(|err| AppError::Manifest(format!("failed to serialize {MANIFEST}: {err}")))?;
    formatted.push('\n');
    Ok(formatted)
}
