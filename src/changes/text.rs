use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::RunOptions;
use crate::error::AppResult;

/// Strips trailing whitespace from every line, keeping the line structure.
pub fn strip_trailing_whitespace(content: &str) -> String {
    content
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trailing whitespace stripped, and non-empty content ends with exactly one
/// newline.
pub fn normalize(content: &str) -> String {
    let stripped = strip_trailing_whitespace(content);
    let body = stripped.trim_end_matches('\n');
    if body.is_empty() {
        String::new()
    } else {
        format!("{body}\n")
    }
}

/// Reads `path` as UTF-8 text. Content that is not valid UTF-8 is not a
/// usable edit target and yields `None`.
pub fn read_text(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            warn!(file = %path.display(), "skipping file that is not valid UTF-8");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn write_unless_dry_run(path: &Path, contents: &str, options: RunOptions) -> AppResult<()> {
    if options.dry_run {
        debug!(file = %path.display(), "dry run: skipping write");
        return Ok(());
    }
    fs::write(path, contents)?;
    Ok(())
}
