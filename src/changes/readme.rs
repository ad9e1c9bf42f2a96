use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use rand::Rng;
use regex::Regex;

use crate::changes::{pick_message, text};
use crate::config::RunOptions;
use crate::domain::change::{ChangeKind, ChangeRecord};
use crate::error::AppResult;

const CANDIDATES: [&str; 4] = ["README.md", "readme.md", "README.txt", "readme.txt"];
const MARKER_PREFIX: &str = "Last updated: ";

const MESSAGES: &[&str] = &[
    "docs: update README timestamp",
    "docs: refresh last updated date in {file}",
    "chore: touch up {file}",
];

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Last updated: \d{4}-\d{2}-\d{2}(?:[T ][0-9:.]+Z?)?")
            .expect("last updated pattern should compile")
    })
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^#[^\n]*$").expect("heading pattern should compile"))
}

/// Rewrites the first README found with today's "Last updated" marker. Always
/// reports a change, even when the stamped content is unchanged.
pub fn touch_readme<R: Rng + ?Sized>(
    repo: &Path,
    today: NaiveDate,
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
    let stamped = stamp(&original, &today.format("%Y-%m-%d").to_string());
    text::write_unless_dry_run(&path, &stamped, options)?;

    let file = Path::new(name).to_path_buf();
    Ok(Some(ChangeRecord {
        message: pick_message(rng, MESSAGES, &file),
        file,
        kind: ChangeKind::Readme,
    }))
}

pub fn stamp(content: &str, date: &str) -> String {
    let content = text::strip_trailing_whitespace(content);
    let marker = format!("{MARKER_PREFIX}{date}");

    if let Some(found) = marker_pattern().find(&content) {
        return format!(
            "{}{marker}{}",
            &content[..found.start()],
            &content[found.end()..]
        );
    }

    if let Some(heading) = heading_pattern().find(&content) {
        let head = &content[..heading.end()];
        let rest = content[heading.end()..].trim_start_matches('\n');
        return if rest.is_empty() {
            format!("{head}\n\n{marker}\n")
        } else {
            format!("{head}\n\n{marker}\n\n{rest}")
        };
    }

    if content.is_empty() {
        format!("{marker}\n")
    } else {
        format!("{marker}\n\n{content}")
    }
}
