use std::path::Path;
use std::sync::OnceLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::changes::walk::{self, WalkFilter};
use crate::changes::{pick_message, relative_to, text};
use crate::config::RunOptions;
use crate::domain::change::{ChangeKind, ChangeRecord};
use crate::error::AppResult;

const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "ts", "jsx", "tsx", "mjs", "cjs", "py", "rb", "go", "rs", "java", "kt", "swift", "c",
    "h", "cpp", "hpp", "cs", "php",
];

const BUILD_DIRS: &[&str] = &["dist", "build", "target", "coverage"];

const HASH_COMMENT_EXTENSIONS: &[&str] = &["py", "rb"];
const COMMENT_PREFIXES: &[&str] = &["//", "#", "/*", "*"];

const COMMENTS: [&str; 5] = [
    "Keep this in sync with the callers below.",
    "Entry point for the logic in this section.",
    "Reviewed: behavior unchanged.",
    "Consider splitting this up if it keeps growing.",
    "Inputs are validated before reaching this point.",
];

const MESSAGES: &[&str] = &[
    "docs: add clarifying comment to {file}",
    "chore: annotate {file}",
    "docs: document intent in {file}",
];

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*(?:(?:export|default|async|pub(?:\([^)]*\))?",
            r"|public|private|protected|static)\s+)*",
            r"(?:function|class|const|let|var|def|fn|func",
            r"|struct|interface|impl|type|enum|module)\b",
        ))
        .expect("declaration pattern should compile")
    })
}

/// Inserts a canned comment into a randomly chosen source file. Always
/// reports a change when a source file exists.
pub fn insert_comment<R: Rng + ?Sized>(
    repo: &Path,
    options: RunOptions,
    rng: &mut R,
) -> AppResult<Option<ChangeRecord>> {
    let filter = WalkFilter {
        excluded_dirs: BUILD_DIRS,
        skip_hidden_dirs: true,
        extensions: SOURCE_EXTENSIONS,
    };
    let files = walk::collect_files(repo, &filter)?;
    let Some(path) = files.choose(rng) else {
        return Ok(None);
    };

    let comment = COMMENTS.choose(rng).copied().unwrap_or(COMMENTS[0]);
    let line = format!("{} {comment}", comment_marker(path));

    let Some(original) = text::read_text(path)? else {
        return Ok(None);
    };
    let updated = insert_before_declaration(&original, &line);
    text::write_unless_dry_run(path, &updated, options)?;

    let file = relative_to(repo, path);
    Ok(Some(ChangeRecord {
        message: pick_message(rng, MESSAGES, &file),
        file,
        kind: ChangeKind::Comment,
    }))
}

fn comment_marker(path: &Path) -> &'static str {
    let hash = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| HASH_COMMENT_EXTENSIONS.contains(&ext))
        .unwrap_or(false);
    if hash { "#" } else { "//" }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Index of the first declaration-like line, ignoring comment lines.
pub fn declaration_index(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| !is_comment(line) && declaration_pattern().is_match(line))
}

/// Places `comment` on its own line above the first declaration, or at the
/// middle line when nothing looks like a declaration. The new line copies the
/// target line's indentation and line ending.
pub fn insert_before_declaration(content: &str, comment: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let index = declaration_index(&lines).unwrap_or(lines.len() / 2);

    let target = lines.get(index).copied().unwrap_or_default();
    let (body, ending) = match target.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (target, ""),
    };
    let indent = &body[..body.len() - body.trim_start().len()];
    let inserted = format!("{indent}{comment}{ending}");

    lines.insert(index, inserted.as_str());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn inserts_before_first_declaration() {
        let content = "import x from 'x';\n\nexport function run() {\n  return x;\n}\n";
        assert_eq!(
            insert_before_declaration(content, "// note"),
            "import x from 'x';\n\n// note\nexport function run() {\n  return x;\n}\n"
        );
    }

    #[test]
    fn skips_commented_out_declarations() {
        let content = concat!(
            "// function old() {}\n",
            "# def legacy():\n",
            "/* class Gone */\n",
            " * const doc = 1\n",
            "class Live {}\n",
        );
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(declaration_index(&lines), Some(4));
    }

    #[test]
    fn copies_indentation_of_target_line() {
        let content = "mod outer {\n    pub fn inner() {}\n}\n";
        let updated = insert_before_declaration(content, "// note");
        assert_eq!(updated, "mod outer {\n    // note\n    pub fn inner() {}\n}\n");
    }

    #[test]
    fn keeps_crlf_line_endings() {
        let content = "#include <stdio.h>\r\n\r\nstruct point {\r\n  int x;\r\n};\r\n";
        assert_eq!(
            insert_before_declaration(content, "// note"),
            "#include <stdio.h>\r\n\r\n// note\r\nstruct point {\r\n  int x;\r\n};\r\n"
        );

        let no_declaration = "a\r\nb\r\nc\r\n";
        assert_eq!(
            insert_before_declaration(no_declaration, "# note"),
            "a\r\nb\r\n# note\r\nc\r\n"
        );

        let blank_target = "a\r\n\r\n\r\n";
        assert_eq!(
            insert_before_declaration(blank_target, "# note"),
            "a\r\n\r\n# note\r\n\r\n"
        );
    }

    #[test]
    fn matches_python_and_rust_declarations() {
        let python = ["import os", "", "async def handler(event):"];
        assert_eq!(declaration_index(&python), Some(2));

        let rust = ["use std::fs;", "pub(crate) struct Thing;"];
        assert_eq!(declaration_index(&rust), Some(1));
    }

    #[test]
    fn falls_back_to_midpoint_without_declarations() {
        // Five newline-separated segments: the comment lands at index 2.
        let content = "a\nb\nc\nd\n";
        assert_eq!(
            insert_before_declaration(content, "// note"),
            "a\nb\n// note\nc\nd\n"
        );
    }

    #[test]
    fn midpoint_insertion_keeps_comment_lines_intact() {
        let content = "// header\n// more header\nprint('hi')\n";
        let updated = insert_before_declaration(content, "// note");
        assert_eq!(updated, "// header\n// more header\n// note\nprint('hi')\n");
    }

    #[test]
    fn uses_hash_comments_for_python() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/app.py"), "import os\n\ndef main():\n    pass\n").unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let change = insert_comment(dir.path(), RunOptions::default(), &mut rng)
            .unwrap()
            .expect("comment change");

        assert_eq!(change.file, Path::new("pkg").join("app.py"));
        assert_eq!(change.kind, ChangeKind::Comment);
        let updated = fs::read_to_string(dir.path().join("pkg/app.py")).unwrap();
        let lines: Vec<&str> = updated.lines().collect();
        assert!(lines[2].starts_with("# "));
        assert!(COMMENTS.contains(&&lines[2][2..]));
        assert_eq!(lines[3], "def main():");
    }

    #[test]
    fn ignores_dependency_and_build_directories() {
        let dir = tempfile::tempdir().unwrap();
        for excluded in ["node_modules/lib", "dist", ".venv"] {
            fs::create_dir_all(dir.path().join(excluded)).unwrap();
            fs::write(dir.path().join(excluded).join("index.js"), "const a = 1;\n").unwrap();
        }

        let mut rng = StdRng::seed_from_u64(11);
        let change = insert_comment(dir.path(), RunOptions::default(), &mut rng).unwrap();
        assert!(change.is_none());
    }
}
