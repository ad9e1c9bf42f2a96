use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Readme,
    Comment,
    Package,
    Docs,
    Config,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Readme => "readme",
            ChangeKind::Comment => "comment",
            ChangeKind::Package => "package",
            ChangeKind::Docs => "docs",
            ChangeKind::Config => "config",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-file edit ready to be committed. `file` is relative to the
/// repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub file: PathBuf,
    pub message: String,
    pub kind: ChangeKind,
}
