use serde::Deserialize;

const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct BranchName(pub String);

impl BranchName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BranchName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_main() {
        assert_eq!(BranchName::default().as_str(), "main");
        assert_eq!(BranchName::new("   ").as_str(), "main");
    }

    #[test]
    fn trims_configured_branch() {
        assert_eq!(BranchName::new(" develop ").as_str(), "develop");
    }

    #[test]
    fn blank_configured_branch_falls_back_to_main() {
        let branch: BranchName = serde_json::from_str("\"\"").unwrap();
        assert_eq!(branch.as_str(), "main");
    }
}
