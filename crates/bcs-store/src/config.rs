//! Index configuration

use std::path::{Path, PathBuf};

/// Default name prefix of the consolidated standard documents
pub const CONSOLIDATED_PREFIX: &str = "BASH-CODING-STANDARD";

/// Immutable configuration for building a corpus index
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory holding the numbered section directories
    pub root: PathBuf,

    /// File names never treated as tier files
    pub excluded_file_names: Vec<String>,

    /// Directory names whose subtrees are skipped entirely
    pub excluded_dir_names: Vec<String>,

    /// Prefix of consolidated documents (`BASH-CODING-STANDARD.<tier>.md`)
    pub consolidated_prefix: String,
}

impl IndexConfig {
    /// Configuration with default exclusions for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_file_names: vec!["README.md".to_string()],
            excluded_dir_names: vec!["templates".to_string(), "template".to_string()],
            consolidated_prefix: CONSOLIDATED_PREFIX.to_string(),
        }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a file name is one of the named exceptions
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_file_names.iter().any(|n| n == name) || self.is_consolidated(name)
    }

    /// Whether a directory name is skipped
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dir_names.iter().any(|n| n == name)
    }

    /// Whether a file name is a consolidated document or the default link
    pub fn is_consolidated(&self, name: &str) -> bool {
        name.strip_prefix(&self.consolidated_prefix)
            .is_some_and(|rest| rest.starts_with('.') && rest.ends_with(".md"))
    }

    /// File name of the consolidated document for a tier
    pub fn consolidated_name(&self, tier: bcs_domain::Tier) -> String {
        format!("{}{}", self.consolidated_prefix, tier.file_suffix())
    }

    /// File name of the default-tier link
    pub fn default_link_name(&self) -> String {
        format!("{}.md", self.consolidated_prefix)
    }
}
