//! Text search across tier files.

use bcs_domain::{CodeAddress, RuleFile, Tier};
use regex::{Regex, RegexBuilder};
use std::path::PathBuf;

use crate::error::SdkError;

/// Search parameters
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Regular expression, or literal text when `fixed` is set
    pub pattern: String,
    /// Ignore case
    pub case_insensitive: bool,
    /// Treat the pattern as literal text
    pub fixed: bool,
    /// Lines of context before and after each match
    pub context: usize,
    /// Restrict to one tier
    pub tier: Option<Tier>,
}

impl SearchQuery {
    /// Query for a pattern with default options
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub(crate) fn compile(&self) -> Result<Regex, SdkError> {
        let source = if self.fixed {
            regex::escape(&self.pattern)
        } else {
            self.pattern.clone()
        };
        Ok(RegexBuilder::new(&source)
            .case_insensitive(self.case_insensitive)
            .build()?)
    }
}

/// A matching line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// File containing the match
    pub path: PathBuf,
    /// Address of the file
    pub address: CodeAddress,
    /// Tier of the file
    pub tier: Tier,
    /// 1-based line number
    pub line_number: usize,
    /// The matching line
    pub line: String,
    /// Context lines before the match, with their line numbers
    pub before: Vec<(usize, String)>,
    /// Context lines after the match, with their line numbers
    pub after: Vec<(usize, String)>,
}

/// Scan one file; unreadable files yield no hits
pub(crate) fn scan_file(file: &RuleFile, regex: &Regex, context: usize) -> Vec<SearchHit> {
    let content = match std::fs::read_to_string(&file.path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Skipping {} during search: {}", file.path.display(), e);
            return Vec::new();
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let numbered = |range: std::ops::Range<usize>| -> Vec<(usize, String)> {
        range.map(|i| (i + 1, lines[i].to_string())).collect()
    };

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| regex.is_match(line))
        .map(|(i, line)| SearchHit {
            path: file.path.clone(),
            address: file.address,
            tier: file.tier,
            line_number: i + 1,
            line: line.to_string(),
            before: numbered(i.saturating_sub(context)..i),
            after: numbered(i + 1..(i + 1).saturating_add(context).min(lines.len())),
        })
        .collect()
}
