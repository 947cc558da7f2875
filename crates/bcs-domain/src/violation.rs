//! Violation module - structural deviations detected in the corpus

use std::fmt;
use std::path::PathBuf;

/// Kind of structural violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// A core tier is missing for an address
    MissingTier,

    /// Two or more files claim the same address and tier
    DuplicateCode,

    /// A file or directory name deviates from the naming convention
    BadNaming,

    /// Section directories disagree with the listed sections
    SectionCountMismatch,

    /// An embedded code marker is malformed or points at the wrong address
    MalformedCode,
}

impl ViolationKind {
    /// All kinds, in report order
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::MissingTier,
        ViolationKind::DuplicateCode,
        ViolationKind::BadNaming,
        ViolationKind::SectionCountMismatch,
        ViolationKind::MalformedCode,
    ];

    /// Stable identifier used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingTier => "missing-tier",
            ViolationKind::DuplicateCode => "duplicate-code",
            ViolationKind::BadNaming => "bad-naming",
            ViolationKind::SectionCountMismatch => "section-count-mismatch",
            ViolationKind::MalformedCode => "malformed-code",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected deviation
///
/// Violations are data, never errors: they accumulate and are reported together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationViolation {
    /// What kind of invariant was broken
    pub kind: ViolationKind,

    /// Human-readable description
    pub detail: String,

    /// File or directory the violation concerns, if any
    pub path: Option<PathBuf>,
}

impl ValidationViolation {
    /// Create a violation tied to a path
    pub fn at(kind: ViolationKind, detail: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            path: Some(path.into()),
        }
    }

    /// Create a violation not tied to a single path
    pub fn global(kind: ViolationKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            path: None,
        }
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "[{}] {}: {}", self.kind, path.display(), self.detail),
            None => write!(f, "[{}] {}", self.kind, self.detail),
        }
    }
}
