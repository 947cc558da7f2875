//! Corpus validation logic

use crate::markers;
use crate::{GatekeeperError, ValidationConfig};
use bcs_domain::{CodeAddress, RuleFile, Tier, ValidationViolation, ViolationKind};
use bcs_store::{list_sections, CorpusIndex, IndexConfig};
use std::collections::BTreeSet;
use std::fs;

/// Result of validating a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every violation found, grouped by check
    pub violations: Vec<ValidationViolation>,

    /// Whether no violations were found
    pub passed: bool,
}

impl ValidationReport {
    fn from_violations(violations: Vec<ValidationViolation>) -> Self {
        let passed = violations.is_empty();
        Self { violations, passed }
    }

    /// Number of violations of a given kind
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Violations of a given kind
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}

/// The Gatekeeper checks a corpus index against its structural invariants
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Build the index for `index_config` and validate it
    ///
    /// # Errors
    ///
    /// Fails only when the index itself cannot be built.
    pub fn validate_root(
        &self,
        index_config: &IndexConfig,
    ) -> Result<ValidationReport, GatekeeperError> {
        let index = CorpusIndex::build(index_config)?;
        Ok(self.validate(&index))
    }

    /// Validate an index
    ///
    /// Every enabled check runs; none stops at the first problem. Content
    /// problems are reported as violations, never as errors.
    pub fn validate(&self, index: &CorpusIndex) -> ValidationReport {
        let mut violations = Vec::new();

        // 1. Tier completeness
        if self.config.validate_tier_completeness {
            violations.extend(self.check_tier_completeness(index));
        }

        // 2. Code uniqueness
        if self.config.validate_uniqueness {
            violations.extend(scan_violations(index, ViolationKind::DuplicateCode));
        }

        // 3. Naming convention
        if self.config.validate_naming {
            violations.extend(scan_violations(index, ViolationKind::BadNaming));
        }

        // 4. Section-count consistency
        if self.config.validate_section_count {
            violations.extend(self.check_section_count(index));
        }

        // 5. Embedded code markers
        if self.config.validate_markers {
            violations.extend(index.files().filter_map(|file| self.check_markers(file)).flatten());
        }

        let report = ValidationReport::from_violations(violations);
        tracing::info!(
            passed = report.passed,
            violations = report.violations.len(),
            "Corpus validation finished"
        );
        report
    }

    /// Every address with any tier must have all core tiers
    fn check_tier_completeness(&self, index: &CorpusIndex) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();
        for address in index.addresses() {
            let Some(tiers) = index.tiers_for(address) else {
                continue;
            };
            let Some(present) = tiers.values().next() else {
                continue;
            };
            for tier in Tier::CORE {
                if !tiers.contains_key(&tier) {
                    let detail = format!(
                        "{} is missing the {} tier (expected {}{})",
                        address,
                        tier,
                        present.rule_name,
                        tier.file_suffix()
                    );
                    let dir = present
                        .path
                        .parent()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| present.path.clone());
                    violations.push(ValidationViolation::at(ViolationKind::MissingTier, detail, dir));
                }
            }
        }
        violations
    }

    /// Section directories, listed sections and the consolidated table of
    /// contents must agree
    fn check_section_count(&self, index: &CorpusIndex) -> Vec<ValidationViolation> {
        let mut violations = Vec::new();
        let dir_count = index.section_dirs().len();
        let listed = list_sections(index);

        if dir_count != listed.len() {
            let listed_numbers: BTreeSet<u8> =
                listed.iter().map(|s| s.address.section_number()).collect();
            let unlisted: Vec<&str> = index
                .section_dirs()
                .iter()
                .filter(|d| !listed_numbers.contains(&d.number))
                .map(|d| d.name.as_str())
                .collect();
            let mut detail = format!(
                "{} section directories but {} listed sections",
                dir_count,
                listed.len()
            );
            if !unlisted.is_empty() {
                detail.push_str(&format!(" (no section-level files in: {})", unlisted.join(", ")));
            }
            violations.push(ValidationViolation::global(ViolationKind::SectionCountMismatch, detail));
        }

        if let Some(toc) = index.consolidated().get(&Tier::Complete) {
            match fs::read_to_string(toc) {
                Ok(content) => {
                    let headings = markers::count_headings(&content, &self.config.toc_heading_prefix);
                    if headings != dir_count {
                        violations.push(ValidationViolation::at(
                            ViolationKind::SectionCountMismatch,
                            format!(
                                "{} section directories but {} '{}' headings in consolidated document",
                                dir_count,
                                headings,
                                self.config.toc_heading_prefix.trim_end()
                            ),
                            toc.clone(),
                        ));
                    }
                }
                Err(e) => tracing::warn!("Cannot read {}: {}", toc.display(), e),
            }
        }

        violations
    }

    /// Self-referential markers must parse and match the path-derived address
    fn check_markers(&self, file: &RuleFile) -> Option<Vec<ValidationViolation>> {
        let content = match fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                return Some(vec![ValidationViolation::at(
                    ViolationKind::MalformedCode,
                    format!("cannot read file to check markers: {}", e),
                    file.path.clone(),
                )])
            }
        };

        let mut violations = Vec::new();
        if file.tier.is_core() {
            if let Some(token) = markers::heading_marker(&content) {
                match CodeAddress::parse(token) {
                    Err(e) => violations.push(ValidationViolation::at(
                        ViolationKind::MalformedCode,
                        e.to_string(),
                        file.path.clone(),
                    )),
                    Ok(marker) if marker != file.address => {
                        violations.push(ValidationViolation::at(
                            ViolationKind::MalformedCode,
                            format!("marker {} does not match path-derived {}", marker, file.address),
                            file.path.clone(),
                        ))
                    }
                    Ok(_) => {}
                }
            }
        } else {
            let section = file.address.section_address();
            for token in markers::bracket_markers(&content) {
                match CodeAddress::parse(token) {
                    Err(e) => violations.push(ValidationViolation::at(
                        ViolationKind::MalformedCode,
                        e.to_string(),
                        file.path.clone(),
                    )),
                    Ok(marker) if !section.contains(&marker) => {
                        violations.push(ValidationViolation::at(
                            ViolationKind::MalformedCode,
                            format!("marker {} lies outside section {}", marker, section),
                            file.path.clone(),
                        ))
                    }
                    Ok(_) => {}
                }
            }
        }

        if violations.is_empty() {
            None
        } else {
            Some(violations)
        }
    }
}

fn scan_violations(index: &CorpusIndex, kind: ViolationKind) -> Vec<ValidationViolation> {
    index
        .violations()
        .iter()
        .filter(|v| v.kind == kind)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn complete_rule(root: &Path, stem: &str, body: &str) {
        for tier in Tier::CORE {
            write(root, &format!("{}{}", stem, tier.file_suffix()), body);
        }
    }

    fn build(dir: &TempDir) -> CorpusIndex {
        CorpusIndex::build(&IndexConfig::new(dir.path())).unwrap()
    }

    #[test]
    fn test_clean_corpus_passes() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        complete_rule(dir.path(), "01-layout/02-shebang", "## Shebang [BCS0102]\n");
        write(dir.path(), "01-layout/00-layout.rulet.md", "- [BCS0102] shebang\n");

        let report = Gatekeeper::default_config().validate(&build(&dir));
        assert!(report.passed, "{:?}", report.violations);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_missing_summary_is_one_violation() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        write(dir.path(), "01-layout/02-shebang.complete.md", "## Shebang\n");
        write(dir.path(), "01-layout/02-shebang.abstract.md", "## Shebang\n");

        let report = Gatekeeper::default_config().validate(&build(&dir));
        assert!(!report.passed);
        assert_eq!(report.violations.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.kind, ViolationKind::MissingTier);
        assert!(v.detail.contains("summary"));
        assert!(v.detail.contains("BCS0102"));
    }

    #[test]
    fn test_wrong_marker() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        complete_rule(dir.path(), "01-layout/02-shebang", "## Shebang [BCS0102]\n");
        write(dir.path(), "01-layout/02-shebang.summary.md", "## Shebang [BCS0103]\n");
        write(dir.path(), "01-layout/00-layout.rulet.md", "- [BCS0102] ok\n- [BCS0201] wrong\n- [BCS1x] bad\n");

        let report = Gatekeeper::default_config().validate(&build(&dir));
        assert_eq!(report.count(ViolationKind::MalformedCode), 3);
        assert_eq!(report.violations.len(), 3);
    }

    #[test]
    fn test_section_without_section_files() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        fs::create_dir_all(dir.path().join("02-empty")).unwrap();

        let report = Gatekeeper::default_config().validate(&build(&dir));
        assert_eq!(report.count(ViolationKind::SectionCountMismatch), 1);
        assert!(report.violations[0].detail.contains("02-empty"));
    }

    #[test]
    fn test_consolidated_toc_mismatch() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        write(
            dir.path(),
            "BASH-CODING-STANDARD.complete.md",
            "# BCS\n## Layout\n## Variables\n```bash\n## comment\n```\n",
        );

        let report = Gatekeeper::default_config().validate(&build(&dir));
        assert_eq!(report.count(ViolationKind::SectionCountMismatch), 1);
    }

    #[test]
    fn test_all_checks_run_without_short_circuit() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout\n");
        write(dir.path(), "01-layout/01-a.complete.md", "## A [BCS0101]\n");
        write(dir.path(), "01-layout/01-b.complete.md", "## B\n");
        write(dir.path(), "01-layout/Notes.md", "x\n");
        fs::create_dir_all(dir.path().join("02-empty")).unwrap();

        let report = Gatekeeper::default_config().validate(&build(&dir));
        for kind in [
            ViolationKind::MissingTier,
            ViolationKind::DuplicateCode,
            ViolationKind::BadNaming,
            ViolationKind::SectionCountMismatch,
        ] {
            assert!(report.count(kind) > 0, "expected {:?} in {:?}", kind, report.violations);
        }
        assert_eq!(report.count(ViolationKind::MissingTier), 2);
        assert_eq!(report.count(ViolationKind::DuplicateCode), 1);
    }

    #[test]
    fn test_permissive_skips_content_checks() {
        let dir = TempDir::new().unwrap();
        complete_rule(dir.path(), "01-layout/00-section", "# Layout [BCS0909]\n");

        let strict = Gatekeeper::default_config().validate(&build(&dir));
        assert_eq!(strict.count(ViolationKind::MalformedCode), 3);

        let permissive = Gatekeeper::new(ValidationConfig::permissive()).validate(&build(&dir));
        assert!(permissive.passed);
    }

    #[test]
    fn test_validate_root_missing() {
        let result = Gatekeeper::default_config().validate_root(&IndexConfig::new("/no/such/root"));
        assert!(matches!(result, Err(GatekeeperError::Index(_))));
    }
}
