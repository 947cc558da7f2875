//! Corpus index - a single tolerant walk of the tier tree
//!
//! The index is rebuilt from disk on every invocation and never patched in
//! place. Bad names and duplicate codes are recorded as violations instead of
//! aborting the walk.

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::naming::{self, NameParts, SECTION_SLUG};
use bcs_domain::{CodeAddress, RuleFile, Tier, ValidationViolation, ViolationKind};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A top-level numbered section directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDir {
    /// Section number from the directory prefix
    pub number: u8,

    /// Directory name (e.g. `01-script-structure`)
    pub name: String,

    /// Full path
    pub path: PathBuf,
}

/// In-memory index of every tier file under a corpus root
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    root: PathBuf,
    by_address: BTreeMap<CodeAddress, BTreeMap<Tier, RuleFile>>,
    by_path: HashMap<PathBuf, (CodeAddress, Tier)>,
    all_addresses: BTreeSet<CodeAddress>,
    section_dirs: Vec<SectionDir>,
    consolidated: BTreeMap<Tier, PathBuf>,
    violations: Vec<ValidationViolation>,
}

impl CorpusIndex {
    /// Walk the configured root and build the index
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::RootNotFound`] if the root is missing or unreadable.
    /// Problems with individual files never fail the build.
    pub fn build(config: &IndexConfig) -> Result<Self, IndexError> {
        let root = fs::canonicalize(&config.root)
            .map_err(|_| IndexError::RootNotFound(config.root.clone()))?;
        if !root.is_dir() || fs::read_dir(&root).is_err() {
            return Err(IndexError::RootNotFound(config.root.clone()));
        }

        let mut builder = Builder::new(root.clone());
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !is_hidden(entry) && !is_excluded_dir(config, entry) && !is_below_rule_level(&root, entry)
            });

        for entry in walker {
            match entry {
                Ok(entry) => builder.visit(config, &entry),
                Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
            }
        }

        let index = builder.finish();
        tracing::info!(
            root = %index.root.display(),
            files = index.by_path.len(),
            addresses = index.all_addresses.len(),
            sections = index.section_dirs.len(),
            violations = index.violations.len(),
            "Corpus index built"
        );
        Ok(index)
    }

    /// Canonical corpus root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every known address in ascending order
    pub fn addresses(&self) -> impl Iterator<Item = &CodeAddress> {
        self.all_addresses.iter()
    }

    /// Whether any tier file exists for the address
    pub fn contains(&self, address: &CodeAddress) -> bool {
        self.all_addresses.contains(address)
    }

    /// Tier files recorded for an address
    pub fn tiers_for(&self, address: &CodeAddress) -> Option<&BTreeMap<Tier, RuleFile>> {
        self.by_address.get(address)
    }

    /// The file for an address and tier
    pub fn get(&self, address: &CodeAddress, tier: Tier) -> Option<&RuleFile> {
        self.by_address.get(address).and_then(|tiers| tiers.get(&tier))
    }

    /// Every indexed file in address order, tiers in display order
    pub fn files(&self) -> impl Iterator<Item = &RuleFile> {
        self.by_address.values().flat_map(|tiers| tiers.values())
    }

    /// Number of indexed files (first-seen duplicates only)
    pub fn len(&self) -> usize {
        self.by_address.values().map(BTreeMap::len).sum()
    }

    /// Whether the index holds no files
    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    /// Reverse lookup: address and tier claimed by a path
    ///
    /// Accepts absolute paths, paths relative to the corpus root, and paths
    /// relative to the current directory.
    pub fn entry_for_path(&self, path: &Path) -> Option<(CodeAddress, Tier)> {
        let mut candidates = Vec::with_capacity(3);
        if path.is_relative() {
            candidates.push(self.root.join(path));
        }
        candidates.push(path.to_path_buf());
        if let Ok(canonical) = fs::canonicalize(path) {
            candidates.push(canonical);
        }
        candidates
            .iter()
            .find_map(|candidate| self.by_path.get(candidate).copied())
    }

    /// Reverse lookup: address claimed by a path
    pub fn address_of(&self, path: &Path) -> Option<CodeAddress> {
        self.entry_for_path(path).map(|(address, _)| address)
    }

    /// Top-level numbered section directories, in walk order
    pub fn section_dirs(&self) -> &[SectionDir] {
        &self.section_dirs
    }

    /// Consolidated `BASH-CODING-STANDARD.<tier>.md` documents found in the root
    pub fn consolidated(&self) -> &BTreeMap<Tier, PathBuf> {
        &self.consolidated
    }

    /// Naming and duplicate problems found during the walk
    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Entries under a directory nested below rule level; that directory is
/// flagged once and its subtree is not walked
fn is_below_rule_level(root: &Path, entry: &DirEntry) -> bool {
    entry.depth() > 3
        && entry
            .path()
            .strip_prefix(root)
            .ok()
            .and_then(|rel| rel.components().next())
            .and_then(|first| first.as_os_str().to_str())
            .is_some_and(|first| section_parts(first).is_some())
}

fn is_excluded_dir(config: &IndexConfig, entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded_dir(name))
}

/// Accumulates index state during the walk
struct Builder {
    root: PathBuf,
    by_address: BTreeMap<CodeAddress, BTreeMap<Tier, RuleFile>>,
    by_path: HashMap<PathBuf, (CodeAddress, Tier)>,
    all_addresses: BTreeSet<CodeAddress>,
    section_dirs: Vec<SectionDir>,
    consolidated: BTreeMap<Tier, PathBuf>,
    violations: Vec<ValidationViolation>,
    duplicates: BTreeMap<(CodeAddress, Tier), Vec<PathBuf>>,
}

impl Builder {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            by_address: BTreeMap::new(),
            by_path: HashMap::new(),
            all_addresses: BTreeSet::new(),
            section_dirs: Vec::new(),
            consolidated: BTreeMap::new(),
            violations: Vec::new(),
            duplicates: BTreeMap::new(),
        }
    }

    fn visit(&mut self, config: &IndexConfig, entry: &DirEntry) {
        let path = entry.path();
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let Some(components) = rel
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<&str>>>()
        else {
            self.bad_naming(path, "path is not valid UTF-8".to_string());
            return;
        };

        let is_dir = entry.file_type().is_dir();
        let is_file = entry.file_type().is_file()
            || (entry.file_type().is_symlink() && path.is_file());

        if is_dir {
            self.visit_dir(path, &components);
        } else if is_file {
            self.visit_file(config, path, &components);
        }
    }

    fn visit_dir(&mut self, path: &Path, components: &[&str]) {
        match components {
            [name] => match naming::parse_dir_name(name) {
                None => tracing::debug!("Ignoring non-section directory {}", path.display()),
                Some(Err(reason)) => self.bad_naming(path, reason),
                Some(Ok(parts)) => {
                    if !parts.is_canonical() {
                        self.bad_naming(path, parts.issues.join("; "));
                    }
                    self.section_dirs.push(SectionDir {
                        number: parts.number,
                        name: name.to_string(),
                        path: path.to_path_buf(),
                    });
                }
            },
            [section, name] => {
                if section_parts(section).is_none() {
                    return;
                }
                match naming::parse_dir_name(name) {
                    None => self.bad_naming(path, format!("directory '{}' is not numbered", name)),
                    Some(Err(reason)) => self.bad_naming(path, reason),
                    Some(Ok(parts)) if parts.number == 0 => {
                        self.bad_naming(path, "rule directories cannot be numbered 00".to_string())
                    }
                    Some(Ok(parts)) => {
                        if !parts.is_canonical() {
                            self.bad_naming(path, parts.issues.join("; "));
                        }
                    }
                }
            }
            [section, _, _, ..] => {
                if section_parts(section).is_some() {
                    self.bad_naming(path, "directory nested deeper than rule level".to_string());
                }
            }
            [] => {}
        }
    }

    fn visit_file(&mut self, config: &IndexConfig, path: &Path, components: &[&str]) {
        let Some((name, dirs)) = components.split_last() else {
            return;
        };

        if dirs.is_empty() {
            self.visit_root_file(config, path, name);
            return;
        }

        if !name.to_ascii_lowercase().ends_with(".md") || config.is_excluded_file(name) {
            tracing::debug!("Ignoring non-tier file {}", path.display());
            return;
        }
        let Some(section) = dirs.first().and_then(|d| section_parts(d)) else {
            self.stray_tier_file(path, name);
            return;
        };

        let mut parts = match naming::parse_file_name(name) {
            Ok(parts) => parts,
            Err(reason) => {
                self.bad_naming(path, reason);
                return;
            }
        };
        let Some(tier) = parts.tier else {
            return;
        };

        let (address, rule_name) = match dirs {
            [_] => {
                if parts.number == 0 {
                    if tier.is_core() && parts.slug != SECTION_SLUG {
                        parts.issues.push(format!(
                            "section-level {} file should be named 00-{}{}",
                            tier,
                            SECTION_SLUG,
                            tier.file_suffix()
                        ));
                    }
                    (CodeAddress::section(section.number), file_stem(name, tier))
                } else {
                    (
                        CodeAddress::rule(section.number, parts.number),
                        file_stem(name, tier),
                    )
                }
            }
            [_, rule_dir] => {
                let Some(Ok(rule)) = naming::parse_dir_name(rule_dir) else {
                    return;
                };
                if rule.number == 0 {
                    return;
                }
                if parts.number == 0 {
                    self.bad_naming(path, "subrule files cannot be numbered 00".to_string());
                    return;
                }
                (
                    CodeAddress::subrule(section.number, rule.number, parts.number),
                    rule_dir.to_string(),
                )
            }
            _ => return,
        };

        if !parts.is_canonical() {
            self.bad_naming(path, parts.issues.join("; "));
        }

        tracing::debug!("Indexed {} as {} ({})", path.display(), address, tier);
        self.insert(RuleFile {
            path: path.to_path_buf(),
            address,
            tier,
            section_name: dirs[0].to_string(),
            rule_name,
        });
    }

    fn visit_root_file(&mut self, config: &IndexConfig, path: &Path, name: &str) {
        for tier in Tier::ALL {
            if name == config.consolidated_name(tier) {
                self.consolidated.insert(tier, path.to_path_buf());
                return;
            }
        }
        if config.is_excluded_file(name) {
            tracing::debug!("Ignoring root-level file {}", path.display());
            return;
        }
        self.stray_tier_file(path, name);
    }

    /// A file outside the section tree is only a problem if it is named like a tier file
    fn stray_tier_file(&mut self, path: &Path, name: &str) {
        if naming::parse_file_name(name).is_ok() {
            self.bad_naming(path, "tier file outside any section directory".to_string());
        } else {
            tracing::debug!("Ignoring file outside section tree {}", path.display());
        }
    }

    fn insert(&mut self, file: RuleFile) {
        self.by_path.insert(file.path.clone(), (file.address, file.tier));
        self.all_addresses.insert(file.address);

        let key = (file.address, file.tier);
        match self.by_address.entry(file.address).or_default().entry(file.tier) {
            Entry::Occupied(existing) => {
                tracing::debug!(
                    "Duplicate {} ({}) at {}",
                    file.address,
                    file.tier,
                    file.path.display()
                );
                self.duplicates
                    .entry(key)
                    .or_insert_with(|| vec![existing.get().path.clone()])
                    .push(file.path);
            }
            Entry::Vacant(slot) => {
                slot.insert(file);
            }
        }
    }

    fn bad_naming(&mut self, path: &Path, detail: String) {
        tracing::debug!("Bad naming at {}: {}", path.display(), detail);
        self.violations
            .push(ValidationViolation::at(ViolationKind::BadNaming, detail, path));
    }

    fn finish(mut self) -> CorpusIndex {
        for ((address, tier), paths) in std::mem::take(&mut self.duplicates) {
            let listed: Vec<String> = paths
                .iter()
                .map(|p| p.strip_prefix(&self.root).unwrap_or(p).display().to_string())
                .collect();
            let detail = format!(
                "{} ({}) is claimed by {} files: {}",
                address,
                tier,
                paths.len(),
                listed.join(", ")
            );
            self.violations.push(ValidationViolation::at(
                ViolationKind::DuplicateCode,
                detail,
                paths[0].clone(),
            ));
        }

        CorpusIndex {
            root: self.root,
            by_address: self.by_address,
            by_path: self.by_path,
            all_addresses: self.all_addresses,
            section_dirs: self.section_dirs,
            consolidated: self.consolidated,
            violations: self.violations,
        }
    }
}

fn section_parts(name: &str) -> Option<NameParts> {
    naming::parse_dir_name(name).and_then(Result::ok)
}

fn file_stem(name: &str, tier: Tier) -> String {
    let lower = name.to_ascii_lowercase();
    let cut = lower
        .strip_suffix(&tier.file_suffix())
        .map(str::len)
        .unwrap_or(name.len());
    name[..cut].to_string()
}
