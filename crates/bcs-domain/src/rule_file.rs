//! Rule file module - a physical tier document in the corpus

use crate::{CodeAddress, Tier};
use std::path::PathBuf;

/// A tier document discovered on disk
///
/// One RuleFile exists per (address, tier) pair. Created by the corpus scan
/// and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    /// Absolute or root-joined path to the file
    pub path: PathBuf,

    /// Address derived from the file's location
    pub address: CodeAddress,

    /// Tier taken from the file suffix
    pub tier: Tier,

    /// Section directory name (e.g. `01-script-structure`)
    pub section_name: String,

    /// Rule segment name (e.g. `02-shebang`, or `00-section` for section files)
    pub rule_name: String,
}
