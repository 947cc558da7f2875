//! Section listing derived from section-level tier files

use crate::index::CorpusIndex;
use bcs_domain::{CodeAddress, Granularity, Tier};
use std::fs;
use std::path::PathBuf;

/// A section as listed by the corpus itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    /// Section address (`BCS01`)
    pub address: CodeAddress,

    /// Section directory name
    pub dir_name: String,

    /// Title from the first `# ` heading, or the humanised directory slug
    pub title: String,

    /// File the title was taken from
    pub path: PathBuf,
}

/// List every section that has at least one section-level tier file
///
/// Sections are returned in ascending order. The title comes from the most
/// detailed tier available.
pub fn list_sections(index: &CorpusIndex) -> Vec<SectionInfo> {
    index
        .addresses()
        .filter(|addr| addr.granularity() == Granularity::Section)
        .filter_map(|addr| {
            let tiers = index.tiers_for(addr)?;
            let file = Tier::ALL.iter().find_map(|tier| tiers.get(tier))?;
            let title = fs::read_to_string(&file.path)
                .ok()
                .and_then(|content| first_title(&content))
                .unwrap_or_else(|| humanize(&file.section_name));
            Some(SectionInfo {
                address: *addr,
                dir_name: file.section_name.clone(),
                title,
                path: file.path.clone(),
            })
        })
        .collect()
}

fn first_title(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// `01-script-structure` -> `Script Structure`
fn humanize(dir_name: &str) -> String {
    let slug = dir_name
        .split_once('-')
        .map(|(_, rest)| rest)
        .unwrap_or(dir_name);
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
