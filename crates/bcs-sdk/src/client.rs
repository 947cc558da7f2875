//! BCS client implementation.

use crate::error::SdkError;
use crate::search::{self, SearchHit, SearchQuery};
use bcs_domain::{CodeAddress, Tier};
use bcs_store::{
    list_sections, CorpusIndex, IndexConfig, Resolved, Resolver, SectionInfo, TierSelection,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Separator placed between documents when several are printed together
pub const CONTENT_SEPARATOR: &str = "\n---\n\n";

/// Which tiers exist for an address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierAvailability(BTreeSet<Tier>);

impl TierAvailability {
    /// Whether the tier exists
    pub fn has(&self, tier: Tier) -> bool {
        self.0.contains(&tier)
    }

    /// Present tiers in display order
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.0.iter().copied()
    }

    /// Whether every core tier exists
    pub fn is_complete(&self) -> bool {
        Tier::CORE.iter().all(|tier| self.has(*tier))
    }
}

/// BCS client
///
/// Owns a freshly built corpus index and answers read-only queries over it.
pub struct BcsClient {
    index: CorpusIndex,
    resolver: Resolver,
}

impl BcsClient {
    /// Build the index for `config` and wrap it
    pub fn open(config: &IndexConfig) -> Result<Self, SdkError> {
        Ok(Self::from_index(CorpusIndex::build(config)?, Resolver::default()))
    }

    /// Wrap an existing index
    pub fn from_index(index: CorpusIndex, resolver: Resolver) -> Self {
        Self { index, resolver }
    }

    /// Replace the resolver (e.g. to change the best-tier fallback order)
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The underlying index
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Resolve a single code
    pub fn decode(&self, token: &str, selection: TierSelection) -> Result<Resolved, SdkError> {
        let address = CodeAddress::parse(token)?;
        Ok(self.resolver.resolve(&self.index, address, selection)?)
    }

    /// Resolve several codes; one result per token, in input order
    pub fn decode_to_path<S: AsRef<str>>(
        &self,
        tokens: &[S],
        selection: TierSelection,
    ) -> Vec<Result<Resolved, SdkError>> {
        tokens
            .iter()
            .map(|token| self.decode(token.as_ref(), selection))
            .collect()
    }

    /// Resolve several codes and read their contents
    ///
    /// With [`TierSelection::All`] the tiers of one code are joined with
    /// [`CONTENT_SEPARATOR`].
    pub fn decode_to_content<S: AsRef<str>>(
        &self,
        tokens: &[S],
        selection: TierSelection,
    ) -> Vec<Result<String, SdkError>> {
        tokens
            .iter()
            .map(|token| {
                let resolved = self.decode(token.as_ref(), selection)?;
                let contents = resolved
                    .paths()
                    .into_iter()
                    .map(read_file)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(join_contents(&contents))
            })
            .collect()
    }

    /// Whether a code resolves; never prints or fails
    pub fn exists(&self, token: &str, selection: TierSelection) -> bool {
        self.decode(token, selection).is_ok()
    }

    /// Reverse lookup of a tier file path
    pub fn decode_path(&self, path: &Path) -> Result<(CodeAddress, Tier), SdkError> {
        self.index
            .entry_for_path(path)
            .ok_or_else(|| SdkError::PathNotIndexed(path.to_path_buf()))
    }

    /// Every known code with its tiers, ascending
    ///
    /// Recomputed from the index on every call.
    pub fn list_codes(&self) -> impl Iterator<Item = (CodeAddress, TierAvailability)> + '_ {
        self.index.addresses().map(|address| {
            let tiers = self
                .index
                .tiers_for(address)
                .map(|tiers| tiers.keys().copied().collect())
                .unwrap_or_default();
            (*address, TierAvailability(tiers))
        })
    }

    /// Sections listed by their section-level files
    pub fn sections(&self) -> Vec<SectionInfo> {
        list_sections(&self.index)
    }

    /// Search tier files for a pattern
    ///
    /// The pattern is compiled up front; files are read lazily as the
    /// iterator advances.
    pub fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<impl Iterator<Item = SearchHit> + '_, SdkError> {
        let regex = query.compile()?;
        let tier = query.tier;
        let context = query.context;
        Ok(self
            .index
            .files()
            .filter(move |file| tier.map_or(true, |t| file.tier == t))
            .flat_map(move |file| search::scan_file(file, &regex, context)))
    }
}

/// Join document contents with [`CONTENT_SEPARATOR`]
pub fn join_contents<S: AsRef<str>>(contents: &[S]) -> String {
    contents
        .iter()
        .map(|c| c.as_ref().trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join(CONTENT_SEPARATOR)
        + "\n"
}

fn read_file(path: &Path) -> Result<String, SdkError> {
    fs::read_to_string(path).map_err(|source| SdkError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_contents() {
        assert_eq!(join_contents(&["a\n"]), "a\n");
        assert_eq!(join_contents(&["a\n", "b"]), "a\n---\n\nb\n");
    }

    #[test]
    fn test_tier_availability() {
        let avail = TierAvailability(Tier::CORE.into_iter().collect());
        assert!(avail.is_complete());
        assert!(!avail.has(Tier::Rulet));
        assert_eq!(avail.tiers().count(), 3);
        assert!(!TierAvailability::default().is_complete());
    }
}
