//! Tier resolution - address plus tier selection to file paths

use crate::error::ResolveError;
use crate::index::CorpusIndex;
use bcs_domain::{CodeAddress, Tier};
use std::path::{Path, PathBuf};

/// Which tier(s) a lookup wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSelection {
    /// Exactly this tier
    Exact(Tier),

    /// Every tier that exists, in display order
    All,

    /// The first tier that exists in the resolver's fallback order
    Best,
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A single file (exact or best selection)
    One(PathBuf),

    /// Several files (all selection)
    Many(Vec<PathBuf>),
}

impl Resolved {
    /// Borrow the resolved paths
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Resolved::One(path) => vec![path.as_path()],
            Resolved::Many(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Take the resolved paths
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Resolved::One(path) => vec![path],
            Resolved::Many(paths) => paths,
        }
    }
}

/// Resolves addresses against an index
///
/// The "best" fallback order defaults to complete, summary, abstract, rulet and
/// can be overridden.
#[derive(Debug, Clone)]
pub struct Resolver {
    fallback: Vec<Tier>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            fallback: Tier::ALL.to_vec(),
        }
    }
}

impl Resolver {
    /// Resolver with the default fallback order
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom fallback order
    ///
    /// Duplicates are dropped and tiers left out are appended in display
    /// order, so every existing tier stays reachable.
    pub fn with_fallback(order: Vec<Tier>) -> Self {
        let mut fallback: Vec<Tier> = Vec::with_capacity(Tier::ALL.len());
        for tier in order.into_iter().chain(Tier::ALL) {
            if !fallback.contains(&tier) {
                fallback.push(tier);
            }
        }
        Self { fallback }
    }

    /// The effective fallback order
    pub fn fallback(&self) -> &[Tier] {
        &self.fallback
    }

    /// Resolve an address
    ///
    /// # Errors
    ///
    /// [`ResolveError::CodeNotFound`] when the address has no files at all,
    /// checked before any tier; [`ResolveError::TierNotFound`] when an exact
    /// tier is missing.
    pub fn resolve(
        &self,
        index: &CorpusIndex,
        address: CodeAddress,
        selection: TierSelection,
    ) -> Result<Resolved, ResolveError> {
        let tiers = match index.tiers_for(&address) {
            Some(tiers) if index.contains(&address) && !tiers.is_empty() => tiers,
            _ => return Err(ResolveError::CodeNotFound(address)),
        };

        match selection {
            TierSelection::Exact(tier) => tiers
                .get(&tier)
                .map(|file| Resolved::One(file.path.clone()))
                .ok_or(ResolveError::TierNotFound { address, tier }),
            TierSelection::All => {
                let paths: Vec<PathBuf> = Tier::ALL
                    .iter()
                    .filter_map(|tier| tiers.get(tier))
                    .map(|file| file.path.clone())
                    .collect();
                if paths.is_empty() {
                    Err(ResolveError::CodeNotFound(address))
                } else {
                    Ok(Resolved::Many(paths))
                }
            }
            TierSelection::Best => self
                .fallback
                .iter()
                .find_map(|tier| tiers.get(tier))
                .map(|file| Resolved::One(file.path.clone()))
                .ok_or(ResolveError::CodeNotFound(address)),
        }
    }
}

/// Resolve with the default fallback order
pub fn resolve(
    index: &CorpusIndex,
    address: CodeAddress,
    selection: TierSelection,
) -> Result<Resolved, ResolveError> {
    Resolver::default().resolve(index, address, selection)
}
