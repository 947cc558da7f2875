//! Tier module - compression levels of the same rule content

/// Tier of a rule document
///
/// Each tier carries the same semantic content at a different compression level:
/// - Complete: full text with examples and rationale
/// - Summary: condensed text
/// - Abstract: the essentials only
/// - Rulet: one line per rule, section granularity only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Most detailed tier
    Complete,

    /// Condensed tier
    Summary,

    /// Essentials-only tier
    Abstract,

    /// Bracketed-code digest, section level only
    Rulet,
}

impl Tier {
    /// All tiers in display order
    pub const ALL: [Tier; 4] = [Tier::Complete, Tier::Summary, Tier::Abstract, Tier::Rulet];

    /// Tiers every rule must provide
    pub const CORE: [Tier; 3] = [Tier::Complete, Tier::Summary, Tier::Abstract];

    /// Get the tier name as used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Complete => "complete",
            Tier::Summary => "summary",
            Tier::Abstract => "abstract",
            Tier::Rulet => "rulet",
        }
    }

    /// Parse a tier from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "complete" => Some(Tier::Complete),
            "summary" => Some(Tier::Summary),
            "abstract" => Some(Tier::Abstract),
            "rulet" => Some(Tier::Rulet),
            _ => None,
        }
    }

    /// Whether this tier is required for every rule and subrule
    pub fn is_core(&self) -> bool {
        !matches!(self, Tier::Rulet)
    }

    /// File suffix for this tier (`.complete.md`)
    pub fn file_suffix(&self) -> String {
        format!(".{}.md", self.as_str())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::parse("SUMMARY"), Some(Tier::Summary));
        assert!("verbose".parse::<Tier>().is_err());
    }

    #[test]
    fn test_core_tiers() {
        assert!(Tier::Complete.is_core());
        assert!(Tier::Abstract.is_core());
        assert!(!Tier::Rulet.is_core());
        assert_eq!(Tier::CORE.len(), 3);
    }

    #[test]
    fn test_display_order_and_suffix() {
        let mut sorted = Tier::ALL;
        sorted.sort();
        assert_eq!(sorted, Tier::ALL);
        assert_eq!(Tier::Rulet.file_suffix(), ".rulet.md");
    }
}
