//! Gatekeeper configuration

/// Configuration for validation checks
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Require complete, summary and abstract for every address
    pub validate_tier_completeness: bool,

    /// Surface duplicate (address, tier) claims found by the index
    pub validate_uniqueness: bool,

    /// Surface naming-convention deviations found by the index
    pub validate_naming: bool,

    /// Cross-check section directories against the listed sections
    pub validate_section_count: bool,

    /// Check self-referential code markers inside file bodies
    pub validate_markers: bool,

    /// Heading prefix counted as a section in the consolidated document
    pub toc_heading_prefix: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_tier_completeness: true,
            validate_uniqueness: true,
            validate_naming: true,
            validate_section_count: true,
            validate_markers: true,
            toc_heading_prefix: "## ".to_string(),
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structure only, no content reads)
    pub fn permissive() -> Self {
        Self {
            validate_section_count: false,
            validate_markers: false,
            ..Self::default()
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self::default()
    }
}
