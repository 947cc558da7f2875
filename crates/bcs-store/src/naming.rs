//! File and directory naming rules for the tier tree
//!
//! Names are parsed leniently so that a slightly-off name (`2-Shebang.Complete.md`)
//! still yields an address, while every deviation from the strict convention is
//! reported back as an issue string.

use bcs_domain::Tier;
use regex::Regex;
use std::sync::LazyLock;

/// Strict tier file name: `NN-kebab-name.<tier>.md`
static STRICT_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[a-z0-9-]+\.(complete|summary|abstract|rulet)\.md$").expect("valid strict file regex")
});

/// Lenient tier file name used to recover an address from deviating names
static LENIENT_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<num>[0-9]+)(?P<sep>[-_ ]?)(?P<slug>.*?)\.(?P<tier>complete|summary|abstract|rulet)\.(?P<ext>md)$")
        .expect("valid lenient file regex")
});

/// Strict directory name: `NN-kebab-name`
static STRICT_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[a-z0-9-]+$").expect("valid strict dir regex"));

/// Lenient directory name: any leading number
static LENIENT_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<num>[0-9]+)(?P<sep>[-_ ]?)(?P<slug>.*)$").expect("valid lenient dir regex"));

/// Slug used by core-tier section files
pub const SECTION_SLUG: &str = "section";

/// Components recovered from a numbered name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    /// Leading number
    pub number: u8,

    /// Text after the number and separator
    pub slug: String,

    /// Tier suffix (files only)
    pub tier: Option<Tier>,

    /// Deviations from the strict convention
    pub issues: Vec<String>,
}

impl NameParts {
    /// Whether the name follows the convention exactly
    pub fn is_canonical(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parse a directory name such as `01-script-structure`
///
/// Returns `None` when the name carries no leading number at all, i.e. it is
/// not part of the numbered tree.
pub fn parse_dir_name(name: &str) -> Option<Result<NameParts, String>> {
    let caps = LENIENT_DIR.captures(name)?;
    let number = match parse_number(&caps["num"]) {
        Ok(n) => n,
        Err(reason) => return Some(Err(reason)),
    };

    let mut issues = Vec::new();
    if !STRICT_DIR.is_match(name) {
        issues.extend(describe_deviation(&caps["num"], &caps["sep"], &caps["slug"]));
        if issues.is_empty() {
            issues.push(format!("'{}' does not match NN-kebab-name", name));
        }
    }

    Some(Ok(NameParts {
        number,
        slug: caps["slug"].to_string(),
        tier: None,
        issues,
    }))
}

/// Parse a tier file name such as `02-shebang.complete.md`
///
/// Returns `Err` with a reason when no number and tier can be recovered.
pub fn parse_file_name(name: &str) -> Result<NameParts, String> {
    let caps = LENIENT_FILE
        .captures(name)
        .ok_or_else(|| format!("'{}' is not a NN-name.<tier>.md file", name))?;

    let number = parse_number(&caps["num"])?;
    let tier = Tier::parse(&caps["tier"])
        .ok_or_else(|| format!("unknown tier suffix in '{}'", name))?;

    let mut issues = Vec::new();
    if !STRICT_FILE.is_match(name) {
        issues.extend(describe_deviation(&caps["num"], &caps["sep"], &caps["slug"]));
        if &caps["tier"] != tier.as_str() {
            issues.push(format!("tier suffix '{}' should be lowercase", &caps["tier"]));
        }
        if &caps["ext"] != "md" {
            issues.push(format!("extension '{}' should be lowercase 'md'", &caps["ext"]));
        }
        if issues.is_empty() {
            issues.push(format!("'{}' does not match NN-name.<tier>.md", name));
        }
    }

    Ok(NameParts {
        number,
        slug: caps["slug"].to_string(),
        tier: Some(tier),
        issues,
    })
}

fn parse_number(digits: &str) -> Result<u8, String> {
    match digits.parse::<u8>() {
        Ok(n) if n < 100 => Ok(n),
        _ => Err(format!("number '{}' does not fit in two digits", digits)),
    }
}

fn describe_deviation(num: &str, sep: &str, slug: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if num.len() != 2 {
        issues.push(format!("number '{}' should be two zero-padded digits", num));
    }
    if sep != "-" {
        issues.push(format!("separator after number should be '-', found '{}'", sep));
    }
    if slug.is_empty() {
        issues.push("name is missing after the number".to_string());
    } else if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        issues.push(format!("name '{}' should be lowercase kebab-case", slug));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_file_name() {
        let parts = parse_file_name("02-shebang.complete.md").unwrap();
        assert_eq!(parts.number, 2);
        assert_eq!(parts.slug, "shebang");
        assert_eq!(parts.tier, Some(Tier::Complete));
        assert!(parts.is_canonical());
    }

    #[test]
    fn test_section_rulet_name() {
        let parts = parse_file_name("00-script-structure.rulet.md").unwrap();
        assert_eq!(parts.number, 0);
        assert_eq!(parts.tier, Some(Tier::Rulet));
        assert!(parts.is_canonical());
    }

    #[test]
    fn test_deviating_file_name_still_parses() {
        let parts = parse_file_name("2_Shebang.Summary.md").unwrap();
        assert_eq!(parts.number, 2);
        assert_eq!(parts.tier, Some(Tier::Summary));
        assert_eq!(parts.issues.len(), 4, "{:?}", parts.issues);
    }

    #[test]
    fn test_unrecognized_file_name() {
        assert!(parse_file_name("notes.md").is_err());
        assert!(parse_file_name("02-shebang.verbose.md").is_err());
        assert!(parse_file_name("120-too-big.complete.md").is_err());
    }

    #[test]
    fn test_dir_names() {
        let parts = parse_dir_name("01-script-structure").unwrap().unwrap();
        assert_eq!(parts.number, 1);
        assert!(parts.is_canonical());

        let parts = parse_dir_name("3-Variables").unwrap().unwrap();
        assert_eq!(parts.number, 3);
        assert_eq!(parts.issues.len(), 2);

        assert!(parse_dir_name("templates").is_none());
    }
}
