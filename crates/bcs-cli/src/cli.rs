//! CLI command definitions and argument parsing.

use bcs_domain::Tier;
use bcs_store::TierSelection;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// BCS - Look up, search and validate the Bash Coding Standard corpus.
#[derive(Debug, Parser)]
#[command(name = "bcs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Corpus directory holding the numbered section directories
    #[arg(short = 'd', long, global = true, env = "BCS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes or paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve BCS codes to tier files or their contents
    Decode(DecodeArgs),

    /// Resolve tier file paths back to BCS codes
    Path(PathArgs),

    /// List every known code with its available tiers
    Codes(CodesArgs),

    /// Search tier files for a pattern
    #[command(visible_alias = "grep")]
    Search(SearchArgs),

    /// List sections
    Sections,

    /// Show or set the default tier
    Default(DefaultArgs),

    /// Check the corpus against its structural invariants
    Validate(ValidateArgs),
}

/// Mutually exclusive tier flags.
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct TierFlags {
    /// Complete tier
    #[arg(short = 'c', long)]
    pub complete: bool,

    /// Summary tier
    #[arg(short = 's', long)]
    pub summary: bool,

    /// Abstract tier
    #[arg(short = 'a', long = "abstract")]
    pub abstract_tier: bool,

    /// Rulet tier
    #[arg(short = 'r', long)]
    pub rulet: bool,
}

impl TierFlags {
    /// The selected tier, if any flag was given
    pub fn tier(&self) -> Option<Tier> {
        if self.complete {
            Some(Tier::Complete)
        } else if self.summary {
            Some(Tier::Summary)
        } else if self.abstract_tier {
            Some(Tier::Abstract)
        } else if self.rulet {
            Some(Tier::Rulet)
        } else {
            None
        }
    }
}

/// Arguments for the decode command.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Codes to resolve (e.g. BCS0102, 0102, BCS010201)
    #[arg(required = true)]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub tier: TierFlags,

    /// Resolve every available tier
    #[arg(long, conflicts_with_all = ["complete", "summary", "abstract_tier", "rulet"])]
    pub all: bool,

    /// Print file contents instead of paths
    #[arg(short, long)]
    pub print: bool,

    /// Print nothing; report through the exit code only
    #[arg(long, conflicts_with = "print")]
    pub exists: bool,

    /// Print paths relative to the corpus directory
    #[arg(long)]
    pub relative: bool,

    /// Print file names only
    #[arg(long, conflicts_with = "relative")]
    pub basename: bool,
}

impl DecodeArgs {
    /// Tier selection implied by the flags
    pub fn selection(&self) -> TierSelection {
        if self.all {
            TierSelection::All
        } else {
            self.tier
                .tier()
                .map(TierSelection::Exact)
                .unwrap_or(TierSelection::Best)
        }
    }
}

/// Arguments for the path command.
#[derive(Debug, Parser)]
pub struct PathArgs {
    /// Tier files to decode
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the codes command.
#[derive(Debug, Parser)]
pub struct CodesArgs {
    // Only list codes that have this tier
    #[command(flatten)]
    pub tier: TierFlags,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Regular expression (or literal text with --fixed)
    pub pattern: String,

    /// Ignore case
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Lines of context around each match
    #[arg(short = 'C', long, default_value = "0")]
    pub context: usize,

    /// Treat the pattern as literal text
    #[arg(short = 'F', long)]
    pub fixed: bool,

    #[command(flatten)]
    pub tier: TierFlags,
}

/// Arguments for the default command.
#[derive(Debug, Parser)]
pub struct DefaultArgs {
    /// Tier to make the default; omit to show the current one
    pub tier: Option<TierArg>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Skip content checks (markers, section counts)
    #[arg(long)]
    pub permissive: bool,
}

/// Tier argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TierArg {
    /// Complete tier (most detailed)
    Complete,
    /// Summary tier
    Summary,
    /// Abstract tier
    Abstract,
    /// Rulet tier (most compressed)
    Rulet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TierArg> for Tier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Complete => Tier::Complete,
            TierArg::Summary => Tier::Summary,
            TierArg::Abstract => Tier::Abstract,
            TierArg::Rulet => Tier::Rulet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_defaults_to_best() {
        let cli = Cli::parse_from(["bcs", "decode", "BCS0102"]);
        match cli.command {
            Command::Decode(args) => {
                assert_eq!(args.codes, vec!["BCS0102"]);
                assert_eq!(args.selection(), TierSelection::Best);
            }
            _ => panic!("Expected Decode command"),
        }
    }

    #[test]
    fn test_decode_tier_flags() {
        let cli = Cli::parse_from(["bcs", "decode", "-s", "BCS0102", "0103"]);
        match cli.command {
            Command::Decode(args) => {
                assert_eq!(args.selection(), TierSelection::Exact(Tier::Summary));
                assert_eq!(args.codes.len(), 2);
            }
            _ => panic!("Expected Decode command"),
        }

        let cli = Cli::parse_from(["bcs", "decode", "--all", "BCS0102"]);
        match cli.command {
            Command::Decode(args) => assert_eq!(args.selection(), TierSelection::All),
            _ => panic!("Expected Decode command"),
        }
    }

    #[test]
    fn test_conflicting_tier_flags_rejected() {
        assert!(Cli::try_parse_from(["bcs", "decode", "-c", "-s", "BCS0102"]).is_err());
        assert!(Cli::try_parse_from(["bcs", "decode", "--all", "-r", "BCS0102"]).is_err());
        assert!(Cli::try_parse_from(["bcs", "decode"]).is_err());
    }

    #[test]
    fn test_grep_alias() {
        let cli = Cli::parse_from(["bcs", "grep", "-i", "-C", "2", "readonly"]);
        match cli.command {
            Command::Search(args) => {
                assert!(args.ignore_case);
                assert_eq!(args.context, 2);
                assert_eq!(args.pattern, "readonly");
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_tier_conversion() {
        let tier: Tier = TierArg::Abstract.into();
        assert_eq!(tier, Tier::Abstract);
    }
}
