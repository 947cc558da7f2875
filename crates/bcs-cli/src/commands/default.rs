//! Default tier command implementation.

use crate::cli::DefaultArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bcs_domain::Tier;
use bcs_store::{read_default_tier, set_default_tier, IndexConfig};

/// Execute the default command.
///
/// Without a tier, prints the tier the default link points at.
pub fn execute_default(args: DefaultArgs, index_config: &IndexConfig, formatter: &Formatter) -> Result<()> {
    match args.tier {
        None => {
            let tier = read_default_tier(index_config)?
                .ok_or_else(|| CliError::NotFound("No default tier set".to_string()))?;
            match formatter.format() {
                OutputFormat::Json => println!("{}", serde_json::json!({ "default": tier.as_str() })),
                OutputFormat::Table | OutputFormat::Quiet => println!("{}", tier),
            }
        }
        Some(arg) => {
            let tier: Tier = arg.into();
            let link = set_default_tier(index_config, tier)?;
            tracing::info!("Default link {} now targets {}", link.display(), tier);
            if formatter.format() != OutputFormat::Quiet {
                println!("{}", formatter.success(&format!("Default tier set to {}", tier)));
            }
        }
    }
    Ok(())
}
