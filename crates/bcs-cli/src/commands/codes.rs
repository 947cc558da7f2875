//! Codes command implementation.

use crate::cli::CodesArgs;
use crate::error::Result;
use crate::output::Formatter;
use bcs_sdk::BcsClient;

/// Execute the codes command.
pub fn execute_codes(args: CodesArgs, client: &BcsClient, formatter: &Formatter) -> Result<()> {
    let tier = args.tier.tier();
    let codes: Vec<_> = client
        .list_codes()
        .filter(|(_, tiers)| tier.map_or(true, |t| tiers.has(t)))
        .collect();

    println!("{}", formatter.format_codes(&codes)?);
    Ok(())
}
