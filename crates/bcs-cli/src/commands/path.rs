//! Path command implementation.

use super::report_failures;
use crate::cli::PathArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bcs_sdk::BcsClient;

/// Execute the path command.
pub fn execute_path(args: PathArgs, client: &BcsClient, formatter: &Formatter) -> Result<()> {
    let mut lookups = Vec::new();
    let mut failures: Vec<CliError> = Vec::new();

    for file in args.files {
        match client.decode_path(&file) {
            Ok((address, tier)) => lookups.push((file, address, tier)),
            Err(e) => failures.push(e.into()),
        }
    }

    if !lookups.is_empty() {
        println!("{}", formatter.format_lookups(&lookups, client.index().root())?);
    }
    report_failures(failures, formatter, true)
}
