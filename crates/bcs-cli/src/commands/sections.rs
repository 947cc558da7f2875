//! Sections command implementation.

use crate::error::Result;
use crate::output::Formatter;
use bcs_sdk::BcsClient;

/// Execute the sections command.
pub fn execute_sections(client: &BcsClient, formatter: &Formatter) -> Result<()> {
    let sections = client.sections();
    println!("{}", formatter.format_sections(&sections)?);
    Ok(())
}
