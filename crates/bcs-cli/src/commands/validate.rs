//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bcs_gatekeeper::{Gatekeeper, ValidationConfig};
use bcs_store::{CorpusIndex, IndexConfig};

/// Execute the validate command.
///
/// Builds a fresh index so the report reflects the tree as it is now.
pub fn execute_validate(args: ValidateArgs, index_config: &IndexConfig, formatter: &Formatter) -> Result<()> {
    let config = if args.permissive {
        ValidationConfig::permissive()
    } else {
        ValidationConfig::strict()
    };

    let index = CorpusIndex::build(index_config)?;
    let report = Gatekeeper::new(config).validate(&index);
    println!("{}", formatter.format_report(&report, index.root())?);

    if report.passed {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(report.violations.len()))
    }
}
