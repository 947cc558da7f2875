//! Command implementations.

pub mod codes;
pub mod decode;
pub mod default;
pub mod path;
pub mod search;
pub mod sections;
pub mod validate;

pub use self::codes::execute_codes;
pub use self::decode::execute_decode;
pub use self::default::execute_default;
pub use self::path::execute_path;
pub use self::search::execute_search;
pub use self::sections::execute_sections;
pub use self::validate::execute_validate;

use crate::config::Config;
use crate::error::{worst_exit_code, CliError, Result};
use crate::output::Formatter;
use bcs_sdk::BcsClient;
use bcs_store::{read_default_tier, IndexConfig};

/// Index the corpus and build a client whose best-tier order starts at the
/// corpus default tier, when one is set.
pub fn open_client(config: &Config, index_config: &IndexConfig) -> Result<BcsClient> {
    let preferred = match read_default_tier(index_config) {
        Ok(tier) => tier,
        Err(e) => {
            tracing::warn!("Ignoring default tier link: {}", e);
            None
        }
    };
    let resolver = config.resolver(preferred)?;
    let client = BcsClient::open(index_config)?.with_resolver(resolver);
    tracing::debug!(
        "Indexed {} code(s) under {}",
        client.index().len(),
        client.index().root().display()
    );
    Ok(client)
}

/// Print per-item failures and turn them into a single exit status.
fn report_failures(failures: Vec<CliError>, formatter: &Formatter, print: bool) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    if print {
        for failure in &failures {
            eprintln!("{}", formatter.error(&failure.to_string()));
        }
    }
    Err(CliError::Reported(worst_exit_code(&failures)))
}
