//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bcs_sdk::{BcsClient, SearchQuery};

/// Execute the search command.
///
/// Like grep, finding nothing is a failure.
pub fn execute_search(args: SearchArgs, client: &BcsClient, formatter: &Formatter) -> Result<()> {
    if args.pattern.is_empty() {
        return Err(CliError::InvalidInput("Search pattern must not be empty".to_string()));
    }

    let query = SearchQuery {
        case_insensitive: args.ignore_case,
        fixed: args.fixed,
        context: args.context,
        tier: args.tier.tier(),
        ..SearchQuery::new(&args.pattern)
    };
    let hits: Vec<_> = client.search(&query)?.collect();
    tracing::debug!("Search for '{}' matched {} line(s)", args.pattern, hits.len());

    if hits.is_empty() {
        return Err(CliError::NotFound(format!("No matches for '{}'", args.pattern)));
    }

    println!("{}", formatter.format_hits(&hits, client.index().root())?);
    Ok(())
}
