//! Decode command implementation.

use super::report_failures;
use crate::cli::DecodeArgs;
use crate::error::{CliError, Result};
use crate::output::{display_path, Decoded, Formatter};
use bcs_domain::CodeAddress;
use bcs_sdk::{join_contents, BcsClient};
use std::path::Path;

/// Execute the decode command.
///
/// Every code is attempted; failures are reported on stderr after the
/// successful results and decide the exit status.
pub fn execute_decode(args: DecodeArgs, client: &BcsClient, formatter: &Formatter) -> Result<()> {
    let selection = args.selection();
    let mut failures: Vec<CliError> = Vec::new();

    if args.exists {
        for token in &args.codes {
            if let Err(e) = client.decode(token, selection) {
                failures.push(e.into());
            }
        }
        return report_failures(failures, formatter, false);
    }

    if args.print {
        let mut contents = Vec::new();
        for result in client.decode_to_content(&args.codes, selection) {
            match result {
                Ok(text) => contents.push(text),
                Err(e) => failures.push(e.into()),
            }
        }
        if !contents.is_empty() {
            print!("{}", join_contents(&contents));
        }
        return report_failures(failures, formatter, true);
    }

    let root = client.index().root();
    let mut decoded = Vec::new();
    for (token, result) in args.codes.iter().zip(client.decode_to_path(&args.codes, selection)) {
        match result {
            Ok(resolved) => decoded.push(Decoded {
                code: CodeAddress::parse(token)
                    .map(|address| address.to_string())
                    .unwrap_or_else(|_| token.clone()),
                paths: resolved
                    .paths()
                    .into_iter()
                    .map(|path| shape_path(path, root, &args))
                    .collect(),
            }),
            Err(e) => failures.push(e.into()),
        }
    }

    if !decoded.is_empty() {
        println!("{}", formatter.format_decoded(&decoded)?);
    }
    report_failures(failures, formatter, true)
}

fn shape_path(path: &Path, root: &Path, args: &DecodeArgs) -> String {
    if args.basename {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    } else if args.relative {
        display_path(path, root)
    } else {
        path.display().to_string()
    }
}
