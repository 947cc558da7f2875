//! BCS CLI - Command-line interface for the Bash Coding Standard corpus.

use bcs_cli::commands;
use bcs_cli::{Cli, Command, Config, Formatter};
use bcs_store::IndexConfig;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if !e.is_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr so stdout stays clean for paths and contents.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> bcs_cli::Result<()> {
    // An explicit config file must load; the default one is optional
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color && std::io::stdout().is_terminal();

    let formatter = Formatter::new(format, color_enabled);
    let index_config = IndexConfig::new(config.data_dir(cli.data_dir));

    match cli.command {
        Command::Default(args) => commands::execute_default(args, &index_config, &formatter),
        Command::Validate(args) => commands::execute_validate(args, &index_config, &formatter),
        cmd => {
            // Commands that query the index
            let client = commands::open_client(&config, &index_config)?;

            match cmd {
                Command::Decode(args) => commands::execute_decode(args, &client, &formatter),
                Command::Path(args) => commands::execute_path(args, &client, &formatter),
                Command::Codes(args) => commands::execute_codes(args, &client, &formatter),
                Command::Search(args) => commands::execute_search(args, &client, &formatter),
                Command::Sections => commands::execute_sections(&client, &formatter),
                _ => unreachable!(),
            }
        }
    }
}
