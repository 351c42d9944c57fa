//! pdguardctl - replay personal-data writes through the validation hook
//!
//! Seeds an in-memory store, runs one create or update through the
//! execution pipeline with the personal-data hook registered, and prints the
//! persisted record or the reason the write was refused.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod invocation;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::ReplayArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "pdguardctl")]
#[command(about = "Replay personal-data writes through the validation hook")]
#[command(version)]
#[command(long_about = "
pdguardctl runs a single create or update of a personal-data record through
the same pipeline a host would: phone and identity documents are reduced to
digits, duplicates are rejected and stored values are normalized in place.

Exit codes: 0 success, 3 duplicate document, 4 invalid input, 1 other failure.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an invocation document against a seeded in-memory store
    Replay(ReplayArgs),

    /// Print the digits-only form of a value
    Normalize {
        /// Value to normalize
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "pdguardctl={log_level},pdguard_host={log_level},pdguard_hook={log_level},pdguard_store={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = execute_command(&cli);

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
        Commands::Normalize { value } => commands::normalize::execute(value, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_replay_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["pdguardctl", "replay", "invocation.json"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        let Commands::Replay(args) = cli.command else {
            return Err("expected replay".into());
        };
        assert_eq!(args.invocation.to_str(), Some("invocation.json"));
        assert!(args.config.is_none());
        assert!(!args.show_values);
        Ok(())
    }

    #[test]
    fn parse_replay_with_flags() -> TestResult {
        let cli = Cli::try_parse_from([
            "pdguardctl",
            "-vv",
            "replay",
            "inv.yaml",
            "--config",
            "hook.yml",
            "--show-values",
            "--json",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        let Commands::Replay(args) = cli.command else {
            return Err("expected replay".into());
        };
        assert_eq!(args.config.as_deref().and_then(|p| p.to_str()), Some("hook.yml"));
        assert!(args.show_values);
        Ok(())
    }

    #[test]
    fn parse_normalize() -> TestResult {
        let cli = Cli::try_parse_from(["pdguardctl", "normalize", "123.456.789-00"])?;
        assert!(matches!(
            cli.command,
            Commands::Normalize { ref value } if value == "123.456.789-00"
        ));
        Ok(())
    }

    #[test]
    fn replay_requires_a_document() {
        assert!(matches!(
            Cli::try_parse_from(["pdguardctl", "replay"]),
            Err(e) if e.kind() == clap::error::ErrorKind::MissingRequiredArgument
        ));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
