//! `stencil`: synthesize opinionated TypeScript projects.
//!
//! A project kind picks a profile. GitHub Actions are assembled from a fixed
//! builder pipeline; services and libraries from config modules wired
//! through a registry, each concern running active, shadowed (tracked but not
//! written) or disabled. The binary only resolves what the user asked for and
//! hands it to `stencil_core::application::SynthesisService`.
//!
//! ```text
//! stencil new my-action                    # GitHub Action, the default kind
//! stencil new @acme/orders -k service --track github
//! stencil new widgets -k library --dry-run --output-format json
//! ```
//!
//! Defaults for kind, license, repository and concern lists come from
//! `config.toml` in the user config dir, a local `.stencil.toml`, then
//! `STENCIL__*` variables; flags win over all of them.
//!
//! Exit codes: `0` success, `1` internal or I/O failure, `2` bad input or an
//! existing target directory, `3` missing resource, `4` unreadable or invalid
//! configuration.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // STENCIL__* overrides may live in .env; a missing file is fine.
    let _ = dotenvy::dotenv();

    // ── arguments ────────────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help, --version and `stencil` with no subcommand
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── logging ──────────────────────────────────────────────────────────
    // Dropping the guard flushes the JSON --log-file writer.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── configuration ────────────────────────────────────────────────────
    // A broken config.toml or .stencil.toml is reported like any other
    // configuration error, with exit code 4.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, cli.global.verbose > 0, cli.global.no_color);
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    // ── dispatch ─────────────────────────────────────────────────────────
    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color || !config.output.color;
    match run(cli, config, output) {
        Ok(()) => {
            info!("Stencil completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// `new` and `config` need the resolved defaults; `list`, `init` and
/// `completions` only print.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Log the failure, print it with its suggestions to stderr and map its
/// category to the process exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stdout may be carrying --output-format json.
    let colored = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    let msg = if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
