//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Opinionated TypeScript project synthesis",
    long_about = "Stencil generates GitHub Action, service and library projects \
                  with their tooling already wired: npm scripts, formatter, git \
                  hooks, commit linting, editor settings and GitHub templates.",
    after_help = "EXAMPLES:\n\
        \x20 stencil new my-action --kind github-action\n\
        \x20 stencil new my-service --kind service --track github\n\
        \x20 stencil list --concerns\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 stencil new my-action\n\
            \x20 stencil new my-service --kind service --disable devcontainer\n\
            \x20 stencil new my-lib --kind library --dry-run"
    )]
    New(NewArgs),

    #[command(
        visible_alias = "ls",
        about = "List project kinds",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --concerns\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init          # global config\n\
            \x20 stencil init --local  # .stencil.toml in CWD"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get defaults.kind\n\
            \x20 stencil config set defaults.kind service\n\
            \x20 stencil config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stencil new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// npm package name. Scoped names (`@scope/name`) create `./name`.
    #[arg(value_name = "NAME", help = "Project (npm package) name")]
    pub name: String,

    /// Parent directory of the new project.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub path: PathBuf,

    /// Project kind. Falls back to `defaults.kind` from the config file.
    #[arg(short = 'k', long = "kind", value_enum, help = "Project kind")]
    pub kind: Option<Kind>,

    #[arg(long = "description", value_name = "TEXT", help = "Package description")]
    pub description: Option<String>,

    #[arg(long = "repository", value_name = "URL", help = "Git repository URL")]
    pub repository: Option<String>,

    #[arg(long = "license", value_name = "SPDX", help = "Package license")]
    pub license: Option<String>,

    /// Concerns to leave out entirely. Repeatable.
    #[arg(
        long = "disable",
        value_name = "CONCERN",
        value_enum,
        action = clap::ArgAction::Append,
        help = "Leave a concern out (repeatable)"
    )]
    pub disable: Vec<Concern>,

    /// Concerns whose output is recorded but not written. Repeatable.
    #[arg(
        long = "track",
        value_name = "CONCERN",
        value_enum,
        action = clap::ArgAction::Append,
        help = "Track a concern without writing it (repeatable)"
    )]
    pub track: Vec<Concern>,

    /// Turn every config module off and keep only the framework defaults.
    #[arg(long = "no-framework", help = "Disable all config modules")]
    pub no_framework: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Regenerate into an existing directory.
    #[arg(long = "force", help = "Write into an existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include the concerns each kind composes.
    #[arg(long = "concerns", help = "Show the concerns of each kind")]
    pub concerns: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    Plain,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stencil.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.kind`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project kinds as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Kind {
    #[value(alias = "action", alias = "gha")]
    GithubAction,
    #[value(alias = "cap")]
    Service,
    #[value(alias = "lib", alias = "jsii")]
    Library,
}

impl From<Kind> for stencil_core::domain::ProjectKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::GithubAction => Self::GitHubAction,
            Kind::Service => Self::Service,
            Kind::Library => Self::Library,
        }
    }
}

/// Concern names accepted by `--disable` and `--track`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Concern {
    Npm,
    Typescript,
    Prettier,
    Husky,
    Devcontainer,
    Vscode,
    Github,
    Commitlint,
    Eslint,
}

impl From<Concern> for stencil_core::domain::ConfigKey {
    fn from(concern: Concern) -> Self {
        match concern {
            Concern::Npm => Self::Npm,
            Concern::Typescript => Self::TypeScript,
            Concern::Prettier => Self::Prettier,
            Concern::Husky => Self::Husky,
            Concern::Devcontainer => Self::DevContainer,
            Concern::Vscode => Self::VsCode,
            Concern::Github => Self::GitHub,
            Concern::Commitlint => Self::CommitLint,
            Concern::Eslint => Self::EsLint,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use stencil_core::domain::{ConfigKey, ProjectKind};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "stencil", "new", "my-service", "--kind", "service", "--disable", "husky",
            "--track", "github", "--track", "vscode",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.kind, Some(Kind::Service));
        assert_eq!(args.disable, vec![Concern::Husky]);
        assert_eq!(args.track, vec![Concern::Github, Concern::Vscode]);
    }

    #[test]
    fn kind_aliases() {
        let cli = Cli::parse_from(["stencil", "new", "x", "-k", "gha"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.kind, Some(Kind::GithubAction));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn value_enums_map_to_domain() {
        assert_eq!(ProjectKind::from(Kind::Library), ProjectKind::Library);
        assert_eq!(ConfigKey::from(Concern::Devcontainer), ConfigKey::DevContainer);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stencil", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
