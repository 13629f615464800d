//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "repoforge",
    bin_name = "repoforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Repository-pattern scaffolding",
    long_about = "Repoforge generates an interface and repository pair for a \
                  resource and registers the binding for the host \
                  application's dependency-injection container.",
    after_help = "EXAMPLES:\n\
        \x20 repoforge make Order\n\
        \x20 repoforge make Billing/Invoice --yes\n\
        \x20 repoforge make Order --no-interaction\n\
        \x20 repoforge completions bash > /usr/share/bash-completion/completions/repoforge",
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
    /// Generate the interface and repository for a resource.
    #[command(
        visible_alias = "m",
        about = "Generate an interface/repository pair",
        after_help = "EXAMPLES:\n\
            \x20 repoforge make Order\n\
            \x20 repoforge make Billing/Invoice\n\
            \x20 repoforge make Order --no-interaction"
    )]
    Make(MakeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 repoforge completions bash > ~/.local/share/bash-completion/completions/repoforge\n\
            \x20 repoforge completions zsh  > ~/.zfunc/_repoforge\n\
            \x20 repoforge completions fish > ~/.config/fish/completions/repoforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `repoforge make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Resource name.  A plain name like `Order`, or a nested one like
    /// `Billing/Invoice`; already-qualified names are accepted unchanged.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Answer yes to the model-creation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        conflicts_with = "no_interaction",
        help = "Create a missing model without asking"
    )]
    pub yes: bool,

    /// Answer no to every prompt (non-interactive environments).
    #[arg(
        short = 'n',
        long = "no-interaction",
        help = "Never prompt; skip model creation"
    )]
    pub no_interaction: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `repoforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
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

// ── tests ─────────────────────────────────────────────────────────────────────
