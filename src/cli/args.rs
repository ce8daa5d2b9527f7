//! CLI argument definitions.
//!
//! All Clap derive structs for sitewright command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Default content document location, relative to the working directory.
pub const DEFAULT_CONTENT: &str = "content/site_copy.json";

// ============================================================================
// Root CLI
// ============================================================================

/// Static marketing site generator and dev server.
#[derive(Parser, Debug)]
#[command(name = "sitewright", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SITEWRIGHT_COLOR")]
    pub color: ColorChoice,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full site to static files.
    Build(BuildArgs),

    /// Serve the site, re-rendering on content change.
    Serve(ServeArgs),

    /// Validate content documents without rendering.
    Check(CheckArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

// ============================================================================
// Build / Serve / Check
// ============================================================================

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the JSON content document.
    #[arg(short, long, default_value = DEFAULT_CONTENT, env = "SITEWRIGHT_CONTENT")]
    pub content: PathBuf,

    /// Output directory for generated HTML.
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Assets directory to copy into the output (skipped if absent).
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to the JSON content document.
    #[arg(short, long, default_value = DEFAULT_CONTENT, env = "SITEWRIGHT_CONTENT")]
    pub content: PathBuf,

    /// Bind address.
    #[arg(short, long, default_value = "127.0.0.1:5173", env = "SITEWRIGHT_BIND")]
    pub bind: String,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content documents to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings (unrecognized tokens) as errors.
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Completions
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
