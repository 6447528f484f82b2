//! CLI definitions using clap derive API
//!
//! Running without a subcommand performs a sync pass, so `ctxsync` on its
//! own regenerates everything.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

/// ctxsync - context synchronizer for AI coding tools
///
/// Keep one canonical `.ai/` directory and regenerate the per-tool layouts
/// from it.
#[derive(Parser, Debug)]
#[command(
    name = "ctxsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sync .ai/ context to Cursor, GitHub Copilot and Claude Code",
    long_about = "ctxsync reads .ai/context.md plus the agent and command markdown files next to it \
                  and regenerates the tool-specific trees (.cursor/, .github/prompts/, .claude/, \
                  AGENTS.md, CLAUDE.md) so every assistant sees the same project context.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ctxsync                        \x1b[90m# Sync the current directory\x1b[0m\n   \
                  ctxsync -w ~/code/project      \x1b[90m# Sync another workspace\x1b[0m\n   \
                  ctxsync -v                     \x1b[90m# Show per-tool detail\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "CTXSYNC_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate all tool-specific files from .ai/ (the default)
    Sync,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand_defaults_to_sync() {
        let cli = Cli::try_parse_from(["ctxsync"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_sync() {
        let cli = Cli::try_parse_from(["ctxsync", "sync"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sync)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["ctxsync", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["ctxsync", "completions", "bash"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["ctxsync", "-v", "-w", "/tmp/workspace", "sync"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }

    #[test]
    fn test_cli_workspace_flag_without_subcommand() {
        let cli = Cli::try_parse_from(["ctxsync", "-w", "/tmp/workspace"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }
}
