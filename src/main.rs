//! ctxsync - context synchronizer for AI coding tools
//!
//! Reads a canonical `.ai/` directory (context document, agents, commands)
//! and regenerates the tool-specific layouts for Cursor, GitHub Copilot and
//! Claude Code.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod frontmatter;
mod layout;
mod source;
mod writer;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand means sync, so a bare `ctxsync` does the whole pass.
        None | Some(Commands::Sync) => commands::sync::run(cli.workspace, cli.verbose),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
