//! Sync command implementation
//!
//! One pass reads `.ai/context.md` and the agent/command items, then runs
//! every tool writer in sequence. The required-context check happens before
//! any output is produced; later write failures propagate and leave earlier
//! outputs on disk.

use std::path::PathBuf;

use console::Style;

use crate::common::fs;
use crate::error::{Result, SyncError};
use crate::layout;
use crate::source::SourceLoader;
use crate::writer::{self, WriteContext};

/// Run sync command
pub fn run(workspace: Option<PathBuf>, verbose: bool) -> Result<()> {
    let root = get_workspace_path(workspace)?;

    let context_path = layout::context_path(&root);
    if !context_path.exists() {
        return Err(SyncError::ContextNotFound {
            path: context_path.display().to_string(),
        });
    }

    let context = fs::read_file(&context_path)?;
    let loader = SourceLoader::new(&root);
    let agents = loader.load_agents()?;
    let commands = loader.load_commands()?;

    let ctx = WriteContext {
        root: &root,
        context: &context,
        agents: &agents,
        commands: &commands,
    };

    let mut all_outputs = Vec::new();
    for tool in writer::default_writers() {
        let outputs = tool.write(&ctx)?;
        if verbose && !outputs.is_empty() {
            println!(
                "  {} {}",
                Style::new().bold().cyan().apply_to(tool.tool_name()),
                outputs.join(", ")
            );
        }
        all_outputs.extend(outputs);
    }

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Synced:"),
        all_outputs.join(", ")
    );

    Ok(())
}

/// Get workspace path from CLI argument or current directory
fn get_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| SyncError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
