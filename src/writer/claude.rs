//! Claude Code output: context, slash commands and subagents.
//!
//! - The context document goes verbatim to `CLAUDE.md`.
//! - Commands become `.claude/commands/*.md` (invoked as `/project:name`)
//!   with a description-only header.
//! - Agents become `.claude/agents/*.md` subagents; the `name` field is the
//!   stem lowercased with underscores turned into hyphens.

use crate::common::fs;
use crate::error::Result;
use crate::frontmatter;
use crate::layout;

use super::{ToolWriter, WriteContext};

#[derive(Debug)]
pub struct ClaudeWriter;

impl ToolWriter for ClaudeWriter {
    fn tool_name(&self) -> &str {
        "Claude Code"
    }

    fn write(&self, ctx: &WriteContext<'_>) -> Result<Vec<String>> {
        let mut outputs = Vec::new();
        outputs.extend(write_context(ctx)?);
        outputs.extend(write_commands(ctx)?);
        outputs.extend(write_agents(ctx)?);
        Ok(outputs)
    }
}

fn write_context(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    fs::write_file(&ctx.root.join(layout::CLAUDE_MD), ctx.context)?;
    Ok(vec![layout::CLAUDE_MD.to_string()])
}

fn write_commands(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    if ctx.commands.is_empty() {
        return Ok(Vec::new());
    }
    let commands_dir = layout::claude_commands_dir(ctx.root);
    for item in ctx.commands {
        let header = frontmatter::build(&[("description", item.frontmatter.description.as_str())]);
        let content = format!("{header}{}", item.body);
        fs::write_file(&commands_dir.join(item.file_name()), &content)?;
    }
    Ok(vec![format!(
        ".claude/commands/ ({} commands)",
        ctx.commands.len()
    )])
}

fn write_agents(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    if ctx.agents.is_empty() {
        return Ok(Vec::new());
    }
    let agents_dir = layout::claude_agents_dir(ctx.root);
    for item in ctx.agents {
        let agent_name = normalized_agent_name(item.stem());
        let header = frontmatter::build(&[
            ("name", agent_name.as_str()),
            ("description", item.frontmatter.description.as_str()),
        ]);
        let content = format!("{header}{}", item.body);
        fs::write_file(&agents_dir.join(item.file_name()), &content)?;
    }
    Ok(vec![format!(
        ".claude/agents/ ({} agents)",
        ctx.agents.len()
    )])
}

/// Subagent identifier derived from the filename stem.
fn normalized_agent_name(stem: &str) -> String {
    stem.to_lowercase().replace('_', "-")
}
