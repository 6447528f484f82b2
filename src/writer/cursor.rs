//! Cursor output: on-demand rules plus slash commands.
//!
//! - Agents become `.cursor/rules/*.mdc` with a rule header (globs,
//!   alwaysApply, description) so Cursor loads them on demand.
//! - Commands become `.cursor/commands/*.md` holding only the body.
//!
//! Cursor shares `AGENTS.md` with Copilot, so this writer produces no
//! context output of its own.

use crate::common::fs;
use crate::error::Result;
use crate::frontmatter;
use crate::layout;
use crate::source::SourceItem;

use super::{ToolWriter, WriteContext};

#[derive(Debug)]
pub struct CursorWriter;

impl ToolWriter for CursorWriter {
    fn tool_name(&self) -> &str {
        "Cursor"
    }

    fn write(&self, ctx: &WriteContext<'_>) -> Result<Vec<String>> {
        let mut outputs = Vec::new();
        outputs.extend(write_rules(ctx)?);
        outputs.extend(write_commands(ctx)?);
        Ok(outputs)
    }
}

fn write_rules(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    if ctx.agents.is_empty() {
        return Ok(Vec::new());
    }
    let rules_dir = layout::cursor_rules_dir(ctx.root);
    for item in ctx.agents {
        let target = rules_dir.join(format!("{}.mdc", item.stem()));
        fs::write_file(&target, &rule_content(item))?;
    }
    Ok(vec![format!(".cursor/rules/ ({} rules)", ctx.agents.len())])
}

fn rule_content(item: &SourceItem) -> String {
    let fm = &item.frontmatter;
    let header = frontmatter::build(&[
        ("globs", fm.globs.as_str()),
        ("alwaysApply", "false"),
        ("description", fm.description.as_str()),
    ]);
    format!("{header}{}", item.body)
}

fn write_commands(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    if ctx.commands.is_empty() {
        return Ok(Vec::new());
    }
    let commands_dir = layout::cursor_commands_dir(ctx.root);
    for item in ctx.commands {
        // Slash commands take the body as-is, header stripped.
        fs::write_file(&commands_dir.join(item.file_name()), &item.body)?;
    }
    Ok(vec![format!(
        ".cursor/commands/ ({} commands)",
        ctx.commands.len()
    )])
}
