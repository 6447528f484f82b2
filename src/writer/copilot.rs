//! GitHub Copilot output: shared context plus prompt files.
//!
//! - The context document goes verbatim to `AGENTS.md` (shared with Cursor).
//! - Every agent and every command becomes `.github/prompts/<stem>.prompt.md`
//!   invoked with `/name`; the prompt header carries a fixed agent mode and
//!   the quoted source description.

use crate::common::fs;
use crate::error::Result;
use crate::frontmatter;
use crate::layout;

use super::{ToolWriter, WriteContext};

#[derive(Debug)]
pub struct CopilotWriter;

impl ToolWriter for CopilotWriter {
    fn tool_name(&self) -> &str {
        "GitHub Copilot"
    }

    fn write(&self, ctx: &WriteContext<'_>) -> Result<Vec<String>> {
        let mut outputs = Vec::new();
        outputs.extend(write_context(ctx)?);
        outputs.extend(write_prompts(ctx)?);
        Ok(outputs)
    }
}

fn write_context(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    fs::write_file(&ctx.root.join(layout::AGENTS_MD), ctx.context)?;
    Ok(vec![layout::AGENTS_MD.to_string()])
}

fn write_prompts(ctx: &WriteContext<'_>) -> Result<Vec<String>> {
    let prompts_dir = layout::copilot_prompts_dir(ctx.root);
    let mut count = 0;

    // Agents first, then commands; a name collision resolves to the command.
    for item in ctx.agents.iter().chain(ctx.commands.iter()) {
        let content = prompt_content(&item.frontmatter.description, &item.body);
        let target = prompts_dir.join(format!("{}.prompt.md", item.stem()));
        fs::write_file(&target, &content)?;
        count += 1;
    }

    if count == 0 {
        return Ok(Vec::new());
    }
    Ok(vec![format!(".github/prompts/ ({count} prompts)")])
}

fn prompt_content(description: &str, body: &str) -> String {
    let quoted = if description.is_empty() {
        String::new()
    } else {
        format!("'{description}'")
    };
    let header = frontmatter::build(&[("mode", "'agent'"), ("description", quoted.as_str())]);
    format!("{header}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Frontmatter;
    use crate::source::SourceItem;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn item(stem: &str, description: &str, body: &str) -> SourceItem {
        SourceItem {
            path: PathBuf::from(format!("{stem}.md")),
            frontmatter: Frontmatter {
                description: description.to_string(),
                ..Frontmatter::default()
            },
            body: body.to_string(),
        }
    }

    #[test]
    fn test_prompt_content_quotes_description() {
        let content = prompt_content("Deploys", "Run it\n");
        assert_eq!(
            content,
            "---\nmode: 'agent'\ndescription: 'Deploys'\n---\n\nRun it\n"
        );
    }

    #[test]
    fn test_prompt_content_omits_empty_description() {
        let content = prompt_content("", "Run it\n");
        assert_eq!(content, "---\nmode: 'agent'\n---\n\nRun it\n");
    }

    #[test]
    fn test_context_always_written() {
        let temp = TempDir::new().unwrap();
        let ctx = WriteContext {
            root: temp.path(),
            context: "Hello",
            agents: &[],
            commands: &[],
        };
        let outputs = CopilotWriter.write(&ctx).unwrap();
        assert_eq!(outputs, vec!["AGENTS.md".to_string()]);
        let written = std::fs::read_to_string(temp.path().join("AGENTS.md")).unwrap();
        assert_eq!(written, "Hello");
    }

    #[test]
    fn test_agents_and_commands_counted_together() {
        let temp = TempDir::new().unwrap();
        let agents = vec![item("reviewer", "Reviews", "Review\n")];
        let commands = vec![item("deploy", "Deploys", "Run it\n")];
        let ctx = WriteContext {
            root: temp.path(),
            context: "Hello",
            agents: &agents,
            commands: &commands,
        };
        let outputs = CopilotWriter.write(&ctx).unwrap();
        assert_eq!(
            outputs,
            vec![
                "AGENTS.md".to_string(),
                ".github/prompts/ (2 prompts)".to_string()
            ]
        );
        assert!(temp.path().join(".github/prompts/reviewer.prompt.md").exists());
        assert!(temp.path().join(".github/prompts/deploy.prompt.md").exists());
    }
}
