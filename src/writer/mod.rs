//! Tool-specific output strategies.
//!
//! Each writer consumes the same (context, agents, commands) input and emits
//! files into its tool's target paths, remapping header fields to the shape
//! that tool expects. New tools implement [`ToolWriter`] and get registered
//! in [`default_writers`].

use std::path::Path;

use crate::error::Result;
use crate::source::SourceItem;

pub mod claude;
pub mod copilot;
pub mod cursor;

/// Borrowed input for one sync pass.
pub struct WriteContext<'a> {
    /// Workspace root all target paths are resolved against.
    pub root: &'a Path,
    /// Context document text, written verbatim where a tool consumes it.
    pub context: &'a str,
    pub agents: &'a [SourceItem],
    pub commands: &'a [SourceItem],
}

/// A tool-specific output strategy.
pub trait ToolWriter {
    /// Tool display name.
    fn tool_name(&self) -> &str;

    /// Write all files for this tool and return one descriptor per output
    /// category actually produced. Categories with zero items produce none.
    fn write(&self, ctx: &WriteContext<'_>) -> Result<Vec<String>>;
}

/// Built-in writers in the order their outputs are reported.
pub fn default_writers() -> Vec<Box<dyn ToolWriter>> {
    vec![
        Box::new(cursor::CursorWriter),
        Box::new(copilot::CopilotWriter),
        Box::new(claude::ClaudeWriter),
    ]
}
