//! Load agent and command items from the `.ai` source tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::fs;
use crate::error::{Result, SyncError};
use crate::frontmatter::{self, Frontmatter};
use crate::layout;

/// One agent or command definition. Constructed once at load time and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SourceItem {
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SourceItem {
    /// Filename without extension.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Filename with extension.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Loads agents and commands from the `.ai` directory of a workspace.
pub struct SourceLoader {
    agents_dir: PathBuf,
    commands_dir: PathBuf,
}

impl SourceLoader {
    pub fn new(root: &Path) -> Self {
        Self {
            agents_dir: layout::agents_dir(root),
            commands_dir: layout::commands_dir(root),
        }
    }

    /// Load agent items, skipping the reserved `_index.md`.
    pub fn load_agents(&self) -> Result<Vec<SourceItem>> {
        load_items(&self.agents_dir, Some(layout::INDEX_FILE))
    }

    /// Load command items.
    pub fn load_commands(&self) -> Result<Vec<SourceItem>> {
        load_items(&self.commands_dir, None)
    }
}

fn load_items(dir: &Path, exclude: Option<&str>) -> Result<Vec<SourceItem>> {
    let mut items = Vec::new();
    for path in list_markdown_files(dir, exclude)? {
        let content = fs::read_file(&path)?;
        let (frontmatter, body) = match frontmatter::parse(&content) {
            Some(parsed) => parsed,
            // No valid header: keep the whole content as body and fall back
            // to a name-only frontmatter.
            None => {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default();
                (Frontmatter::named(stem), content)
            }
        };
        items.push(SourceItem {
            path,
            frontmatter,
            body,
        });
    }
    Ok(items)
}

/// List `*.md` files directly inside `dir`, sorted lexicographically by
/// filename. A missing directory yields an empty list.
fn list_markdown_files(dir: &Path, exclude: Option<&str>) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SyncError::DirListFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        let file_name = path.file_name().and_then(|s| s.to_str());
        if exclude.is_some_and(|excluded| file_name == Some(excluded)) {
            continue;
        }
        files.push(path);
    }
    Ok(files)
}
