//! Parse and build the restricted YAML-subset frontmatter used by `.ai/` sources.
//!
//! The format is deliberately narrow: scalar `key: value` pairs and
//! single-level `- item` lists. Nested structures are out of scope and are
//! never produced by any writer.

/// Frontmatter delimiter line.
pub const MARKER: &str = "---";

/// Parsed frontmatter fields. Absent fields stay empty.
///
/// The source header key for `kind` is `type` (reserved word in Rust).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub kind: String,
    pub name: String,
    pub description: String,
    pub triggers: Vec<String>,
    pub usage: Vec<String>,
    pub globs: String,
}

impl Frontmatter {
    /// Fallback frontmatter carrying only a name (used when a source file
    /// has no parseable header).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Known header keys. Anything else is silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Kind,
    Name,
    Description,
    Triggers,
    Usage,
    Globs,
}

impl FieldKey {
    fn from_header_key(key: &str) -> Option<Self> {
        match key {
            "type" => Some(Self::Kind),
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "triggers" => Some(Self::Triggers),
            "usage" => Some(Self::Usage),
            "globs" => Some(Self::Globs),
            _ => None,
        }
    }
}

/// Parse frontmatter from markdown content.
///
/// Returns `None` when the content does not start with a `---` marker line
/// or no closing marker line follows; callers keep the original content in
/// that case. On success returns the parsed fields and the body with leading
/// blank lines stripped.
pub fn parse(content: &str) -> Option<(Frontmatter, String)> {
    let rest = content.strip_prefix("---\n")?;
    let (header, raw_body) = split_at_closing_marker(rest)?;

    let mut fm = Frontmatter::default();
    // List items bind to the most recently seen key and are flushed when the
    // key changes or the header ends.
    let mut current: Option<FieldKey> = None;
    let mut pending: Vec<String> = Vec::new();

    for line in header.lines() {
        if let Some(item) = list_item(line) {
            pending.push(item.to_string());
            continue;
        }
        if let Some((key, value)) = key_value(line) {
            flush(&mut fm, current, &mut pending);
            current = FieldKey::from_header_key(key);
            if !value.is_empty() {
                if let Some(field) = current {
                    set_scalar(&mut fm, field, value);
                }
            }
        }
        // Malformed lines are skipped without error.
    }
    flush(&mut fm, current, &mut pending);

    let body = raw_body.trim_start_matches('\n').to_string();
    Some((fm, body))
}

/// Build a frontmatter block from ordered `(key, value)` pairs.
///
/// Pairs with empty values are omitted entirely. An empty slice produces an
/// empty string (no header at all); a non-empty slice always produces the
/// delimiter block, followed by a blank line.
pub fn build(fields: &[(&str, &str)]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let mut lines = vec![MARKER.to_string()];
    for (key, value) in fields {
        if !value.is_empty() {
            lines.push(format!("{key}: {value}"));
        }
    }
    lines.push(format!("{MARKER}\n\n"));
    lines.join("\n")
}

/// Split header text (without delimiters) from the raw body. The closing
/// marker must be a line that is exactly `---`.
fn split_at_closing_marker(rest: &str) -> Option<(&str, &str)> {
    let mut pos = 0;
    loop {
        let line_end = rest[pos..].find('\n').map(|i| pos + i);
        let line = match line_end {
            Some(end) => &rest[pos..end],
            None => &rest[pos..],
        };
        if line == MARKER {
            let header = &rest[..pos.saturating_sub(1)];
            let body = match line_end {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            return Some((header, body));
        }
        match line_end {
            Some(end) => pos = end + 1,
            None => return None,
        }
    }
}

/// Match `leading whitespace, dash, whitespace, value` and return the value.
fn list_item(line: &str) -> Option<&str> {
    let indented = line.trim_start();
    if indented.len() == line.len() {
        return None;
    }
    let after_dash = indented.strip_prefix('-')?;
    let value = after_dash.trim_start();
    if value.len() == after_dash.len() {
        return None;
    }
    Some(value)
}

/// Match `word-key ':' optional value`. The key is word characters only;
/// leading whitespace before the value is dropped.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let key = &line[..colon];
    if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some((key, line[colon + 1..].trim_start()))
}

/// Assign accumulated list items to the key they appeared under. Items under
/// an unknown or scalar-only key are dropped; the buffer is always cleared.
fn flush(fm: &mut Frontmatter, key: Option<FieldKey>, pending: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }
    let items = std::mem::take(pending);
    match key {
        Some(FieldKey::Triggers) => fm.triggers = items,
        Some(FieldKey::Usage) => fm.usage = items,
        _ => {}
    }
}

fn set_scalar(fm: &mut Frontmatter, field: FieldKey, value: &str) {
    match field {
        FieldKey::Kind => fm.kind = value.to_string(),
        FieldKey::Name => fm.name = value.to_string(),
        FieldKey::Description => fm.description = value.to_string(),
        FieldKey::Globs => fm.globs = value.to_string(),
        // Inline scalars on list-valued keys are dropped.
        FieldKey::Triggers | FieldKey::Usage => {}
    }
}
