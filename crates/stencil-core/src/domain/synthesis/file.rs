//! Files queued for synthesis.

use serde_json::{Map, Value};

use crate::domain::{
    entities::{Permissions, RelativePath},
    error::{DomainError, DomainResult},
    templates::MARKER,
};

/// How a file body is produced at synthesis time.
#[derive(Debug, Clone, PartialEq)]
pub enum FileBody {
    /// Literal lines, joined with `\n`.
    Lines(Vec<String>),
    /// A JSON document, pretty printed. Objects get a `//` marker key.
    Json(Value),
    /// The formatter ignore list, rendered from the project's final
    /// accumulated patterns.
    FormatIgnore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    path: RelativePath,
    body: FileBody,
    permissions: Permissions,
}

impl GeneratedFile {
    pub fn lines(path: &str, lines: Vec<String>) -> DomainResult<Self> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            body: FileBody::Lines(lines),
            permissions: Permissions::read_write(),
        })
    }

    pub fn json(path: &str, value: Value) -> DomainResult<Self> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            body: FileBody::Json(value),
            permissions: Permissions::read_write(),
        })
    }

    pub fn format_ignore(path: &str) -> DomainResult<Self> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            body: FileBody::FormatIgnore,
            permissions: Permissions::read_write(),
        })
    }

    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn body(&self) -> &FileBody {
        &self.body
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Render the final content. Every file ends with exactly one newline.
    pub(crate) fn render(&self, format_ignore: &[String]) -> DomainResult<String> {
        let mut content = match &self.body {
            FileBody::Lines(lines) => lines.join("\n"),
            FileBody::Json(value) => render_json(self.path.as_str(), value)?,
            FileBody::FormatIgnore => {
                let mut lines = vec![format!("# ~~ {MARKER}")];
                lines.extend(format_ignore.iter().cloned());
                lines.join("\n")
            }
        };
        while content.ends_with('\n') {
            content.pop();
        }
        content.push('\n');
        Ok(content)
    }
}

fn render_json(path: &str, value: &Value) -> DomainResult<String> {
    let marked = match value {
        Value::Object(map) if !map.contains_key("//") => {
            let mut with_marker = Map::with_capacity(map.len() + 1);
            with_marker.insert("//".into(), Value::String(MARKER.into()));
            with_marker.extend(map.clone());
            Value::Object(with_marker)
        }
        other => other.clone(),
    };
    serde_json::to_string_pretty(&marked).map_err(|e| DomainError::RenderFailed {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
