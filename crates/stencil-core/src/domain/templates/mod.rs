//! Static file payloads.
//!
//! Everything here is data. Functions return the lines of a file with the
//! generated-file marker already placed the way each file type expects it.

pub mod commitlint;
pub mod devcontainer;
pub mod eslint;
pub mod github;
pub mod husky;
pub mod prettier;
pub mod sample;
pub mod typescript;
pub mod vscode;

/// Marker placed in every generated file.
pub const MARKER: &str = "Generated by stencil. Manual edits will be overwritten.";

/// Header used by YAML, TOML and ignore-style files.
pub fn hash_header() -> [String; 2] {
    [format!("# ~~ {MARKER}"), String::new()]
}

/// Trailer for YAML issue templates.
pub fn hash_trailer() -> String {
    format!("# {MARKER}")
}

/// Trailer for Markdown files.
pub fn html_trailer() -> String {
    format!("<!-- {MARKER} -->")
}

/// Header for TypeScript and JavaScript sources.
pub fn slash_header() -> [String; 2] {
    [format!("// {MARKER}"), String::new()]
}

/// Prepend the hash header to a body.
pub(crate) fn with_hash_header(body: &[&str]) -> Vec<String> {
    hash_header()
        .into_iter()
        .chain(body.iter().map(|l| (*l).to_string()))
        .collect()
}

/// Append a trailer line to a body.
pub(crate) fn with_trailer(body: &[&str], trailer: String) -> Vec<String> {
    body.iter()
        .map(|l| (*l).to_string())
        .chain(std::iter::once(trailer))
        .collect()
}
