//! Git hook bodies.

use super::MARKER;

pub const COMMIT_MSG_PATH: &str = ".husky/commit-msg";
pub const PRE_COMMIT_PATH: &str = ".husky/pre-commit";

pub const COMMIT_MSG_COMMAND: &str = r#"npx --no-install commitlint --edit "$1""#;
pub const PRE_COMMIT_COMMAND: &str = "npx lint-staged";

pub const PREPARE_SCRIPT: (&str, &str) = ("prepare", "husky || true");
pub const DEV_DEPENDENCY: &str = "husky@^9.1.7";

/// Hook paths paired with the single command each hook runs.
pub const HOOKS: [(&str, &str); 2] = [
    (COMMIT_MSG_PATH, COMMIT_MSG_COMMAND),
    (PRE_COMMIT_PATH, PRE_COMMIT_COMMAND),
];

/// Lines of one hook file. Builder-generated hooks carry the marker.
pub fn hook_lines(command: &str, marked: bool) -> Vec<String> {
    if marked {
        vec![format!("# {MARKER}"), String::new(), command.to_string()]
    } else {
        vec![command.to_string()]
    }
}
