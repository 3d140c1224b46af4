//! Commit message linting and lint-staged payloads.

use serde_json::{Map, Value, json};

use super::slash_header;

pub const CONFIG_PATH: &str = ".commitlintrc.ts";
pub const COMMIT_SCRIPT: (&str, &str) = ("commit", "commit");
pub const LINT_STAGED_FIELD: &str = "lint-staged";

pub const DEV_DEPENDENCIES: [&str; 5] = [
    "@commitlint/cli@^19.6.1",
    "@commitlint/config-conventional@^19.6.0",
    "@commitlint/prompt-cli@^19.7.0",
    "@commitlint/types@^19.5.0",
    "lint-staged@^15.3.0",
];

const BODY: &[&str] = &[
    "import type { UserConfig } from '@commitlint/types';",
    "import { RuleConfigSeverity } from '@commitlint/types';",
    "",
    "const Configuration: UserConfig = {",
    "  extends: ['@commitlint/config-conventional'],",
    "  rules: {",
    "    'type-enum': [",
    "      RuleConfigSeverity.Error,",
    "      'always',",
    "      ['build', 'chore', 'ci', 'docs', 'feat', 'fix', 'perf', 'refactor', 'revert', 'style', 'test', 'delete'],",
    "    ],",
    "    'scope-empty': [RuleConfigSeverity.Error, 'never'],",
    "    'subject-empty': [RuleConfigSeverity.Error, 'never'],",
    "  },",
    "  helpUrl: 'https://github.com/conventional-changelog/commitlint/#what-is-commitlint',",
    "};",
    "",
    "export default Configuration;",
];

pub fn config_lines() -> Vec<String> {
    slash_header()
        .into_iter()
        .chain(BODY.iter().map(|l| (*l).to_string()))
        .collect()
}

/// Build a lint-staged table from `(glob, commands)` pairs.
pub fn lint_staged<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(glob, commands)| (glob.to_string(), json!(commands)))
        .collect()
}

/// Default table: format YAML through the formatter scripts.
pub fn base_lint_staged() -> Map<String, Value> {
    lint_staged([(
        "**/*.{yml,yaml}",
        &["npm run format:message", "npm run format:fix"][..],
    )])
}

/// Service projects lint and format their TypeScript and CDS sources.
pub fn service_lint_staged() -> Map<String, Value> {
    lint_staged([(
        "**/*.{ts,tsx}",
        &["npm run eslint", "npm run prettier", "npm run prettier:cds"][..],
    )])
}
