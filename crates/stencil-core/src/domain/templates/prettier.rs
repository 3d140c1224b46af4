//! Prettier payloads.

use serde_json::{Value, json};

pub const RC_PATH: &str = ".prettierrc.json";
pub const IGNORE_PATH: &str = ".prettierignore";
pub const DEV_DEPENDENCY: &str = "prettier@^3.4.2";

/// Script used by registry-based projects.
pub const WRITE_SCRIPT: (&str, &str) = ("prettier", "prettier . --write");

/// Scripts used by builder-based projects. lint-staged runs both in order.
pub const FORMAT_SCRIPTS: [(&str, &str); 2] = [
    ("format:message", r#"echo "Prettier started ...""#),
    ("format:fix", "prettier . --write"),
];

pub fn rc() -> Value {
    json!({
        "overrides": [
            {
                "files": "*.*",
                "options": {
                    "semi": true,
                    "trailingComma": "all",
                    "singleQuote": true,
                    "printWidth": 120,
                    "tabWidth": 2
                }
            }
        ]
    })
}
