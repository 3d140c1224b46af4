//! Flat ESLint config.

use indexmap::IndexMap;

use super::slash_header;

pub const CONFIG_PATH: &str = "eslint.config.mjs";
pub const SCRIPT: (&str, &str) = ("eslint", "eslint .");

pub const DEV_DEPENDENCIES: [&str; 8] = [
    "@typescript-eslint/eslint-plugin@^8.20.0",
    "@typescript-eslint/parser@^8.20.0",
    "eslint@^9.18.0",
    "eslint-config-prettier@^10.0.1",
    "eslint-import-resolver-typescript@^3.7.0",
    "eslint-plugin-import@^2.31.0",
    "eslint-plugin-prettier@^5.2.1",
    "typescript-eslint@^8.20.0",
];

pub const BASE_RULES: [(&str, &str); 6] = [
    ("no-console", "off"),
    ("require-atomic-updates", "off"),
    ("@typescript-eslint/no-non-null-assertion", "off"),
    ("@typescript-eslint/ban-types", "off"),
    ("@typescript-eslint/explicit-function-return-type", "off"),
    ("@typescript-eslint/consistent-type-imports", "off"),
];

/// Rules jsii libraries relax on top of the base set.
pub const LIBRARY_RULES: [(&str, &str); 3] = [
    ("@typescript-eslint/no-empty-function", "off"),
    ("@typescript-eslint/class-literal-property-style", "off"),
    ("@typescript-eslint/no-empty-object-type", "off"),
];

pub const LIBRARY_IGNORES: [&str; 4] = ["docs/", "test/", "lib/", ".jsii"];

pub fn config_lines(rules: &IndexMap<String, String>, ignores: &[String]) -> Vec<String> {
    let ignores = ignores
        .iter()
        .map(|i| format!("'{i}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines: Vec<String> = slash_header().into_iter().collect();
    lines.extend(
        [
            "import eslint from '@eslint/js';",
            "import tseslint from 'typescript-eslint';",
            "",
            "export default tseslint.config(",
            "  eslint.configs.recommended,",
            "  ...tseslint.configs.recommended,",
            "  ...tseslint.configs.stylistic,",
            "  {",
            "    rules: {",
        ]
        .map(String::from),
    );
    lines.extend(
        rules
            .iter()
            .map(|(rule, setting)| format!("      '{rule}': '{setting}',")),
    );
    lines.extend(["    },".into(), "  },".into(), "  {".into()]);
    lines.push(format!("    ignores: [{ignores}],"));
    lines.extend(["  },".into(), ");".into()]);
    lines
}
