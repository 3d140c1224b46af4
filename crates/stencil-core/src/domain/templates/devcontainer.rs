//! Dev container descriptor.

use serde_json::{Map, Value, json};

pub const PATH: &str = ".devcontainer.json";
pub const IMAGE: &str = "mcr.microsoft.com/devcontainers/typescript-node:1-20-bullseye";
pub const INSTALL_SCRIPT: (&str, &str) = ("install-dependencies", "npm install");

pub const BASE_FEATURES: [&str; 2] = [
    "ghcr.io/devcontainers-contrib/features/curl-apt-get",
    "ghcr.io/devcontainers/features/github-cli",
];

/// Extra feature for projects that run the generator inside the container.
pub const GENERATOR_FEATURE: &str = "ghcr.io/devcontainers-contrib/features/projen";

pub const COPILOT_EXTENSION: &str = "github.copilot";

pub const EXTENSIONS: [&str; 34] = [
    "Orta.vscode-jest",
    "firsttris.vscode-jest-runner",
    "humao.rest-client",
    "aaron-bond.better-comments",
    "alefragnani.Bookmarks",
    "alefragnani.project-manager",
    "christian-kohler.npm-intellisense",
    "mskelton.npm-outdated",
    "PKief.material-icon-theme",
    "zhuangtongfa.material-theme",
    "GitHub.github-vscode-theme",
    "ms-vscode-remote.remote-containers",
    "mikestead.dotenv",
    "usernamehw.errorlens",
    "dbaeumer.vscode-eslint",
    "oderwat.indent-rainbow",
    "esbenp.prettier-vscode",
    "YoavBls.pretty-ts-errors",
    "streetsidesoftware.code-spell-checker",
    "wayou.vscode-todo-highlight",
    "mike-co.import-sorter",
    "VisualStudioExptTeam.vscodeintellicode",
    "redhat.vscode-yaml",
    "DotJoshJohnson.xml",
    "waderyan.gitblame",
    "donjayamanne.githistory",
    "GitHub.vscode-pull-request-github",
    "yzhang.markdown-all-in-one",
    "DavidAnson.vscode-markdownlint",
    "bierner.jsdoc-markdown-highlighting",
    "VisualStudioExptTeam.vscodeintellicode",
    "christian-kohler.path-intellisense",
    "AykutSarac.jsoncrack-vscode",
    "tamasfe.even-better-toml",
];

/// Assemble the descriptor. Extensions are deduplicated keeping first occurrence.
pub fn descriptor(features: &[String], extensions: &[String]) -> Value {
    let features: Map<String, Value> = features
        .iter()
        .map(|f| (f.clone(), json!("latest")))
        .collect();

    let mut seen = std::collections::HashSet::new();
    let extensions: Vec<&String> = extensions.iter().filter(|e| seen.insert(*e)).collect();

    json!({
        "image": IMAGE,
        "postCreateCommand": format!("npm run {}", INSTALL_SCRIPT.0),
        "features": features,
        "customizations": {
            "vscode": {
                "extensions": extensions
            }
        }
    })
}
