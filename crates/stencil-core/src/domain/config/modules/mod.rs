//! One module per concern.

pub mod commitlint;
pub mod devcontainer;
pub mod eslint;
pub mod github;
pub mod husky;
pub mod npm;
pub mod prettier;
pub mod typescript;
pub mod vscode;

pub use commitlint::CommitLintConfig;
pub use devcontainer::DevContainerConfig;
pub use eslint::EsLintConfig;
pub use github::GitHubConfig;
pub use husky::HuskyConfig;
pub use npm::NpmConfig;
pub use prettier::PrettierConfig;
pub use typescript::TypeScriptConfig;
pub use vscode::VsCodeConfig;
