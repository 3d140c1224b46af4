//! GitHub issue, pull request and workflow payloads.

use super::{html_trailer, hash_trailer, with_hash_header, with_trailer};

/// One file under `.github/` (plus `cliff.toml`, which drives release notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitHubFile {
    PullRequest,
    /// Pull request checklist with coding and API-first sections.
    PullRequestExtended,
    BugIssue,
    FeatureIssue,
    /// Feature template worded for story-driven teams.
    StoryFeatureIssue,
    HousekeepingIssue,
    QuestionIssue,
    StoryIssue,
    ReleaseWorkflow,
    StaleWorkflow,
    Cliff,
}

impl GitHubFile {
    pub const fn path(self) -> &'static str {
        match self {
            Self::PullRequest | Self::PullRequestExtended => ".github/pull_request_template.md",
            Self::BugIssue => ".github/ISSUE_TEMPLATE/bug.yml",
            Self::FeatureIssue | Self::StoryFeatureIssue => ".github/ISSUE_TEMPLATE/feature.yml",
            Self::HousekeepingIssue => ".github/ISSUE_TEMPLATE/housekeeping.yml",
            Self::QuestionIssue => ".github/ISSUE_TEMPLATE/question.yml",
            Self::StoryIssue => ".github/ISSUE_TEMPLATE/story.yml",
            Self::ReleaseWorkflow => ".github/workflows/release.yml",
            Self::StaleWorkflow => ".github/workflows/stale.yml",
            Self::Cliff => "cliff.toml",
        }
    }

    pub fn lines(self) -> Vec<String> {
        match self {
            Self::PullRequest => with_trailer(&pull_request_body(false), html_trailer()),
            Self::PullRequestExtended => with_trailer(&pull_request_body(true), html_trailer()),
            Self::BugIssue => with_trailer(BUG_ISSUE, hash_trailer()),
            Self::FeatureIssue => with_trailer(&feature_issue("description: Request for a new feature"), hash_trailer()),
            Self::StoryFeatureIssue => with_trailer(&feature_issue("description: Story related feature"), hash_trailer()),
            Self::HousekeepingIssue => with_trailer(HOUSEKEEPING_ISSUE, hash_trailer()),
            Self::QuestionIssue => with_trailer(QUESTION_ISSUE, hash_trailer()),
            Self::StoryIssue => with_trailer(STORY_ISSUE, hash_trailer()),
            Self::ReleaseWorkflow => with_hash_header(RELEASE_WORKFLOW),
            Self::StaleWorkflow => with_hash_header(STALE_WORKFLOW),
            Self::Cliff => with_hash_header(CLIFF),
        }
    }
}

/// Files that the generator owns besides the ones above.
pub const STATIC_PATTERNS: [&str; 2] = ["/.gitattributes", "/.gitignore"];

/// Written by the release workflow, never by hand.
pub const CHANGELOG_PATTERN: &str = "/CHANGELOG.md";

fn pull_request_body(extended: bool) -> Vec<&'static str> {
    let mut lines = vec![
        "## Reviewers Checklist",
        "",
        "for complete review list refer to ABS Loop - Review Aspects",
        "",
        "### Organizational Section",
        "",
    ];
    if extended {
        lines.extend([
            "- [ ] PR is assigned to the according story/feature/bug",
            "- [ ] Story/feature/bug is descriptive",
            "- [ ] Story/feature/bug is assigned to according labels",
            "- [ ] Story/feature/bug is assigned to a developer",
        ]);
    } else {
        lines.extend([
            "- [ ] PR is assigned to the according feature/bug",
            "- [ ] Feature/bug is descriptive",
            "- [ ] Feature/bug is assigned to according labels",
            "- [ ] Feature/bug is assigned to a developer",
        ]);
    }
    lines.extend([
        "",
        "### Structure",
        "",
        "- [ ] Readability: Code is easy to understand, with meaningful names for variables, functions, and classes",
        "- [ ] Comments: Meaningful and helpful comments. Code is documented without being over-commented",
        "- [ ] DRY, KISS and YAGNI: Code implements only necessary features; no over-engineering",
        "- [ ] No sensitive data (e.g., passwords, API keys) in the code",
        "- [ ] No major updates for used packages",
        "",
    ]);
    if extended {
        lines.extend([
            "### Coding",
            "",
            "- [ ] Model/Binding property changes or renaming does not break the code",
            "- [ ] Model/Binding properties have consistent names (capitalization, lowercase, ..)",
            "- [ ] Type aliases are defined for associations and compositions",
            "- [ ] No hungarian notation (e.g. aList, oModel, ..)",
            "",
            "### Most important (as long as we do not have Test Driven Development in place)",
            "",
            "- [ ] Code is locally tested by developer",
            "",
            "### Second most important",
            "",
            "- [ ] API first: application can be used headless (with the API only)",
        ]);
    } else {
        lines.extend([
            "### Testing",
            "",
            "- [ ] Code is locally tested by developer (if applicable)",
            "- [ ] Automated tests pass successfully",
        ]);
    }
    lines
}

fn feature_issue(description: &'static str) -> Vec<&'static str> {
    let mut lines = vec![
        "name: 💡 Feature",
        description,
        r#"title: "[FEATURE] <title>""#,
        r#"labels: ["type: feature"]"#,
    ];
    lines.extend(TASK_ISSUE_BODY);
    lines
}

const TASK_ISSUE_BODY: [&str; 16] = [
    "body:",
    "  - type: textarea",
    "    attributes:",
    "      label: Description",
    "      description: A description of the feature.",
    "    validations:",
    "      required: true",
    "",
    "  - type: textarea",
    "    attributes:",
    "      label: Task List",
    "      description: Describe the steps to fulfill the feature.",
    "      value: |",
    "        - [ ] My First Task",
    "    validations:",
    "      required: true",
];

const BUG_ISSUE: &[&str] = &[
    "name: 🐞 Bug",
    "description: File a bug/issue",
    r#"title: "[BUG] <title>""#,
    r#"labels: ["type: bug"]"#,
    "body:",
    "  - type: textarea",
    "    attributes:",
    "      label: Current behavior",
    "      description: A description of what you're experiencing.",
    "    validations:",
    "      required: true",
    "",
    "  - type: textarea",
    "    attributes:",
    "      label: Expected behavior",
    "      description: A description of what you expected to happen.",
    "    validations:",
    "      required: true",
];

const HOUSEKEEPING_ISSUE: &[&str] = &[
    "name: 💡 Housekeeping",
    "description: Maintenance or refactoring task",
    r#"title: "[HOUSEKEEPING] <title>""#,
    r#"labels: ["type: housekeeping"]"#,
    "body:",
    "  - type: textarea",
    "    attributes:",
    "      label: Description",
    "      description: A description of the housekeeping task.",
    "    validations:",
    "      required: true",
    "",
    "  - type: textarea",
    "    attributes:",
    "      label: Task List",
    "      description: Describe the steps to fulfill the housekeeping task.",
    "      value: |",
    "        - [ ] My First Task",
    "    validations:",
    "      required: true",
];

const QUESTION_ISSUE: &[&str] = &[
    "name: ❓ Question",
    "description: Ask a question",
    r#"title: "[QUESTION] <title>""#,
    r#"labels: ["type: question"]"#,
    "body:",
    "  - type: textarea",
    "    attributes:",
    "      label: Question",
    "      description: What would you like to know? If you encounter unusual behavior or identified a missing feature, consider opening a bug report instead.",
    "    validations:",
    "      required: true",
];

const STORY_ISSUE: &[&str] = &[
    "name: 💡 Story",
    "description: As a [role], I [want to], [so that]",
    r#"title: "[STORY] <title>""#,
    r#"labels: ["type: story"]"#,
    "body:",
    "  - type: textarea",
    "    attributes:",
    "      label: Description",
    "      description: Provide a brief overview of the story, focusing who want's to do what and why.",
    "    validations:",
    "      required: true",
];

const RELEASE_WORKFLOW: &[&str] = &[
    "name: Release",
    "on:",
    "  pull_request:",
    "    branches:",
    "      - main",
    "    types:",
    "      - closed",
    "jobs:",
    "  release:",
    "    runs-on: ubuntu-latest",
    "    permissions:",
    "      contents: write",
    "      pull-requests: write",
    "    steps:",
    "      - name: Create release",
    "        uses: dxfrontier/gh-action-release@main",
    "        with:",
    "          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}",
    "          BRANCH: main",
];

const STALE_WORKFLOW: &[&str] = &[
    "name: Stale",
    "on:",
    "  schedule:",
    "    - cron: 36 18 * * *",
    "jobs:",
    "  stale:",
    "    runs-on: ubuntu-latest",
    "    permissions:",
    "      issues: write",
    "      pull-requests: write",
    "    steps:",
    "      - uses: actions/stale@v5",
    "        with:",
    "          repo-token: ${{ secrets.GITHUB_TOKEN }}",
    "          days-before-issue-stale: 30",
    "          stale-issue-message: This issue has not been updated in a while. If it is still relevant, please comment on it to keep it open. The issue will be closed soon if it remains inactive.",
    "          close-issue-message: This issue has been closed automatically due to inactivity.",
    "          stale-pr-message: This PR has not been updated in a while. If it is still relevant, please comment on it to keep it open. The PR will be closed soon if it remains inactive.",
    "          close-pr-message: This PR has been closed automatically due to inactivity.",
    r#"          stale-issue-label: "status: stale""#,
    r#"          stale-pr-label: "status: stale""#,
    r#"          exempt-issue-labels: "type: feature request""#,
    r#"          exempt-pr-labels: "type: feature request""#,
    "          exempt-all-milestones: true",
];

const CLIFF: &[&str] = &[
    "[changelog]",
    "# changelog header",
    r#"header = """"#,
    "# Changelog\n",
    "All notable changes to this project will be documented in this file.\n",
    r#"""""#,
    "# template for the changelog body",
    "# https://keats.github.io/tera/docs/#introduction",
    r#"body = """"#,
    r"{% if version %}\",
    r#"    ## [{{ version | trim_start_matches(pat="v") }}] - {{ timestamp | date(format="%Y-%m-%d") }}"#,
    r"{% else %}\",
    "    ## [unreleased]",
    r"{% endif %}\",
    r#"{% for group, commits in commits | group_by(attribute="group") %}"#,
    "    ### {{ group | striptags | trim | upper_first }}",
    "    {% for commit in commits %}",
    "        - {% if commit.scope %}*({{ commit.scope }})* {% endif %}",
    "            {% if commit.breaking %}[**breaking**] {% endif %}",
    "            {{ commit.message | upper_first }}",
    "    {% endfor %}",
    "{% endfor %}",
    r#"""""#,
    "# template for the changelog footer",
    r#"footer = """"#,
    "<!-- generated by git-cliff -->",
    r#"""""#,
    "# remove the leading and trailing s",
    "trim = true",
    "# postprocessors",
    "postprocessors = [",
    r#"  # { pattern = "<REPO>", replace = "https://github.com/orhun/git-cliff" }, # replace repository URL"#,
    "]",
    "",
    "[git]",
    "# parse the commits based on https://www.conventionalcommits.org",
    "conventional_commits = true",
    "# filter out the commits that are not conventional",
    "filter_unconventional = true",
    "# process each line of a commit as an individual commit",
    "split_commits = false",
    "# regex for preprocessing the commit messages",
    "commit_preprocessors = [",
    "  # Replace issue numbers",
    r#"  #{ pattern = "((w+s)?#([0-9]+))", replace = "([#${2}](<REPO>/issues/${2}))"},"#,
    "  # Check spelling of the commit with https://github.com/crate-ci/typos",
    "  # If the spelling is incorrect, it will be automatically fixed.",
    r#"  #{ pattern = ".*", replace_command = "typos --write-changes -" },"#,
    "]",
    "# regex for parsing and grouping commits",
    "commit_parsers = [",
    r#"  { message = "^feat", group = "<!-- 0 -->🚀 Features" },"#,
    r#"  { message = "^fix", group = "<!-- 1 -->🐛 Bug Fixes" },"#,
    r#"  { message = "^doc", group = "<!-- 3 -->📚 Documentation" },"#,
    r#"  { message = "^perf", group = "<!-- 4 -->⚡ Performance" },"#,
    r#"  { message = "^refactor", group = "<!-- 2 -->🚜 Refactor" },"#,
    r#"  { message = "^style", group = "<!-- 5 -->🎨 Styling" },"#,
    r#"  { message = "^test", group = "<!-- 6 -->🧪 Testing" },"#,
    r#"  { message = "^chore(release): prepare for", skip = true },"#,
    r#"  { message = "^chore(deps.*)", skip = true },"#,
    r#"  { message = "^chore(pr)", skip = true },"#,
    r#"  { message = "^chore(pull)", skip = true },"#,
    r#"  { message = "^chore|^ci", group = "<!-- 7 -->⚙️ Miscellaneous Tasks" },"#,
    r#"  { body = ".*security", group = "<!-- 8 -->🛡️ Security" },"#,
    r#"  { message = "^revert", group = "<!-- 9 -->◀️ Revert" },"#,
    "]",
    "# protect breaking changes from being skipped due to matching a skipping commit_parser",
    "protect_breaking_commits = false",
    "# filter out the commits that are not matched by commit parsers",
    "filter_commits = false",
    "# regex for matching git tags",
    r#"# tag_pattern = "v[0-9].*""#,
    "# regex for skipping tags",
    r#"# skip_tags = """#,
    "# regex for ignoring tags",
    r#"# ignore_tags = """#,
    "# sort the tags topologically",
    "topo_order = false",
    "# sort the commits inside sections by oldest/newest order",
    r#"sort_commits = "oldest""#,
    "# limit the number of commits included in the changelog.",
    "# limit_commits = 42",
];
