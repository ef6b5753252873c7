const CHANGELOG_HEADER: &str = "# CHANGELOG\n";

/// Conventional-commit prefixes mapped to their section titles, in
/// rendering order. Summaries matching none of them land in "Other
/// Changes".
const SECTIONS: [(&str, &str); 4] = [
    ("feat", "Features"),
    ("fix", "Bug Fixes"),
    ("perf", "Performance Improvements"),
    ("refactor", "Code Refactoring"),
];

const FALLBACK_SECTION: &str = "Other Changes";

fn section_title(summary: &str) -> &'static str {
    for (prefix, title) in SECTIONS {
        let Some(rest) = summary.strip_prefix(prefix) else {
            continue;
        };
        // `feat: ...`, `feat(scope): ...` and `feat!: ...` all count.
        if rest.starts_with(':') || rest.starts_with('(') || rest.starts_with('!') {
            return title;
        }
    }
    FALLBACK_SECTION
}

fn strip_type_prefix(summary: &str) -> &str {
    summary
        .split_once(": ")
        .map_or(summary, |(_, description)| description)
}

/// Renders one `## version` section from commit summaries, grouped
/// conventional-commit-style.
#[must_use]
pub fn render_release_section(version: &str, summaries: &[String]) -> String {
    let mut output = format!("## {version}\n");

    let titles: Vec<&str> = SECTIONS
        .iter()
        .map(|(_, title)| *title)
        .chain(std::iter::once(FALLBACK_SECTION))
        .collect();

    for title in titles {
        let entries: Vec<&str> = summaries
            .iter()
            .filter(|s| section_title(s) == title)
            .map(|s| strip_type_prefix(s))
            .collect();

        if entries.is_empty() {
            continue;
        }

        output.push_str("\n### ");
        output.push_str(title);
        output.push('\n');
        for entry in entries {
            output.push_str("\n- ");
            output.push_str(entry);
        }
        output.push('\n');
    }

    output
}

/// Renders the full changelog blob: header plus the release section
/// for `version`, followed by whatever previous content should be
/// retained (already rendered text without the header).
#[must_use]
pub fn render(version: &str, summaries: &[String], previous: Option<&str>) -> String {
    let mut output = String::from(CHANGELOG_HEADER);
    output.push('\n');
    output.push_str(&render_release_section(version, summaries));

    if let Some(previous) = previous {
        let trimmed = previous
            .strip_prefix(CHANGELOG_HEADER)
            .unwrap_or(previous)
            .trim_start_matches('\n');
        if !trimmed.is_empty() {
            output.push('\n');
            output.push_str(trimmed);
        }
    }

    output
}
