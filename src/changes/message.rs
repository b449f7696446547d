//! Commit message synthesis.

use super::ChangeSet;
use super::classify::CategoryCounts;

/// Description used when no category applies.
pub const DEFAULT_DESCRIPTION: &str = "project updates";

/// Join the phrases of the present categories, or fall back to
/// [`DEFAULT_DESCRIPTION`].
pub fn describe(categories: &CategoryCounts) -> String {
    let phrases: Vec<&str> = categories
        .present()
        .into_iter()
        .map(|c| c.phrase())
        .collect();

    if phrases.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        phrases.join(", ")
    }
}

/// Fixed message for quick mode, chosen when the status text contains any
/// of `markers`.
#[derive(Debug, Clone, Copy)]
pub struct QuickRule {
    pub markers: &'static [&'static str],
    pub message: &'static str,
}

/// Quick-mode messages, first match wins.
pub const QUICK_RULES: &[QuickRule] = &[
    QuickRule {
        markers: &["frontend/"],
        message: "frontend: updates and improvements",
    },
    QuickRule {
        markers: &[".go"],
        message: "core improvements",
    },
    QuickRule {
        markers: &[".md", "README"],
        message: "docs: update documentation",
    },
    QuickRule {
        markers: &[".json", ".config"],
        message: "config: update project configuration",
    },
];

/// Quick-mode message for raw porcelain status text.
///
/// Markers are matched case-sensitively against the whole text. Without a
/// match the message counts the non-blank status lines.
pub fn quick_message(status: &str) -> String {
    QUICK_RULES
        .iter()
        .find(|rule| rule.markers.iter().any(|m| status.contains(m)))
        .map(|rule| rule.message.to_string())
        .unwrap_or_else(|| {
            let file_count = status.lines().filter(|l| !l.trim().is_empty()).count();
            format!("update: {file_count} files changed")
        })
}

/// Build a `"<type>: <description>"` message for a change set.
///
/// Pure: the same change set always yields the same message.
pub fn synthesize_message(changes: &ChangeSet) -> String {
    let commit_type = changes.kind_counts().commit_type();
    format!("{}: {}", commit_type, describe(changes.categories()))
}
