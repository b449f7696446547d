//! Change preview and dry-run report rendering.

use serde::Serialize;

use crate::changes::{ChangeKind, ChangeSet, KindCounts};

use super::CommitPlan;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Render the changed files grouped into added, modified, and deleted.
pub fn format_preview(changes: &ChangeSet) -> String {
    let groups = [
        ("Added files:", "+", GREEN, changes.paths_where(ChangeKind::is_addition)),
        (
            "Modified files:",
            "~",
            YELLOW,
            changes.paths_where(|k| k == ChangeKind::Modified),
        ),
        (
            "Deleted files:",
            "-",
            RED,
            changes.paths_where(|k| k == ChangeKind::Deleted),
        ),
    ];

    let mut lines = vec!["=== Git Changes Preview ===".to_string()];
    let mut any = false;
    for (title, marker, color, paths) in groups {
        if paths.is_empty() {
            continue;
        }
        any = true;
        lines.push(format!("{color}{title}{RESET}"));
        lines.extend(paths.iter().map(|p| format!("{color}  {marker} {p}{RESET}")));
    }
    if !any {
        lines.push("  (no added, modified, or deleted files)".to_string());
    }

    lines.join("\n")
}

/// Print the preview followed by a blank line.
pub fn print_preview(changes: &ChangeSet) {
    println!();
    println!("{}", format_preview(changes));
    println!();
}

#[derive(Serialize)]
struct DryRunReport<'a> {
    changes: &'a ChangeSet,
    kinds: KindCounts,
    plan: &'a CommitPlan,
}

/// Render the change set and resolved plan as pretty JSON.
pub fn render_json_report(
    changes: &ChangeSet,
    plan: &CommitPlan,
) -> Result<String, serde_json::Error> {
    let report = DryRunReport {
        changes,
        kinds: changes.kind_counts(),
        plan,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::ChangeRecord;

    fn sample() -> ChangeSet {
        ChangeSet::new(vec![
            ChangeRecord {
                path: "new.ts".to_string(),
                kind: ChangeKind::Untracked,
            },
            ChangeRecord {
                path: "main.go".to_string(),
                kind: ChangeKind::Modified,
            },
        ])
    }

    #[test]
    fn test_preview_groups_by_kind() {
        let preview = format_preview(&sample());
        assert!(preview.contains("Added files:"));
        assert!(preview.contains("  + new.ts"));
        assert!(preview.contains("Modified files:"));
        assert!(preview.contains("  ~ main.go"));
        assert!(!preview.contains("Deleted files:"));
    }

    #[test]
    fn test_preview_without_recognised_files() {
        let preview = format_preview(&ChangeSet::new(Vec::new()));
        assert!(preview.contains("(no added, modified, or deleted files)"));
    }

    #[test]
    fn test_json_report_shape() {
        let plan = CommitPlan {
            message: "feat: frontend updates, backend changes".to_string(),
            should_push: false,
        };
        let json = render_json_report(&sample(), &plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["plan"]["message"], "feat: frontend updates, backend changes");
        assert_eq!(value["plan"]["should_push"], false);
        assert_eq!(value["kinds"]["added"], 1);
        assert_eq!(value["kinds"]["modified"], 1);
        assert_eq!(value["changes"]["categories"]["frontend"], 1);
        assert_eq!(value["changes"]["records"][0]["kind"], "untracked");
    }
}
