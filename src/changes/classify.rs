//! Path categories and the commit type heuristic.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::parser::{ChangeKind, ChangeRecord};

/// Non-exclusive bucket a changed path can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Config,
    Docs,
}

impl Category {
    /// All categories in message order.
    pub const ALL: [Category; 4] = [
        Category::Frontend,
        Category::Backend,
        Category::Config,
        Category::Docs,
    ];

    /// Phrase used in a synthesized commit description.
    pub fn phrase(self) -> &'static str {
        match self {
            Category::Frontend => "frontend updates",
            Category::Backend => "backend changes",
            Category::Config => "configuration",
            Category::Docs => "documentation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Frontend => write!(f, "frontend"),
            Category::Backend => write!(f, "backend"),
            Category::Config => write!(f, "config"),
            Category::Docs => write!(f, "docs"),
        }
    }
}

/// Membership rule for one category. Matching is case-sensitive and a path
/// belongs to the category if any list matches.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    /// Substrings searched for anywhere in the path.
    pub path_markers: &'static [&'static str],
    /// File extensions, without the dot.
    pub extensions: &'static [&'static str],
    /// Exact file names.
    pub file_names: &'static [&'static str],
    /// File name prefixes.
    pub name_prefixes: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, path: &str) -> bool {
        if self.path_markers.iter().any(|m| path.contains(m)) {
            return true;
        }

        let path = Path::new(path);
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let extension = path.extension().and_then(|e| e.to_str());

        extension.is_some_and(|ext| self.extensions.contains(&ext))
            || self.file_names.contains(&file_name)
            || self.name_prefixes.iter().any(|p| file_name.starts_with(p))
    }
}

/// Category rules, one per category, in message order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Frontend,
        path_markers: &["frontend/"],
        extensions: &["svelte", "ts", "js", "css", "html"],
        file_names: &[],
        name_prefixes: &[],
    },
    CategoryRule {
        category: Category::Backend,
        path_markers: &[],
        extensions: &["go"],
        file_names: &["go.mod", "go.sum"],
        name_prefixes: &[],
    },
    CategoryRule {
        category: Category::Config,
        path_markers: &[".config"],
        extensions: &["json", "yml", "yaml", "toml"],
        file_names: &[".prettierrc", "tasks.json", "settings.json"],
        name_prefixes: &[],
    },
    CategoryRule {
        category: Category::Docs,
        path_markers: &[],
        extensions: &["md"],
        file_names: &[],
        name_prefixes: &["README"],
    },
];

/// Number of changed paths per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub frontend: usize,
    pub backend: usize,
    pub config: usize,
    pub docs: usize,
}

impl CategoryCounts {
    /// Count paths against [`CATEGORY_RULES`].
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for path in paths {
            for rule in CATEGORY_RULES {
                if rule.matches(path) {
                    *counts.slot(rule.category) += 1;
                }
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Frontend => self.frontend,
            Category::Backend => self.backend,
            Category::Config => self.config,
            Category::Docs => self.docs,
        }
    }

    /// Categories with a non-zero count, in message order.
    pub fn present(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c) > 0)
            .collect()
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Frontend => &mut self.frontend,
            Category::Backend => &mut self.backend,
            Category::Config => &mut self.config,
            Category::Docs => &mut self.docs,
        }
    }
}

/// Commit type label derived from the shape of the change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
}

impl CommitType {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Refactor => "refactor",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Added/modified/deleted totals of a change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl KindCounts {
    /// Untracked files count as added.
    pub fn from_records(records: &[ChangeRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.kind {
                ChangeKind::Added | ChangeKind::Untracked => counts.added += 1,
                ChangeKind::Modified => counts.modified += 1,
                ChangeKind::Deleted => counts.deleted += 1,
            }
        }
        counts
    }

    /// More modifications than additions is a fix, otherwise any deletion is
    /// a refactor, otherwise a feature. The first comparison wins over the
    /// deletion check.
    pub fn commit_type(&self) -> CommitType {
        if self.modified > self.added {
            CommitType::Fix
        } else if self.deleted > 0 {
            CommitType::Refactor
        } else {
            CommitType::Feat
        }
    }
}

/// Commit type for a sequence of records.
pub fn commit_type(records: &[ChangeRecord]) -> CommitType {
    KindCounts::from_records(records).commit_type()
}
