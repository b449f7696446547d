//! Change classification and commit message synthesis.
//!
//! Porcelain status text is parsed into [`ChangeRecord`]s, bucketed into
//! [`Category`] counts, and turned into a `"<type>: <description>"` message.

pub mod classify;
pub mod message;
pub mod parser;

use serde::Serialize;

pub use classify::{
    CATEGORY_RULES, Category, CategoryCounts, CategoryRule, CommitType, KindCounts, commit_type,
};
pub use message::{QUICK_RULES, QuickRule, describe, quick_message, synthesize_message};
pub use parser::{ChangeKind, ChangeRecord, ParsedStatus, parse_status};

/// The pending changes of one invocation with their derived category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    records: Vec<ChangeRecord>,
    categories: CategoryCounts,
}

impl ChangeSet {
    /// Build a change set, deriving category counts from the records' paths.
    pub fn new(records: Vec<ChangeRecord>) -> Self {
        let categories = CategoryCounts::from_paths(records.iter().map(|r| r.path.as_str()));
        Self {
            records,
            categories,
        }
    }

    /// Records in status order.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn categories(&self) -> &CategoryCounts {
        &self.categories
    }

    /// Added/modified/deleted totals. Untracked files count as added.
    pub fn kind_counts(&self) -> KindCounts {
        KindCounts::from_records(&self.records)
    }

    /// Paths of the records matching `predicate`, in status order.
    pub fn paths_where(&self, predicate: impl Fn(ChangeKind) -> bool) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| predicate(r.kind))
            .map(|r| r.path.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
