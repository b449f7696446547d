//! Porcelain status parsing.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChangeSet;

/// A two-column status code, a space, then the path.
static STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<code>[ MTADRCU?!]{2}) (?P<path>.+)$").unwrap());

/// Kind of a pending change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Untracked,
}

impl ChangeKind {
    /// Map a two-character status code to a kind.
    ///
    /// The first non-blank character decides, so `M ` (staged) and ` M`
    /// (unstaged) are both modifications. Codes outside `??`/`A`/`M`/`D`
    /// return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_start();
        if code.starts_with("??") {
            return Some(Self::Untracked);
        }
        match code.chars().next()? {
            'A' => Some(Self::Added),
            'M' => Some(Self::Modified),
            'D' => Some(Self::Deleted),
            _ => None,
        }
    }

    /// New files, tracked or not.
    pub fn is_addition(self) -> bool {
        matches!(self, Self::Added | Self::Untracked)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Added => write!(f, "Added"),
            ChangeKind::Modified => write!(f, "Modified"),
            ChangeKind::Deleted => write!(f, "Deleted"),
            ChangeKind::Untracked => write!(f, "Untracked"),
        }
    }
}

/// One pending change from the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub path: String,
    pub kind: ChangeKind,
}

/// Result of parsing a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStatus {
    /// The working tree has no pending changes.
    Clean,
    /// Pending changes. May hold no records when every line had an
    /// unrecognised code (renames, conflicts).
    Changes(ChangeSet),
}

/// Parse `git status --porcelain` output into a change set.
///
/// `None`, empty, or whitespace-only input is [`ParsedStatus::Clean`].
/// Blank lines and lines with unrecognised codes are skipped; record order
/// follows line order.
pub fn parse_status(text: Option<&str>) -> ParsedStatus {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return ParsedStatus::Clean,
    };

    let records = text.lines().filter_map(parse_line).collect();
    ParsedStatus::Changes(ChangeSet::new(records))
}

/// Parse a single status line.
fn parse_line(line: &str) -> Option<ChangeRecord> {
    if line.trim().is_empty() {
        return None;
    }

    let Some(caps) = STATUS_LINE.captures(line) else {
        debug!("Skipping malformed status line: {:?}", line);
        return None;
    };

    let code = caps.name("code").map(|m| m.as_str()).unwrap_or_default();
    let Some(kind) = ChangeKind::from_code(code) else {
        debug!("Ignoring status code {:?} for line {:?}", code, line);
        return None;
    };

    let path = caps.name("path").map(|m| m.as_str()).unwrap_or_default();
    Some(ChangeRecord {
        path: unquote_path(path),
        kind,
    })
}

/// Undo git's C-style quoting of paths with spaces or special characters.
///
/// `"dir/my file.txt"` becomes `dir/my file.txt`; octal escapes are decoded
/// as UTF-8 bytes. Unquoted paths are returned as-is.
fn unquote_path(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some(d @ '0'..='7') => {
                let mut digits = String::from(d);
                while digits.len() < 3 {
                    match chars.next_if(|c| c.is_digit(8)) {
                        Some(next) => digits.push(next),
                        None => break,
                    }
                }
                // Escapes above \377 are not bytes; keep them as written.
                match u32::from_str_radix(&digits, 8).ok().and_then(|v| u8::try_from(v).ok()) {
                    Some(byte) => bytes.push(byte),
                    None => {
                        bytes.push(b'\\');
                        bytes.extend_from_slice(digits.as_bytes());
                    }
                }
            }
            Some(other) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
