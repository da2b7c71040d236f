//! Part names and line markers
//!
//! A cutting program is divided into logical parts by comment lines such as
//! `(Part: copiar de Bracket [2])`. Every line after such a marker belongs to
//! that part until the next marker. Lines before the first marker belong to the
//! sentinel part [`UNKNOWN_PART`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

/// Literal substring that identifies a part-boundary marker line
pub const PART_MARKER: &str = "(Part:";

/// Literal substring that identifies a spindle-start event
pub const SPINDLE_ON_MARKER: &str = "M03";

/// Name of the part that owns lines seen before any boundary marker
pub const UNKNOWN_PART: &str = "UNKNOWN";

/// Normalized name of a logical part
///
/// Compared by exact, case-sensitive string equality. The empty name is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartName(String);

impl PartName {
    /// Create a part name from already-normalized text
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The sentinel part that owns lines before the first marker
    pub fn unknown() -> Self {
        Self(UNKNOWN_PART.to_string())
    }

    /// Parse the name out of a boundary-marker line
    pub fn from_marker(line: &str) -> Self {
        Self(normalize_part_name(line))
    }

    /// Whether this is the sentinel part
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_PART
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PartName {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PartName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PartName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PartName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PartName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Check whether a line opens a new part
pub fn is_boundary_marker(line: &str) -> bool {
    line.contains(PART_MARKER)
}

/// Check whether a line turns the spindle on
///
/// Boundary markers are never events, even when their text happens to contain
/// the spindle marker.
pub fn is_spindle_start(line: &str) -> bool {
    !is_boundary_marker(line) && line.contains(SPINDLE_ON_MARKER)
}

fn label_regex() -> &'static Regex {
    static LABEL_REGEX: OnceLock<Regex> = OnceLock::new();
    LABEL_REGEX
        .get_or_init(|| Regex::new(r"(?i)\(part:\s*(.*?)\)").expect("invalid regex pattern"))
}

fn copied_from_regex() -> &'static Regex {
    static COPIED_FROM_REGEX: OnceLock<Regex> = OnceLock::new();
    COPIED_FROM_REGEX.get_or_init(|| Regex::new(r"(?i)copiar de").expect("invalid regex pattern"))
}

fn copy_index_regex() -> &'static Regex {
    static COPY_INDEX_REGEX: OnceLock<Regex> = OnceLock::new();
    COPY_INDEX_REGEX.get_or_init(|| Regex::new(r"\[\d+\]").expect("invalid regex pattern"))
}

/// Extract and normalize the part name from a boundary-marker line
///
/// 1. Take the text inside `(Part: ...)` (label matched case-insensitively).
/// 2. Without a structured match, strip `(Part:` and `)` from the whole line.
/// 3. Drop the "copiar de" copy marker, case-insensitively.
/// 4. Drop bracketed copy indices such as `[2]`.
/// 5. Trim surrounding whitespace.
pub fn normalize_part_name(line: &str) -> String {
    let content = match label_regex().captures(line).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => line.replace(PART_MARKER, "").replace(')', ""),
    };

    let content = copied_from_regex().replace_all(&content, "");
    let content = copy_index_regex().replace_all(&content, "");
    content.trim().to_string()
}
