//! Part segmentation
//!
//! Tracks which part owns each line of a program and splits a program into
//! ordered part segments.

use cutfeed_core::{is_boundary_marker, is_spindle_start, PartName, Program};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How lines are grouped into parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartScope {
    /// Boundary markers open new parts
    #[default]
    PerPart,
    /// The whole program is one part; markers are ordinary lines
    WholeProgram,
}

impl std::fmt::Display for PartScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerPart => write!(f, "per_part"),
            Self::WholeProgram => write!(f, "whole_program"),
        }
    }
}

/// Role of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a new part
    Boundary,
    /// Turns the spindle on
    SpindleStart,
    /// Anything else
    Other,
}

/// Follows the current part while lines are visited in order
#[derive(Debug, Clone)]
pub struct PartTracker {
    scope: PartScope,
    current: PartName,
}

impl PartTracker {
    /// Create a tracker positioned before the first line
    pub fn new(scope: PartScope) -> Self {
        Self {
            scope,
            current: PartName::unknown(),
        }
    }

    /// Classify a line and update the current part when it is a boundary
    pub fn observe(&mut self, line: &str) -> LineKind {
        if self.scope == PartScope::PerPart && is_boundary_marker(line) {
            self.current = PartName::from_marker(line);
            LineKind::Boundary
        } else if line.contains(cutfeed_core::SPINDLE_ON_MARKER)
            && (self.scope == PartScope::WholeProgram || is_spindle_start(line))
        {
            LineKind::SpindleStart
        } else {
            LineKind::Other
        }
    }

    /// Part owning the most recently observed line
    pub fn current(&self) -> &PartName {
        &self.current
    }

    pub fn scope(&self) -> PartScope {
        self.scope
    }
}

/// A contiguous run of lines owned by one part
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSegment {
    /// Normalized part name
    pub name: PartName,
    /// Line indices covered, including the opening marker line
    pub lines: Range<usize>,
}

impl PartSegment {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split a program into ordered part segments
///
/// Lines before the first marker form an `UNKNOWN` segment, which is omitted
/// when empty. A part name may appear in several segments when its marker is
/// repeated.
pub fn segment(program: &Program, scope: PartScope) -> Vec<PartSegment> {
    let mut tracker = PartTracker::new(scope);
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, line) in program.lines().iter().enumerate() {
        let owner = tracker.current().clone();
        if tracker.observe(line) == LineKind::Boundary {
            if index > start {
                segments.push(PartSegment {
                    name: owner,
                    lines: start..index,
                });
            }
            start = index;
        }
    }

    if program.len() > start {
        segments.push(PartSegment {
            name: tracker.current().clone(),
            lines: start..program.len(),
        });
    }

    segments
}
