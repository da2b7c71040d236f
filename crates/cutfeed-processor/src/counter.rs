//! Spindle-event pre-scan
//!
//! Counts spindle-start events per part over the whole program. The totals must
//! be known before the rewrite pass classifies the first event, because the
//! terminal-event rule needs to know which event is the last one of its part.

use cutfeed_core::{PartName, Program};
use serde::Serialize;
use std::collections::HashMap;

use crate::segmenter::{LineKind, PartScope, PartTracker};

/// Spindle-start event totals per part, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartTotals {
    entries: Vec<(PartName, usize)>,
    #[serde(skip)]
    index: HashMap<PartName, usize>,
}

impl PartTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a part without adding an event
    fn touch(&mut self, part: &PartName) -> usize {
        if let Some(&slot) = self.index.get(part) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((part.clone(), 0));
        self.index.insert(part.clone(), slot);
        slot
    }

    fn add_event(&mut self, part: &PartName) {
        let slot = self.touch(part);
        self.entries[slot].1 += 1;
    }

    /// Event total for a part; parts never seen have zero events
    pub fn get(&self, part: &str) -> usize {
        self.index
            .get(part)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, part: &str) -> bool {
        self.index.contains_key(part)
    }

    /// Iterate `(part, total)` pairs in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&PartName, usize)> {
        self.entries.iter().map(|(name, total)| (name, *total))
    }

    /// Part names in order of first appearance
    pub fn names(&self) -> Vec<PartName> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Names of the parts that own at least one event, the ones that need a limit
    pub fn parts_with_events(&self) -> Vec<PartName> {
        self.entries
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of events over all parts
    pub fn total_events(&self) -> usize {
        self.entries.iter().map(|(_, total)| total).sum()
    }
}

/// Count spindle-start events per part, with boundary markers opening parts
pub fn compute_totals(program: &Program) -> PartTotals {
    compute_totals_scoped(program, PartScope::PerPart)
}

/// Count spindle-start events per part under the given scope
///
/// Every part opened by a marker is listed, even with zero events. The
/// `UNKNOWN` part is listed only when it owns at least one event.
pub fn compute_totals_scoped(program: &Program, scope: PartScope) -> PartTotals {
    let mut tracker = PartTracker::new(scope);
    let mut totals = PartTotals::new();

    for line in program.lines() {
        match tracker.observe(line) {
            LineKind::Boundary => {
                totals.touch(tracker.current());
            }
            LineKind::SpindleStart => totals.add_event(tracker.current()),
            LineKind::Other => {}
        }
    }

    totals
}

/// Distinct part names a limit may be configured for, in order of appearance
pub fn discover_parts(program: &Program, scope: PartScope) -> Vec<PartName> {
    compute_totals_scoped(program, scope).names()
}
