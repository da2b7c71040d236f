//! Cyclic rewrite policy
//!
//! Within a part, events are rewritten in cycles of `limit + 1`: the first
//! `limit` events of a cycle are rewritten, the next one is skipped and the
//! cycle starts over. The last event of the part is never rewritten and does
//! not take part in the cycle.

use serde::{Deserialize, Serialize};

/// Running counters for one part during a rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter {
    global: usize,
    cycle: u32,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of this part seen so far
    pub fn global(&self) -> usize {
        self.global
    }

    /// Events counted in the current, unfinished cycle
    pub fn cycle(&self) -> u32 {
        self.cycle
    }
}

/// Outcome of classifying one spindle-start event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Within the first `limit` events of the cycle
    Rewrite,
    /// Past the limit; the cycle restarts with the next event
    Skip,
    /// Last event of the part
    Terminal,
}

impl Decision {
    /// Whether lines following this event get the replacement feed
    pub fn rewrites(&self) -> bool {
        matches!(self, Self::Rewrite)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rewrite => write!(f, "rewrite"),
            Self::Skip => write!(f, "skip"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

/// Classify the next spindle-start event of a part
///
/// `counter` holds the part's state before this event and is advanced in
/// place. `total` is the part's event count from the pre-scan.
pub fn classify(counter: &mut CycleCounter, total: usize, limit: u32) -> Decision {
    counter.global += 1;

    if counter.global == total {
        return Decision::Terminal;
    }

    counter.cycle += 1;
    if counter.cycle <= limit {
        Decision::Rewrite
    } else {
        counter.cycle = 0;
        Decision::Skip
    }
}
