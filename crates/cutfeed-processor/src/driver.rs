//! Program rewrite driver
//!
//! Orchestrates the pre-scan, the cyclic policy and the feed rewriter in a
//! single forward pass over the program lines.
//!
//! Rewrite mode is a two-state machine:
//!
//! ```text
//!             event classified Rewrite
//! Passthrough ------------------------> Rewriting
//!      ^                                    |
//!      +------------------------------------+
//!        boundary marker, or event classified Skip/Terminal
//! ```

use cutfeed_core::{FeedValue, PartName, Program};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::counter::{compute_totals_scoped, PartTotals};
use crate::limits::RewriteLimits;
use crate::policy::{classify, CycleCounter, Decision};
use crate::rewriter::FeedRewriter;
use crate::segmenter::{LineKind, PartScope, PartTracker};

/// Whether lines are currently eligible for feed substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// Lines pass through unchanged
    #[default]
    Passthrough,
    /// Sentinel feeds are replaced
    Rewriting,
}

impl RewriteMode {
    /// State after a boundary marker
    pub fn on_boundary(self) -> Self {
        Self::Passthrough
    }

    /// State after a classified spindle-start event
    pub fn on_event(self, decision: Decision) -> Self {
        if decision.rewrites() {
            Self::Rewriting
        } else {
            Self::Passthrough
        }
    }

    pub fn is_rewriting(&self) -> bool {
        matches!(self, Self::Rewriting)
    }
}

/// One classified spindle-start event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Zero-based line index of the event
    pub line_index: usize,
    /// Part owning the event
    pub part: PartName,
    /// One-based position of the event within its part
    pub ordinal: usize,
    /// Event total of the part
    pub part_total: usize,
    pub decision: Decision,
}

/// Result of a rewrite pass
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    /// The rewritten program
    pub program: Program,
    /// Every spindle-start event, in line order
    pub events: Vec<EventRecord>,
    /// Event totals from the pre-scan
    pub totals: PartTotals,
    /// Number of lines whose text changed
    pub lines_rewritten: usize,
}

impl RewriteReport {
    /// Events belonging to one part
    pub fn events_for<'a>(&'a self, part: &'a str) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.events.iter().filter(move |e| e.part.as_str() == part)
    }

    /// Number of events classified as rewrite
    pub fn rewritten_events(&self) -> usize {
        self.events.iter().filter(|e| e.decision.rewrites()).count()
    }
}

/// Runs the rewrite pass for one configuration
#[derive(Debug, Clone)]
pub struct RewriteDriver<'a> {
    rewriter: FeedRewriter,
    limits: &'a RewriteLimits,
    scope: PartScope,
}

impl<'a> RewriteDriver<'a> {
    pub fn new(replacement: FeedValue, limits: &'a RewriteLimits) -> Self {
        Self {
            rewriter: FeedRewriter::new(replacement),
            limits,
            scope: PartScope::PerPart,
        }
    }

    /// Select how lines are grouped into parts
    pub fn with_scope(mut self, scope: PartScope) -> Self {
        self.scope = scope;
        self
    }

    /// Rewrite a program
    ///
    /// Always produces an output with the same lines in the same order. Parts
    /// without a limit entry pass through unchanged.
    pub fn run(&self, program: &Program) -> RewriteReport {
        let totals = compute_totals_scoped(program, self.scope);
        for (part, events) in totals.iter() {
            if events > 0 && !self.limits.contains(part.as_str()) {
                tracing::warn!(
                    "No rewrite limit for part '{}' ({} events), leaving it unchanged",
                    part,
                    events
                );
            }
        }

        let mut tracker = PartTracker::new(self.scope);
        let mut counters: HashMap<PartName, CycleCounter> = HashMap::new();
        let mut mode = RewriteMode::default();
        let mut events = Vec::with_capacity(totals.total_events());
        let mut lines = Vec::with_capacity(program.len());
        let mut lines_rewritten = 0;

        for (line_index, line) in program.lines().iter().enumerate() {
            match tracker.observe(line) {
                LineKind::Boundary => {
                    mode = mode.on_boundary();
                    lines.push(line.clone());
                    continue;
                }
                LineKind::SpindleStart => {
                    let part = tracker.current();
                    let part_total = totals.get(part.as_str());
                    let limit = self.limits.limit_for(part.as_str());
                    let counter = counters.entry(part.clone()).or_default();
                    let decision = classify(counter, part_total, limit);

                    tracing::debug!(
                        "Part '{}' event {}/{} at line {}: {}",
                        part,
                        counter.global(),
                        part_total,
                        line_index + 1,
                        decision
                    );

                    events.push(EventRecord {
                        line_index,
                        part: part.clone(),
                        ordinal: counter.global(),
                        part_total,
                        decision,
                    });
                    mode = mode.on_event(decision);
                }
                LineKind::Other => {}
            }

            if mode.is_rewriting() {
                match self.rewriter.rewrite_line(line) {
                    Cow::Owned(rewritten) if rewritten != *line => {
                        lines_rewritten += 1;
                        lines.push(rewritten);
                    }
                    _ => lines.push(line.clone()),
                }
            } else {
                lines.push(line.clone());
            }
        }

        let report = RewriteReport {
            program: program.with_lines(lines),
            events,
            totals,
            lines_rewritten,
        };

        tracing::info!(
            "Rewrote {} lines: {} of {} spindle-start events across {} parts use {}",
            report.lines_rewritten,
            report.rewritten_events(),
            report.events.len(),
            report.totals.len(),
            self.rewriter.replacement()
        );

        report
    }
}

/// Rewrite a program with boundary markers opening parts
pub fn rewrite(
    program: &Program,
    replacement: &FeedValue,
    limits: &RewriteLimits,
) -> Program {
    rewrite_with_report(program, replacement, limits).program
}

/// Rewrite a program and keep the per-event decisions
pub fn rewrite_with_report(
    program: &Program,
    replacement: &FeedValue,
    limits: &RewriteLimits,
) -> RewriteReport {
    RewriteDriver::new(replacement.clone(), limits).run(program)
}
