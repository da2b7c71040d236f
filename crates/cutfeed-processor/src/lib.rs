//! # cutfeed Processor
//!
//! The per-part cyclic feed-rate rewriting engine.
//!
//! A program is processed in two passes:
//! 1. [`compute_totals`] counts spindle-start events per part.
//! 2. [`rewrite`] walks the lines once, classifying every event with the
//!    cyclic policy and rewriting the sentinel feed on lines that follow an
//!    event classified as "rewrite".
//!
//! The last event of every part is never rewritten. The engine is total:
//! every input program produces an output, and a part without a limit entry
//! is left unchanged.
//!
//! ```
//! use cutfeed_core::{Program, Thickness};
//! use cutfeed_processor::{rewrite, RewriteLimits};
//!
//! let program = Program::parse("M03\nG1 X1 F1500\nM03\nG1 X2 F1500\n");
//! let limits = RewriteLimits::new().with_limit("UNKNOWN", 1);
//! let out = rewrite(&program, &Thickness::Mm8.feed_value(), &limits);
//! assert_eq!(out.to_text(), "M03\nG1 X1 F800.0\nM03\nG1 X2 F1500\n");
//! ```

pub mod counter;
pub mod driver;
pub mod limits;
pub mod policy;
pub mod rewriter;
pub mod segmenter;
pub mod toolpath;

pub use counter::{compute_totals, compute_totals_scoped, discover_parts, PartTotals};
pub use driver::{rewrite, rewrite_with_report, EventRecord, RewriteDriver, RewriteMode, RewriteReport};
pub use limits::RewriteLimits;
pub use policy::{classify, CycleCounter, Decision};
pub use rewriter::{FeedRewriter, SENTINEL_FEED};
pub use segmenter::{segment, LineKind, PartScope, PartSegment, PartTracker};
pub use toolpath::{extract_xy, XyPoint};
