//! # cutfeed Core
//!
//! Core types shared by the cutfeed crates:
//! - [`Program`]: a cutting program as an ordered list of lines
//! - [`PartName`] and the part-boundary marker rules
//! - [`Thickness`] and the [`FeedValue`] it selects
//! - Error types built on `thiserror`

pub mod error;
pub mod part;
pub mod program;
pub mod thickness;

pub use error::{Error, Result};
pub use part::{
    is_boundary_marker, is_spindle_start, normalize_part_name, PartName, PART_MARKER,
    SPINDLE_ON_MARKER, UNKNOWN_PART,
};
pub use program::Program;
pub use thickness::{FeedValue, Thickness};
