//! X/Y coordinate reporting
//!
//! Produces the sequence of X/Y positions visited by a program so that an
//! external plotter can draw it. Only X and Y words are tracked; everything else
//! is ignored.

use cutfeed_core::{PartName, Program, SPINDLE_ON_MARKER};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::segmenter::{PartScope, PartTracker};

const SPINDLE_OFF_MARKER: &str = "M05";

/// A position reached by a line of the program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
    /// Part owning the line
    pub part: PartName,
    /// Zero-based line index
    pub line_index: usize,
    /// Whether the spindle was on when the move started
    pub spindle_on: bool,
}

fn inline_comment_regex() -> &'static Regex {
    static INLINE_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    INLINE_COMMENT_REGEX.get_or_init(|| Regex::new(r"\([^)]*\)").expect("invalid regex pattern"))
}

fn line_comment_regex() -> &'static Regex {
    static LINE_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    LINE_COMMENT_REGEX.get_or_init(|| Regex::new(r";.*").expect("invalid regex pattern"))
}

/// Code words of a line: parenthesised comments removed, then anything after `;`
fn strip_comments(line: &str) -> String {
    let code = inline_comment_regex().replace_all(line, " ");
    line_comment_regex().replace(&code, "").into_owned()
}

fn axis_word_regex() -> &'static Regex {
    static AXIS_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    AXIS_WORD_REGEX.get_or_init(|| {
        Regex::new(r"(?i)([XY])\s*([+-]?(?:\d+\.?\d*|\.\d+))").expect("invalid regex pattern")
    })
}

/// Extract the X/Y positions visited by a program
///
/// Positions start at the origin. Each line carrying an X or Y word yields one
/// point; a missing axis keeps its previous (modal) value.
pub fn extract_xy(program: &Program) -> Vec<XyPoint> {
    let mut tracker = PartTracker::new(PartScope::PerPart);
    let mut points = Vec::new();
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let mut spindle_on = false;

    for (line_index, line) in program.lines().iter().enumerate() {
        tracker.observe(line);
        let code = strip_comments(line);

        if code.contains(SPINDLE_ON_MARKER) {
            spindle_on = true;
        }

        let mut moved = false;
        for caps in axis_word_regex().captures_iter(&code) {
            let Ok(value) = caps[2].parse::<f64>() else {
                continue;
            };
            match caps[1].to_ascii_uppercase().as_str() {
                "X" => x = value,
                _ => y = value,
            }
            moved = true;
        }

        if moved {
            points.push(XyPoint {
                x,
                y,
                part: tracker.current().clone(),
                line_index,
                spindle_on,
            });
        }

        if code.contains(SPINDLE_OFF_MARKER) {
            spindle_on = false;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_coordinates() {
        let program = Program::parse("G0 X10 Y5\nG1 X20\nG1 Y-2.5\nG1 Z-1");
        let points = extract_xy(&program);
        let xy: Vec<_> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(10.0, 5.0), (20.0, 5.0), (20.0, -2.5)]);
        assert_eq!(points[2].line_index, 2);
    }

    #[test]
    fn test_comments_ignored() {
        let program = Program::parse("G0 X1 (X99 Y99)\nG0 Y2 ; X50");
        let xy: Vec<_> = extract_xy(&program).iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(1.0, 0.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_words_after_inline_comment() {
        let program = Program::parse("G1 X1 (cut) Y2
G1 (a) X3 (b) Y4 ; X9");
        let xy: Vec<_> = extract_xy(&program).iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_packed_words_and_decimals() {
        let program = Program::parse("G1X.5Y-3.\ng1 x2 y+4");
        let xy: Vec<_> = extract_xy(&program).iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.5, -3.0), (2.0, 4.0)]);
    }

    #[test]
    fn test_spindle_state_and_parts() {
        let program = Program::parse("G0 X0 Y0\n(Part: Lid)\nM03 S1000\nG1 X5\nM05\nG0 X0");
        let points = extract_xy(&program);
        assert_eq!(points.len(), 3);
        assert!(!points[0].spindle_on);
        assert!(points[0].part.is_unknown());
        assert!(points[1].spindle_on);
        assert_eq!(points[1].part.as_str(), "Lid");
        assert!(!points[2].spindle_on);
    }

    #[test]
    fn test_part_marker_is_not_a_move() {
        let program = Program::parse("(Part: X1 Y1)");
        assert!(extract_xy(&program).is_empty());
    }
}
