//! Sentinel feed substitution

use cutfeed_core::FeedValue;
use regex::{Match, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Feed word eligible for replacement
pub const SENTINEL_FEED: &str = "F1500";

/// Matches `F1500`, `F1500.0`, `F1500.00`, ...
fn feed_token_regex() -> &'static Regex {
    static FEED_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    FEED_TOKEN_REGEX.get_or_init(|| Regex::new(r"F1500(?:\.0+)?").expect("invalid regex pattern"))
}

/// Sentinel tokens in a line, excluding longer numbers such as `F15000` or `F1500.5`
fn sentinel_tokens(line: &str) -> impl Iterator<Item = Match<'_>> + '_ {
    feed_token_regex().find_iter(line).filter(move |m| {
        !matches!(line.as_bytes().get(m.end()), Some(b) if b.is_ascii_digit() || *b == b'.')
    })
}

/// Replaces the sentinel feed with a configured feed value
#[derive(Debug, Clone)]
pub struct FeedRewriter {
    replacement: FeedValue,
}

impl FeedRewriter {
    pub fn new(replacement: FeedValue) -> Self {
        Self { replacement }
    }

    pub fn replacement(&self) -> &FeedValue {
        &self.replacement
    }

    /// Whether a line carries the sentinel feed
    pub fn matches(line: &str) -> bool {
        sentinel_tokens(line).next().is_some()
    }

    /// Substitute every sentinel feed in a line
    ///
    /// Returns the line unchanged (borrowed) when it has no sentinel feed.
    pub fn rewrite_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut rewritten = String::new();
        let mut last = 0;
        for token in sentinel_tokens(line) {
            rewritten.push_str(&line[last..token.start()]);
            rewritten.push_str(self.replacement.as_str());
            last = token.end();
        }
        if last == 0 {
            return Cow::Borrowed(line);
        }
        rewritten.push_str(&line[last..]);
        Cow::Owned(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutfeed_core::Thickness;

    fn rewriter() -> FeedRewriter {
        FeedRewriter::new(Thickness::Mm8.feed_value())
    }

    #[test]
    fn test_plain_and_decimal_tokens() {
        let r = rewriter();
        assert_eq!(r.rewrite_line("G1 X10 F1500"), "G1 X10 F800.0");
        assert_eq!(r.rewrite_line("G1 X10 F1500.0"), "G1 X10 F800.0");
        assert_eq!(r.rewrite_line("G1 X10 F1500.000 ; cut"), "G1 X10 F800.0 ; cut");
    }

    #[test]
    fn test_packed_words() {
        let r = rewriter();
        assert_eq!(r.rewrite_line("G1X10F1500.0Y5"), "G1X10F800.0Y5");
        assert_eq!(r.rewrite_line("F1500 F1500"), "F800.0 F800.0");
        assert_eq!(r.rewrite_line("F1500F1500"), "F800.0F800.0");
        assert_eq!(r.rewrite_line("G1F1500.0F1500X2"), "G1F800.0F800.0X2");
        assert_eq!(r.rewrite_line("F1500F15000"), "F800.0F15000");
    }

    #[test]
    fn test_other_feeds_untouched() {
        let r = rewriter();
        for line in ["G1 X10 F15000", "G1 X10 F1500.5", "G1 X10 F2500", "G1 X10 F150"] {
            assert_eq!(r.rewrite_line(line), line);
            assert!(matches!(r.rewrite_line(line), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_matches() {
        assert!(FeedRewriter::matches("G1 F1500"));
        assert!(!FeedRewriter::matches("G1 F15000"));
        assert!(!FeedRewriter::matches("G1 f1500"));
        assert!(FeedRewriter::matches("G1 F1500.5 F1500"));
    }

    #[test]
    fn test_default_thickness_keeps_full_feed() {
        let r = FeedRewriter::new(Thickness::Unknown.feed_value());
        assert_eq!(r.rewrite_line("G1 F1500"), "G1 F1500.0");
    }
}
