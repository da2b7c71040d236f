//! Rewrite limits per part

use cutfeed_core::{Error, PartName, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cycle limit configured for each part name
///
/// A part without an entry has limit 0, so none of its events is rewritten.
/// Choosing any other default is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewriteLimits {
    limits: HashMap<PartName, u32>,
}

impl RewriteLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a part
    pub fn with_limit(mut self, part: impl Into<PartName>, limit: u32) -> Self {
        self.set(part, limit);
        self
    }

    pub fn set(&mut self, part: impl Into<PartName>, limit: u32) {
        self.limits.insert(part.into(), limit);
    }

    /// Limit configured for a part, if any
    pub fn get(&self, part: &str) -> Option<u32> {
        self.limits.get(part).copied()
    }

    /// Limit applied to a part's events; 0 when the part has no entry
    pub fn limit_for(&self, part: &str) -> u32 {
        self.get(part).unwrap_or(0)
    }

    pub fn contains(&self, part: &str) -> bool {
        self.limits.contains_key(part)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PartName, u32)> {
        self.limits.iter().map(|(name, limit)| (name, *limit))
    }

    /// Parse a `NAME=N` assignment
    ///
    /// The name is everything before the last `=`, trimmed, so names may
    /// themselves contain `=`.
    pub fn parse_assignment(assignment: &str) -> Result<(PartName, u32)> {
        let (name, value) = assignment
            .rsplit_once('=')
            .ok_or_else(|| Error::InvalidLimitAssignment {
                assignment: assignment.to_string(),
                reason: "expected NAME=N".to_string(),
            })?;

        let limit = value
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::InvalidLimitAssignment {
                assignment: assignment.to_string(),
                reason: e.to_string(),
            })?;

        Ok((PartName::new(name.trim()), limit))
    }
}

impl<N: Into<PartName>> FromIterator<(N, u32)> for RewriteLimits {
    fn from_iter<T: IntoIterator<Item = (N, u32)>>(iter: T) -> Self {
        let mut limits = Self::new();
        for (name, limit) in iter {
            limits.set(name, limit);
        }
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let limits = RewriteLimits::new().with_limit("foo", 1).with_limit("bar", 5);
        assert_eq!(limits.get("foo"), Some(1));
        assert_eq!(limits.get("bar"), Some(5));
        assert_eq!(limits.get("baz"), None);
        assert_eq!(limits.len(), 2);
    }

    #[test]
    fn test_missing_entry_is_limit_zero() {
        let limits = RewriteLimits::new().with_limit("foo", 3);
        assert_eq!(limits.limit_for("foo"), 3);
        assert_eq!(limits.limit_for("bar"), 0);
    }

    #[test]
    fn test_parse_assignment() {
        let (name, limit) = RewriteLimits::parse_assignment("Side Panel=3").unwrap();
        assert_eq!(name.as_str(), "Side Panel");
        assert_eq!(limit, 3);

        let (name, limit) = RewriteLimits::parse_assignment("a=b = 2").unwrap();
        assert_eq!(name.as_str(), "a=b");
        assert_eq!(limit, 2);

        let (name, _) = RewriteLimits::parse_assignment("=0").unwrap();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(RewriteLimits::parse_assignment("foo").is_err());
        assert!(RewriteLimits::parse_assignment("foo=-1").is_err());
        assert!(RewriteLimits::parse_assignment("foo=two").is_err());
    }

    #[test]
    fn test_from_iter() {
        let limits: RewriteLimits = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(limits.get("b"), Some(2));
    }

    #[test]
    fn test_serde_as_map() {
        let limits: RewriteLimits = serde_json::from_str(r#"{"foo": 2}"#).unwrap();
        assert_eq!(limits.get("foo"), Some(2));
    }
}
