//! Material thickness selection
//!
//! The thickness selector picks the feed value written in place of the
//! sentinel feed. Unrecognised selectors fall back to the full cutting feed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material thickness selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Thickness {
    /// 8 mm stock
    Mm8,
    /// 5 mm stock
    Mm5,
    /// Anything else
    #[default]
    Unknown,
}

impl Thickness {
    /// Map a selector string to a thickness, falling back to [`Thickness::Unknown`]
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "8mm" => Self::Mm8,
            "5mm" => Self::Mm5,
            _ => Self::Unknown,
        }
    }

    /// Feed value written for this thickness
    pub fn feed_value(&self) -> FeedValue {
        match self {
            Self::Mm8 => FeedValue::from_static("F800.0"),
            Self::Mm5 => FeedValue::from_static("F1000.0"),
            Self::Unknown => FeedValue::from_static("F1500.0"),
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mm8 => write!(f, "8mm"),
            Self::Mm5 => write!(f, "5mm"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl From<String> for Thickness {
    fn from(selector: String) -> Self {
        Self::from_selector(&selector)
    }
}

impl From<Thickness> for String {
    fn from(thickness: Thickness) -> Self {
        thickness.to_string()
    }
}

impl FromStr for Thickness {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

/// Feed command text written in place of the sentinel feed, e.g. `F800.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct FeedValue(String);

impl FeedValue {
    fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FeedValue> for String {
    fn from(value: FeedValue) -> Self {
        value.0
    }
}
