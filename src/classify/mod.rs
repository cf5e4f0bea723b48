//! Qualitative score ladders.
//!
//! Two intentionally distinct ladders: [`Level`] grades a single domain's raw
//! score (roughly 0-30) and [`Band`] grades the assessment total. They use
//! different scales and different labels and are kept separate on purpose.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative level for a single domain's raw score.
///
/// Variants are ordered ascending so `Ord` reflects qualitative rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "High")]
    High,
}

impl Level {
    /// Threshold ladder, evaluated top-down; first match wins.
    pub fn from_domain_score(score: i64) -> Self {
        if score >= 25 {
            Self::High
        } else if score >= 21 {
            Self::AboveAverage
        } else if score >= 15 {
            Self::Average
        } else if score >= 10 {
            Self::BelowAverage
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::AboveAverage => "Above Average",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative band for the assessment total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Band {
    #[serde(rename = "Developing")]
    Developing,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Exceptional")]
    Exceptional,
}

impl Band {
    /// Threshold ladder, evaluated top-down; first match wins.
    pub fn from_total(total: i64) -> Self {
        if total >= 135 {
            Self::Exceptional
        } else if total >= 115 {
            Self::High
        } else if total >= 95 {
            Self::Average
        } else if total >= 75 {
            Self::BelowAverage
        } else {
            Self::Developing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::High => "High",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Developing => "Developing",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
