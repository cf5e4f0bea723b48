//! Category taxonomies and the certificate domain mapping.
//!
//! Three assessment taxonomies feed the engine (IQ test, driving licence,
//! logic). The certificate collapses whichever taxonomy is present into four
//! fixed domains via key priority lists; the report instead lists whatever
//! categories the score actually carries.

use serde::{Deserialize, Serialize};

use crate::core::AssessmentScore;
use crate::numeric::scale_domain;

/// The three assessment taxonomies that can produce a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCategory {
    #[serde(rename = "iq-test")]
    IqTest,
    #[serde(rename = "driving-licence")]
    DrivingLicence,
    #[serde(rename = "logic")]
    Logic,
}

impl MainCategory {
    /// Parse a wire value; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "iq-test" => Some(Self::IqTest),
            "driving-licence" => Some(Self::DrivingLicence),
            "logic" => Some(Self::Logic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IqTest => "iq-test",
            Self::DrivingLicence => "driving-licence",
            Self::Logic => "logic",
        }
    }
}

/// Closed set of category keys across the three taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    // IQ test
    LogicalReasoning,
    NumericalAbility,
    SpatialReasoning,
    VerbalAbility,
    Memory,
    // Driving licence
    Perception,
    SignalKnowledge,
    RoadRules,
    EyeSight,
    SafeDriving,
    // Logic
    PropositionalLogic,
    EpistemicLogic,
    PredicateLogic,
    ModalLogic,
    ProofTechniques,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogicalReasoning => "logical-reasoning",
            Self::NumericalAbility => "numerical-ability",
            Self::SpatialReasoning => "spatial-reasoning",
            Self::VerbalAbility => "verbal-ability",
            Self::Memory => "memory",
            Self::Perception => "perception",
            Self::SignalKnowledge => "signal-knowledge",
            Self::RoadRules => "road-rules",
            Self::EyeSight => "eye-sight",
            Self::SafeDriving => "safe-driving",
            Self::PropositionalLogic => "propositional-logic",
            Self::EpistemicLogic => "epistemic-logic",
            Self::PredicateLogic => "predicate-logic",
            Self::ModalLogic => "modal-logic",
            Self::ProofTechniques => "proof-techniques",
        }
    }

    /// Parse a wire key; open-ended report keys that are not part of any
    /// taxonomy come back as `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "logical-reasoning" => Some(Self::LogicalReasoning),
            "numerical-ability" => Some(Self::NumericalAbility),
            "spatial-reasoning" => Some(Self::SpatialReasoning),
            "verbal-ability" => Some(Self::VerbalAbility),
            "memory" => Some(Self::Memory),
            "perception" => Some(Self::Perception),
            "signal-knowledge" => Some(Self::SignalKnowledge),
            "road-rules" => Some(Self::RoadRules),
            "eye-sight" => Some(Self::EyeSight),
            "safe-driving" => Some(Self::SafeDriving),
            "propositional-logic" => Some(Self::PropositionalLogic),
            "epistemic-logic" => Some(Self::EpistemicLogic),
            "predicate-logic" => Some(Self::PredicateLogic),
            "modal-logic" => Some(Self::ModalLogic),
            "proof-techniques" => Some(Self::ProofTechniques),
            _ => None,
        }
    }
}

// Key priority lists for the four certificate buckets. The first key with a
// non-zero score wins; a key present with score zero falls through to the
// next taxonomy's key.
const REASONING_KEYS: [CategoryKey; 3] = [
    CategoryKey::LogicalReasoning,
    CategoryKey::PropositionalLogic,
    CategoryKey::Perception,
];
const VERBAL_KEYS: [CategoryKey; 3] = [
    CategoryKey::VerbalAbility,
    CategoryKey::EpistemicLogic,
    CategoryKey::SignalKnowledge,
];
const MEMORY_KEYS: [CategoryKey; 3] = [
    CategoryKey::Memory,
    CategoryKey::PredicateLogic,
    CategoryKey::RoadRules,
];
const SPEED_PACE_KEYS: [CategoryKey; 3] = [
    CategoryKey::NumericalAbility,
    CategoryKey::ModalLogic,
    CategoryKey::EyeSight,
];
const SPEED_SPATIAL_KEYS: [CategoryKey; 3] = [
    CategoryKey::SpatialReasoning,
    CategoryKey::ProofTechniques,
    CategoryKey::SafeDriving,
];

fn first_nonzero(score: &AssessmentScore, keys: &[CategoryKey]) -> i64 {
    keys.iter()
        .map(|key| score.score_for(*key))
        .find(|value| *value != 0)
        .unwrap_or(0)
}

/// The four certificate domain bars, already scaled onto [80, 130].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDomains {
    pub reasoning: i64,
    pub verbal: i64,
    pub memory: i64,
    pub speed: i64,
}

/// Collapse a score's categories into the four certificate domains.
///
/// Speed averages a pace-style key and a spatial-style key, each resolved by
/// the same first-non-zero rule, before scaling.
pub fn certificate_domains(score: &AssessmentScore) -> CertificateDomains {
    let speed_raw = (first_nonzero(score, &SPEED_PACE_KEYS) as f64
        + first_nonzero(score, &SPEED_SPATIAL_KEYS) as f64)
        / 2.0;
    CertificateDomains {
        reasoning: scale_domain(first_nonzero(score, &REASONING_KEYS) as f64),
        verbal: scale_domain(first_nonzero(score, &VERBAL_KEYS) as f64),
        memory: scale_domain(first_nonzero(score, &MEMORY_KEYS) as f64),
        speed: scale_domain(speed_raw),
    }
}

/// One scored domain row on the detailed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDomain {
    pub key: String,
    pub label: String,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i64>,
}

impl ReportDomain {
    /// Share of the maximum score, in percent. Zero when no maximum is known
    /// or the maximum is zero.
    pub fn percentage(&self) -> i64 {
        match self.max_score {
            Some(max) if max > 0 => {
                ((self.score as f64 / max as f64) * 100.0).round() as i64
            }
            _ => 0,
        }
    }
}

/// Turn a wire key like `spatial-reasoning` into a display label like
/// `Spatial Reasoning`.
pub fn label_for_key(key: &str) -> String {
    key.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
