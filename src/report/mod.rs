//! Detailed report calculation: statistics, domain list, narratives, and
//! chart series.

mod narrative;

pub use narrative::{generate_insights_and_tips, get_domain_description, InsightsAndTips};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AssessmentScore;
use crate::domains::{label_for_key, ReportDomain};

/// Points awarded per correct answer in the original scoring sheet. The
/// correct-answer count is an approximation derived from this flat rate, not
/// a true per-question tally.
const POINTS_PER_QUESTION: f64 = 5.0;

/// Headline statistics at the top of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: i64,
    pub accuracy: i64,
    pub correct_answers: i64,
}

/// Compute the headline stats.
///
/// `accuracy` is the total score over the question count, in percent, and is
/// zero when the question count is zero. `correct_answers` divides by the
/// flat points-per-question rate and deliberately does not reconcile with
/// `accuracy`; see [`POINTS_PER_QUESTION`].
pub fn calculate_report_stats(score: &AssessmentScore, total_questions: u32) -> ReportStats {
    let total = score.total();
    let accuracy = if total_questions == 0 {
        0
    } else {
        ((total as f64 / total_questions as f64) * 100.0).round() as i64
    };
    ReportStats {
        total,
        accuracy,
        correct_answers: (total as f64 / POINTS_PER_QUESTION).round() as i64,
    }
}

/// One `ReportDomain` per category present in the score, in insertion order.
/// An empty score falls back to [`get_default_domains`].
pub fn generate_domain_scores(score: &AssessmentScore) -> Vec<ReportDomain> {
    if score.by_category.is_empty() {
        debug!("no category scores present, using the default domain list");
        return get_default_domains();
    }
    score
        .by_category
        .keys()
        .map(|key| ReportDomain {
            key: key.clone(),
            label: label_for_key(key),
            score: score.category_score(key),
            max_score: None,
        })
        .collect()
}

/// Fixed, ordered fallback list shown before any category data exists.
pub fn get_default_domains() -> Vec<ReportDomain> {
    const DEFAULT_KEYS: [&str; 5] = [
        "logical-reasoning",
        "numerical-ability",
        "spatial-reasoning",
        "verbal-ability",
        "memory",
    ];
    DEFAULT_KEYS
        .iter()
        .map(|key| ReportDomain {
            key: (*key).to_string(),
            label: label_for_key(key),
            score: 0,
            max_score: Some(30),
        })
        .collect()
}

/// One point of the spider-chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    pub value: i64,
}

/// Chart series for the spider chart. Order follows `domains` exactly; the
/// chart axes are positional.
pub fn generate_radar_data(domains: &[ReportDomain], score: &AssessmentScore) -> Vec<RadarPoint> {
    domains
        .iter()
        .map(|domain| RadarPoint {
            subject: domain.label.clone(),
            value: score.category_score(&domain.key),
        })
        .collect()
}

/// Stable ascending sort by raw score: weakest domains first, ties keep
/// their original relative order.
pub fn sort_domains_by_performance(domains: &[ReportDomain]) -> Vec<ReportDomain> {
    let mut sorted = domains.to_vec();
    sorted.sort_by_key(|domain| domain.score);
    sorted
}

/// Practice suggestions derived from the performance ranking: the two lowest
/// domains get a strengthening session, the next two a stretch session.
/// Fewer than four domains produce fewer sentences.
pub fn generate_recommended_activities(domains: &[ReportDomain]) -> Vec<String> {
    let sorted = sort_domains_by_performance(domains);
    let mut activities = Vec::new();
    for domain in sorted.iter().take(2) {
        activities.push(format!(
            "Strengthen {} with targeted practice sessions.",
            domain.label
        ));
    }
    for domain in sorted.iter().skip(2).take(2) {
        activities.push(format!(
            "Stretch {} using mixed-difficulty sets and light timing.",
            domain.label
        ));
    }
    activities
}

/// Narrative block for one domain, paired with its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInsight {
    pub key: String,
    pub label: String,
    pub description: String,
    #[serde(flatten)]
    pub narrative: InsightsAndTips,
}

/// Complete report artifact, assembled the way the report screen consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub stats: ReportStats,
    pub domains: Vec<ReportDomain>,
    pub insights: Vec<DomainInsight>,
    pub radar: Vec<RadarPoint>,
    pub weakest_domains: Vec<ReportDomain>,
    pub recommended_activities: Vec<String>,
}

/// Run the whole report pipeline in one pass.
pub fn build_report(score: &AssessmentScore, total_questions: u32) -> ReportView {
    let stats = calculate_report_stats(score, total_questions);
    let domains = generate_domain_scores(score);
    let insights = domains
        .iter()
        .map(|domain| DomainInsight {
            key: domain.key.clone(),
            label: domain.label.clone(),
            description: get_domain_description(&domain.key, score.main_category),
            narrative: generate_insights_and_tips(&domain.key, domain.score, score.main_category),
        })
        .collect();
    let radar = generate_radar_data(&domains, score);
    let weakest_domains = sort_domains_by_performance(&domains);
    let recommended_activities = generate_recommended_activities(&domains);
    ReportView {
        stats,
        domains,
        insights,
        radar,
        weakest_domains,
        recommended_activities,
    }
}
