//! Certificate value calculation.
//!
//! Turns a raw assessment score into everything the certificate template
//! renders: IQ estimate, percentile, confidence interval, band, the four
//! domain bars, the formatted date, and the printable certificate ID.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Band;
use crate::core::AssessmentScore;
use crate::domains::{certificate_domains, CertificateDomains};
use crate::numeric::{clamp, estimate_iq, normal_cdf};

/// IQ points on either side of the estimate shown as the confidence
/// interval. A display convention, not a statistically derived interval.
const CI_HALF_WIDTH: i64 = 7;

/// Complete value set for the certificate template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateValues {
    pub total: i64,
    pub date_str: String,
    pub iq: i64,
    pub percentile: i64,
    pub ci_low: i64,
    pub ci_high: i64,
    pub band: Band,
    pub certificate_id: String,
    pub reasoning: i64,
    pub verbal: i64,
    pub memory: i64,
    pub speed: i64,
}

/// Derive the full certificate value set from a raw assessment score.
///
/// The assessment date defaults to now when absent; use
/// [`calculate_certificate_values_at`] to inject a fixed clock in tests.
pub fn calculate_certificate_values(
    score: &AssessmentScore,
    assessment_id: &str,
) -> CertificateValues {
    calculate_certificate_values_at(score, assessment_id, Utc::now())
}

/// Clock-injected variant of [`calculate_certificate_values`].
pub fn calculate_certificate_values_at(
    score: &AssessmentScore,
    assessment_id: &str,
    now: DateTime<Utc>,
) -> CertificateValues {
    let total = score.total();
    let iq = estimate_iq(total);
    let z = (iq - 100) as f64 / 15.0;
    let percentile = clamp((normal_cdf(z) * 100.0).round() as i64, 1, 99);
    let CertificateDomains {
        reasoning,
        verbal,
        memory,
        speed,
    } = certificate_domains(score);

    CertificateValues {
        total,
        date_str: score.date.unwrap_or(now).format("%d %b, %Y").to_string(),
        iq,
        percentile,
        ci_low: (iq - CI_HALF_WIDTH).max(55),
        ci_high: (iq + CI_HALF_WIDTH).min(145),
        band: Band::from_total(total),
        certificate_id: generate_certificate_id_at(assessment_id, now),
        reasoning,
        verbal,
        memory,
        speed,
    }
}

/// Printable certificate ID: `BZG-{year}-{last 6 chars of the assessment id}`,
/// with `XXXXXX` standing in when no id is available.
pub fn generate_certificate_id(assessment_id: &str) -> String {
    generate_certificate_id_at(assessment_id, Utc::now())
}

/// Clock-injected variant of [`generate_certificate_id`].
pub fn generate_certificate_id_at(assessment_id: &str, now: DateTime<Utc>) -> String {
    let suffix: String = if assessment_id.is_empty() {
        "XXXXXX".to_string()
    } else {
        let chars: Vec<char> = assessment_id.chars().collect();
        chars[chars.len().saturating_sub(6)..].iter().collect()
    };
    format!("BZG-{}-{}", now.year(), suffix)
}

/// Absolute link to the online report: `{origin}/report/{id}`, preferring the
/// score id and falling back to the assessment id.
pub fn generate_report_url(origin: &str, score_id: &str, assessment_id: &str) -> String {
    let id = if score_id.is_empty() {
        assessment_id
    } else {
        score_id
    };
    format!("{}/report/{}", origin.trim_end_matches('/'), id)
}
