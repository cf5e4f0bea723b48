//! Output rendering for certificate and report artifacts.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::certificate::CertificateValues;
use crate::core::Result;
use crate::report::ReportView;

/// Output format enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    Json,
    #[default]
    Text,
}

impl Format {
    pub fn write_certificate<W: Write>(
        &self,
        cert: &CertificateValues,
        writer: &mut W,
    ) -> Result<()> {
        match self {
            Format::Json => write_json(cert, writer),
            Format::Text => write_certificate_text(cert, writer),
        }
    }

    pub fn write_report<W: Write>(&self, report: &ReportView, writer: &mut W) -> Result<()> {
        match self {
            Format::Json => write_json(report, writer),
            Format::Text => write_report_text(report, writer),
        }
    }
}

fn write_json<T: Serialize, W: Write>(data: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, data)?;
    writeln!(writer)?;
    Ok(())
}

/// Bar sized for values on the [80, 130] certificate scale.
fn domain_bar(value: i64) -> String {
    let filled = ((value - 80).clamp(0, 50) / 2) as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(25 - filled))
}

fn write_certificate_text<W: Write>(cert: &CertificateValues, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "COGNITIVE ASSESSMENT CERTIFICATE".bold())?;
    writeln!(writer, "{}", cert.date_str.dimmed())?;
    writeln!(writer)?;
    writeln!(
        writer,
        "IQ estimate: {} ({})",
        cert.iq.to_string().bold(),
        cert.band
    )?;
    writeln!(writer, "Percentile:  {}", cert.percentile)?;
    writeln!(
        writer,
        "Confidence:  {} - {} (±7)",
        cert.ci_low, cert.ci_high
    )?;
    writeln!(writer)?;
    for (label, value) in [
        ("Reasoning", cert.reasoning),
        ("Verbal", cert.verbal),
        ("Memory", cert.memory),
        ("Speed", cert.speed),
    ] {
        writeln!(writer, "{label:<10} {value:>4}  {}", domain_bar(value))?;
    }
    writeln!(writer)?;
    writeln!(writer, "Certificate {}", cert.certificate_id.dimmed())?;
    Ok(())
}

fn write_report_text<W: Write>(report: &ReportView, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "ASSESSMENT REPORT".bold())?;
    writeln!(writer)?;
    writeln!(writer, "Total score:     {}", report.stats.total)?;
    writeln!(writer, "Accuracy:        {}%", report.stats.accuracy)?;
    writeln!(writer, "Correct answers: {}", report.stats.correct_answers)?;
    writeln!(writer)?;

    writeln!(writer, "{}", "Domains".bold())?;
    for insight in &report.insights {
        writeln!(
            writer,
            "  {} — {}",
            insight.label.bold(),
            insight.narrative.level
        )?;
        if !insight.description.is_empty() {
            writeln!(writer, "    {}", insight.description.dimmed())?;
        }
        for line in &insight.narrative.insights {
            writeln!(writer, "    {line}")?;
        }
        for tip in &insight.narrative.tips {
            writeln!(writer, "    Tip: {tip}")?;
        }
    }
    writeln!(writer)?;

    if !report.recommended_activities.is_empty() {
        writeln!(writer, "{}", "Recommended activities".bold())?;
        for activity in &report.recommended_activities {
            writeln!(writer, "  - {activity}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::calculate_certificate_values_at;
    use crate::core::AssessmentScore;
    use crate::report::build_report;
    use chrono::{TimeZone, Utc};

    fn sample_certificate() -> CertificateValues {
        let score = AssessmentScore {
            total_score: 112,
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        calculate_certificate_values_at(&score, "asmt-9e8d7c6b5a", now)
    }

    #[test]
    fn test_certificate_json_round_trips() {
        let cert = sample_certificate();
        let mut out = Vec::new();
        Format::Json.write_certificate(&cert, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["iq"], 115);
        assert_eq!(value["dateStr"], "14 Mar, 2026");
        assert_eq!(value["ciLow"], 108);
        assert_eq!(value["band"], "Average");
    }

    #[test]
    fn test_certificate_text_mentions_key_figures() {
        let cert = sample_certificate();
        let mut out = Vec::new();
        Format::Text.write_certificate(&cert, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("115"));
        assert!(text.contains("Reasoning"));
        assert!(text.contains("BZG-2026-7c6b5a"));
    }

    #[test]
    fn test_report_text_for_empty_score() {
        let report = build_report(&AssessmentScore::default(), 0);
        let mut out = Vec::new();
        Format::Text.write_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Accuracy:        0%"));
        assert!(text.contains("Logical Reasoning"));
        assert!(text.contains("Recommended activities"));
    }

    #[test]
    fn test_domain_bar_extremes() {
        assert_eq!(domain_bar(80), "-".repeat(25));
        assert_eq!(domain_bar(130), "#".repeat(25));
    }
}
