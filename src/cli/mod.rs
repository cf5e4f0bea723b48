//! CLI implementation using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Mindgauge - certificate and report computation for cognitive assessments.
#[derive(Parser)]
#[command(name = "mindgauge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the certificate value set from a score file
    #[command(alias = "cert")]
    Certificate(CertificateArgs),

    /// Compute the detailed report from a score file
    Report(ReportArgs),

    /// Format the printable certificate ID for an assessment
    Id(IdArgs),

    /// Format the shareable online report URL for a score
    Url(UrlArgs),
}

#[derive(Args)]
pub struct CertificateArgs {
    /// Path to the score JSON file ("-" reads stdin)
    pub score_file: PathBuf,

    /// Override the assessment identifier from the score file
    #[arg(long)]
    pub assessment_id: Option<String>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Path to the score JSON file ("-" reads stdin)
    pub score_file: PathBuf,

    /// Total number of questions in the assessment
    #[arg(short = 'q', long)]
    pub questions: Option<u32>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Assessment identifier
    pub assessment_id: String,
}

#[derive(Args)]
pub struct UrlArgs {
    /// Score identifier
    #[arg(long, default_value = "")]
    pub score_id: String,

    /// Assessment identifier fallback
    #[arg(long, default_value = "")]
    pub assessment_id: String,
}

/// Output format selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_certificate_alias() {
        let cli = Cli::try_parse_from(["mindgauge", "cert", "score.json"]).unwrap();
        assert!(matches!(cli.command, Command::Certificate(_)));
    }

    #[test]
    fn test_report_questions_flag() {
        let cli =
            Cli::try_parse_from(["mindgauge", "report", "score.json", "-q", "40"]).unwrap();
        match cli.command {
            Command::Report(args) => assert_eq!(args.questions, Some(40)),
            _ => panic!("expected report command"),
        }
    }
}
