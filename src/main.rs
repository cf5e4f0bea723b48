//! Mindgauge CLI - certificate and report computation for assessment scores.

use std::io::{stdout, Read};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mindgauge::certificate::{
    calculate_certificate_values, generate_certificate_id, generate_report_url,
};
use mindgauge::cli::{Cli, Command, OutputFormat};
use mindgauge::config::Config;
use mindgauge::core::{AssessmentScore, Error};
use mindgauge::output::Format;
use mindgauge::report::build_report;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mindgauge::core::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default(".")?,
    };

    let format = resolve_format(cli.format, &config);

    match cli.command {
        Command::Certificate(args) => {
            let mut score = read_score(&args.score_file)?;
            if let Some(id) = args.assessment_id {
                score.assessment_id = id;
            }
            let cert = calculate_certificate_values(&score, &score.assessment_id);
            format.write_certificate(&cert, &mut stdout())?;
        }
        Command::Report(args) => {
            let score = read_score(&args.score_file)?;
            let questions = args.questions.unwrap_or(config.report.total_questions);
            let report = build_report(&score, questions);
            format.write_report(&report, &mut stdout())?;
        }
        Command::Id(args) => {
            println!("{}", generate_certificate_id(&args.assessment_id));
        }
        Command::Url(args) => {
            if args.score_id.is_empty() && args.assessment_id.is_empty() {
                return Err(Error::InvalidArgument(
                    "either --score-id or --assessment-id is required".to_string(),
                ));
            }
            println!(
                "{}",
                generate_report_url(&config.origin, &args.score_id, &args.assessment_id)
            );
        }
    }

    Ok(())
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Format {
    match flag {
        Some(OutputFormat::Json) => Format::Json,
        Some(OutputFormat::Text) => Format::Text,
        None => match config.output.format.as_deref() {
            Some("json") => Format::Json,
            _ => Format::Text,
        },
    }
}

fn read_score(path: &Path) -> mindgauge::core::Result<AssessmentScore> {
    let raw = if path.as_os_str() == "-" {
        debug!("reading score data from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(Error::ScoreFileNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "reading score file");
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}
