//! `tp` — administrative CLI for the trust pipeline.
//!
//! Subcommands operate on local files so operators can inspect exactly what
//! the pipeline would do: `sanitize` shows the redacted bundle an auditor
//! (or the reviewer) would see, `score` derives a score from a judgment file.
//! stdout carries JSON payloads; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tp_common::{Error, SubmissionId};
use tp_pipeline::logging::{init_logging, LogFormat};
use tp_redact::{SanitizationGateway, SourceDocument};
use tp_score::{CategoryJudgment, Score, ScoringPolicy};

#[derive(Parser)]
#[command(name = "tp", about = "Submission sanitization and trust scoring", version)]
struct Cli {
    /// Emit logs as JSONL instead of human-readable text.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sanitize files and print the redacted bundle with its findings.
    Sanitize {
        /// Files to treat as one submission bundle.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Derive a score from a reviewer judgment file.
    Score {
        /// JSON file holding an array of category judgments.
        #[arg(long)]
        judgments: PathBuf,

        /// Submission the judgments belong to.
        #[arg(long)]
        submission: String,

        /// Redaction finding count from sanitization (drives the automatic
        /// security penalty).
        #[arg(long, default_value_t = 0)]
        findings: usize,

        /// Scoring policy file; defaults to the built-in policy.
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(format, cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(category = %err.category(), "{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Sanitize { paths } => {
            let mut bundle = Vec::with_capacity(paths.len());
            for path in &paths {
                let content = std::fs::read_to_string(path)?;
                bundle.push(SourceDocument::new(path.display().to_string(), content));
            }
            let report = SanitizationGateway::new().sanitize_report(bundle)?;
            let payload = serde_json::json!({
                "documents": report.documents,
                "total_findings": report.total_findings,
                "coverage": report.coverage(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Command::Score {
            judgments,
            submission,
            findings,
            policy,
        } => {
            let raw = std::fs::read_to_string(&judgments)?;
            let judgments: Vec<CategoryJudgment> = serde_json::from_str(&raw)?;
            let policy = match policy {
                Some(path) => ScoringPolicy::load(path)?,
                None => ScoringPolicy::default(),
            };
            let score = Score::derive(
                SubmissionId::new(submission),
                &judgments,
                &policy,
                findings,
            )?;
            println!("{}", serde_json::to_string_pretty(&score)?);
            Ok(())
        }
    }
}
