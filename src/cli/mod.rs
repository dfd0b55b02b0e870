// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, builds the PipelineConfig and
// delegates to Layer 2. This is the only layer that prints.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::domain::answer::{CacheRecord, CachedAnswers};
use crate::infra::{cache_writer::read_records, config::PipelineConfig};
use commands::{AskArgs, Commands, ConfigArgs, HistoryArgs};

#[derive(Parser, Debug)]
#[command(
    name = "inquire",
    version,
    about = "Answer a question by classifying it, retrieving documents and ranking extracted answers."
)]
pub struct Cli {
    /// JSON configuration file; defaults are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter directive for this invocation.
    pub fn log_directive(&self) -> &'static str {
        match &self.command {
            Commands::Ask(args) if args.debug => "inquire=debug",
            _ => "inquire=info",
        }
    }

    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Ask(args)     => run_ask(config, args),
            Commands::History(args) => run_history(&config, args),
            Commands::Config(args)  => run_config(&config, args),
        }
    }

    fn load_config(&self) -> Result<PipelineConfig> {
        match &self.config {
            Some(path) => PipelineConfig::load(path),
            None       => Ok(PipelineConfig::default()),
        }
    }
}

fn run_ask(mut config: PipelineConfig, args: &AskArgs) -> Result<()> {
    use crate::application::ask_use_case::AskUseCase;

    args.apply(&mut config);

    let use_case = AskUseCase::new(config)?;
    let answer   = use_case.answer(&args.question, args.confidence)?;

    println!("{}", "-".repeat(40));
    println!("Answer: {answer}");
    println!("{}", "-".repeat(40));
    Ok(())
}

fn run_history(config: &PipelineConfig, args: &HistoryArgs) -> Result<()> {
    let records = read_records(&config.cache_file)?;
    if records.is_empty() {
        println!("No cached questions in '{}'.", config.cache_file.display());
        return Ok(());
    }

    let skip = records.len().saturating_sub(args.limit);
    for record in &records[skip..] {
        println!("{}", describe(record));
    }
    Ok(())
}

fn run_config(config: &PipelineConfig, args: &ConfigArgs) -> Result<()> {
    match &args.write {
        Some(path) => {
            config.save(path)?;
            println!("Configuration written to '{}'.", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

/// One-line summary of a cache record for `history`.
fn describe(record: &CacheRecord) -> String {
    let answers = match &record.answers {
        CachedAnswers::Unsupported => "unsupported question type".to_string(),
        CachedAnswers::NoAnswer    => "no answer found".to_string(),
        CachedAnswers::Answered(candidates) => candidates
            .iter()
            .map(|c| format!("{} ({:.2})", c.text, c.score))
            .collect::<Vec<_>>()
            .join(", "),
    };
    format!("{}  {}  →  {}", record.id, record.question, answers)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer::AnswerCandidate;

    #[test]
    fn test_parse_ask_flags() {
        let cli = Cli::try_parse_from([
            "inquire", "ask", "Who wrote Hamlet?", "-d", "-m", "-C", "--confidence",
        ])
        .unwrap();

        assert_eq!(cli.log_directive(), "inquire=debug");
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.question, "Who wrote Hamlet?");
                assert!(args.debug && args.mock_search && args.no_cache && args.confidence);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["inquire", "history", "--config", "cfg.json", "--limit", "5"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.log_directive(), "inquire=info");
    }

    #[test]
    fn test_describe_records() {
        let answered = CacheRecord::new(
            "Capital of France?",
            CachedAnswers::Answered(vec![
                AnswerCandidate::new("Paris", 0.92),
                AnswerCandidate::new("Lyon", 0.1),
            ]),
        );
        assert!(describe(&answered).ends_with("Capital of France?  →  Paris (0.92), Lyon (0.10)"));

        let unsupported = CacheRecord::new("meme?", CachedAnswers::Unsupported);
        assert!(describe(&unsupported).ends_with("unsupported question type"));
    }
}
