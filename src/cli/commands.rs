// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   ask     - answer one question
//   history - show recent entries of the question cache
//   config  - print (or write) the effective configuration
//
// Toggles on `ask` override whatever the config file says.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::infra::config::PipelineConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a natural-language question
    Ask(AskArgs),

    /// Show the most recent cached questions and answers
    History(HistoryArgs),

    /// Print the effective configuration as JSON
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Log at debug level and list every answer candidate
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Don't search the corpus; use the mock documents fixture
    #[arg(short = 'm', long)]
    pub mock_search: bool,

    /// Don't cache the question/answer
    #[arg(short = 'C', long)]
    pub no_cache: bool,

    /// Also print the confidence score of the answer
    #[arg(long)]
    pub confidence: bool,
}

impl AskArgs {
    /// Apply the command line toggles on top of a loaded config.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if self.debug {
            config.debug = true;
        }
        if self.mock_search {
            config.mock_retrieval = true;
        }
        if self.no_cache {
            config.cache_enabled = false;
        }
    }
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// How many of the most recent records to show
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the configuration to this file instead of printing it
    #[arg(long)]
    pub write: Option<PathBuf>,
}
