//! CLI argument definitions for the questionbot terminal.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use questionbot::{Config, PrefixMode};

#[derive(Parser, Debug)]
#[command(
    name = "questionbot",
    version,
    about = "Answer questionnaires in the terminal",
    long_about = "Answer questionnaires in the terminal.\n\n\
                  Choices are labelled with letters or numbers; type a label to answer,\n\
                  or /back, /next and /quit to move around."
)]
pub struct Cli {
    /// Path to the TOML questionnaire definitions.
    #[arg(short, long, value_name = "PATH", default_value = "questionnaires.toml")]
    pub data: PathBuf,

    /// Label choices with letters (a, b, ...) or numbers (0, 1, ...).
    #[arg(long, value_enum)]
    pub prefix: Option<PrefixArg>,

    /// Start the questionnaire with this label instead of asking.
    #[arg(short, long, value_name = "LABEL")]
    pub questionnaire: Option<String>,

    /// Disable colors in prompts.
    #[arg(long)]
    pub plain: bool,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrefixArg {
    Alpha,
    Numeric,
}

impl From<PrefixArg> for PrefixMode {
    fn from(arg: PrefixArg) -> Self {
        match arg {
            PrefixArg::Alpha => PrefixMode::Alpha,
            PrefixArg::Numeric => PrefixMode::Numeric,
        }
    }
}

impl Cli {
    /// Service configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        let config = Config::new(&self.data);
        match self.prefix {
            Some(prefix) => config.with_prefix_mode(prefix.into()),
            None => config,
        }
    }
}
