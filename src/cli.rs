use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "kgqa-eval",
    version,
    about = "Answer-quality evaluation for knowledge-graph question answering"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Evaluate(EvaluateArgs),
    Status(StatusArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum BackendKind {
    Replay,
    Command,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replay => "replay",
            Self::Command => "command",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long, default_value = "test_cases.json")]
    pub corpus: PathBuf,

    #[arg(long, value_enum, default_value_t = BackendKind::Replay)]
    pub backend: BackendKind,

    #[arg(long)]
    pub responses: Option<PathBuf>,

    #[arg(long)]
    pub command: Option<String>,

    #[arg(long = "command-arg", allow_hyphen_values = true)]
    pub command_args: Vec<String>,

    #[arg(long, default_value = "evaluation_results.csv")]
    pub output: PathBuf,

    #[arg(long)]
    pub summary_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = "evaluation_results.summary.json")]
    pub summary_path: PathBuf,
}
