use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "explain-error")]
#[clap(version, about = "Explain CI failures with ExplainThisError", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
