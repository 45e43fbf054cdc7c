use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "prompt-sweep")]
#[clap(about = "Experiment with text-generation parameters against a prompt", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
