use std::path::PathBuf;
use clap::Subcommand;
use crate::structs::prompt_args::PromptArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// List the models offered in the configuration
    Models,
    /// Run a single generation
    Generate {
        #[clap(flatten)]
        prompt: PromptArgs,
        #[clap(long, allow_negative_numbers = true)]
        temperature: Option<f32>,
        #[clap(long)]
        max_tokens: Option<u32>,
        #[clap(long, allow_negative_numbers = true)]
        presence_penalty: Option<f32>,
        #[clap(long, allow_negative_numbers = true)]
        frequency_penalty: Option<f32>,
    },
    /// Try every combination of the candidate values
    Sweep {
        #[clap(flatten)]
        prompt: PromptArgs,
        /// Comma-separated, e.g. 0.0,0.7,1.2
        #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
        temperatures: Vec<f32>,
        #[clap(long, value_delimiter = ',')]
        max_tokens: Vec<u32>,
        #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
        presence_penalties: Vec<f32>,
        #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
        frequency_penalties: Vec<f32>,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
        /// Print every complete output after the table
        #[clap(long)]
        full: bool,
    },
    /// Save a reflection on the results as plain text
    Reflect {
        #[clap(short, long)]
        text: String,
        /// Defaults to output.reflection_path from the config file
        #[clap(long)]
        path: Option<PathBuf>,
    },
}
