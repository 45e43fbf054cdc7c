use clap::Args;

/// Prompt fields shared by every combination of a run.
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Product substituted into the user prompt
    #[clap(short, long)]
    pub product: String,

    #[clap(short, long)]
    pub user_prompt: String,

    #[clap(short, long)]
    pub system_prompt: Option<String>,

    /// Defaults to ai.model from the config file
    #[clap(short, long)]
    pub model: Option<String>,

    /// Sequence where generation stops; an empty value means none
    #[clap(long)]
    pub stop: Option<String>,
}

impl PromptArgs {
    /// Empty stop values are treated as "no stop sequence".
    pub fn stop_sequence(&self) -> Option<String> {
        self.stop.clone().filter(|stop| !stop.is_empty())
    }
}
