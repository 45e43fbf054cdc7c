use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{PlaygroundError, PlaygroundResult};
use crate::helpers::input_validator::InputValidator;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::sweep_result_logger::SweepResultLogger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::reflection_store::ReflectionStore;
use crate::services::sweep_executor::SweepExecutor;
use crate::structs::cancellation_flag::CancellationFlag;
use crate::structs::config::config::Config;
use crate::structs::generation_config::GenerationConfig;
use crate::structs::parameter_sweep_spec::ParameterSweepSpec;
use crate::structs::prompt_args::PromptArgs;
use crate::structs::sweep_progress::SweepProgress;
use crate::traits::sweep_observer::ChannelObserver;

/// Overrides for the single-call parameters; `None` falls back to config.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOverrides {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

/// Candidate lists from the command line; empty lists fall back to config.
#[derive(Debug, Clone, Default)]
pub struct SweepOverrides {
    pub temperatures: Vec<f32>,
    pub max_tokens: Vec<u32>,
    pub presence_penalties: Vec<f32>,
    pub frequency_penalties: Vec<f32>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> PlaygroundResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Models => self.models_command(),
            Commands::Generate { prompt, temperature, max_tokens, presence_penalty, frequency_penalty } => {
                let overrides = GenerationOverrides { temperature, max_tokens, presence_penalty, frequency_penalty };
                self.generate_command(prompt, overrides).await
            }
            Commands::Sweep { prompt, temperatures, max_tokens, presence_penalties, frequency_penalties, yes, full } => {
                let overrides = SweepOverrides { temperatures, max_tokens, presence_penalties, frequency_penalties };
                self.sweep_command(prompt, overrides, yes, full).await
            }
            Commands::Reflect { text, path } => self.reflect_command(&text, path),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> PlaygroundResult<()> {
        log::info!("🚀 Initializing prompt-sweep configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to change models, defaults and sweep values.", path.display());

        Ok(())
    }

    fn models_command(&self) -> PlaygroundResult<()> {
        let config = Self::load_config()?;

        for model in &config.ai.available_models {
            let marker = if *model == config.ai.model { "*" } else { " " };
            println!("{} {}", marker, model);
        }

        Ok(())
    }

    async fn generate_command(&self, prompt: PromptArgs, overrides: GenerationOverrides) -> PlaygroundResult<()> {
        let config = Self::load_config()?;
        let generation = Self::generation_config(&config, &prompt, overrides);

        InputValidator::validate_generation(&generation).into_result("generate")?;
        let provider = OpenAIProvider::from_config(&config.ai)?;

        let mut spinner = AnimatedLogger::new(format!("Generating with {}", generation.model));
        spinner.start();

        let item = SweepExecutor::generate_single(&generation, &provider).await;

        match item.error() {
            Some(error) => {
                spinner.error("Generation failed").await;
                SweepResultLogger::print_single(&generation, &item);
                Err(PlaygroundError::generation_failure(&generation.model, error))
            }
            None => {
                spinner.stop("Generation complete").await;
                SweepResultLogger::print_single(&generation, &item);
                Ok(())
            }
        }
    }

    async fn sweep_command(&self, prompt: PromptArgs, overrides: SweepOverrides, yes: bool, full: bool) -> PlaygroundResult<()> {
        let config = Self::load_config()?;
        let spec = Self::sweep_spec(&config, &prompt, overrides);

        InputValidator::validate_sweep(&spec).into_result("sweep")?;
        let provider = OpenAIProvider::from_config(&config.ai)?;

        let total = spec.combination_count();
        if !yes && !Self::confirm(&format!(
            "This will make {} API calls and may take some time. Continue? [y/N] ",
            total
        ))? {
            log::info!("⏭️ Sweep aborted.");
            return Ok(());
        }

        let cancellation = CancellationFlag::new();
        let ctrl_c_flag = cancellation.clone();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("🛑 Cancellation requested; finishing the current call...");
                ctrl_c_flag.cancel();
            }
        });

        let (sender, mut receiver) = mpsc::unbounded_channel::<SweepProgress>();
        let executor = SweepExecutor::new().with_cancellation(cancellation);
        let sweep = tokio::spawn(async move {
            let observer = ChannelObserver::new(sender);
            executor.run_with_observer(&spec, &provider, &observer).await
        });

        let width = SweepResultLogger::output_width(config.output.preview_width);
        SweepResultLogger::print_header(total);

        while let Some(progress) = receiver.recv().await {
            SweepResultLogger::print_progress(&progress, width);
        }

        let result = sweep
            .await
            .map_err(|e| PlaygroundError::system_error("sweep task", &e.to_string()))?;
        ctrl_c.abort();

        SweepResultLogger::print_summary(&result);
        if full {
            SweepResultLogger::print_full_outputs(&result);
        }

        Ok(())
    }

    fn reflect_command(&self, text: &str, path: Option<PathBuf>) -> PlaygroundResult<()> {
        let path = match path {
            Some(path) => path,
            None => PathBuf::from(Self::load_config()?.output.reflection_path),
        };

        ReflectionStore::save(&path, text)?;
        println!("✅ Reflection saved to {}", path.display());

        Ok(())
    }

    fn load_config() -> PlaygroundResult<Config> {
        let config = ConfigManager::load()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            let errors = errors
                .iter()
                .map(|reason| PlaygroundError::config_error(reason, None, Some("Run 'prompt-sweep init' for a sample file")))
                .collect();

            if let Some(error) = PlaygroundError::from_errors(errors, "configuration validation") {
                return Err(error);
            }
        }

        Ok(config)
    }

    pub fn generation_config(config: &Config, prompt: &PromptArgs, overrides: GenerationOverrides) -> GenerationConfig {
        let defaults = &config.defaults;

        GenerationConfig {
            model: prompt.model.clone().unwrap_or_else(|| config.ai.model.clone()),
            system_prompt: Self::system_prompt(config, prompt),
            user_prompt: prompt.user_prompt.trim().to_string(),
            product: prompt.product.clone(),
            temperature: overrides.temperature.unwrap_or(defaults.temperature),
            max_tokens: overrides.max_tokens.unwrap_or(defaults.max_tokens),
            presence_penalty: overrides.presence_penalty.unwrap_or(defaults.presence_penalty),
            frequency_penalty: overrides.frequency_penalty.unwrap_or(defaults.frequency_penalty),
            stop_sequence: prompt.stop_sequence(),
        }
    }

    pub fn sweep_spec(config: &Config, prompt: &PromptArgs, overrides: SweepOverrides) -> ParameterSweepSpec {
        let sweep = &config.sweep;

        ParameterSweepSpec {
            model: prompt.model.clone().unwrap_or_else(|| config.ai.model.clone()),
            system_prompt: Self::system_prompt(config, prompt),
            user_prompt: prompt.user_prompt.trim().to_string(),
            product: prompt.product.clone(),
            stop_sequence: prompt.stop_sequence(),
            temperatures: Self::or_default(overrides.temperatures, &sweep.temperatures),
            max_tokens_values: Self::or_default(overrides.max_tokens, &sweep.max_tokens),
            presence_penalties: Self::or_default(overrides.presence_penalties, &sweep.presence_penalties),
            frequency_penalties: Self::or_default(overrides.frequency_penalties, &sweep.frequency_penalties),
        }
    }

    fn system_prompt(config: &Config, prompt: &PromptArgs) -> String {
        prompt
            .system_prompt
            .as_deref()
            .unwrap_or(&config.defaults.system_prompt)
            .trim()
            .to_string()
    }

    fn or_default<T: Clone>(values: Vec<T>, defaults: &[T]) -> Vec<T> {
        if values.is_empty() {
            defaults.to_vec()
        } else {
            values
        }
    }

    fn confirm(question: &str) -> PlaygroundResult<bool> {
        print!("{}", question);
        io::stdout()
            .flush()
            .map_err(|e| PlaygroundError::system_error("write prompt", &e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| PlaygroundError::system_error("read confirmation", &e.to_string()))?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
