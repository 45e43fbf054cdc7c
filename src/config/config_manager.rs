use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MIN_PREVIEW_WIDTH};
use crate::errors::{PlaygroundError, PlaygroundResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Prompt Sweep configuration

[ai]
# Model used when --model is not given
model = "gpt-3.5-turbo"
available_models = ["gpt-3.5-turbo", "gpt-4"]

# Environment variable holding the API key (a .env file in the working
# directory is loaded automatically)
api_key_env = "OPENAI_API_KEY"
base_url = "https://api.openai.com/v1"

# Values used by `prompt-sweep generate`
[defaults]
temperature = 0.7
max_tokens = 150
presence_penalty = 0.0
frequency_penalty = 0.0
system_prompt = ""

# Candidate lists used by `prompt-sweep sweep`; every combination is tried
[sweep]
temperatures = [0.0, 0.7, 1.2]
max_tokens = [50, 150, 300]
presence_penalties = [0.0, 1.5]
frequency_penalties = [0.0, 1.5]

[output]
reflection_path = "reflection.txt"
preview_width = 60
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PlaygroundResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| PlaygroundError::config_error(
                "Could not determine the home directory",
                None,
                Some("Set the HOME environment variable"),
            ))
    }

    /// Loads `~/prompt-sweep/config.toml`, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> PlaygroundResult<Config> {
        let path = Self::config_path()?;

        if path.exists() {
            return Self::load_from(&path);
        }

        log::debug!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> PlaygroundResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| PlaygroundError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| PlaygroundError::config_file_error(&path.display().to_string(), &e.to_string()))
    }

    pub fn create_sample_config() -> PlaygroundResult<PathBuf> {
        let path = Self::config_path()?;
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    /// Writes the commented sample config, refusing to overwrite an existing file.
    pub fn create_sample_config_at(path: &Path) -> PlaygroundResult<()> {
        let display = path.display().to_string();

        if path.exists() {
            return Err(PlaygroundError::file_error(&display, "create config", "file already exists"));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PlaygroundError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| PlaygroundError::file_error(&display, "write", &e.to_string()))?;

        log::info!("✅ Created sample config at: {}", display);
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if !config.ai.available_models.is_empty() && !config.ai.available_models.contains(&config.ai.model) {
            errors.push(format!("ai.model '{}' is not listed in ai.available_models", config.ai.model));
        }

        if config.sweep.temperatures.is_empty() {
            errors.push("sweep.temperatures must not be empty".to_string());
        }
        if config.sweep.max_tokens.is_empty() {
            errors.push("sweep.max_tokens must not be empty".to_string());
        }
        if config.sweep.presence_penalties.is_empty() {
            errors.push("sweep.presence_penalties must not be empty".to_string());
        }
        if config.sweep.frequency_penalties.is_empty() {
            errors.push("sweep.frequency_penalties must not be empty".to_string());
        }

        if config.output.preview_width < MIN_PREVIEW_WIDTH {
            errors.push(format!("output.preview_width must be at least {}", MIN_PREVIEW_WIDTH));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
