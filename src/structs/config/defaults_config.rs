use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Parameter values used by `generate` when no flag overrides them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_penalty")]
    pub presence_penalty: f32,

    #[serde(default = "ConfigHelper::default_penalty")]
    pub frequency_penalty: f32,

    #[serde(default)]
    pub system_prompt: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature: ConfigHelper::default_temperature(),
            max_tokens: ConfigHelper::default_max_tokens(),
            presence_penalty: ConfigHelper::default_penalty(),
            frequency_penalty: ConfigHelper::default_penalty(),
            system_prompt: String::new(),
        }
    }
}
