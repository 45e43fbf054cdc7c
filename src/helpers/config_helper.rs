use crate::config::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_PENALTY, DEFAULT_PREVIEW_WIDTH,
    DEFAULT_REFLECTION_PATH, DEFAULT_SWEEP_MAX_TOKENS, DEFAULT_SWEEP_PENALTIES, DEFAULT_SWEEP_TEMPERATURES,
    DEFAULT_TEMPERATURE, AVAILABLE_MODELS, OPENAI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_available_models() -> Vec<String> {
        AVAILABLE_MODELS.iter().map(|m| m.to_string()).collect()
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_OPENAI_BASE_URL.to_string()
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_penalty() -> f32 {
        DEFAULT_PENALTY
    }

    pub fn default_sweep_temperatures() -> Vec<f32> {
        DEFAULT_SWEEP_TEMPERATURES.to_vec()
    }

    pub fn default_sweep_max_tokens() -> Vec<u32> {
        DEFAULT_SWEEP_MAX_TOKENS.to_vec()
    }

    pub fn default_sweep_penalties() -> Vec<f32> {
        DEFAULT_SWEEP_PENALTIES.to_vec()
    }

    pub fn default_reflection_path() -> String {
        DEFAULT_REFLECTION_PATH.to_string()
    }

    pub fn default_preview_width() -> usize {
        DEFAULT_PREVIEW_WIDTH
    }
}
