use crate::config::constants::{MAX_SAMPLING_VALUE, MIN_SAMPLING_VALUE};
use crate::errors::PlaygroundError;
use crate::structs::generation_config::GenerationConfig;
use crate::structs::parameter_sweep_spec::ParameterSweepSpec;
use crate::structs::validation_result::ValidationResult;

const LARGE_SWEEP_WARNING_THRESHOLD: usize = 50;

/// Caller-side checks run before any request goes out. The sweep core
/// itself accepts whatever it is given.
pub struct InputValidator;

impl InputValidator {
    pub fn validate_generation(config: &GenerationConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::check_prompt_fields(&mut result, &config.model, &config.user_prompt, &config.product);
        Self::check_sampling_value(&mut result, "temperature", config.temperature);
        Self::check_max_tokens(&mut result, config.max_tokens);
        Self::check_sampling_value(&mut result, "presence_penalty", config.presence_penalty);
        Self::check_sampling_value(&mut result, "frequency_penalty", config.frequency_penalty);

        result
    }

    pub fn validate_sweep(spec: &ParameterSweepSpec) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::check_prompt_fields(&mut result, &spec.model, &spec.user_prompt, &spec.product);

        Self::check_non_empty(&mut result, "temperatures", spec.temperatures.len());
        Self::check_non_empty(&mut result, "max_tokens", spec.max_tokens_values.len());
        Self::check_non_empty(&mut result, "presence_penalties", spec.presence_penalties.len());
        Self::check_non_empty(&mut result, "frequency_penalties", spec.frequency_penalties.len());

        for &value in &spec.temperatures {
            Self::check_sampling_value(&mut result, "temperature", value);
        }
        for &value in &spec.max_tokens_values {
            Self::check_max_tokens(&mut result, value);
        }
        for &value in &spec.presence_penalties {
            Self::check_sampling_value(&mut result, "presence_penalty", value);
        }
        for &value in &spec.frequency_penalties {
            Self::check_sampling_value(&mut result, "frequency_penalty", value);
        }

        let count = spec.combination_count();
        if count > LARGE_SWEEP_WARNING_THRESHOLD {
            result.push_warning(format!("This sweep will make {} API calls", count));
        }

        result
    }

    fn check_prompt_fields(result: &mut ValidationResult, model: &str, user_prompt: &str, product: &str) {
        if model.trim().is_empty() {
            result.push_error(PlaygroundError::validation_error(
                "model",
                model,
                "must not be empty",
                Some("Pass --model or set ai.model in the config file"),
            ));
        }

        if product.is_empty() {
            result.push_error(PlaygroundError::validation_error(
                "product",
                product,
                "must not be empty",
                Some("Please enter a product with --product"),
            ));
        }

        if user_prompt.trim().is_empty() {
            result.push_error(PlaygroundError::validation_error(
                "user_prompt",
                user_prompt,
                "must not be empty",
                Some("Please enter a user prompt with --user-prompt"),
            ));
        }
    }

    fn check_sampling_value(result: &mut ValidationResult, field: &str, value: f32) {
        if !(MIN_SAMPLING_VALUE..=MAX_SAMPLING_VALUE).contains(&value) {
            result.push_error(PlaygroundError::validation_error(
                field,
                &value.to_string(),
                &format!("must be between {:.1} and {:.1}", MIN_SAMPLING_VALUE, MAX_SAMPLING_VALUE),
                None,
            ));
        }
    }

    fn check_max_tokens(result: &mut ValidationResult, value: u32) {
        if value == 0 {
            result.push_error(PlaygroundError::validation_error(
                "max_tokens",
                "0",
                "must be a positive integer",
                None,
            ));
        }
    }

    fn check_non_empty(result: &mut ValidationResult, field: &str, len: usize) {
        if len == 0 {
            result.push_error(PlaygroundError::validation_error(
                field,
                "[]",
                "must contain at least one value",
                None,
            ));
        }
    }
}
