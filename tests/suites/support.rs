use async_trait::async_trait;
use mockall::mock;
use prompt_sweep::enums::ai_provider_error::AiProviderError;
use prompt_sweep::structs::ai::request_descriptor::RequestDescriptor;
use prompt_sweep::structs::parameter_sweep_spec::ParameterSweepSpec;
use prompt_sweep::traits::text_generator::TextGenerator;

mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, request: &RequestDescriptor) -> Result<String, AiProviderError>;
    }
}

pub fn sweep_spec(
    temperatures: Vec<f32>,
    max_tokens_values: Vec<u32>,
    presence_penalties: Vec<f32>,
    frequency_penalties: Vec<f32>,
) -> ParameterSweepSpec {
    ParameterSweepSpec {
        model: "gpt-3.5-turbo".to_string(),
        system_prompt: "You write product copy.".to_string(),
        user_prompt: "Describe this:".to_string(),
        product: "Widget".to_string(),
        stop_sequence: None,
        temperatures,
        max_tokens_values,
        presence_penalties,
        frequency_penalties,
    }
}

pub fn echo_parameters(request: &RequestDescriptor) -> Result<String, AiProviderError> {
    Ok(format!(
        "{:.1}/{}/{:.1}/{:.1}",
        request.temperature, request.max_tokens, request.presence_penalty, request.frequency_penalty
    ))
}
