use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::request_descriptor::RequestDescriptor;

/// The external text-generation capability the sweep depends on.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &RequestDescriptor) -> Result<String, AiProviderError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, request: &RequestDescriptor) -> Result<String, AiProviderError> {
        (**self).generate(request).await
    }
}

/// Adapts a plain synchronous function into a [`TextGenerator`].
pub struct GeneratorFn<F> {
    f: F,
}

pub fn generator_fn<F>(f: F) -> GeneratorFn<F>
where
    F: Fn(&RequestDescriptor) -> Result<String, AiProviderError> + Send + Sync,
{
    GeneratorFn { f }
}

#[async_trait]
impl<F> TextGenerator for GeneratorFn<F>
where
    F: Fn(&RequestDescriptor) -> Result<String, AiProviderError> + Send + Sync,
{
    async fn generate(&self, request: &RequestDescriptor) -> Result<String, AiProviderError> {
        (self.f)(request)
    }
}
