use std::any::Any;
use std::panic::AssertUnwindSafe;
use futures::FutureExt;

use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::sweep_outcome::SweepOutcome;
use crate::services::request_builder::RequestBuilder;
use crate::structs::cancellation_flag::CancellationFlag;
use crate::structs::generation_config::GenerationConfig;
use crate::structs::parameter_sweep_spec::ParameterSweepSpec;
use crate::structs::sweep_item_result::SweepItemResult;
use crate::structs::sweep_result::SweepResult;
use crate::traits::sweep_observer::{NoopObserver, SweepObserver};
use crate::traits::text_generator::TextGenerator;

/// Runs one generation per combination of a [`ParameterSweepSpec`].
///
/// Calls are issued one after another in enumeration order. A failing call
/// (an `Err` or a panic inside the generator) becomes an error item and the
/// sweep moves on; nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct SweepExecutor {
    cancellation: Option<CancellationFlag>,
}

impl SweepExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checked before each combination; once set, no further calls are made.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    pub async fn run<G>(&self, spec: &ParameterSweepSpec, generator: &G) -> SweepResult
    where
        G: TextGenerator + ?Sized,
    {
        self.run_with_observer(spec, generator, &NoopObserver).await
    }

    pub async fn run_with_observer<G, O>(&self, spec: &ParameterSweepSpec, generator: &G, observer: &O) -> SweepResult
    where
        G: TextGenerator + ?Sized,
        O: SweepObserver + ?Sized,
    {
        let total = spec.combination_count();
        let mut result = SweepResult::begin(total);

        log::info!("🚀 Sweep {} started: {} combinations with model {}", result.id, total, spec.model);

        for (index, combination) in spec.combinations().enumerate() {
            if self.is_cancelled() {
                log::warn!("⏹️ Sweep {} cancelled after {}/{} combinations", result.id, index, total);
                return result.finish(true);
            }

            log::debug!("Combination {}/{}: {}", index + 1, total, combination);

            let config = spec.config_for(combination);
            let item = match Self::attempt(&config, generator).await {
                SweepOutcome::Response(text) => SweepItemResult::success(combination, text),
                SweepOutcome::Error(message) => {
                    log::warn!("❌ Combination {}/{} failed: {}", index + 1, total, message);
                    SweepItemResult::failure(combination, message)
                }
            };

            result.push(item);
            if let Some(item) = result.items().last() {
                observer.on_item(index, total, item);
            }
        }

        let result = result.finish(false);
        log::info!(
            "✅ Sweep {} finished: {} succeeded, {} failed",
            result.id,
            result.success_count(),
            result.failure_count()
        );

        result
    }

    /// The single-call path: one request built from `config`, one attempt.
    pub async fn generate_single<G>(config: &GenerationConfig, generator: &G) -> SweepItemResult
    where
        G: TextGenerator + ?Sized,
    {
        let outcome = Self::attempt(config, generator).await;
        SweepItemResult {
            parameters: config.combination(),
            outcome,
        }
    }

    async fn attempt<G>(config: &GenerationConfig, generator: &G) -> SweepOutcome
    where
        G: TextGenerator + ?Sized,
    {
        let request = RequestBuilder::build(config);

        let outcome = AssertUnwindSafe(generator.generate(&request))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(AiProviderError::Panicked(panic_message(payload.as_ref()))));

        match outcome {
            Ok(text) => SweepOutcome::Response(text),
            Err(e) => SweepOutcome::Error(e.to_string()),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
