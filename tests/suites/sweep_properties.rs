use proptest::prelude::*;

use prompt_sweep::enums::ai_provider_error::AiProviderError;
use prompt_sweep::services::sweep_executor::SweepExecutor;
use prompt_sweep::structs::ai::request_descriptor::RequestDescriptor;
use prompt_sweep::traits::text_generator::generator_fn;

use super::support::sweep_spec;

fn sampling_values() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec((0u8..=20).prop_map(|tenths| f32::from(tenths) / 10.0), 1..4)
}

fn token_values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..500, 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sweep_is_complete_and_ordered(
        temperatures in sampling_values(),
        max_tokens in token_values(),
        presence in sampling_values(),
        frequency in sampling_values(),
        failing_tokens in 1u32..500,
    ) {
        let spec = sweep_spec(temperatures.clone(), max_tokens.clone(), presence.clone(), frequency.clone());
        let generator = generator_fn(move |request: &RequestDescriptor| {
            if request.max_tokens == failing_tokens {
                Err(AiProviderError::ApiError("rejected".to_string()))
            } else {
                Ok(request.max_tokens.to_string())
            }
        });

        let result = tokio_test::block_on(SweepExecutor::new().run(&spec, &generator));

        prop_assert_eq!(
            result.len(),
            temperatures.len() * max_tokens.len() * presence.len() * frequency.len()
        );

        let mut expected = Vec::new();
        for &t in &temperatures {
            for &m in &max_tokens {
                for &p in &presence {
                    for &f in &frequency {
                        expected.push((t, m, p, f));
                    }
                }
            }
        }

        for (item, &(t, m, p, f)) in result.iter().zip(expected.iter()) {
            prop_assert_eq!(item.parameters.temperature, t);
            prop_assert_eq!(item.parameters.max_tokens, m);
            prop_assert_eq!(item.parameters.presence_penalty, p);
            prop_assert_eq!(item.parameters.frequency_penalty, f);

            // exactly one of response / error
            prop_assert!(item.response().is_some() != item.error().is_some());
            prop_assert_eq!(item.error().is_some(), m == failing_tokens);
        }
    }
}
