use std::sync::{Arc, Mutex};

use prompt_sweep::enums::ai_provider_error::AiProviderError;
use prompt_sweep::enums::sweep_outcome::SweepOutcome;
use prompt_sweep::services::sweep_executor::SweepExecutor;
use prompt_sweep::structs::ai::request_descriptor::RequestDescriptor;
use prompt_sweep::structs::cancellation_flag::CancellationFlag;
use prompt_sweep::structs::combination::Combination;
use prompt_sweep::structs::sweep_item_result::SweepItemResult;
use prompt_sweep::structs::sweep_progress::SweepProgress;
use prompt_sweep::traits::sweep_observer::ChannelObserver;
use prompt_sweep::traits::text_generator::{generator_fn, TextGenerator};

use super::support::{echo_parameters, sweep_spec, MockGenerator};

#[tokio::test]
async fn two_temperature_scenario() {
    let spec = sweep_spec(vec![0.0, 0.7], vec![50], vec![0.0], vec![0.0]);
    let generator = generator_fn(|request: &RequestDescriptor| Ok(format!("OK:{:.1}", request.temperature)));

    let result = SweepExecutor::new().run(&spec, &generator).await;

    assert_eq!(
        result.items(),
        &[
            SweepItemResult::success(Combination::new(0.0, 50, 0.0, 0.0), "OK:0.0".to_string()),
            SweepItemResult::success(Combination::new(0.7, 50, 0.0, 0.0), "OK:0.7".to_string()),
        ]
    );
}

#[tokio::test]
async fn one_failure_is_isolated_to_its_combination() {
    let spec = sweep_spec(vec![0.0, 0.7], vec![50, 150], vec![0.0], vec![0.0]);

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .times(4)
        .returning(|request| {
            if request.temperature > 0.5 && request.max_tokens == 50 {
                Err(AiProviderError::ApiError("model overloaded".to_string()))
            } else {
                Ok(format!("text for {}", request.max_tokens))
            }
        });

    let result = SweepExecutor::new().run(&spec, &generator).await;

    assert_eq!(result.len(), 4);
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.items()[2].parameters, Combination::new(0.7, 50, 0.0, 0.0));
    assert_eq!(result.items()[2].error(), Some("API Error: model overloaded"));
    assert_eq!(result.items()[0].response(), Some("text for 50"));
    assert_eq!(result.items()[1].response(), Some("text for 150"));
    assert_eq!(result.items()[3].response(), Some("text for 150"));
}

#[tokio::test]
async fn every_call_failing_still_yields_every_row() {
    let spec = sweep_spec(vec![0.0, 1.0], vec![50, 100, 150], vec![0.0], vec![0.0, 2.0]);
    let generator = generator_fn(|_: &RequestDescriptor| Err(AiProviderError::NetworkError("offline".to_string())));

    let result = SweepExecutor::new().run(&spec, &generator).await;

    assert_eq!(result.len(), 12);
    assert!(result.iter().all(|item| item.error() == Some("Network Error: offline")));
    assert!(!result.cancelled);
}

#[tokio::test]
async fn generator_receives_absent_stop_and_shaped_prompt() {
    let spec = sweep_spec(vec![0.7], vec![150], vec![0.0], vec![0.0]);

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .withf(|request| {
            request.stop.is_none()
                && request.model == "gpt-3.5-turbo"
                && request.user_message().map(|m| m.content.as_str()) == Some("Describe this: Product: Widget")
        })
        .times(1)
        .returning(|_| Ok("done".to_string()));

    let result = SweepExecutor::new().run(&spec, &generator).await;
    assert_eq!(result.items()[0].response(), Some("done"));
}

#[tokio::test]
async fn explicit_stop_reaches_the_generator() {
    let mut spec = sweep_spec(vec![0.7], vec![150], vec![0.0], vec![0.0]);
    spec.stop_sequence = Some("###".to_string());

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .withf(|request| request.stop.as_deref() == Some("###"))
        .times(1)
        .returning(|_| Ok("done".to_string()));

    SweepExecutor::new().run(&spec, &generator).await;
}

#[tokio::test]
async fn observer_sees_items_in_final_order() {
    let spec = sweep_spec(vec![0.0, 0.7], vec![50], vec![0.0, 1.5], vec![0.0]);
    let generator = generator_fn(echo_parameters);
    let seen: Mutex<Vec<(usize, usize, String)>> = Mutex::new(Vec::new());

    let observer = |index: usize, total: usize, item: &SweepItemResult| {
        seen.lock().unwrap().push((index, total, item.display_output()));
    };

    let result = SweepExecutor::new().run_with_observer(&spec, &generator, &observer).await;

    let seen = seen.into_inner().unwrap();
    let expected: Vec<(usize, usize, String)> = result
        .iter()
        .enumerate()
        .map(|(index, item)| (index, 4, item.display_output()))
        .collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn channel_observer_streams_progress() {
    let spec = sweep_spec(vec![0.0], vec![50, 150, 300], vec![0.0], vec![0.0]);
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel::<SweepProgress>();

    let handle = tokio::spawn(async move {
        let generator = generator_fn(echo_parameters);
        let observer = ChannelObserver::new(sender);
        SweepExecutor::new().run_with_observer(&spec, &generator, &observer).await
    });

    let mut streamed = Vec::new();
    while let Some(progress) = receiver.recv().await {
        streamed.push(progress);
    }
    let result = handle.await.unwrap();

    assert_eq!(streamed.len(), 3);
    assert!(streamed[2].is_last());
    let streamed_items: Vec<SweepItemResult> = streamed.into_iter().map(|p| p.item).collect();
    assert_eq!(streamed_items.as_slice(), result.items());
}

#[tokio::test]
async fn cancellation_stops_between_combinations() {
    let spec = sweep_spec(vec![0.0, 0.7, 1.2], vec![50], vec![0.0], vec![0.0]);
    let flag = CancellationFlag::new();
    let calls = Arc::new(Mutex::new(0));

    let generator = {
        let flag = flag.clone();
        let calls = Arc::clone(&calls);
        generator_fn(move |_: &RequestDescriptor| {
            *calls.lock().unwrap() += 1;
            flag.cancel();
            Ok("first".to_string())
        })
    };

    let result = SweepExecutor::new().with_cancellation(flag).run(&spec, &generator).await;

    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(result.len(), 1);
    assert!(result.cancelled);
    assert_eq!(result.items()[0].outcome, SweepOutcome::Response("first".to_string()));
}

#[tokio::test]
async fn single_call_matches_one_element_sweep() {
    let spec = sweep_spec(vec![1.2], vec![300], vec![1.5], vec![0.0]);
    let config = spec.config_for(Combination::new(1.2, 300, 1.5, 0.0));
    let generator: Arc<dyn TextGenerator> = Arc::new(generator_fn(echo_parameters));

    let single = SweepExecutor::generate_single(&config, &generator).await;
    let swept = SweepExecutor::new().run(&spec, &generator).await;

    assert_eq!(swept.items(), &[single.clone()]);
    assert_eq!(single.response(), Some("1.2/300/1.5/0.0"));
}

#[tokio::test]
async fn panicking_generator_is_recorded_as_error() {
    let spec = sweep_spec(vec![0.0, 0.7], vec![50], vec![0.0], vec![0.0]);
    let generator = generator_fn(|request: &RequestDescriptor| {
        if request.temperature == 0.0 {
            panic!("unexpected payload");
        }
        Ok("ok".to_string())
    });

    let result = SweepExecutor::new().run(&spec, &generator).await;

    assert_eq!(result.items()[0].error(), Some("Generator panicked: unexpected payload"));
    assert_eq!(result.items()[1].response(), Some("ok"));
}
