use prompt_sweep::enums::chat_role::ChatRole;
use prompt_sweep::services::request_builder::RequestBuilder;
use prompt_sweep::structs::combination::Combination;

use super::support::sweep_spec;

#[test]
fn shapes_user_message_with_product() {
    let spec = sweep_spec(vec![0.7], vec![150], vec![0.0], vec![0.0]);
    let config = spec.config_for(Combination::new(0.7, 150, 0.0, 0.0));

    let request = RequestBuilder::build(&config);

    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, ChatRole::System);
    assert_eq!(request.messages[0].content, "You write product copy.");
    assert_eq!(request.messages[1].role, ChatRole::User);
    assert_eq!(request.messages[1].content, "Describe this: Product: Widget");
}

#[test]
fn empty_system_prompt_is_omitted() {
    let mut spec = sweep_spec(vec![0.7], vec![150], vec![0.0], vec![0.0]);
    spec.system_prompt = String::new();

    let request = RequestBuilder::build(&spec.config_for(Combination::new(0.7, 150, 0.0, 0.0)));

    assert_eq!(request.messages.len(), 1);
    assert!(request.system_message().is_none());
}

#[test]
fn stop_sequence_absence_is_distinct_from_empty() {
    let mut spec = sweep_spec(vec![0.7], vec![150], vec![0.0], vec![0.0]);
    let combination = Combination::new(0.7, 150, 0.0, 0.0);

    assert_eq!(RequestBuilder::build(&spec.config_for(combination)).stop, None);

    spec.stop_sequence = Some(String::new());
    assert_eq!(RequestBuilder::build(&spec.config_for(combination)).stop, Some(String::new()));
}
