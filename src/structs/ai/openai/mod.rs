pub mod openai_message;
pub mod openai_request;
