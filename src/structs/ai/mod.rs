pub mod api_error;
pub mod chat_message;
pub mod openai;
pub mod request_descriptor;
