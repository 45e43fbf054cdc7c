pub mod ai_provider_error;
pub mod chat_role;
pub mod commands;
pub mod sweep_outcome;
