pub mod request_builder;
pub mod sweep_executor;
pub mod reflection_store;
pub mod ai_providers;
