pub mod ai_config;
pub mod config;
pub mod defaults_config;
pub mod output_config;
pub mod sweep_config;
