pub mod ai;
pub mod cancellation_flag;
pub mod cli;
pub mod combination;
pub mod config;
pub mod generation_config;
pub mod parameter_sweep_spec;
pub mod prompt_args;
pub mod sweep_item_result;
pub mod sweep_progress;
pub mod sweep_result;
pub mod validation_result;
