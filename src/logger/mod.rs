pub mod animated_logger;
pub mod sweep_result_logger;
