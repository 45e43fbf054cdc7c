pub mod config_helper;
pub mod input_validator;
