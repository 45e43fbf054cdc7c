pub mod support;

mod request_builder;
mod sweep_executor;
mod sweep_properties;
