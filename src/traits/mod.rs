pub mod sweep_observer;
pub mod text_generator;
