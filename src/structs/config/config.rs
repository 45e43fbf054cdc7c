use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::defaults_config::DefaultsConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::sweep_config::SweepConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
