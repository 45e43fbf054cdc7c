use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Candidate lists used by `sweep` when no flag overrides them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SweepConfig {
    #[serde(default = "ConfigHelper::default_sweep_temperatures")]
    pub temperatures: Vec<f32>,

    #[serde(default = "ConfigHelper::default_sweep_max_tokens")]
    pub max_tokens: Vec<u32>,

    #[serde(default = "ConfigHelper::default_sweep_penalties")]
    pub presence_penalties: Vec<f32>,

    #[serde(default = "ConfigHelper::default_sweep_penalties")]
    pub frequency_penalties: Vec<f32>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            temperatures: ConfigHelper::default_sweep_temperatures(),
            max_tokens: ConfigHelper::default_sweep_max_tokens(),
            presence_penalties: ConfigHelper::default_sweep_penalties(),
            frequency_penalties: ConfigHelper::default_sweep_penalties(),
        }
    }
}
