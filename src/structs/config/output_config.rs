use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_reflection_path")]
    pub reflection_path: String,

    /// Upper bound for the output column of the sweep table.
    #[serde(default = "ConfigHelper::default_preview_width")]
    pub preview_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reflection_path: ConfigHelper::default_reflection_path(),
            preview_width: ConfigHelper::default_preview_width(),
        }
    }
}
