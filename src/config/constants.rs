pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const AVAILABLE_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4"];

pub const CONFIG_DIR_NAME: &str = "prompt-sweep";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_PENALTY: f32 = 0.0;

pub const DEFAULT_SWEEP_TEMPERATURES: &[f32] = &[0.0, 0.7, 1.2];
pub const DEFAULT_SWEEP_MAX_TOKENS: &[u32] = &[50, 150, 300];
pub const DEFAULT_SWEEP_PENALTIES: &[f32] = &[0.0, 1.5];

/// Inclusive bounds shared by temperature and both penalties.
pub const MIN_SAMPLING_VALUE: f32 = 0.0;
pub const MAX_SAMPLING_VALUE: f32 = 2.0;

pub const DEFAULT_REFLECTION_PATH: &str = "reflection.txt";
pub const REFLECTION_PLACEHOLDER: &str = "Write your reflection on the results here...";

pub const DEFAULT_PREVIEW_WIDTH: usize = 60;
pub const MIN_PREVIEW_WIDTH: usize = 20;
