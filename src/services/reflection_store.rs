use std::fs;
use std::path::Path;
use crate::config::constants::REFLECTION_PLACEHOLDER;
use crate::errors::{PlaygroundError, PlaygroundResult};

/// Plain-text sink for the user's notes on a set of results.
pub struct ReflectionStore;

impl ReflectionStore {
    /// Trims `text` and writes it to `path`, replacing any previous content.
    pub fn save(path: &Path, text: &str) -> PlaygroundResult<()> {
        let reflection = text.trim();

        if reflection.is_empty() || reflection == REFLECTION_PLACEHOLDER {
            return Err(PlaygroundError::validation_error(
                "reflection",
                reflection,
                "must contain your own notes",
                Some("Please enter your reflection"),
            ));
        }

        fs::write(path, reflection)
            .map_err(|e| PlaygroundError::file_error(&path.display().to_string(), "save reflection", &e.to_string()))?;

        log::info!("📝 Reflection saved to {}", path.display());
        Ok(())
    }
}
