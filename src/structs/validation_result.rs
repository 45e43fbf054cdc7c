use crate::errors::{PlaygroundError, PlaygroundResult};

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<PlaygroundError>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, error: PlaygroundError) {
        self.errors.push(error);
    }

    pub fn push_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("⚠️ {}", warning);
        }
    }

    /// Warnings are logged; errors turn into a single [`PlaygroundError`].
    pub fn into_result(self, context: &str) -> PlaygroundResult<()> {
        self.log_warnings();

        match PlaygroundError::from_errors(self.errors, context) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
