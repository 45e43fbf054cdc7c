use std::fmt;
use serde::{Deserialize, Serialize};

/// One tuple of tunable values drawn from a sweep's candidate lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl Combination {
    pub fn new(temperature: f32, max_tokens: u32, presence_penalty: f32, frequency_penalty: f32) -> Self {
        Self {
            temperature,
            max_tokens,
            presence_penalty,
            frequency_penalty,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature: {:.1}, Max Tokens: {}, Presence Penalty: {:.1}, Frequency Penalty: {:.1}",
            self.temperature, self.max_tokens, self.presence_penalty, self.frequency_penalty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_one_decimal_for_floats() {
        let combination = Combination::new(0.7, 150, 0.0, 1.5);
        assert_eq!(
            combination.to_string(),
            "Temperature: 0.7, Max Tokens: 150, Presence Penalty: 0.0, Frequency Penalty: 1.5"
        );
    }
}
