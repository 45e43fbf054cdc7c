use serde::{Deserialize, Serialize};
use crate::enums::sweep_outcome::SweepOutcome;
use crate::structs::combination::Combination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweepItemRow")]
pub struct SweepItemResult {
    pub parameters: Combination,

    #[serde(flatten)]
    pub outcome: SweepOutcome,
}

/// Stored form of an item; must carry exactly one of `response` or `error`.
#[derive(Deserialize)]
struct SweepItemRow {
    parameters: Combination,
    response: Option<String>,
    error: Option<String>,
}

impl TryFrom<SweepItemRow> for SweepItemResult {
    type Error = String;

    fn try_from(row: SweepItemRow) -> Result<Self, Self::Error> {
        match (row.response, row.error) {
            (Some(response), None) => Ok(Self::success(row.parameters, response)),
            (None, Some(error)) => Ok(Self::failure(row.parameters, error)),
            (Some(_), Some(_)) => Err("sweep item has both `response` and `error`".to_string()),
            (None, None) => Err("sweep item has neither `response` nor `error`".to_string()),
        }
    }
}

impl SweepItemResult {
    pub fn success(parameters: Combination, response: String) -> Self {
        Self {
            parameters,
            outcome: SweepOutcome::Response(response),
        }
    }

    pub fn failure(parameters: Combination, error: String) -> Self {
        Self {
            parameters,
            outcome: SweepOutcome::Error(error),
        }
    }

    pub fn response(&self) -> Option<&str> {
        match &self.outcome {
            SweepOutcome::Response(text) => Some(text),
            SweepOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SweepOutcome::Response(_) => None,
            SweepOutcome::Error(message) => Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SweepOutcome::Response(_))
    }

    /// The text shown in an output column: the response, or `Error: <message>`.
    pub fn display_output(&self) -> String {
        match &self.outcome {
            SweepOutcome::Response(text) => text.clone(),
            SweepOutcome::Error(message) => format!("Error: {}", message),
        }
    }
}
