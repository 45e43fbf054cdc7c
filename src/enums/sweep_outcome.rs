use serde::{Deserialize, Serialize};

/// What a single combination produced. Exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepOutcome {
    Response(String),
    Error(String),
}
