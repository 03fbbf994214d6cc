use crate::workflow::runner::RunOutcome;
use serde::{Deserialize, Serialize};

/// Most recent successful calculation, served at `GET /latest`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LatestCalculation {
    pub source: Option<String>,
    pub outcome: Option<RunOutcome>,
}

impl LatestCalculation {
    pub fn new(source: impl Into<String>, outcome: RunOutcome) -> Self {
        Self {
            source: Some(source.into()),
            outcome: Some(outcome),
        }
    }
}
