use crate::workflow::config::{CalculatorConfig, ValidationPolicy};
use glazecore::engine;
use glazecore::prelude::{FieldError, ValidationError};
use glazecore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use glazecore::{CalculationResult, GlassPanelSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub result: CalculationResult,
    pub rejected: Vec<FieldError>,
}

/// Applies the configured validation policy and records telemetry around
/// each engine call.
#[derive(Clone)]
pub struct Runner {
    config: CalculatorConfig,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new(),
        }
    }

    pub fn execute(
        &self,
        source: &str,
        panels: &[GlassPanelSpec],
    ) -> Result<RunOutcome, ValidationError> {
        let outcome = match self.config.policy {
            ValidationPolicy::RejectBatch => {
                engine::calculate(panels).map(|result| RunOutcome {
                    result,
                    rejected: Vec::new(),
                })
            }
            ValidationPolicy::SkipInvalid => {
                engine::calculate_valid_subset(panels).map(|partial| RunOutcome {
                    result: partial.result,
                    rejected: partial.rejected,
                })
            }
        };

        match &outcome {
            Ok(outcome) => {
                self.logger.record_calculation(source, &outcome.result.summary);
                if !outcome.rejected.is_empty() {
                    self.logger.record(&format!(
                        "{}: skipped {} invalid panel(s)",
                        source,
                        rejected_panels(&outcome.rejected)
                    ));
                }
                self.metrics.record_calculation(
                    outcome.result.summary.total_panels,
                    rejected_panels(&outcome.rejected),
                );
            }
            Err(err) => {
                self.logger.record_rejection(source, err);
                self.metrics
                    .record_rejection(rejected_panels(err.field_errors()));
            }
        }

        outcome
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

fn rejected_panels(errors: &[FieldError]) -> usize {
    errors
        .iter()
        .map(|err| err.index)
        .collect::<BTreeSet<_>>()
        .len()
}
