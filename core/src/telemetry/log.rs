use crate::glass::CalculationSummary;
use crate::prelude::ValidationError;
use log::{info, warn};

/// Thin wrapper over the `log` facade for calculation events.
#[derive(Debug, Clone, Copy)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_calculation(&self, source: &str, summary: &CalculationSummary) {
        info!(
            "{}: {} panels, {:.1}kg, {:.2}m², max staff {}, mechanical aid {}",
            source,
            summary.total_panels,
            summary.total_weight,
            summary.total_area,
            summary.max_staff_required,
            summary.mechanical_aid_required
        );
        for warning in &summary.warnings {
            warn!("{}: {}", source, warning);
        }
    }

    pub fn record_rejection(&self, source: &str, error: &ValidationError) {
        for message in error.messages() {
            warn!("{}: {}", source, message);
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
