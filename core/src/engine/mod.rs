//! The glass calculation engine.
//!
//! Everything here is a pure function of its input: no I/O, no logging and
//! no shared state, so callers may run calculations concurrently.

pub mod panel;
pub mod plan;
pub mod staffing;
pub mod summary;
pub mod validate;

pub use panel::{calculate_panel, glass_weight};
pub use plan::{plan_installation, InstallationPlan};
pub use staffing::{staffing_for, LiftingMethod, StaffingRequirement};
pub use summary::summarize;
pub use validate::{validate_panels, Validation};

use crate::glass::{CalculationResult, GlassPanelSpec, PartialCalculation, ValidPanel};
use crate::prelude::{CalcResult, ValidationError};

/// Calculates an order, rejecting the whole batch if any panel is invalid.
pub fn calculate(panels: &[GlassPanelSpec]) -> CalcResult<CalculationResult> {
    if panels.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    let validation = validate_panels(panels);
    if !validation.errors.is_empty() {
        return Err(ValidationError::Fields(validation.errors));
    }

    Ok(calculate_valid(&validation.valid))
}

/// Calculates the panels that pass validation and reports the rest.
///
/// Fails only when the batch is empty or no panel survives validation.
pub fn calculate_valid_subset(panels: &[GlassPanelSpec]) -> CalcResult<PartialCalculation> {
    if panels.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    let validation = validate_panels(panels);
    if validation.valid.is_empty() {
        return Err(ValidationError::Fields(validation.errors));
    }

    Ok(PartialCalculation {
        result: calculate_valid(&validation.valid),
        rejected: validation.errors,
    })
}

fn calculate_valid(panels: &[ValidPanel]) -> CalculationResult {
    let panels: Vec<_> = panels.iter().map(calculate_panel).collect();
    let summary = summarize(&panels);
    let installation = plan_installation(&summary);

    CalculationResult {
        summary,
        panels,
        installation,
    }
}
