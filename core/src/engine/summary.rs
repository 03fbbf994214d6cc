use crate::engine::staffing::LiftingMethod;
use crate::glass::{CalculationSummary, PanelCalculationResult, Recommendation, Warning};
use std::collections::BTreeMap;

/// Total order weight (kg) above which lifting equipment is recommended.
pub const HEAVY_ORDER_KG: f64 = 200.0;
/// Total area (m²) above which installation is split across days.
pub const MULTI_DAY_AREA_M2: f64 = 50.0;
/// Unit weight (kg) above which the order carries a warning.
pub const HEAVY_PANEL_WARNING_KG: f64 = 100.0;

pub fn summarize(panels: &[PanelCalculationResult]) -> CalculationSummary {
    let mut total_panels = 0u64;
    let mut total_weight = 0.0;
    let mut total_area = 0.0;
    let mut total_value = 0.0;
    let mut thickness_sum = 0.0;
    let mut max_unit_weight = 0.0f64;
    let mut max_staff_required = 0u32;
    let mut primary_lifting_method = LiftingMethod::Manual;
    let mut mechanical_aid_required = false;
    let mut glass_type_counts = BTreeMap::new();
    let mut thickness_counts = BTreeMap::new();

    for panel in panels {
        let quantity = u64::from(panel.quantity);
        total_panels += quantity;
        total_weight += panel.weight;
        total_area += panel.area;
        total_value += panel.total_price;
        thickness_sum += panel.thickness;
        max_unit_weight = max_unit_weight.max(panel.unit_weight);

        if panel.staff_required > max_staff_required {
            max_staff_required = panel.staff_required;
            primary_lifting_method = panel.lifting_method;
        }
        mechanical_aid_required |= panel.mechanical_aid_required;

        *glass_type_counts.entry(panel.glass_type).or_insert(0) += quantity;
        *thickness_counts
            .entry(thickness_label(panel.thickness))
            .or_insert(0) += quantity;
    }

    let average_thickness = if panels.is_empty() {
        0.0
    } else {
        thickness_sum / panels.len() as f64
    };

    let mut recommendations = Vec::new();
    if total_weight > HEAVY_ORDER_KG {
        recommendations.push(Recommendation::MechanicalLifting);
    }
    if total_area > MULTI_DAY_AREA_M2 {
        recommendations.push(Recommendation::MultiDayInstallation);
    }

    let mut warnings = Vec::new();
    if max_unit_weight > HEAVY_PANEL_WARNING_KG {
        warnings.push(Warning::PanelsOver100Kg);
    }

    CalculationSummary {
        total_panels,
        panel_specs: panels.len(),
        total_weight,
        total_area,
        total_value,
        average_thickness,
        max_unit_weight,
        max_staff_required,
        primary_lifting_method,
        mechanical_aid_required,
        glass_type_counts,
        thickness_counts,
        recommendations,
        warnings,
    }
}

/// Histogram key for a thickness, e.g. `4mm` or `6.4mm`.
pub fn thickness_label(thickness_mm: f64) -> String {
    format!("{}mm", thickness_mm)
}
