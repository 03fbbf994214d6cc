use crate::engine::staffing::{staffing_for, SOLO_LIFT_LIMIT_KG};
use crate::glass::{PanelCalculationResult, SafetyNote, ValidPanel};

/// Above this thickness (mm) glass is flagged for careful handling.
pub const THICK_GLASS_MM: f64 = 10.0;
/// Above this unit area (m²) a panel is flagged as large.
pub const LARGE_PANEL_M2: f64 = 4.0;

/// Weight in kg: area × thickness in meters × density, scaled to kilograms.
pub fn glass_weight(area_m2: f64, thickness_mm: f64, density: f64) -> f64 {
    area_m2 * (thickness_mm / 1000.0) * density * 1000.0
}

pub fn calculate_panel(panel: &ValidPanel) -> PanelCalculationResult {
    let properties = panel.glass_type.properties();
    let quantity = f64::from(panel.quantity);

    let unit_area = panel.length * panel.width;
    let area = unit_area * quantity;
    let weight = glass_weight(area, panel.thickness, properties.density);
    let unit_weight = weight / quantity;
    let total_price = area * properties.unit_price;

    let staffing = staffing_for(unit_weight);

    let mut safety_notes = Vec::new();
    if unit_weight > SOLO_LIFT_LIMIT_KG {
        safety_notes.push(SafetyNote::HeavyPanel);
    }
    if panel.thickness > THICK_GLASS_MM {
        safety_notes.push(SafetyNote::ThickGlass);
    }
    if unit_area > LARGE_PANEL_M2 {
        safety_notes.push(SafetyNote::LargePanel);
    }

    PanelCalculationResult {
        name: panel.name.clone(),
        glass_type: panel.glass_type,
        quantity: panel.quantity,
        length: panel.length,
        width: panel.width,
        thickness: panel.thickness,
        unit_area,
        area,
        unit_weight,
        weight,
        unit_price: properties.unit_price,
        total_price,
        staff_required: staffing.staff_required,
        lifting_method: staffing.lifting_method,
        mechanical_aid_required: staffing.mechanical_aid_required,
        safety_notes,
    }
}
