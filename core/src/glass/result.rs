use crate::engine::plan::InstallationPlan;
use crate::engine::staffing::LiftingMethod;
use crate::glass::glass_type::GlassType;
use crate::prelude::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-panel advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyNote {
    #[serde(rename = "Heavy panel - requires team lift")]
    HeavyPanel,
    #[serde(rename = "Thick glass - handle with care")]
    ThickGlass,
    #[serde(rename = "Large panel - may require mechanical assistance")]
    LargePanel,
}

impl SafetyNote {
    pub fn message(&self) -> &'static str {
        match self {
            SafetyNote::HeavyPanel => "Heavy panel - requires team lift",
            SafetyNote::ThickGlass => "Thick glass - handle with care",
            SafetyNote::LargePanel => "Large panel - may require mechanical assistance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Consider mechanical lifting equipment for installation")]
    MechanicalLifting,
    #[serde(rename = "Schedule installation across multiple days")]
    MultiDayInstallation,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::MechanicalLifting => {
                "Consider mechanical lifting equipment for installation"
            }
            Recommendation::MultiDayInstallation => "Schedule installation across multiple days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    #[serde(rename = "Some panels exceed 100kg - ensure adequate lifting equipment")]
    PanelsOver100Kg,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::PanelsOver100Kg => {
                "Some panels exceed 100kg - ensure adequate lifting equipment"
            }
        }
    }
}

impl fmt::Display for SafetyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Calculated figures for one input panel spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelCalculationResult {
    pub name: String,
    pub glass_type: GlassType,
    pub quantity: u32,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    /// Area of one physical panel, m².
    pub unit_area: f64,
    /// Area across all `quantity` panels, m².
    pub area: f64,
    /// Weight of one physical panel, kg.
    pub unit_weight: f64,
    /// Weight across all `quantity` panels, kg.
    pub weight: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub staff_required: u32,
    pub lifting_method: LiftingMethod,
    pub mechanical_aid_required: bool,
    pub safety_notes: Vec<SafetyNote>,
}

/// Aggregate view over every panel in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    /// Physical panels, i.e. the sum of quantities.
    pub total_panels: u64,
    /// Number of panel specs in the request.
    pub panel_specs: usize,
    pub total_weight: f64,
    pub total_area: f64,
    pub total_value: f64,
    pub average_thickness: f64,
    pub max_unit_weight: f64,
    pub max_staff_required: u32,
    pub primary_lifting_method: LiftingMethod,
    pub mechanical_aid_required: bool,
    pub glass_type_counts: BTreeMap<GlassType, u64>,
    pub thickness_counts: BTreeMap<String, u64>,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub summary: CalculationSummary,
    pub panels: Vec<PanelCalculationResult>,
    pub installation: InstallationPlan,
}

/// Outcome of a calculation that skipped invalid panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCalculation {
    pub result: CalculationResult,
    pub rejected: Vec<FieldError>,
}
