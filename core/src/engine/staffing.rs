use serde::{Deserialize, Serialize};
use std::fmt;

/// Heaviest unit a single installer may carry.
pub const SOLO_LIFT_LIMIT_KG: f64 = 25.0;
pub const TWO_PERSON_LIMIT_KG: f64 = 75.0;
/// Above this, mechanical aid is expected.
pub const TEAM_LIFT_LIMIT_KG: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiftingMethod {
    #[serde(rename = "Manual lift")]
    Manual,
    #[serde(rename = "Suction/manual lift")]
    SuctionManual,
    #[serde(rename = "Suction/manual lift, team coordination")]
    TeamCoordinated,
    #[serde(rename = "Mechanical aid strongly recommended")]
    MechanicalAid,
}

impl LiftingMethod {
    pub fn description(&self) -> &'static str {
        match self {
            LiftingMethod::Manual => "Manual lift",
            LiftingMethod::SuctionManual => "Suction/manual lift",
            LiftingMethod::TeamCoordinated => "Suction/manual lift, team coordination",
            LiftingMethod::MechanicalAid => "Mechanical aid strongly recommended",
        }
    }
}

impl fmt::Display for LiftingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingRequirement {
    pub staff_required: u32,
    pub lifting_method: LiftingMethod,
    pub mechanical_aid_required: bool,
}

/// Classifies the weight of one physical panel. Band upper bounds are inclusive.
pub fn staffing_for(unit_weight_kg: f64) -> StaffingRequirement {
    let (staff_required, lifting_method) = if unit_weight_kg <= SOLO_LIFT_LIMIT_KG {
        (1, LiftingMethod::Manual)
    } else if unit_weight_kg <= TWO_PERSON_LIMIT_KG {
        (2, LiftingMethod::SuctionManual)
    } else if unit_weight_kg <= TEAM_LIFT_LIMIT_KG {
        (3, LiftingMethod::TeamCoordinated)
    } else {
        (4, LiftingMethod::MechanicalAid)
    };

    StaffingRequirement {
        staff_required,
        lifting_method,
        mechanical_aid_required: lifting_method == LiftingMethod::MechanicalAid,
    }
}
