use crate::glass::CalculationSummary;
use serde::{Deserialize, Serialize};

/// Order weight (kg) a crew may handle without a manual handling assessment.
pub const MANUAL_HANDLING_LIMIT_KG: f64 = 75.0;
const HOURS_PER_PANEL_SPEC: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VanConfiguration {
    #[serde(rename = "Standard van with 2 team members")]
    Standard,
    #[serde(rename = "Large van with 3+ team members")]
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BriefingNote {
    #[serde(rename = "MECHANICAL AID REQUIRED - One or more panels exceed safe manual handling limits")]
    MechanicalAidRequired,
    #[serde(rename = "MULTI-PERSON LIFT - Coordinate movements and ensure clear communication")]
    MultiPersonLift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManualHandlingAssessment {
    Pass,
    RequiresAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MechanicalAidStatus {
    MechanicalAidRequired,
    ManualHandlingAcceptable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCompliance {
    pub manual_handling: ManualHandlingAssessment,
    pub mechanical_aid: MechanicalAidStatus,
}

/// Crew, vehicle and tooling advice for installing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationPlan {
    pub van_configuration: VanConfiguration,
    pub estimated_hours: f64,
    pub tools_required: Vec<String>,
    pub briefing: Vec<BriefingNote>,
    pub compliance: SafetyCompliance,
}

pub fn plan_installation(summary: &CalculationSummary) -> InstallationPlan {
    let multi_person = summary.max_staff_required >= 3;
    let mechanical = summary.mechanical_aid_required;

    let van_configuration = if multi_person {
        VanConfiguration::Large
    } else {
        VanConfiguration::Standard
    };

    let setup_hours = if multi_person { 2.0 } else { 1.0 };
    let estimated_hours = summary.panel_specs as f64 * HOURS_PER_PANEL_SPEC + setup_hours;

    let tools: &[&str] = if mechanical {
        &["Suction lifters", "Crane or mechanical aid", "Safety harnesses"]
    } else {
        &["Suction lifters", "Manual handling equipment"]
    };

    let mut briefing = Vec::new();
    if mechanical {
        briefing.push(BriefingNote::MechanicalAidRequired);
    }
    if multi_person {
        briefing.push(BriefingNote::MultiPersonLift);
    }

    let compliance = SafetyCompliance {
        manual_handling: if summary.total_weight <= MANUAL_HANDLING_LIMIT_KG {
            ManualHandlingAssessment::Pass
        } else {
            ManualHandlingAssessment::RequiresAssessment
        },
        mechanical_aid: if mechanical {
            MechanicalAidStatus::MechanicalAidRequired
        } else {
            MechanicalAidStatus::ManualHandlingAcceptable
        },
    };

    InstallationPlan {
        van_configuration,
        estimated_hours,
        tools_required: tools.iter().map(|tool| tool.to_string()).collect(),
        briefing,
        compliance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::staffing::LiftingMethod;
    use std::collections::BTreeMap;

    fn summary(
        panel_specs: usize,
        total_weight: f64,
        max_staff: u32,
        mechanical: bool,
    ) -> CalculationSummary {
        CalculationSummary {
            total_panels: panel_specs as u64,
            panel_specs,
            total_weight,
            total_area: 0.0,
            total_value: 0.0,
            average_thickness: 0.0,
            max_unit_weight: 0.0,
            max_staff_required: max_staff,
            primary_lifting_method: LiftingMethod::Manual,
            mechanical_aid_required: mechanical,
            glass_type_counts: BTreeMap::new(),
            thickness_counts: BTreeMap::new(),
            recommendations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn light_order_uses_standard_van() {
        let plan = plan_installation(&summary(2, 40.0, 2, false));
        assert_eq!(plan.van_configuration, VanConfiguration::Standard);
        assert_eq!(plan.estimated_hours, 2.0);
        assert!(plan.briefing.is_empty());
        assert_eq!(plan.compliance.manual_handling, ManualHandlingAssessment::Pass);
        assert_eq!(
            plan.tools_required,
            vec!["Suction lifters", "Manual handling equipment"]
        );
    }

    #[test]
    fn heavy_order_brings_crane_and_large_crew() {
        let plan = plan_installation(&summary(4, 600.0, 4, true));
        assert_eq!(plan.van_configuration, VanConfiguration::Large);
        assert_eq!(plan.estimated_hours, 4.0);
        assert_eq!(
            plan.briefing,
            vec![BriefingNote::MechanicalAidRequired, BriefingNote::MultiPersonLift]
        );
        assert_eq!(
            plan.compliance.manual_handling,
            ManualHandlingAssessment::RequiresAssessment
        );
        assert_eq!(
            plan.compliance.mechanical_aid,
            MechanicalAidStatus::MechanicalAidRequired
        );
        assert!(plan.tools_required.iter().any(|t| t == "Crane or mechanical aid"));
    }

    #[test]
    fn compliance_serializes_as_codes() {
        let plan = plan_installation(&summary(1, 75.0, 2, false));
        let json = serde_json::to_value(plan.compliance).unwrap();
        assert_eq!(json["manualHandling"], "PASS");
        assert_eq!(json["mechanicalAid"], "MANUAL_HANDLING_ACCEPTABLE");
    }
}
