use crate::glass::{GlassPanelSpec, GlassType, ValidPanel};
use crate::prelude::{FieldError, PanelField};
use std::collections::HashSet;

/// Panels that passed validation and the field errors of those that did not.
#[derive(Debug, Default)]
pub struct Validation {
    pub valid: Vec<ValidPanel>,
    pub errors: Vec<FieldError>,
}

/// Checks every panel and collects all field errors, in input order.
///
/// A name seen earlier in the batch rejects the later panel.
pub fn validate_panels(panels: &[GlassPanelSpec]) -> Validation {
    let mut outcome = Validation::default();
    let mut seen_names = HashSet::new();

    for (index, spec) in panels.iter().enumerate() {
        let mut errors = field_errors(index, spec);

        let name = spec.name.trim();
        if !name.is_empty() && !seen_names.insert(name.to_string()) {
            errors.insert(
                0,
                FieldError::new(
                    index,
                    spec.label(index),
                    PanelField::Name,
                    "must be unique within the request",
                ),
            );
        }

        if errors.is_empty() {
            if let Some(panel) = into_valid(index, spec) {
                outcome.valid.push(panel);
            }
        } else {
            outcome.errors.extend(errors);
        }
    }

    outcome
}

fn field_errors(index: usize, spec: &GlassPanelSpec) -> Vec<FieldError> {
    let label = spec.label(index);
    let mut errors = Vec::new();
    let mut reject = |field, reason: String| {
        errors.push(FieldError::new(index, label.clone(), field, reason));
    };

    if spec.name.trim().is_empty() {
        reject(PanelField::Name, "must not be empty".into());
    }

    for (field, value) in [
        (PanelField::Length, spec.length),
        (PanelField::Width, spec.width),
        (PanelField::Thickness, spec.thickness),
    ] {
        if let Some(reason) = positive_dimension(value) {
            reject(field, reason.into());
        }
    }

    if let Err(err) = spec.glass_type.parse::<GlassType>() {
        reject(PanelField::GlassType, format!("has unknown code '{}'", err.0));
    }

    if let Some(reason) = whole_quantity(spec.quantity) {
        reject(PanelField::Quantity, reason.into());
    }

    errors
}

fn positive_dimension(value: f64) -> Option<&'static str> {
    if !value.is_finite() {
        Some("must be a finite number")
    } else if value <= 0.0 {
        Some("must be positive")
    } else {
        None
    }
}

fn whole_quantity(value: f64) -> Option<&'static str> {
    if !value.is_finite() || value.fract() != 0.0 {
        Some("must be a whole number")
    } else if value < 1.0 {
        Some("must be at least 1")
    } else if value > f64::from(u32::MAX) {
        Some("is too large")
    } else {
        None
    }
}

fn into_valid(index: usize, spec: &GlassPanelSpec) -> Option<ValidPanel> {
    let glass_type = spec.glass_type.parse().ok()?;
    Some(ValidPanel {
        index,
        name: spec.name.trim().to_string(),
        length: spec.length,
        width: spec.width,
        thickness: spec.thickness,
        glass_type,
        quantity: spec.quantity as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> GlassPanelSpec {
        GlassPanelSpec::new(name, 1.2, 0.9, 6.0, GlassType::Toughened, 2)
    }

    #[test]
    fn clean_batch_has_no_errors() {
        let outcome = validate_panels(&[spec("A"), spec("B")]);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.valid.len(), 2);
        assert_eq!(outcome.valid[1].quantity, 2);
        assert_eq!(outcome.valid[1].glass_type, GlassType::Toughened);
    }

    #[test]
    fn negative_thickness_names_the_field() {
        let mut bad = spec("Panel 2");
        bad.thickness = -1.0;
        let outcome = validate_panels(&[spec("Panel 1"), bad]);

        assert_eq!(outcome.valid.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        let err = &outcome.errors[0];
        assert_eq!(err.index, 1);
        assert_eq!(err.field, PanelField::Thickness);
        assert_eq!(err.to_string(), "Panel 'Panel 2': thickness must be positive");
    }

    #[test]
    fn every_bad_field_is_reported() {
        let bad = GlassPanelSpec {
            name: String::new(),
            length: 0.0,
            width: f64::NAN,
            thickness: 4.0,
            glass_type: "FLOAT".into(),
            quantity: 1.5,
        };
        let outcome = validate_panels(&[bad]);
        let fields: Vec<_> = outcome.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                PanelField::Name,
                PanelField::Length,
                PanelField::Width,
                PanelField::GlassType,
                PanelField::Quantity,
            ]
        );
        assert!(outcome.errors.iter().all(|e| e.panel == "#1"));
        assert_eq!(outcome.errors[3].reason, "has unknown code 'FLOAT'");
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut bad = spec("A");
        bad.quantity = 0.0;
        let outcome = validate_panels(&[bad]);
        assert_eq!(outcome.errors[0].field, PanelField::Quantity);
        assert_eq!(outcome.errors[0].reason, "must be at least 1");
    }

    #[test]
    fn duplicate_name_rejects_the_later_panel() {
        let outcome = validate_panels(&[spec("Door"), spec(" Door ")]);
        assert_eq!(outcome.valid.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].index, 1);
        assert_eq!(outcome.errors[0].field, PanelField::Name);
    }
}
