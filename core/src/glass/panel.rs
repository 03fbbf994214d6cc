use crate::glass::glass_type::GlassType;
use serde::{Deserialize, Serialize};

/// Raw panel specification as received from callers.
///
/// Numbers and the glass type are kept loose so that bad values surface as
/// field errors during validation instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassPanelSpec {
    #[serde(alias = "panelName")]
    pub name: String,
    /// Meters.
    pub length: f64,
    /// Meters.
    pub width: f64,
    /// Millimeters.
    pub thickness: f64,
    pub glass_type: String,
    pub quantity: f64,
}

impl GlassPanelSpec {
    pub fn new(
        name: impl Into<String>,
        length: f64,
        width: f64,
        thickness: f64,
        glass_type: GlassType,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            thickness,
            glass_type: glass_type.code().to_string(),
            quantity: f64::from(quantity),
        }
    }

    /// Label used in error messages: the name, or the 1-based position when unnamed.
    pub fn label(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("#{}", index + 1)
        } else {
            trimmed.to_string()
        }
    }
}

/// A panel spec that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPanel {
    pub index: usize,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub glass_type: GlassType,
    pub quantity: u32,
}
