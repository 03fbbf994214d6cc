use serde::{Deserialize, Serialize};
use std::fmt;

/// Input field of a panel spec, named as it appears in the JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelField {
    Name,
    Length,
    Width,
    Thickness,
    GlassType,
    Quantity,
}

impl PanelField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelField::Name => "name",
            PanelField::Length => "length",
            PanelField::Width => "width",
            PanelField::Thickness => "thickness",
            PanelField::GlassType => "glassType",
            PanelField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for PanelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field on a single panel.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Panel '{panel}': {field} {reason}")]
pub struct FieldError {
    /// Zero-based position of the panel in the request.
    pub index: usize,
    /// Panel name, or `#<n>` when the name itself is missing.
    pub panel: String,
    pub field: PanelField,
    pub reason: String,
}

impl FieldError {
    pub fn new(
        index: usize,
        panel: impl Into<String>,
        field: PanelField,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            index,
            panel: panel.into(),
            field,
            reason: reason.into(),
        }
    }
}

/// Reasons a calculation request is refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("no panels supplied")]
    EmptyBatch,
    #[error("{} invalid panel field(s): {}", .0.len(), join_messages(.0))]
    Fields(Vec<FieldError>),
}

impl ValidationError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::EmptyBatch => &[],
            ValidationError::Fields(errors) => errors,
        }
    }

    /// User-facing messages, one per field error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::EmptyBatch => vec![self.to_string()],
            ValidationError::Fields(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type CalcResult<T> = Result<T, ValidationError>;
