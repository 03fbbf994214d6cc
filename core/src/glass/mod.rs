pub mod glass_type;
pub mod panel;
pub mod result;

pub use glass_type::{GlassType, GlassTypeProperties, UnknownGlassType};
pub use panel::{GlassPanelSpec, ValidPanel};
pub use result::{
    CalculationResult, CalculationSummary, PanelCalculationResult, PartialCalculation,
    Recommendation, SafetyNote, Warning,
};
