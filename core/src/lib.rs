//! Glass weight, staffing and safety calculations for glazing installations.
//!
//! `engine` holds the pure calculation over panel specs; `extract` and
//! `report` convert to and from product descriptions and CSV, and
//! `telemetry` carries the logging and counters used by drivers.

pub mod engine;
pub mod extract;
pub mod glass;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use engine::{calculate, calculate_valid_subset};
pub use glass::{CalculationResult, GlassPanelSpec, GlassType, PartialCalculation};
pub use prelude::{FieldError, PanelField, ValidationError};
