use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glass product codes accepted by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlassType {
    SingleGlazed,
    DoubleGlazed,
    TripleGlazed,
    Laminated,
    Toughened,
    LowE,
}

/// Static density and price figures for a glass type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassTypeProperties {
    /// Weight factor per m² per meter of thickness, scaled by 1000 to kg.
    pub density: f64,
    /// Price per square meter.
    pub unit_price: f64,
}

impl GlassType {
    pub const ALL: [GlassType; 6] = [
        GlassType::SingleGlazed,
        GlassType::DoubleGlazed,
        GlassType::TripleGlazed,
        GlassType::Laminated,
        GlassType::Toughened,
        GlassType::LowE,
    ];

    pub fn properties(&self) -> GlassTypeProperties {
        let (density, unit_price) = match self {
            GlassType::SingleGlazed => (2.5, 25.0),
            GlassType::DoubleGlazed => (5.0, 45.0),
            GlassType::TripleGlazed => (7.5, 65.0),
            GlassType::Laminated => (2.8, 55.0),
            GlassType::Toughened => (2.5, 50.0),
            GlassType::LowE => (2.6, 55.0),
        };
        GlassTypeProperties {
            density,
            unit_price,
        }
    }

    pub fn density(&self) -> f64 {
        self.properties().density
    }

    pub fn unit_price(&self) -> f64 {
        self.properties().unit_price
    }

    /// Wire code, e.g. `DOUBLE_GLAZED`.
    pub fn code(&self) -> &'static str {
        match self {
            GlassType::SingleGlazed => "SINGLE_GLAZED",
            GlassType::DoubleGlazed => "DOUBLE_GLAZED",
            GlassType::TripleGlazed => "TRIPLE_GLAZED",
            GlassType::Laminated => "LAMINATED",
            GlassType::Toughened => "TOUGHENED",
            GlassType::LowE => "LOW_E",
        }
    }

    /// Human label used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            GlassType::SingleGlazed => "Single glazed",
            GlassType::DoubleGlazed => "Double glazed",
            GlassType::TripleGlazed => "Triple glazed",
            GlassType::Laminated => "Laminated",
            GlassType::Toughened => "Toughened",
            GlassType::LowE => "Low-E",
        }
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown glass type '{0}'")]
pub struct UnknownGlassType(pub String);

impl FromStr for GlassType {
    type Err = UnknownGlassType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        GlassType::ALL
            .into_iter()
            .find(|glass_type| glass_type.code() == raw)
            .ok_or_else(|| UnknownGlassType(raw.to_string()))
    }
}
