use anyhow::ensure;
use glazecore::{GlassPanelSpec, GlassType};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Smallest edge the generator will produce, in meters.
const MIN_EDGE_M: f64 = 0.3;
/// Largest order the generator will build in one call.
pub const MAX_SAMPLE_PANELS: usize = 10_000;
const STOCK_THICKNESSES_MM: [f64; 7] = [4.0, 6.0, 6.4, 8.0, 10.0, 12.0, 24.0];

/// Configuration for generating a synthetic glazing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub panels: usize,
    pub seed: u64,
    pub max_length: f64,
    pub max_width: f64,
    pub max_quantity: u32,
    pub description: Option<String>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            panels: 6,
            seed: 0,
            max_length: 3.0,
            max_width: 2.0,
            max_quantity: 4,
            description: None,
        }
    }
}

impl OrderConfig {
    fn normalized_panels(&self) -> usize {
        self.panels.max(1)
    }

    fn normalized_quantity(&self) -> u32 {
        self.max_quantity.max(1)
    }
}

fn edge(rng: &mut StdRng, max: f64) -> f64 {
    let meters = rng.gen_range(MIN_EDGE_M..=max);
    (meters * 1000.0).round() / 1000.0
}

/// Builds a reproducible order: the same config always yields the same panels.
pub fn build_sample_order(config: &OrderConfig) -> anyhow::Result<Vec<GlassPanelSpec>> {
    ensure!(
        config.panels <= MAX_SAMPLE_PANELS,
        "panels must be at most {}, got {}",
        MAX_SAMPLE_PANELS,
        config.panels
    );
    ensure!(
        config.max_length.is_finite() && config.max_length >= MIN_EDGE_M,
        "max_length must be at least {}m",
        MIN_EDGE_M
    );
    ensure!(
        config.max_width.is_finite() && config.max_width >= MIN_EDGE_M,
        "max_width must be at least {}m",
        MIN_EDGE_M
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let panels = (0..config.normalized_panels())
        .map(|index| {
            let length = edge(&mut rng, config.max_length);
            let width = edge(&mut rng, config.max_width);
            let thickness = *STOCK_THICKNESSES_MM.choose(&mut rng).unwrap_or(&4.0);
            let glass_type = *GlassType::ALL
                .choose(&mut rng)
                .unwrap_or(&GlassType::SingleGlazed);
            let quantity = rng.gen_range(1..=config.normalized_quantity());
            GlassPanelSpec::new(
                format!("Sample {}", index + 1),
                length,
                width,
                thickness,
                glass_type,
                quantity,
            )
        })
        .collect();

    Ok(panels)
}
