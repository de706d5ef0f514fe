//! Simulation settings

use serde::Deserialize;

/// Settings for the payment simulation loop
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Number of payment attempts to simulate
    pub payment_count: usize,

    /// RNG seed; omit for a different run each time
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            payment_count: 50,
            seed: None,
        }
    }
}
