use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rates resolved by the caller before a calculation.
///
/// `unit_rates` maps a component unit (e.g. `m2`, `stuk`) to a price per unit;
/// `additional_components` maps an add-on identifier to a flat cost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceCatalog {
    #[serde(default)]
    pub unit_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub additional_components: BTreeMap<String, f64>,
}

impl PriceCatalog {
    pub fn with_rate(mut self, unit: impl Into<String>, rate: f64) -> Self {
        self.unit_rates.insert(unit.into(), rate);
        self
    }

    pub fn with_additional(mut self, id: impl Into<String>, cost: f64) -> Self {
        self.additional_components.insert(id.into(), cost);
        self
    }

    pub fn unit_rate(&self, unit: &str) -> Option<f64> {
        self.unit_rates.get(unit).copied()
    }

    pub fn additional_cost(&self, id: &str) -> Option<f64> {
        self.additional_components.get(id).copied()
    }
}
