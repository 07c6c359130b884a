use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global financial settings, applied once per scenario.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Labor cost [€/h]
    pub hourly_labor_cost: f64,
    /// Profit margin (%)
    pub profit_percentage: f64,
    /// VAT (%), applied last
    pub vat_percentage: f64,
    /// Inflation correction (%)
    pub inflation_percentage: f64,
    /// Flat surcharge for corner and end-of-row dwellings [€]
    pub corner_house_correction: f64,
}

/// A settings record rejected at the load boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

impl Settings {
    /// Rejects negative or non-finite values. The aggregator does not re-check.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("hourly_labor_cost", self.hourly_labor_cost),
            ("profit_percentage", self.profit_percentage),
            ("vat_percentage", self.vat_percentage),
            ("inflation_percentage", self.inflation_percentage),
            ("corner_house_correction", self.corner_house_correction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(SettingsError::Negative { field, value });
            }
        }
        Ok(())
    }
}
