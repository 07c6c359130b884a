use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::PriceComponent;
use crate::typology::Typology;

/// Heat demand for one construction period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    /// Period label, e.g. "1970-1980". Matched by exact string equality.
    pub period: String,
    /// Heat demand [kWh/m²·year]
    pub value: f64,
}

impl PeriodValue {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// Heat-demand table keyed by typology key (`grondgebonden`, `portiek`, `gallerij`).
pub type HeatDemandTable = BTreeMap<String, Vec<PeriodValue>>;

/// A retrofit measure as authored in the measure catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_demand: Option<HeatDemandTable>,
    /// Price components in declaration order.
    #[serde(default)]
    pub measure_prices: Vec<PriceComponent>,
    /// Identifiers of flat add-on costs in the price catalog.
    #[serde(default)]
    pub additional_components: Vec<String>,
    /// Labor hours per dwelling unit.
    #[serde(default)]
    pub labor_hours: f64,
}

/// Structural problems in a measure record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("measure has an empty id")]
    EmptyId,
    #[error("measure '{measure}': unknown typology key '{key}' in heat-demand table")]
    UnknownTypology { measure: String, key: String },
    #[error("measure '{measure}': typology key '{key}' repeats a typology already in the heat-demand table")]
    DuplicateTypology { measure: String, key: String },
    #[error("measure '{measure}': period '{period}' listed twice for typology '{typology}'")]
    DuplicatePeriod {
        measure: String,
        typology: String,
        period: String,
    },
}

impl Measure {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: String::new(),
            heat_demand: None,
            measure_prices: Vec::new(),
            additional_components: Vec::new(),
            labor_hours: 0.0,
        }
    }

    /// Periods for a typology, or `None` when the table or the entry is missing.
    pub fn periods_for(&self, typology: Typology) -> Option<&[PeriodValue]> {
        self.heat_demand
            .as_ref()?
            .iter()
            .find(|(key, _)| Typology::from_key(key) == Some(typology))
            .map(|(_, periods)| periods.as_slice())
    }

    /// Checks the record before it enters a calculation.
    ///
    /// Price components are checked separately by the evaluator because their
    /// errors depend on the catalog.
    pub fn validate(&self) -> Result<(), MeasureError> {
        if self.id.trim().is_empty() {
            return Err(MeasureError::EmptyId);
        }
        let Some(table) = &self.heat_demand else {
            return Ok(());
        };
        let mut typologies = HashSet::new();
        for (key, periods) in table {
            let Some(typology) = Typology::from_key(key) else {
                return Err(MeasureError::UnknownTypology {
                    measure: self.id.clone(),
                    key: key.clone(),
                });
            };
            if !typologies.insert(typology) {
                return Err(MeasureError::DuplicateTypology {
                    measure: self.id.clone(),
                    key: key.clone(),
                });
            }
            let mut seen = HashSet::new();
            for pv in periods {
                if !seen.insert(pv.period.as_str()) {
                    return Err(MeasureError::DuplicatePeriod {
                        measure: self.id.clone(),
                        typology: key.clone(),
                        period: pv.period.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
