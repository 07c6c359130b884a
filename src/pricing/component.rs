use serde::{Deserialize, Serialize};

use crate::typology::BuildingDescriptor;

/// What a fixed component's quantity is multiplied by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityBasis {
    /// Quantity as given.
    #[default]
    Fixed,
    /// Per m² of floor area (width × depth).
    FloorArea,
    /// Per metre of frontage (width).
    Frontage,
    /// Per dwelling unit.
    Units,
}

impl QuantityBasis {
    /// Multiplier for this basis on the given building.
    pub fn factor(&self, building: &BuildingDescriptor) -> f64 {
        match self {
            QuantityBasis::Fixed => 1.0,
            QuantityBasis::FloorArea => building.dimensions.floor_area_m2(),
            QuantityBasis::Frontage => building.dimensions.width_m,
            QuantityBasis::Units => f64::from(building.units),
        }
    }
}

/// How a component's amount is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentKind {
    /// `quantity × basis factor × catalog rate for unit`
    Fixed {
        quantity: f64,
        unit: String,
        #[serde(default)]
        basis: QuantityBasis,
    },
    /// `percentage / 100 × amount of component `of``. `of` must be declared earlier.
    Percentage { percentage: f64, of: String },
}

/// One named entry of a measure's `measure_prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComponent {
    pub name: String,
    #[serde(flatten)]
    pub kind: ComponentKind,
}

impl PriceComponent {
    pub fn fixed(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::Fixed {
                quantity,
                unit: unit.into(),
                basis: QuantityBasis::Fixed,
            },
        }
    }

    pub fn fixed_per(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        basis: QuantityBasis,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::Fixed {
                quantity,
                unit: unit.into(),
                basis,
            },
        }
    }

    pub fn percentage(name: impl Into<String>, percentage: f64, of: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::Percentage {
                percentage,
                of: of.into(),
            },
        }
    }

    /// Name of the component this one depends on, if any.
    pub fn reference(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::Fixed { .. } => None,
            ComponentKind::Percentage { of, .. } => Some(of.as_str()),
        }
    }
}
