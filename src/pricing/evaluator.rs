use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::PriceCatalog;
use super::component::{ComponentKind, PriceComponent};
use crate::heat_demand::heat_demand_value;
use crate::measure::Measure;
use crate::typology::BuildingDescriptor;

/// A price definition that cannot be evaluated. Never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentResolutionError {
    #[error("measure '{measure}': component '{component}' is declared twice")]
    DuplicateComponent { measure: String, component: String },
    #[error("measure '{measure}': component '{component}' references itself")]
    SelfReference { measure: String, component: String },
    #[error("measure '{measure}': component '{component}' references unknown component '{reference}'")]
    UnknownReference {
        measure: String,
        component: String,
        reference: String,
    },
    #[error("measure '{measure}': component '{component}' references '{reference}' which is declared later")]
    ForwardReference {
        measure: String,
        component: String,
        reference: String,
    },
    #[error("measure '{measure}': component '{component}' uses unit '{unit}' with no rate in the catalog")]
    UnknownUnit {
        measure: String,
        component: String,
        unit: String,
    },
    #[error("measure '{measure}': additional component '{id}' is not in the catalog")]
    UnknownAdditionalComponent { measure: String, id: String },
}

/// Amount contributed by one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentAmount {
    pub component_name: String,
    pub amount: f64,
}

/// Heat demand and cost of one measure on one building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedMeasureResult {
    pub measure_id: String,
    pub heat_demand_value: f64,
    pub cost_value: f64,
    /// Price components in declaration order, followed by additional components.
    pub cost_breakdown: Vec<ComponentAmount>,
    pub labor_hours: f64,
}

/// Checks that every percentage component references a component declared before it.
fn check_component_order(
    measure_id: &str,
    components: &[PriceComponent],
) -> Result<(), ComponentResolutionError> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(components.len());
    for (index, c) in components.iter().enumerate() {
        if positions.insert(c.name.as_str(), index).is_some() {
            return Err(ComponentResolutionError::DuplicateComponent {
                measure: measure_id.to_string(),
                component: c.name.clone(),
            });
        }
    }

    for (index, c) in components.iter().enumerate() {
        let Some(reference) = c.reference() else {
            continue;
        };
        match positions.get(reference) {
            None => {
                return Err(ComponentResolutionError::UnknownReference {
                    measure: measure_id.to_string(),
                    component: c.name.clone(),
                    reference: reference.to_string(),
                })
            }
            Some(&pos) if pos == index => {
                return Err(ComponentResolutionError::SelfReference {
                    measure: measure_id.to_string(),
                    component: c.name.clone(),
                })
            }
            Some(&pos) if pos > index => {
                return Err(ComponentResolutionError::ForwardReference {
                    measure: measure_id.to_string(),
                    component: c.name.clone(),
                    reference: reference.to_string(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Evaluates a measure's price components in declaration order.
///
/// The component graph is checked first, so a forward or dangling reference is
/// reported before any amount is computed.
pub fn evaluate_components(
    measure: &Measure,
    building: &BuildingDescriptor,
    catalog: &PriceCatalog,
) -> Result<Vec<ComponentAmount>, ComponentResolutionError> {
    check_component_order(&measure.id, &measure.measure_prices)?;

    let mut amounts: HashMap<&str, f64> = HashMap::with_capacity(measure.measure_prices.len());
    let mut out = Vec::with_capacity(measure.measure_prices.len());
    for c in &measure.measure_prices {
        let amount = match &c.kind {
            ComponentKind::Fixed {
                quantity,
                unit,
                basis,
            } => {
                let rate = catalog.unit_rate(unit).ok_or_else(|| {
                    ComponentResolutionError::UnknownUnit {
                        measure: measure.id.clone(),
                        component: c.name.clone(),
                        unit: unit.clone(),
                    }
                })?;
                quantity * basis.factor(building) * rate
            }
            ComponentKind::Percentage { percentage, of } => {
                // present after check_component_order
                let base = amounts.get(of.as_str()).copied().ok_or_else(|| {
                    ComponentResolutionError::ForwardReference {
                        measure: measure.id.clone(),
                        component: c.name.clone(),
                        reference: of.clone(),
                    }
                })?;
                percentage / 100.0 * base
            }
        };
        amounts.insert(c.name.as_str(), amount);
        out.push(ComponentAmount {
            component_name: c.name.clone(),
            amount,
        });
    }
    Ok(out)
}

/// Evaluates components and appends the measure's additional components.
pub fn measure_cost(
    measure: &Measure,
    building: &BuildingDescriptor,
    catalog: &PriceCatalog,
) -> Result<Vec<ComponentAmount>, ComponentResolutionError> {
    let mut breakdown = evaluate_components(measure, building, catalog)?;
    for id in &measure.additional_components {
        let amount = catalog.additional_cost(id).ok_or_else(|| {
            ComponentResolutionError::UnknownAdditionalComponent {
                measure: measure.id.clone(),
                id: id.clone(),
            }
        })?;
        breakdown.push(ComponentAmount {
            component_name: id.clone(),
            amount,
        });
    }
    Ok(breakdown)
}

/// Computes heat demand, cost and labor hours of one measure on one building.
pub fn compute_measure(
    measure: &Measure,
    building: &BuildingDescriptor,
    catalog: &PriceCatalog,
) -> Result<ComputedMeasureResult, ComponentResolutionError> {
    let cost_breakdown = measure_cost(measure, building, catalog)?;
    let cost_value = cost_breakdown.iter().map(|c| c.amount).sum();
    Ok(ComputedMeasureResult {
        measure_id: measure.id.clone(),
        heat_demand_value: heat_demand_value(
            measure,
            building.type_label_or_flags(),
            &building.build_period,
        ),
        cost_value,
        cost_breakdown,
        labor_hours: measure.labor_hours * f64::from(building.units),
    })
}
