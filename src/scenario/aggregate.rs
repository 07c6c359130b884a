use serde::{Deserialize, Serialize};

use crate::pricing::ComputedMeasureResult;
use crate::settings::Settings;
use crate::typology::BuildingDescriptor;

/// Cost after each adjustment step, in application order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of measure costs
    pub raw_cost: f64,
    /// `labor_hours × hourly_labor_cost`
    pub labor_cost: f64,
    pub after_labor: f64,
    pub after_profit: f64,
    /// 0 when the building is not a corner unit.
    pub corner_correction: f64,
    pub after_corner: f64,
    pub after_inflation: f64,
    pub after_vat: f64,
}

/// Scenario totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioTotals {
    pub total_budget: f64,
    pub total_heat_demand: f64,
    pub labor_hours: f64,
    pub breakdown: CostBreakdown,
}

fn apply_percentage(value: f64, percentage: f64) -> f64 {
    value * (1.0 + percentage / 100.0)
}

/// Combines measure results into scenario totals.
///
/// Adjustments run in a fixed order: labor, profit, corner-house correction,
/// inflation, VAT. The corner correction is an additive surcharge, so it is
/// marked up by inflation and VAT but not by profit. Heat demand is a plain sum.
pub fn aggregate(
    selected: &[ComputedMeasureResult],
    settings: &Settings,
    building: &BuildingDescriptor,
    labor_hours: f64,
) -> ScenarioTotals {
    let raw_cost: f64 = selected.iter().map(|m| m.cost_value).sum();
    let labor_cost = labor_hours * settings.hourly_labor_cost;
    let after_labor = raw_cost + labor_cost;
    let after_profit = apply_percentage(after_labor, settings.profit_percentage);
    let corner_correction = if building.corner {
        settings.corner_house_correction
    } else {
        0.0
    };
    let after_corner = after_profit + corner_correction;
    let after_inflation = apply_percentage(after_corner, settings.inflation_percentage);
    let after_vat = apply_percentage(after_inflation, settings.vat_percentage);

    ScenarioTotals {
        total_budget: after_vat,
        total_heat_demand: selected.iter().map(|m| m.heat_demand_value).sum(),
        labor_hours,
        breakdown: CostBreakdown {
            raw_cost,
            labor_cost,
            after_labor,
            after_profit,
            corner_correction,
            after_corner,
            after_inflation,
            after_vat,
        },
    }
}
