use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{aggregate, CostBreakdown};
use crate::measure::Measure;
use crate::pricing::{compute_measure, ComponentResolutionError, ComputedMeasureResult, PriceCatalog};
use crate::settings::Settings;
use crate::typology::BuildingDescriptor;

/// Inputs shared by every scenario of one dwelling.
#[derive(Debug, Clone, Copy)]
pub struct CalculationContext<'a> {
    pub building: &'a BuildingDescriptor,
    pub settings: &'a Settings,
    pub catalog: &'a PriceCatalog,
}

/// A saved selection of measures for one dwelling with its computed totals.
///
/// Totals are only ever produced by [`Scenario::compute`] or
/// [`Scenario::recompute`]; both rebuild the whole snapshot from the measure list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub residence_id: String,
    pub type_id: String,
    pub name: String,
    /// Selected measures in selection order.
    pub measures: Vec<ComputedMeasureResult>,
    pub total_budget: f64,
    pub total_heat_demand: f64,
    pub labor_hours: f64,
    pub breakdown: CostBreakdown,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

struct Snapshot {
    measures: Vec<ComputedMeasureResult>,
    total_budget: f64,
    total_heat_demand: f64,
    labor_hours: f64,
    breakdown: CostBreakdown,
}

fn snapshot(
    ctx: CalculationContext<'_>,
    measures: &[&Measure],
    labor_hours_override: Option<f64>,
) -> Result<Snapshot, ComponentResolutionError> {
    let results = measures
        .iter()
        .map(|m| compute_measure(m, ctx.building, ctx.catalog))
        .collect::<Result<Vec<_>, _>>()?;
    let labor_hours =
        labor_hours_override.unwrap_or_else(|| results.iter().map(|r| r.labor_hours).sum());
    let totals = aggregate(&results, ctx.settings, ctx.building, labor_hours);
    Ok(Snapshot {
        measures: results,
        total_budget: totals.total_budget,
        total_heat_demand: totals.total_heat_demand,
        labor_hours: totals.labor_hours,
        breakdown: totals.breakdown,
    })
}

impl Scenario {
    /// Computes a new scenario. `labor_hours_override` replaces the sum of the
    /// measures' own labor hours.
    pub fn compute(
        name: impl Into<String>,
        type_id: impl Into<String>,
        ctx: CalculationContext<'_>,
        measures: &[&Measure],
        labor_hours_override: Option<f64>,
    ) -> Result<Self, ComponentResolutionError> {
        Self::compute_at(name, type_id, ctx, measures, labor_hours_override, Utc::now())
    }

    /// [`Scenario::compute`] with an explicit timestamp.
    pub fn compute_at(
        name: impl Into<String>,
        type_id: impl Into<String>,
        ctx: CalculationContext<'_>,
        measures: &[&Measure],
        labor_hours_override: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<Self, ComponentResolutionError> {
        let snap = snapshot(ctx, measures, labor_hours_override)?;
        Ok(Self {
            residence_id: ctx.building.residence_id.clone(),
            type_id: type_id.into(),
            name: name.into(),
            measures: snap.measures,
            total_budget: snap.total_budget,
            total_heat_demand: snap.total_heat_demand,
            labor_hours: snap.labor_hours,
            breakdown: snap.breakdown,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the measure set and every total. On error the scenario is unchanged.
    pub fn recompute(
        &mut self,
        ctx: CalculationContext<'_>,
        measures: &[&Measure],
        labor_hours_override: Option<f64>,
    ) -> Result<(), ComponentResolutionError> {
        self.recompute_at(ctx, measures, labor_hours_override, Utc::now())
    }

    pub fn recompute_at(
        &mut self,
        ctx: CalculationContext<'_>,
        measures: &[&Measure],
        labor_hours_override: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<(), ComponentResolutionError> {
        let snap = snapshot(ctx, measures, labor_hours_override)?;
        self.residence_id = ctx.building.residence_id.clone();
        self.measures = snap.measures;
        self.total_budget = snap.total_budget;
        self.total_heat_demand = snap.total_heat_demand;
        self.labor_hours = snap.labor_hours;
        self.breakdown = snap.breakdown;
        self.updated_at = now;
        Ok(())
    }

    pub fn measure_ids(&self) -> impl Iterator<Item = &str> {
        self.measures.iter().map(|m| m.measure_id.as_str())
    }

    pub fn measure(&self, id: &str) -> Option<&ComputedMeasureResult> {
        self.measures.iter().find(|m| m.measure_id == id)
    }
}
