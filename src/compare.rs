use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// Cost difference of a measure selected in both scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureCostDelta {
    pub measure_id: String,
    pub cost_a: f64,
    pub cost_b: f64,
    /// `cost_b - cost_a`
    pub delta: f64,
}

/// Side-by-side difference of two scenarios. Deltas are `b - a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub name_a: String,
    pub name_b: String,
    pub budget_delta: f64,
    pub heat_demand_delta: f64,
    pub measures_only_in_a: Vec<String>,
    pub measures_only_in_b: Vec<String>,
    pub measures_in_both: Vec<String>,
    pub measure_cost_deltas: Vec<MeasureCostDelta>,
}

impl ScenarioComparison {
    /// True when both scenarios have the same totals and measure set.
    pub fn is_identical(&self) -> bool {
        self.budget_delta == 0.0
            && self.heat_demand_delta == 0.0
            && self.measures_only_in_a.is_empty()
            && self.measures_only_in_b.is_empty()
    }
}

/// Compares two scenarios. Measure lists are sorted by id.
pub fn compare(a: &Scenario, b: &Scenario) -> ScenarioComparison {
    let ids_a: BTreeSet<&str> = a.measure_ids().collect();
    let ids_b: BTreeSet<&str> = b.measure_ids().collect();

    let measures_in_both: Vec<String> =
        ids_a.intersection(&ids_b).map(|s| s.to_string()).collect();

    let measure_cost_deltas = measures_in_both
        .iter()
        .filter_map(|id| {
            let cost_a = a.measure(id)?.cost_value;
            let cost_b = b.measure(id)?.cost_value;
            Some(MeasureCostDelta {
                measure_id: id.clone(),
                cost_a,
                cost_b,
                delta: cost_b - cost_a,
            })
        })
        .collect();

    ScenarioComparison {
        name_a: a.name.clone(),
        name_b: b.name.clone(),
        budget_delta: b.total_budget - a.total_budget,
        heat_demand_delta: b.total_heat_demand - a.total_heat_demand,
        measures_only_in_a: ids_a.difference(&ids_b).map(|s| s.to_string()).collect(),
        measures_only_in_b: ids_b.difference(&ids_a).map(|s| s.to_string()).collect(),
        measures_in_both,
        measure_cost_deltas,
    }
}

/// Compares each scenario in `others` against `baseline`, in order.
pub fn compare_to_baseline(baseline: &Scenario, others: &[&Scenario]) -> Vec<ScenarioComparison> {
    others.iter().map(|other| compare(baseline, other)).collect()
}
