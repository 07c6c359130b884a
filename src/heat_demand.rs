use crate::measure::Measure;
use crate::typology::resolve_typology;

/// Returns the heat demand of a measure for a building type and construction period.
///
/// A missing table, a missing typology entry, or no exact period match all yield 0.
/// Untracked measures contribute nothing; this is not an error.
pub fn heat_demand_value(measure: &Measure, building_type: &str, build_period: &str) -> f64 {
    let typology = resolve_typology(building_type);
    let Some(periods) = measure.periods_for(typology) else {
        return 0.0;
    };
    periods
        .iter()
        .find(|pv| pv.period == build_period)
        .map(|pv| pv.value)
        .unwrap_or(0.0)
}
