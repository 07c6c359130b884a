use std::fmt::Write;

use crate::compare::ScenarioComparison;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::pricing::ComputedMeasureResult;
use crate::scenario::Scenario;
use crate::typology::BuildingDescriptor;

/// Number formatting shared by all report sections.
pub struct Formatter<'a> {
    tr: &'a Translator,
    currency: &'a str,
    decimals: usize,
}

impl<'a> Formatter<'a> {
    pub fn new(tr: &'a Translator, cfg: &'a Config) -> Self {
        Self {
            tr,
            currency: &cfg.currency_symbol,
            decimals: cfg.decimals,
        }
    }

    fn money(&self, value: f64) -> String {
        format!("{} {:.*}", self.currency, self.decimals, value)
    }

    fn signed_money(&self, value: f64) -> String {
        format!("{} {:+.*}", self.currency, self.decimals, value)
    }

    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }

    /// Per-measure results for one building.
    pub fn measures(&self, building: &BuildingDescriptor, results: &[ComputedMeasureResult]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.tr.t(keys::MEASURES_HEADING));
        let _ = writeln!(
            out,
            "{} {} ({}), {}",
            self.tr.t(keys::MEASURES_BUILDING),
            building.type_label_or_flags(),
            building.typology().key(),
            building.build_period
        );
        for r in results {
            let _ = writeln!(
                out,
                "  {}: {} {}, {} {}, {} {}",
                r.measure_id,
                self.tr.t(keys::MEASURE_HEAT_DEMAND),
                self.number(r.heat_demand_value),
                self.tr.t(keys::MEASURE_COST),
                self.money(r.cost_value),
                self.tr.t(keys::MEASURE_LABOR_HOURS),
                self.number(r.labor_hours)
            );
            for c in &r.cost_breakdown {
                let _ = writeln!(out, "      {:<24} {}", c.component_name, self.money(c.amount));
            }
        }
        out
    }

    /// Totals and the adjustment steps of one scenario.
    pub fn scenario(&self, s: &Scenario) -> String {
        let b = &s.breakdown;
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.tr.t(keys::SCENARIO_HEADING), s.name);
        let ids: Vec<&str> = s.measure_ids().collect();
        let _ = writeln!(out, "{} {}", self.tr.t(keys::SCENARIO_MEASURES), ids.join(", "));
        let rows = [
            (keys::SCENARIO_RAW_COST, b.raw_cost),
            (keys::SCENARIO_LABOR, b.labor_cost),
            (keys::SCENARIO_AFTER_PROFIT, b.after_profit),
            (keys::SCENARIO_CORNER, b.corner_correction),
            (keys::SCENARIO_AFTER_INFLATION, b.after_inflation),
            (keys::SCENARIO_TOTAL_BUDGET, s.total_budget),
        ];
        for (key, value) in rows {
            let _ = writeln!(out, "  {:<28} {}", self.tr.t(key), self.money(value));
        }
        let _ = writeln!(
            out,
            "  {:<28} {}",
            self.tr.t(keys::SCENARIO_TOTAL_HEAT_DEMAND),
            self.number(s.total_heat_demand)
        );
        out
    }

    pub fn comparison(&self, c: &ScenarioComparison) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} → {}",
            self.tr.t(keys::COMPARE_HEADING),
            c.name_a,
            c.name_b
        );
        if c.is_identical() {
            let _ = writeln!(out, "  {}", self.tr.t(keys::COMPARE_IDENTICAL));
        }
        let _ = writeln!(
            out,
            "  {} {}",
            self.tr.t(keys::COMPARE_BUDGET_DELTA),
            self.signed_money(c.budget_delta)
        );
        let _ = writeln!(
            out,
            "  {} {:+.*}",
            self.tr.t(keys::COMPARE_HEAT_DEMAND_DELTA),
            self.decimals,
            c.heat_demand_delta
        );
        let list = |ids: &[String]| {
            if ids.is_empty() {
                self.tr.t(keys::COMPARE_NONE).to_string()
            } else {
                ids.join(", ")
            }
        };
        let only_in = self.tr.t(keys::COMPARE_ONLY_IN);
        let _ = writeln!(out, "  {only_in} {}: {}", c.name_a, list(&c.measures_only_in_a));
        let _ = writeln!(out, "  {only_in} {}: {}", c.name_b, list(&c.measures_only_in_b));
        let _ = writeln!(out, "  {} {}", self.tr.t(keys::COMPARE_IN_BOTH), list(&c.measures_in_both));
        for d in c.measure_cost_deltas.iter().filter(|d| d.delta != 0.0) {
            let _ = writeln!(out, "      {:<24} {}", d.measure_id, self.signed_money(d.delta));
        }
        out
    }
}
