//! Scenario-level totals and the saved scenario snapshot.

pub mod aggregate;
pub mod profile;

pub use aggregate::{aggregate, CostBreakdown, ScenarioTotals};
pub use profile::{CalculationContext, Scenario};
