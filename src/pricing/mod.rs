//! Price composition for retrofit measures: component definitions, the resolved
//! price catalog, and the evaluator that turns both into amounts.

pub mod catalog;
pub mod component;
pub mod evaluator;

pub use catalog::PriceCatalog;
pub use component::{ComponentKind, PriceComponent, QuantityBasis};
pub use evaluator::{
    compute_measure, evaluate_components, measure_cost, ComponentAmount,
    ComponentResolutionError, ComputedMeasureResult,
};
