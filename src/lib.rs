//! Retrofit cost and heat-demand engine for dwellings, with a small CLI front end.
//!
//! The engine modules (`typology`, `heat_demand`, `pricing`, `scenario`, `compare`)
//! are pure functions over caller-supplied records. `project`, `config`, `i18n`,
//! `report` and `app` load those records from disk and print results.

pub mod app;
pub mod cli;
pub mod compare;
pub mod config;
pub mod heat_demand;
pub mod i18n;
pub mod measure;
pub mod pricing;
pub mod project;
pub mod report;
pub mod scenario;
pub mod settings;
pub mod typology;
