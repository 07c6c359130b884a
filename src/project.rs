//! TOML project file: the dwelling, settings, price catalog, measure records and
//! named measure selections that the surrounding application would normally supply.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measure::{Measure, MeasureError};
use crate::pricing::{compute_measure, ComponentResolutionError, ComputedMeasureResult, PriceCatalog};
use crate::scenario::{CalculationContext, Scenario};
use crate::settings::{Settings, SettingsError};
use crate::typology::BuildingDescriptor;

/// A named selection of measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSelection {
    pub name: String,
    #[serde(default)]
    pub type_id: String,
    /// Measure ids in selection order.
    pub measures: Vec<String>,
    /// Replaces the summed labor hours of the selected measures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_hours: Option<f64>,
}

impl ScenarioSelection {
    /// Each measure may appear once; a repeat would be counted twice in the totals.
    fn check_unique(&self) -> Result<(), ProjectError> {
        let mut seen = HashSet::new();
        match self.measures.iter().find(|id| !seen.insert(id.as_str())) {
            Some(id) => Err(ProjectError::DuplicateSelection {
                scenario: self.name.clone(),
                measure: id.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub building: BuildingDescriptor,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub catalog: PriceCatalog,
    #[serde(default)]
    pub measures: Vec<Measure>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioSelection>,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("project parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid measure: {0}")]
    Measure(#[from] MeasureError),
    #[error("measure '{0}' is defined twice")]
    DuplicateMeasure(String),
    #[error("scenario '{0}' is defined twice")]
    DuplicateScenario(String),
    #[error("scenario '{scenario}' selects unknown measure '{measure}'")]
    UnknownMeasure { scenario: String, measure: String },
    #[error("scenario '{scenario}' selects measure '{measure}' more than once")]
    DuplicateSelection { scenario: String, measure: String },
    #[error("no scenario named '{0}'")]
    UnknownScenario(String),
    #[error(transparent)]
    Component(#[from] ComponentResolutionError),
}

/// Reads and validates a project file.
pub fn load(path: &Path) -> Result<Project, ProjectError> {
    let content = fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let project = Project::parse(&content)?;
    log::debug!(
        "loaded project {}: {} measures, {} scenarios",
        path.display(),
        project.measures.len(),
        project.scenarios.len()
    );
    Ok(project)
}

impl Project {
    /// Parses a project from TOML text and validates it.
    pub fn parse(src: &str) -> Result<Self, ProjectError> {
        let project: Project = toml::from_str(src)?;
        project.validate()?;
        Ok(project)
    }

    /// Checks settings, measure records and scenario references.
    ///
    /// A selection must reference known measures, each at most once.
    ///
    /// Price components are not checked here; their errors surface when a measure
    /// is computed.
    pub fn validate(&self) -> Result<(), ProjectError> {
        self.settings.validate()?;

        let mut ids = HashSet::new();
        for m in &self.measures {
            m.validate()?;
            if !ids.insert(m.id.as_str()) {
                return Err(ProjectError::DuplicateMeasure(m.id.clone()));
            }
        }

        let mut names = HashSet::new();
        for s in &self.scenarios {
            if !names.insert(s.name.as_str()) {
                return Err(ProjectError::DuplicateScenario(s.name.clone()));
            }
            if let Some(missing) = s.measures.iter().find(|id| !ids.contains(id.as_str())) {
                return Err(ProjectError::UnknownMeasure {
                    scenario: s.name.clone(),
                    measure: missing.clone(),
                });
            }
            s.check_unique()?;
        }
        Ok(())
    }

    pub fn context(&self) -> CalculationContext<'_> {
        CalculationContext {
            building: &self.building,
            settings: &self.settings,
            catalog: &self.catalog,
        }
    }

    pub fn find_measure(&self, id: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.id == id)
    }

    pub fn selection(&self, name: &str) -> Result<&ScenarioSelection, ProjectError> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ProjectError::UnknownScenario(name.to_string()))
    }

    /// Computes every measure in the project on the project's building.
    pub fn compute_measures(&self) -> Result<Vec<ComputedMeasureResult>, ProjectError> {
        self.measures
            .iter()
            .map(|m| compute_measure(m, &self.building, &self.catalog).map_err(ProjectError::from))
            .collect()
    }

    /// Computes one selection into a scenario snapshot.
    pub fn compute_scenario(&self, selection: &ScenarioSelection) -> Result<Scenario, ProjectError> {
        selection.check_unique()?;
        let measures = selection
            .measures
            .iter()
            .map(|id| {
                self.find_measure(id).ok_or_else(|| ProjectError::UnknownMeasure {
                    scenario: selection.name.clone(),
                    measure: id.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let scenario = Scenario::compute(
            selection.name.clone(),
            selection.type_id.clone(),
            self.context(),
            &measures,
            selection.labor_hours,
        )?;
        log::debug!(
            "scenario '{}': budget {:.2}, heat demand {:.2}",
            scenario.name,
            scenario.total_budget,
            scenario.total_heat_demand
        );
        Ok(scenario)
    }

    /// Computes a selection looked up by name.
    pub fn compute_named(&self, name: &str) -> Result<Scenario, ProjectError> {
        self.compute_scenario(self.selection(name)?)
    }

    pub fn compute_all(&self) -> Result<Vec<Scenario>, ProjectError> {
        self.scenarios
            .iter()
            .map(|s| self.compute_scenario(s))
            .collect()
    }
}
