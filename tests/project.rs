use std::fs;
use std::path::Path;

use woning_retrofit_toolbox::measure::MeasureError;
use woning_retrofit_toolbox::pricing::{ComponentKind, QuantityBasis};
use woning_retrofit_toolbox::project::{self, Project, ProjectError};
use woning_retrofit_toolbox::settings::SettingsError;
use woning_retrofit_toolbox::typology::Typology;

const DEMO: &str = include_str!("../demos/portiekflat.toml");

fn assert_close(label: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-6 * expected.abs().max(1.0),
        "{label} expected {expected:.6} got {actual:.6}"
    );
}

#[test]
fn demo_project_parses_with_tagged_components() {
    let p = Project::parse(DEMO).expect("parse");
    assert_eq!(p.building.typology(), Typology::Portiek);
    assert_eq!(p.building.dimensions.floor_area_m2(), 60.0);
    assert_eq!(p.measures.len(), 3);
    assert_eq!(p.scenarios.len(), 2);

    let dak = p.find_measure("dakisolatie").expect("dak");
    assert_eq!(
        dak.measure_prices[0].kind,
        ComponentKind::Fixed {
            quantity: 1.0,
            unit: "m2".into(),
            basis: QuantityBasis::FloorArea,
        }
    );
    assert_eq!(dak.measure_prices[1].reference(), Some("isolatieplaat"));

    let glas = p.find_measure("hr-glas").expect("glas");
    assert!(glas.heat_demand.is_none());
    assert!(matches!(
        glas.measure_prices[0].kind,
        ComponentKind::Fixed { basis: QuantityBasis::Fixed, .. }
    ));
}

#[test]
fn demo_measures_compute() {
    let p = Project::parse(DEMO).expect("parse");
    let results = p.compute_measures().expect("measures");

    let plaat = 60.0 * 45.0;
    assert_close("dak cost", results[0].cost_value, plaat * 1.125 + 750.0);
    assert_eq!(results[0].heat_demand_value, 42.0);
    assert_eq!(results[0].labor_hours, 6.0);

    let gevel = 2.7 * 6.0 * 18.0;
    assert_close("gevel cost", results[1].cost_value, gevel * 1.2);
    assert_eq!(results[1].heat_demand_value, 28.0);

    assert_close("glas cost", results[2].cost_value, 1280.0);
    assert_eq!(results[2].heat_demand_value, 0.0);
}

#[test]
fn demo_scenarios_compute() {
    let p = Project::parse(DEMO).expect("parse");
    let basis = p.compute_named("basis").expect("basis");
    let dak = 60.0 * 45.0 * 1.125 + 750.0;
    let expected = (dak + 6.0 * 55.0) * 1.10 * 1.02 * 1.21;
    assert_close("basis budget", basis.total_budget, expected);
    assert_eq!(basis.type_id, "portiek-1970");
    assert_eq!(basis.residence_id, "utrecht-kanaleneiland-12");

    let schil = p.compute_named("schil").expect("schil");
    assert_eq!(schil.labor_hours, 20.0);
    assert_eq!(schil.total_heat_demand, 70.0);

    assert_eq!(p.compute_all().expect("all").len(), 2);
    assert!(matches!(
        p.compute_named("ontbreekt"),
        Err(ProjectError::UnknownScenario(name)) if name == "ontbreekt"
    ));
}

#[test]
fn negative_settings_are_rejected() {
    let src = DEMO.replace("vat_percentage = 21.0", "vat_percentage = -21.0");
    assert!(matches!(
        Project::parse(&src),
        Err(ProjectError::Settings(SettingsError::Negative { field: "vat_percentage", .. }))
    ));
}

#[test]
fn scenario_with_unknown_measure_is_rejected() {
    let src = DEMO.replace(
        r#"measures = ["dakisolatie"]"#,
        r#"measures = ["dakisolatie", "zonnepanelen"]"#,
    );
    assert!(matches!(
        Project::parse(&src),
        Err(ProjectError::UnknownMeasure { measure, .. }) if measure == "zonnepanelen"
    ));
}

#[test]
fn scenario_selecting_a_measure_twice_is_rejected() {
    let src = DEMO.replace(
        r#"measures = ["dakisolatie"]"#,
        r#"measures = ["dakisolatie", "dakisolatie"]"#,
    );
    assert!(matches!(
        Project::parse(&src),
        Err(ProjectError::DuplicateSelection { scenario, measure })
            if scenario == "basis" && measure == "dakisolatie"
    ));

    let project = Project::parse(DEMO).expect("demo");
    let mut selection = project.selection("schil").expect("schil").clone();
    selection.measures.push("hr-glas".into());
    assert!(matches!(
        project.compute_scenario(&selection),
        Err(ProjectError::DuplicateSelection { measure, .. }) if measure == "hr-glas"
    ));
}

#[test]
fn duplicate_period_is_rejected() {
    let src = DEMO.replace(
        r#"{ period = "1980-1990", value = 30.0 }"#,
        r#"{ period = "1970-1980", value = 30.0 }"#,
    );
    assert!(matches!(
        Project::parse(&src),
        Err(ProjectError::Measure(MeasureError::DuplicatePeriod { .. }))
    ));
}

#[test]
fn unknown_component_type_fails_to_parse() {
    let src = DEMO.replace(r#"type = "percentage""#, r#"type = "formula""#);
    assert!(matches!(Project::parse(&src), Err(ProjectError::Parse(_))));
}

#[test]
fn load_reads_from_disk_and_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("project.toml");
    fs::write(&path, DEMO).expect("write");
    let p = project::load(&path).expect("load");
    assert_eq!(p.building.build_period, "1970-1980");

    let missing = project::load(Path::new("/nonexistent/project.toml"));
    assert!(matches!(missing, Err(ProjectError::Io { .. })));
}
