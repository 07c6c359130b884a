use chrono::{TimeZone, Utc};
use woning_retrofit_toolbox::compare::{compare, compare_to_baseline};
use woning_retrofit_toolbox::measure::{Measure, PeriodValue};
use woning_retrofit_toolbox::pricing::{ComponentResolutionError, PriceCatalog, PriceComponent};
use woning_retrofit_toolbox::scenario::{CalculationContext, Scenario};
use woning_retrofit_toolbox::settings::Settings;
use woning_retrofit_toolbox::typology::{BuildingDescriptor, Dimensions};

struct Fixture {
    building: BuildingDescriptor,
    settings: Settings,
    catalog: PriceCatalog,
    dak: Measure,
    gevel: Measure,
    glas: Measure,
}

impl Fixture {
    fn new() -> Self {
        let mut dak = Measure::new("dak", "Dakisolatie");
        dak.measure_prices = vec![PriceComponent::fixed("isolatie", 50.0, "m2")];
        dak.heat_demand = Some(
            [("portiek".to_string(), vec![PeriodValue::new("1970-1980", 40.0)])]
                .into_iter()
                .collect(),
        );
        dak.labor_hours = 8.0;

        let mut gevel = Measure::new("gevel", "Gevelisolatie");
        gevel.measure_prices = vec![PriceComponent::fixed("isolatie", 30.0, "m2")];
        gevel.heat_demand = Some(
            [("portiek".to_string(), vec![PeriodValue::new("1970-1980", 25.0)])]
                .into_iter()
                .collect(),
        );
        gevel.labor_hours = 4.0;

        let mut glas = Measure::new("glas", "HR++ glas");
        glas.measure_prices = vec![PriceComponent::fixed("ruit", 4.0, "stuk")];

        Self {
            building: BuildingDescriptor {
                residence_id: "r-42".into(),
                grondgebonden: false,
                portiekflat: true,
                galerieflat: false,
                type_label: "Portiekflat".into(),
                build_period: "1970-1980".into(),
                dimensions: Dimensions {
                    width_m: 7.0,
                    depth_m: 9.0,
                },
                units: 1,
                corner: false,
            },
            settings: Settings {
                hourly_labor_cost: 50.0,
                profit_percentage: 0.0,
                vat_percentage: 0.0,
                inflation_percentage: 0.0,
                corner_house_correction: 0.0,
            },
            catalog: PriceCatalog::default()
                .with_rate("m2", 20.0)
                .with_rate("stuk", 150.0),
            dak,
            gevel,
            glas,
        }
    }

    fn ctx(&self) -> CalculationContext<'_> {
        CalculationContext {
            building: &self.building,
            settings: &self.settings,
            catalog: &self.catalog,
        }
    }
}

#[test]
fn compute_sums_measure_labor_hours() {
    let f = Fixture::new();
    let s = Scenario::compute("basis", "t1", f.ctx(), &[&f.dak, &f.gevel], None).expect("compute");
    assert_eq!(s.residence_id, "r-42");
    assert_eq!(s.labor_hours, 12.0);
    // (1000 + 600) + 12 h × 50
    assert!((s.total_budget - 2200.0).abs() < 1e-9);
    assert_eq!(s.total_heat_demand, 65.0);
    assert_eq!(s.measure_ids().collect::<Vec<_>>(), ["dak", "gevel"]);
    assert_eq!(s.created_at, s.updated_at);
}

#[test]
fn labor_override_replaces_measure_hours() {
    let f = Fixture::new();
    let s = Scenario::compute("basis", "t1", f.ctx(), &[&f.dak], Some(2.0)).expect("compute");
    assert_eq!(s.labor_hours, 2.0);
    assert!((s.total_budget - 1100.0).abs() < 1e-9);
}

#[test]
fn recompute_replaces_snapshot_and_keeps_created_at() {
    let f = Fixture::new();
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let mut s = Scenario::compute_at("basis", "t1", f.ctx(), &[&f.dak, &f.gevel], None, t0)
        .expect("compute");

    s.recompute_at(f.ctx(), &[&f.glas], None, t1).expect("recompute");
    assert_eq!(s.measure_ids().collect::<Vec<_>>(), ["glas"]);
    assert!((s.total_budget - 600.0).abs() < 1e-9);
    assert_eq!(s.total_heat_demand, 0.0);
    assert_eq!(s.labor_hours, 0.0);
    assert_eq!(s.created_at, t0);
    assert_eq!(s.updated_at, t1);
}

#[test]
fn failed_recompute_leaves_scenario_unchanged() {
    let f = Fixture::new();
    let mut broken = Measure::new("kapot", "Kapot");
    broken.measure_prices = vec![
        PriceComponent::percentage("toeslag", 10.0, "basis"),
        PriceComponent::fixed("basis", 1.0, "m2"),
    ];
    let mut s = Scenario::compute("basis", "t1", f.ctx(), &[&f.dak], None).expect("compute");
    let before = s.clone();
    let err = s.recompute(f.ctx(), &[&f.dak, &broken], None).unwrap_err();
    assert!(matches!(err, ComponentResolutionError::ForwardReference { .. }));
    assert_eq!(s, before);
}

#[test]
fn compare_with_itself_is_identical() {
    let f = Fixture::new();
    let a = Scenario::compute("a", "t1", f.ctx(), &[&f.dak, &f.gevel], None).expect("compute");
    let c = compare(&a, &a);
    assert_eq!(c.budget_delta, 0.0);
    assert_eq!(c.heat_demand_delta, 0.0);
    assert!(c.measures_only_in_a.is_empty());
    assert!(c.measures_only_in_b.is_empty());
    assert_eq!(c.measures_in_both, ["dak", "gevel"]);
    assert!(c.measure_cost_deltas.iter().all(|d| d.delta == 0.0));
    assert!(c.is_identical());
}

#[test]
fn compare_reports_signed_deltas_b_minus_a() {
    let f = Fixture::new();
    let a = Scenario::compute("a", "t1", f.ctx(), &[&f.dak, &f.gevel], None).expect("a");
    let b = Scenario::compute("b", "t1", f.ctx(), &[&f.gevel, &f.glas], None).expect("b");
    let c = compare(&a, &b);
    // a: 1600 + 600 labor, b: 1200 + 200 labor
    assert!((c.budget_delta - (1400.0 - 2200.0)).abs() < 1e-9);
    assert_eq!(c.heat_demand_delta, 25.0 - 65.0);
    assert_eq!(c.measures_only_in_a, ["dak"]);
    assert_eq!(c.measures_only_in_b, ["glas"]);
    assert_eq!(c.measures_in_both, ["gevel"]);
    assert!(!c.is_identical());

    let reverse = compare(&b, &a);
    assert_eq!(reverse.budget_delta, -c.budget_delta);
    assert_eq!(reverse.measures_only_in_a, c.measures_only_in_b);
}

#[test]
fn shared_measure_cost_delta_follows_building_change() {
    let f = Fixture::new();
    let a = Scenario::compute("a", "t1", f.ctx(), &[&f.gevel], None).expect("a");
    let mut dearer = f.catalog.clone();
    dearer.unit_rates.insert("m2".into(), 25.0);
    let ctx = CalculationContext {
        catalog: &dearer,
        ..f.ctx()
    };
    let b = Scenario::compute("b", "t1", ctx, &[&f.gevel], None).expect("b");
    let c = compare(&a, &b);
    assert_eq!(c.measure_cost_deltas.len(), 1);
    assert!((c.measure_cost_deltas[0].delta - 150.0).abs() < 1e-9);
}

#[test]
fn baseline_comparison_keeps_order() {
    let f = Fixture::new();
    let base = Scenario::compute("basis", "t1", f.ctx(), &[&f.dak], None).expect("base");
    let x = Scenario::compute("x", "t1", f.ctx(), &[&f.dak, &f.glas], None).expect("x");
    let y = Scenario::compute("y", "t1", f.ctx(), &[], None).expect("y");
    let out = compare_to_baseline(&base, &[&x, &y]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name_b, "x");
    assert_eq!(out[1].name_b, "y");
    assert_eq!(out[1].measures_only_in_a, ["dak"]);
    assert!(out[1].budget_delta < 0.0);
}
