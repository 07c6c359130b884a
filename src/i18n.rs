use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// String keys used by the report printer.
pub mod keys {
    pub const MEASURES_HEADING: &str = "measures.heading";
    pub const MEASURES_BUILDING: &str = "measures.building";
    pub const MEASURE_HEAT_DEMAND: &str = "measure.heat_demand";
    pub const MEASURE_COST: &str = "measure.cost";
    pub const MEASURE_LABOR_HOURS: &str = "measure.labor_hours";

    pub const SCENARIO_HEADING: &str = "scenario.heading";
    pub const SCENARIO_MEASURES: &str = "scenario.measures";
    pub const SCENARIO_RAW_COST: &str = "scenario.raw_cost";
    pub const SCENARIO_LABOR: &str = "scenario.labor";
    pub const SCENARIO_AFTER_PROFIT: &str = "scenario.after_profit";
    pub const SCENARIO_CORNER: &str = "scenario.corner";
    pub const SCENARIO_AFTER_INFLATION: &str = "scenario.after_inflation";
    pub const SCENARIO_TOTAL_BUDGET: &str = "scenario.total_budget";
    pub const SCENARIO_TOTAL_HEAT_DEMAND: &str = "scenario.total_heat_demand";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_BUDGET_DELTA: &str = "compare.budget_delta";
    pub const COMPARE_HEAT_DEMAND_DELTA: &str = "compare.heat_demand_delta";
    pub const COMPARE_ONLY_IN: &str = "compare.only_in";
    pub const COMPARE_IN_BOTH: &str = "compare.in_both";
    pub const COMPARE_IDENTICAL: &str = "compare.identical";
    pub const COMPARE_NONE: &str = "compare.none";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Nl,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("nl") {
            Language::Nl
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::En => "en",
        }
    }
}

/// Runtime string bundle.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Unknown codes fall back to English.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Like [`Translator::new`], additionally loading `<pack_dir>/<lang>.toml`.
    /// A missing directory or file leaves only the built-in strings.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn has_overrides(&self) -> bool {
        self.overrides.is_some()
    }

    /// Looks up a key. Missing Dutch strings fall back to English, unknown keys to
    /// the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin = match self.lang {
            Language::Nl => nl(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }
}

/// Picks the language from the CLI flag, then the config, then the system locale.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("nl") => Some("nl".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "nl" => Some("nl".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Guesses the language from the system locale or `LANG`/`LC_ALL`.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// Loads a flat or nested TOML string table from `<dir>/<lang>.toml`.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", Language::from_code(lang).as_code()));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        MEASURES_HEADING => "-- Measures --",
        MEASURES_BUILDING => "Building:",
        MEASURE_HEAT_DEMAND => "heat demand",
        MEASURE_COST => "cost",
        MEASURE_LABOR_HOURS => "labor hours",
        SCENARIO_HEADING => "-- Scenario --",
        SCENARIO_MEASURES => "Measures:",
        SCENARIO_RAW_COST => "Measure costs:",
        SCENARIO_LABOR => "Labor:",
        SCENARIO_AFTER_PROFIT => "After profit margin:",
        SCENARIO_CORNER => "Corner-house correction:",
        SCENARIO_AFTER_INFLATION => "After inflation:",
        SCENARIO_TOTAL_BUDGET => "Total budget (incl. VAT):",
        SCENARIO_TOTAL_HEAT_DEMAND => "Total heat demand:",
        COMPARE_HEADING => "-- Comparison --",
        COMPARE_BUDGET_DELTA => "Budget difference:",
        COMPARE_HEAT_DEMAND_DELTA => "Heat-demand difference:",
        COMPARE_ONLY_IN => "Only in",
        COMPARE_IN_BOTH => "In both:",
        COMPARE_IDENTICAL => "Scenarios are identical.",
        COMPARE_NONE => "(none)",
        _ => return None,
    })
}

fn nl(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        MEASURES_HEADING => "-- Maatregelen --",
        MEASURES_BUILDING => "Woning:",
        MEASURE_HEAT_DEMAND => "warmtevraag",
        MEASURE_COST => "kosten",
        MEASURE_LABOR_HOURS => "arbeidsuren",
        SCENARIO_HEADING => "-- Scenario --",
        SCENARIO_MEASURES => "Maatregelen:",
        SCENARIO_RAW_COST => "Kosten maatregelen:",
        SCENARIO_LABOR => "Arbeid:",
        SCENARIO_AFTER_PROFIT => "Na winstopslag:",
        SCENARIO_CORNER => "Hoekwoningcorrectie:",
        SCENARIO_AFTER_INFLATION => "Na indexering:",
        SCENARIO_TOTAL_BUDGET => "Totaal budget (incl. btw):",
        SCENARIO_TOTAL_HEAT_DEMAND => "Totale warmtevraag:",
        COMPARE_HEADING => "-- Vergelijking --",
        COMPARE_BUDGET_DELTA => "Verschil budget:",
        COMPARE_HEAT_DEMAND_DELTA => "Verschil warmtevraag:",
        COMPARE_ONLY_IN => "Alleen in",
        COMPARE_IN_BOTH => "In beide:",
        COMPARE_IDENTICAL => "Scenario's zijn gelijk.",
        COMPARE_NONE => "(geen)",
        _ => return None,
    })
}
