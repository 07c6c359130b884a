use serde::{Deserialize, Serialize};

/// Canonical building category used as the heat-demand lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Typology {
    /// Ground-bound housing (rijtjeshuis, twee-onder-een-kap, vrijstaand).
    Grondgebonden,
    /// Stairwell-access flat.
    Portiek,
    /// Gallery-access flat.
    #[serde(alias = "galerij")]
    Gallerij,
}

impl Typology {
    /// Key under which heat-demand tables store values for this typology.
    pub fn key(&self) -> &'static str {
        match self {
            Typology::Grondgebonden => "grondgebonden",
            Typology::Portiek => "portiek",
            Typology::Gallerij => "gallerij",
        }
    }

    /// Parses a table key. `galerij` is accepted next to the canonical `gallerij`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "grondgebonden" => Some(Typology::Grondgebonden),
            "portiek" => Some(Typology::Portiek),
            "gallerij" | "galerij" => Some(Typology::Gallerij),
            _ => None,
        }
    }
}

/// Maps a free-form building type label to a typology.
///
/// Matching is a case-insensitive substring test in fixed order: "portiek" wins
/// over "galerij"/"gallerij", and anything else (including an empty label) falls
/// back to [`Typology::Grondgebonden`].
pub fn resolve_typology(building_type_label: &str) -> Typology {
    let label = building_type_label.to_lowercase();
    if label.contains("portiek") {
        Typology::Portiek
    } else if label.contains("galerij") || label.contains("gallerij") {
        Typology::Gallerij
    } else {
        Typology::Grondgebonden
    }
}

/// Plan dimensions of a dwelling in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width_m: f64,
    pub depth_m: f64,
}

impl Dimensions {
    pub fn floor_area_m2(&self) -> f64 {
        self.width_m * self.depth_m
    }
}

/// Description of the dwelling a calculation runs for. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescriptor {
    #[serde(default)]
    pub residence_id: String,
    #[serde(default)]
    pub grondgebonden: bool,
    #[serde(default)]
    pub portiekflat: bool,
    #[serde(default)]
    pub galerieflat: bool,
    /// Free-text type label as entered by the user (e.g. "Portiekflat 4 lagen").
    #[serde(default)]
    pub type_label: String,
    /// Construction period label, e.g. "1970-1980".
    #[serde(default)]
    pub build_period: String,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    #[serde(default = "default_units")]
    pub units: u32,
    /// End-of-row or corner dwelling.
    #[serde(default)]
    pub corner: bool,
}

fn default_units() -> u32 {
    1
}

impl BuildingDescriptor {
    /// Resolves the typology from the free-text label, or from the flags when the
    /// label is blank. Flags follow the same priority as the label matcher.
    pub fn typology(&self) -> Typology {
        if !self.type_label.trim().is_empty() {
            return resolve_typology(&self.type_label);
        }
        if self.portiekflat {
            Typology::Portiek
        } else if self.galerieflat {
            Typology::Gallerij
        } else {
            Typology::Grondgebonden
        }
    }

    /// Label passed to the heat-demand selector. Blank free text is replaced by the
    /// key of the flag-derived typology so both paths resolve identically.
    pub fn type_label_or_flags(&self) -> &str {
        if self.type_label.trim().is_empty() {
            self.typology().key()
        } else {
            &self.type_label
        }
    }
}
