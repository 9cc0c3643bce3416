use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A celestial point on the wheel (planet, node or angle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Ecliptic longitude in degrees; any value, wrapped when mapped.
    pub longitude: f64,
    #[serde(default)]
    pub sign: String,
    /// Position within the sign (0-30), display only.
    #[serde(default)]
    pub degree: f64,
    #[serde(default)]
    pub house: u8,
    #[serde(default)]
    pub retrograde: bool,
}

/// Start angle of one house's spoke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub longitude: f64,
}

/// An unordered relationship between two bodies, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: String,
    pub planet2: String,
    /// Aspect kind: "conjunction", "trine", etc.
    pub aspect: String,
    /// Deviation from exact, informational only
    #[serde(default)]
    pub orb: f64,
}

/// Read-only chart snapshot handed to the rendering core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub planets: Vec<Body>,
    #[serde(default)]
    pub houses: BTreeMap<String, HouseCusp>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

impl ChartData {
    /// True when there is nothing to place on the wheel
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Find a body by its exact name
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.planets.iter().find(|b| b.name == name)
    }

    /// House cusps that resolve to houses 1-12, ordered by house number.
    ///
    /// Unresolvable keys are skipped; when two keys name the same house the
    /// first one in key order wins.
    pub fn house_cusps(&self) -> Vec<(u8, f64)> {
        let mut cusps: Vec<(u8, f64)> = Vec::with_capacity(12);
        for (key, cusp) in &self.houses {
            let Some(num) = parse_house_key(key) else {
                log::debug!("Skipping house cusp with unrecognized key {:?}", key);
                continue;
            };
            if cusps.iter().any(|(n, _)| *n == num) {
                log::debug!("Skipping duplicate cusp for house {} ({:?})", num, key);
                continue;
            }
            cusps.push((num, cusp.longitude));
        }
        cusps.sort_by_key(|(num, _)| *num);
        cusps
    }
}

/// Resolve a house map key ("1", "house1", "House 1", "h1") to 1-12.
pub fn parse_house_key(key: &str) -> Option<u8> {
    let digits = key
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let num = digits.parse::<u8>().ok()?;
    (1..=12).contains(&num).then_some(num)
}
