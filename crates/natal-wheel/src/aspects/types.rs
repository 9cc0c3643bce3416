use serde::{Deserialize, Serialize};

use crate::rendering::primitives::Point;

/// Aspect kinds the wheel knows how to encode
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    /// Anything else, kept verbatim
    Other(String),
}

impl AspectKind {
    /// Case-insensitive lookup; never fails
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "conjunction" => AspectKind::Conjunction,
            "opposition" => AspectKind::Opposition,
            "trine" => AspectKind::Trine,
            "square" => AspectKind::Square,
            "sextile" => AspectKind::Sextile,
            _ => AspectKind::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
            AspectKind::Other(name) => name,
        }
    }

    pub fn tone(&self) -> AspectTone {
        match self {
            AspectKind::Trine | AspectKind::Conjunction => AspectTone::Harmonious,
            AspectKind::Square | AspectKind::Opposition => AspectTone::Tense,
            AspectKind::Sextile | AspectKind::Other(_) => AspectTone::Neutral,
        }
    }

    /// Only the minor neutral kinds are dashed; unknown kinds stay solid.
    pub fn is_dashed(&self) -> bool {
        matches!(self, AspectKind::Sextile)
    }
}

/// Color class of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectTone {
    Harmonious,
    Tense,
    Neutral,
}

impl AspectTone {
    /// CSS class used by the SVG writer
    pub fn css_class(&self) -> &'static str {
        match self {
            AspectTone::Harmonious => "aspect-harmonious",
            AspectTone::Tense => "aspect-tense",
            AspectTone::Neutral => "aspect-neutral",
        }
    }
}

/// A resolved aspect line between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub from: Point,
    pub to: Point,
    pub color_class: AspectTone,
    pub dashed: bool,
    pub planet1: String,
    pub planet2: String,
    pub kind: AspectKind,
    /// Passed through for display, never used for filtering
    pub orb: f64,
}
