use std::str::FromStr;

/// Decoration drawn next to a retrograde body
pub const RETROGRADE_GLYPH: &str = "℞";

/// Sign names in zodiac order, index 0 = Aries at 0°
pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto,
    NNode, SNode,
    Ascendant, MC,
    Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces,
    Unknown,
}

impl FromStr for Glyph {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Ok(match key.as_str() {
            "sun" => Glyph::Sun,
            "moon" => Glyph::Moon,
            "mercury" => Glyph::Mercury,
            "venus" => Glyph::Venus,
            "mars" => Glyph::Mars,
            "jupiter" => Glyph::Jupiter,
            "saturn" => Glyph::Saturn,
            "uranus" => Glyph::Uranus,
            "neptune" => Glyph::Neptune,
            "pluto" => Glyph::Pluto,
            "northnode" | "nnode" | "truenode" | "meannode" | "rahu" => Glyph::NNode,
            "southnode" | "snode" | "ketu" => Glyph::SNode,
            "ascendant" | "asc" | "as" => Glyph::Ascendant,
            "midheaven" | "mc" => Glyph::MC,
            "aries" => Glyph::Aries,
            "taurus" => Glyph::Taurus,
            "gemini" => Glyph::Gemini,
            "cancer" => Glyph::Cancer,
            "leo" => Glyph::Leo,
            "virgo" => Glyph::Virgo,
            "libra" => Glyph::Libra,
            "scorpio" => Glyph::Scorpio,
            "sagittarius" => Glyph::Sagittarius,
            "capricorn" => Glyph::Capricorn,
            "aquarius" => Glyph::Aquarius,
            "pisces" => Glyph::Pisces,
            _ => Glyph::Unknown,
        })
    }
}

impl Glyph {
    /// Sign glyph for a zodiac index (wraps modulo 12)
    pub fn sign(index: usize) -> Glyph {
        match index % 12 {
            0 => Glyph::Aries,
            1 => Glyph::Taurus,
            2 => Glyph::Gemini,
            3 => Glyph::Cancer,
            4 => Glyph::Leo,
            5 => Glyph::Virgo,
            6 => Glyph::Libra,
            7 => Glyph::Scorpio,
            8 => Glyph::Sagittarius,
            9 => Glyph::Capricorn,
            10 => Glyph::Aquarius,
            _ => Glyph::Pisces,
        }
    }

    pub fn is_sign(&self) -> bool {
        matches!(
            self,
            Glyph::Aries
                | Glyph::Taurus
                | Glyph::Gemini
                | Glyph::Cancer
                | Glyph::Leo
                | Glyph::Virgo
                | Glyph::Libra
                | Glyph::Scorpio
                | Glyph::Sagittarius
                | Glyph::Capricorn
                | Glyph::Aquarius
                | Glyph::Pisces
        )
    }

    /// Unicode symbol, `None` for `Unknown`
    pub fn symbol(&self) -> Option<&'static str> {
        Some(match self {
            Glyph::Sun => "☉",
            Glyph::Moon => "☽",
            Glyph::Mercury => "☿",
            Glyph::Venus => "♀",
            Glyph::Mars => "♂",
            Glyph::Jupiter => "♃",
            Glyph::Saturn => "♄",
            Glyph::Uranus => "♅",
            Glyph::Neptune => "♆",
            Glyph::Pluto => "♇",
            Glyph::NNode => "☊",
            Glyph::SNode => "☋",
            Glyph::Ascendant => "AC",
            Glyph::MC => "MC",
            Glyph::Aries => "♈",
            Glyph::Taurus => "♉",
            Glyph::Gemini => "♊",
            Glyph::Cancer => "♋",
            Glyph::Leo => "♌",
            Glyph::Virgo => "♍",
            Glyph::Libra => "♎",
            Glyph::Scorpio => "♏",
            Glyph::Sagittarius => "♐",
            Glyph::Capricorn => "♑",
            Glyph::Aquarius => "♒",
            Glyph::Pisces => "♓",
            Glyph::Unknown => return None,
        })
    }
}

/// Display glyph for a body name.
///
/// Unknown names fall back to their first non-blank character, uppercased.
/// A blank name keeps its first character, so only `""` maps to `""`.
pub fn body_glyph(name: &str) -> String {
    let glyph = Glyph::from_str(name).unwrap_or(Glyph::Unknown);
    match glyph.symbol() {
        Some(symbol) if !glyph.is_sign() => symbol.to_string(),
        _ => name
            .trim()
            .chars()
            .next()
            .or_else(|| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
    }
}

/// Display glyph for a sign name; unknown signs pass through unchanged.
pub fn sign_glyph(name: &str) -> String {
    let glyph = Glyph::from_str(name).unwrap_or(Glyph::Unknown);
    match glyph.symbol() {
        Some(symbol) if glyph.is_sign() => symbol.to_string(),
        _ => name.to_string(),
    }
}
