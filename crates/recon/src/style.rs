// Outcome category → colour mapping for report sinks.
// Pure data: sinks receive a Palette, nothing here is global state.

use serde::Serialize;

use crate::classify::Outcome;
use crate::error::ReconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Green,
    Red,
    Pink,
    Yellow,
}

impl StyleToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
        }
    }
}

/// Style for a report-result cell. Uncategorized values get no style.
pub fn style_for(category: Option<Outcome>) -> Option<StyleToken> {
    match category? {
        Outcome::Pass => Some(StyleToken::Green),
        Outcome::Fail => Some(StyleToken::Red),
        Outcome::Inconclusive => Some(StyleToken::Pink),
        Outcome::Missing => Some(StyleToken::Yellow),
    }
}

/// 24-bit colour, 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Parse `RRGGBB` or `#RRGGBB`.
    pub fn parse_hex(s: &str) -> Result<Self, ReconError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ReconError::ConfigValidation(format!(
                "invalid colour '{s}': expected 6 hex digits (RRGGBB)"
            )));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb)
            .map_err(|e| ReconError::ConfigValidation(format!("invalid colour '{s}': {e}")))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub green: Rgb,
    pub red: Rgb,
    pub pink: Rgb,
    pub yellow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            green: Rgb(0x00FF00),
            red: Rgb(0xFF0000),
            pink: Rgb(0xFFC0CB),
            yellow: Rgb(0xFFFF00),
        }
    }
}

impl Palette {
    pub fn fill(&self, token: StyleToken) -> Rgb {
        match token {
            StyleToken::Green => self.green,
            StyleToken::Red => self.red,
            StyleToken::Pink => self.pink,
            StyleToken::Yellow => self.yellow,
        }
    }

    /// Fill colour for a category, if it has one.
    pub fn fill_for(&self, category: Option<Outcome>) -> Option<Rgb> {
        style_for(category).map(|token| self.fill(token))
    }
}
